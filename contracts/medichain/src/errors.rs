use soroban_sdk::{contracterror, contracttype, Address, Env};

use crate::rbac::Operation;

/// Error categories for classifying different types of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Validation errors: malformed or out-of-range arguments
    Validation = 1,
    /// Authorization errors: the caller lacks the required role or relationship
    Authorization = 2,
    /// System errors: the ledger itself is not in a usable state
    System = 3,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    /// Low severity: the caller sent bad input
    Low = 1,
    /// Medium severity: a permission boundary was hit
    Medium = 2,
    /// Critical severity: the ledger cannot serve requests
    Critical = 3,
}

/// Errors surfaced by every mutating entry point.
///
/// Absent entities are never errors: queries return `Option` or an empty
/// collection instead. Discriminants are part of the external interface and
/// must not be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    /// No administrator is stored for this instance.
    NotInitialized = 1,
    /// The caller lacks the role or relationship the operation requires.
    Unauthorized = 3,
    /// An argument is malformed or out of range.
    InvalidArgument = 6,
    /// The caller is not a certified doctor at the time of the check.
    NotCertified = 9,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidArgument => ErrorCategory::Validation,
            ContractError::Unauthorized | ContractError::NotCertified => {
                ErrorCategory::Authorization
            }
            ContractError::NotInitialized => ErrorCategory::System,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::InvalidArgument => ErrorSeverity::Low,
            ContractError::Unauthorized | ContractError::NotCertified => ErrorSeverity::Medium,
            ContractError::NotInitialized => ErrorSeverity::Critical,
        }
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Ledger has no administrator",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::InvalidArgument => "Invalid argument provided",
            ContractError::NotCertified => "Caller is not a certified doctor",
        }
    }
}

/// Writes a diagnostic log line for a rejected call and hands the error back.
///
/// Diagnostic logs are kept even though the invocation itself is rolled back,
/// so this is the only trace a rejection leaves. They are compiled in only
/// when `debug-assertions` is on (see the `release-with-logs` profile).
pub fn log_rejection(
    env: &Env,
    operation: Operation,
    caller: &Address,
    error: ContractError,
) -> ContractError {
    soroban_sdk::log!(
        env,
        "rejected call",
        operation.symbol(),
        caller.clone(),
        error as u32,
        error.category() as u32
    );
    error
}
