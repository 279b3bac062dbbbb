//! Caller requirements for every state-changing entry point.
//!
//! Each [`Operation`] declares exactly one [`CallerRequirement`]. Entry points
//! call [`authorize`] once, before touching storage, instead of branching on
//! the caller's identity inline.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::errors::{log_rejection, ContractError};
use crate::{access, doctor};

/// State-changing operations exposed by the ledger.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    VerifyDoctor,
    SetProfile,
    GrantAccess,
    AddRecord,
}

/// Predicate the caller must satisfy before an operation runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CallerRequirement {
    /// The caller is the administrator fixed at construction.
    Administrator,
    /// The caller is the identity whose state is being changed.
    Subject,
    /// The caller is a certified doctor in the subject's grant set.
    CertifiedGrantee,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::VerifyDoctor,
        Operation::SetProfile,
        Operation::GrantAccess,
        Operation::AddRecord,
    ];

    pub const fn requirement(self) -> CallerRequirement {
        match self {
            Operation::VerifyDoctor => CallerRequirement::Administrator,
            Operation::SetProfile | Operation::GrantAccess => CallerRequirement::Subject,
            Operation::AddRecord => CallerRequirement::CertifiedGrantee,
        }
    }

    /// Whether resubmitting an already-committed call leaves the ledger
    /// unchanged. Drivers may blindly retry only these operations.
    ///
    /// `SetProfile` converges to the same profile but republishes its event,
    /// and `AddRecord` appends a second record.
    pub const fn is_idempotent(self) -> bool {
        matches!(self, Operation::VerifyDoctor | Operation::GrantAccess)
    }

    pub const fn symbol(self) -> Symbol {
        match self {
            Operation::VerifyDoctor => symbol_short!("VER_DOC"),
            Operation::SetProfile => symbol_short!("SET_PROF"),
            Operation::GrantAccess => symbol_short!("GRT_ACC"),
            Operation::AddRecord => symbol_short!("ADD_REC"),
        }
    }
}

/// Authenticates `caller` and checks it against the requirement of
/// `operation`.
///
/// `subject` is the identity whose state the operation touches: the doctor
/// being certified, the caller itself for profile and grant changes, or the
/// patient a record is appended for.
pub fn authorize(
    env: &Env,
    caller: &Address,
    operation: Operation,
    subject: &Address,
) -> Result<(), ContractError> {
    caller.require_auth();

    check_requirement(env, caller, operation.requirement(), subject)
        .map_err(|err| log_rejection(env, operation, caller, err))
}

fn check_requirement(
    env: &Env,
    caller: &Address,
    requirement: CallerRequirement,
    subject: &Address,
) -> Result<(), ContractError> {
    match requirement {
        CallerRequirement::Administrator => {
            let admin = crate::load_admin(env)?;
            if *caller != admin {
                return Err(ContractError::Unauthorized);
            }
        }
        CallerRequirement::Subject => {
            if caller != subject {
                return Err(ContractError::Unauthorized);
            }
        }
        CallerRequirement::CertifiedGrantee => {
            // Certification is checked first so an uncertified caller always
            // sees NotCertified, granted or not.
            if !doctor::is_certified(env, caller) {
                return Err(ContractError::NotCertified);
            }
            if !access::is_granted(env, subject, caller) {
                return Err(ContractError::Unauthorized);
            }
        }
    }
    Ok(())
}
