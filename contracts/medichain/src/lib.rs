#![no_std]
//! Access-control ledger for medical records.
//!
//! An administrator fixed at deployment certifies doctors. Any identity can
//! keep a patient profile and a set of doctors it has granted access to. Only
//! a doctor that is certified *and* granted at call time may append record
//! references for a patient; records are append-only and ordered per patient.

pub mod access;
pub mod doctor;
pub mod errors;
pub mod events;
pub mod patient_profile;
pub mod rbac;
pub mod records;
pub mod validation;

use soroban_sdk::{
    contract, contractimpl, symbol_short, Address, Env, IntoVal, String, Symbol, Val, Vec,
};

pub use doctor::Doctor;
pub use errors::{ContractError, ErrorCategory, ErrorSeverity};
pub use patient_profile::PatientProfile;
pub use rbac::{CallerRequirement, Operation};
pub use records::MedicalRecord;

use errors::log_rejection;

/// Storage keys for the contract
const ADMIN: Symbol = symbol_short!("ADMIN");

const TTL_THRESHOLD: u32 = 518_400; // ~30 days
const TTL_EXTEND_TO: u32 = 3_110_400; // ~180 days

/// Extends the time-to-live (TTL) for a persistent storage key.
pub(crate) fn extend_ttl_key<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn load_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(ContractError::NotInitialized)
}

#[contract]
pub struct MedichainContract;

#[contractimpl]
impl MedichainContract {
    /// Fixes the administrator for the lifetime of this ledger instance.
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&ADMIN, &admin);
        extend_ttl_instance(&env);
        events::publish_initialized(&env, admin);
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        load_admin(&env)
    }

    /// Certifies `doctor` under `display_name`. Administrator only.
    ///
    /// Re-certifying an identity replaces its display name and keeps its
    /// original `certified_at`. Re-certifying under the same name is a no-op.
    pub fn verify_doctor(
        env: Env,
        caller: Address,
        doctor: Address,
        display_name: String,
    ) -> Result<(), ContractError> {
        let op = Operation::VerifyDoctor;
        rbac::authorize(&env, &caller, op, &doctor)?;
        validation::validate_display_name(&display_name)
            .map_err(|err| log_rejection(&env, op, &caller, err))?;

        let existing = doctor::get_doctor(&env, &doctor);
        if let Some(current) = &existing {
            if current.certified && current.display_name == display_name {
                return Ok(());
            }
        }

        let certified_at = existing
            .map(|current| current.certified_at)
            .unwrap_or_else(|| env.ledger().timestamp());
        let entry = Doctor {
            address: doctor.clone(),
            display_name: display_name.clone(),
            certified: true,
            certified_at,
        };
        let first_certification = doctor::upsert_doctor(&env, &entry);
        extend_ttl_instance(&env);

        events::publish_doctor_verified(&env, doctor, display_name, first_certification);

        Ok(())
    }

    /// Creates or wholesale replaces the caller's own profile.
    pub fn set_profile(
        env: Env,
        caller: Address,
        name: String,
        age: u32,
        gender: String,
        notes: String,
    ) -> Result<(), ContractError> {
        let op = Operation::SetProfile;
        rbac::authorize(&env, &caller, op, &caller)?;
        validation::validate_profile(&name, age, &gender, &notes)
            .map_err(|err| log_rejection(&env, op, &caller, err))?;

        let profile = PatientProfile {
            patient: caller.clone(),
            name,
            age,
            gender,
            notes,
        };
        let created = patient_profile::put_profile(&env, &profile);
        extend_ttl_instance(&env);

        events::publish_profile_set(&env, caller, created);

        Ok(())
    }

    /// Adds `doctor` to the caller's grant set.
    ///
    /// The doctor does not have to be certified yet; certification is only
    /// enforced when a record is appended. Granting twice is a no-op.
    pub fn grant_access(env: Env, caller: Address, doctor: Address) -> Result<(), ContractError> {
        rbac::authorize(&env, &caller, Operation::GrantAccess, &caller)?;

        if access::add_grant(&env, &caller, &doctor) {
            extend_ttl_instance(&env);
            events::publish_access_granted(&env, caller, doctor);
        }

        Ok(())
    }

    /// Appends a record for `patient` authored by the caller and returns its
    /// sequence number. Sequences start at 0.
    ///
    /// The caller must be certified (`NotCertified` otherwise) and granted by
    /// `patient` (`Unauthorized` otherwise), both checked now rather than
    /// at grant time.
    pub fn add_record(
        env: Env,
        caller: Address,
        patient: Address,
        content_ref: String,
        label: String,
    ) -> Result<u64, ContractError> {
        let op = Operation::AddRecord;
        rbac::authorize(&env, &caller, op, &patient)?;
        validation::validate_record(&content_ref, &label)
            .map_err(|err| log_rejection(&env, op, &caller, err))?;

        let record = records::append_record(&env, &patient, &caller, content_ref, label);
        // Authorizing entries must outlive the record they admitted.
        extend_ttl_key(&env, &doctor::doctor_key(&caller));
        extend_ttl_key(&env, &access::grant_key(&patient, &caller));
        extend_ttl_instance(&env);

        events::publish_record_added(
            &env,
            patient,
            caller,
            record.sequence,
            record.content_ref,
        );

        Ok(record.sequence)
    }

    // ======================== Queries ========================

    pub fn get_doctor(env: Env, doctor: Address) -> Option<Doctor> {
        doctor::get_doctor(&env, &doctor)
    }

    /// `(display_name, certified)` for `doctor`, or `("", false)` if the
    /// identity was never certified.
    pub fn doctors(env: Env, doctor: Address) -> (String, bool) {
        match doctor::get_doctor(&env, &doctor) {
            Some(entry) => (entry.display_name, entry.certified),
            None => (String::from_str(&env, ""), false),
        }
    }

    pub fn get_profile(env: Env, patient: Address) -> Option<PatientProfile> {
        patient_profile::get_profile(&env, &patient)
    }

    pub fn is_granted(env: Env, patient: Address, doctor: Address) -> bool {
        access::is_granted(&env, &patient, &doctor)
    }

    /// Doctors granted by `patient`, in first-grant order, without duplicates.
    pub fn granted_doctors(env: Env, patient: Address) -> Vec<Address> {
        access::grantees(&env, &patient)
    }

    /// All records for `patient`, ascending by sequence.
    pub fn list_records(env: Env, patient: Address) -> Vec<MedicalRecord> {
        records::list_range(&env, &patient, 0, u64::MAX)
    }

    /// A window of [`Self::list_records`] starting at sequence `offset`.
    pub fn list_records_page(
        env: Env,
        patient: Address,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<MedicalRecord>, ContractError> {
        validation::validate_page_size(limit)?;
        Ok(records::list_range(&env, &patient, offset, limit as u64))
    }

    pub fn get_record(env: Env, patient: Address, sequence: u64) -> Option<MedicalRecord> {
        records::get_record(&env, &patient, sequence)
    }

    pub fn record_count(env: Env, patient: Address) -> u64 {
        records::record_count(&env, &patient)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}
