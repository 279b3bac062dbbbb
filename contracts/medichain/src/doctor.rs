use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::extend_ttl_key;

/// A doctor identity admitted by the administrator.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Doctor {
    pub address: Address,
    pub display_name: String,
    pub certified: bool,
    pub certified_at: u64,
}

pub fn doctor_key(doctor: &Address) -> (Symbol, Address) {
    (symbol_short!("DOCTOR"), doctor.clone())
}

pub fn get_doctor(env: &Env, doctor: &Address) -> Option<Doctor> {
    env.storage().persistent().get(&doctor_key(doctor))
}

pub fn is_certified(env: &Env, doctor: &Address) -> bool {
    get_doctor(env, doctor).is_some_and(|d| d.certified)
}

/// Inserts or replaces the doctor entry. Returns `true` when the identity
/// had no entry before.
pub fn upsert_doctor(env: &Env, doctor: &Doctor) -> bool {
    let key = doctor_key(&doctor.address);
    let created = !env.storage().persistent().has(&key);
    env.storage().persistent().set(&key, doctor);
    extend_ttl_key(env, &key);
    created
}
