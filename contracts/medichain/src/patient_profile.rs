use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::extend_ttl_key;

/// Patient profile structure.
///
/// Every `set_profile` call replaces the whole value; no field survives from
/// an earlier profile.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientProfile {
    pub patient: Address,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub notes: String,
}

pub fn profile_key(patient: &Address) -> (Symbol, Address) {
    (symbol_short!("PROFILE"), patient.clone())
}

pub fn get_profile(env: &Env, patient: &Address) -> Option<PatientProfile> {
    env.storage().persistent().get(&profile_key(patient))
}

/// Inserts or replaces the profile. Returns `true` when the patient had no
/// profile before.
pub fn put_profile(env: &Env, profile: &PatientProfile) -> bool {
    let key = profile_key(&profile.patient);
    let created = !env.storage().persistent().has(&key);
    env.storage().persistent().set(&key, profile);
    extend_ttl_key(env, &key);
    created
}
