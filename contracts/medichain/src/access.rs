use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::extend_ttl_key;

pub fn grant_key(patient: &Address, doctor: &Address) -> (Symbol, Address, Address) {
    (symbol_short!("GRANT"), patient.clone(), doctor.clone())
}

pub fn grantees_key(patient: &Address) -> (Symbol, Address) {
    (symbol_short!("GRANTEES"), patient.clone())
}

pub fn is_granted(env: &Env, patient: &Address, doctor: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&grant_key(patient, doctor))
        .unwrap_or(false)
}

/// Doctors granted by `patient`, in the order they were first granted.
pub fn grantees(env: &Env, patient: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&grantees_key(patient))
        .unwrap_or(Vec::new(env))
}

/// Adds `doctor` to the patient's grant set. Returns `false` without writing
/// anything when the doctor is already a member.
pub fn add_grant(env: &Env, patient: &Address, doctor: &Address) -> bool {
    if is_granted(env, patient, doctor) {
        return false;
    }

    let key = grant_key(patient, doctor);
    env.storage().persistent().set(&key, &true);
    extend_ttl_key(env, &key);

    let list_key = grantees_key(patient);
    let mut list = grantees(env, patient);
    list.push_back(doctor.clone());
    env.storage().persistent().set(&list_key, &list);
    extend_ttl_key(env, &list_key);

    true
}
