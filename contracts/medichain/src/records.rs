use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

use crate::extend_ttl_key;

/// An immutable reference to record data held by an external content store.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicalRecord {
    pub patient: Address,
    pub sequence: u64,
    pub content_ref: String,
    pub label: String,
    pub author: Address,
    pub created_at: u64,
}

pub fn record_key(patient: &Address, sequence: u64) -> (Symbol, Address, u64) {
    (symbol_short!("RECORD"), patient.clone(), sequence)
}

pub fn count_key(patient: &Address) -> (Symbol, Address) {
    (symbol_short!("REC_CNT"), patient.clone())
}

/// Number of records appended for `patient`. Also the next sequence number.
pub fn record_count(env: &Env, patient: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&count_key(patient))
        .unwrap_or(0)
}

pub fn get_record(env: &Env, patient: &Address, sequence: u64) -> Option<MedicalRecord> {
    env.storage()
        .persistent()
        .get(&record_key(patient, sequence))
}

/// Appends a record at the end of the patient's sequence and returns it.
/// Sequences start at 0 and never skip or repeat.
pub fn append_record(
    env: &Env,
    patient: &Address,
    author: &Address,
    content_ref: String,
    label: String,
) -> MedicalRecord {
    let sequence = record_count(env, patient);
    let record = MedicalRecord {
        patient: patient.clone(),
        sequence,
        content_ref,
        label,
        author: author.clone(),
        created_at: env.ledger().timestamp(),
    };

    let key = record_key(patient, sequence);
    env.storage().persistent().set(&key, &record);
    extend_ttl_key(env, &key);

    let counter = count_key(patient);
    env.storage()
        .persistent()
        .set(&counter, &sequence.saturating_add(1));
    extend_ttl_key(env, &counter);

    record
}

/// Records with `offset <= sequence < offset + limit`, ascending.
pub fn list_range(env: &Env, patient: &Address, offset: u64, limit: u64) -> Vec<MedicalRecord> {
    let end = record_count(env, patient).min(offset.saturating_add(limit));
    let mut out = Vec::new(env);
    let mut sequence = offset;
    while sequence < end {
        if let Some(record) = get_record(env, patient, sequence) {
            out.push_back(record);
        }
        sequence += 1;
    }
    out
}
