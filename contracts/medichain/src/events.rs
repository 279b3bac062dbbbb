use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when the ledger is created.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when the administrator certifies a doctor.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorVerifiedEvent {
    pub doctor: Address,
    pub display_name: String,
    pub first_certification: bool,
    pub timestamp: u64,
}

/// Event published when a patient sets their profile.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileSetEvent {
    pub patient: Address,
    pub created: bool,
    pub timestamp: u64,
}

/// Event published when a patient adds a doctor to their grant set.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrantedEvent {
    pub patient: Address,
    pub doctor: Address,
    pub timestamp: u64,
}

/// Event published when a doctor appends a record.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordAddedEvent {
    pub patient: Address,
    pub author: Address,
    pub sequence: u64,
    pub content_ref: String,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a doctor is certified or re-certified.
pub fn publish_doctor_verified(
    env: &Env,
    doctor: Address,
    display_name: String,
    first_certification: bool,
) {
    let topics = (symbol_short!("DOC_VER"), doctor.clone());
    let data = DoctorVerifiedEvent {
        doctor,
        display_name,
        first_certification,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a profile is created or replaced.
/// Profile contents are not included in the payload.
pub fn publish_profile_set(env: &Env, patient: Address, created: bool) {
    let topics = (symbol_short!("PROF_SET"), patient.clone());
    let data = ProfileSetEvent {
        patient,
        created,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_access_granted(env: &Env, patient: Address, doctor: Address) {
    let topics = (symbol_short!("ACC_GRT"), patient.clone(), doctor.clone());
    let data = AccessGrantedEvent {
        patient,
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a record is appended.
/// This event includes patient, author, sequence, and the content reference.
pub fn publish_record_added(
    env: &Env,
    patient: Address,
    author: Address,
    sequence: u64,
    content_ref: String,
) {
    let topics = (symbol_short!("REC_ADD"), patient.clone(), author.clone());
    let data = RecordAddedEvent {
        patient,
        author,
        sequence,
        content_ref,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
