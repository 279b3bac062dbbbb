#![allow(dead_code)]

use medichain::{MedichainContract, MedichainContractClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

pub struct TestContext {
    pub env: Env,
    pub client: MedichainContractClient<'static>,
    pub admin: Address,
}

/// Creates a mocked Soroban environment and deploys the ledger with a fresh admin.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let contract_id = env.register(MedichainContract, (admin.clone(),));
    let client = MedichainContractClient::new(&env, &contract_id);

    TestContext { env, client, admin }
}

/// Generates an identity and certifies it as a doctor.
pub fn create_certified_doctor(ctx: &TestContext, name: &str) -> Address {
    let doctor = Address::generate(&ctx.env);
    ctx.client
        .verify_doctor(&ctx.admin, &doctor, &String::from_str(&ctx.env, name));
    doctor
}

/// Generates a patient identity with a profile already set.
pub fn create_patient(ctx: &TestContext, name: &str, age: u32) -> Address {
    let patient = Address::generate(&ctx.env);
    ctx.client.set_profile(
        &patient,
        &String::from_str(&ctx.env, name),
        &age,
        &String::from_str(&ctx.env, "Unspecified"),
        &String::from_str(&ctx.env, ""),
    );
    patient
}

/// Appends a record and returns its sequence number.
pub fn add_test_record(
    ctx: &TestContext,
    doctor: &Address,
    patient: &Address,
    content_ref: &str,
    label: &str,
) -> u64 {
    ctx.client.add_record(
        doctor,
        patient,
        &String::from_str(&ctx.env, content_ref),
        &String::from_str(&ctx.env, label),
    )
}
