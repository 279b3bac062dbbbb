#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use medichain::{ContractError, MedichainContract, MedichainContractClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    VerifyDoctor { caller: u8, doctor: u8, name_len: u8 },
    SetProfile { caller: u8, age: u32, notes_len: u16 },
    GrantAccess { patient: u8, doctor: u8 },
    AddRecord { caller: u8, patient: u8, ref_len: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let contract_id = env.register(MedichainContract, (admin.clone(),));
    let client = MedichainContractClient::new(&env, &contract_id);

    // Slot 0 is the admin so random callers sometimes hold the admin role
    let mut users = vec![admin.clone()];
    for _ in 0..5 {
        users.push(Address::generate(&env));
    }
    let pick = |n: u8| users[n as usize % users.len()].clone();

    for action in actions {
        match action {
            FuzzAction::VerifyDoctor {
                caller,
                doctor,
                name_len,
            } => {
                let caller = pick(caller);
                let doctor = pick(doctor);
                let name = String::from_str(&env, &"d".repeat(name_len as usize));
                let result = client.try_verify_doctor(&caller, &doctor, &name);
                if result.is_ok() {
                    assert_eq!(caller, admin);
                    assert!(client.doctors(&doctor).1);
                }
            }
            FuzzAction::SetProfile {
                caller,
                age,
                notes_len,
            } => {
                let caller = pick(caller);
                let text = String::from_str(&env, "fuzz");
                let notes = String::from_str(&env, &"n".repeat(notes_len as usize % 2048));
                let before = client.get_profile(&caller);
                match client.try_set_profile(&caller, &text, &age, &text, &notes) {
                    Ok(_) => assert_eq!(client.get_profile(&caller).map(|p| p.age), Some(age)),
                    Err(_) => assert_eq!(client.get_profile(&caller), before),
                }
            }
            FuzzAction::GrantAccess { patient, doctor } => {
                let patient = pick(patient);
                let doctor = pick(doctor);
                let _ = client.try_grant_access(&patient, &doctor);
                assert!(client.is_granted(&patient, &doctor));
            }
            FuzzAction::AddRecord {
                caller,
                patient,
                ref_len,
            } => {
                let caller = pick(caller);
                let patient = pick(patient);
                let content_ref = String::from_str(&env, &"Q".repeat(ref_len as usize % 300));
                let label = String::from_str(&env, "fuzz.pdf");
                let before = client.record_count(&patient);

                match client.try_add_record(&caller, &patient, &content_ref, &label) {
                    Ok(Ok(sequence)) => {
                        assert_eq!(sequence, before);
                        assert_eq!(client.record_count(&patient), before + 1);
                        assert!(client.doctors(&caller).1);
                        assert!(client.is_granted(&patient, &caller));
                    }
                    Err(Ok(ContractError::NotCertified)) => {
                        assert!(!client.doctors(&caller).1);
                        assert_eq!(client.record_count(&patient), before);
                    }
                    _ => assert_eq!(client.record_count(&patient), before),
                }
            }
        }
    }
});
