//! Model-based state machine test for the ledger.
//!
//! Random action sequences are replayed against both the contract and a
//! plain in-memory model. After every action the contract's result must match
//! the model's prediction, and at the end every query must agree with it.
//!
//! Invariants tested:
//! - Only the admin can certify; certification is permanent
//! - add_record fails NotCertified before Unauthorized, whatever the call order
//! - Failed calls change nothing
//! - Per-patient sequences are dense and ordered

use std::collections::{BTreeMap, BTreeSet};

use medichain::{ContractError, MedichainContract, MedichainContractClient};
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

const POOL: usize = 4;

#[derive(Clone, Debug, Arbitrary)]
enum Action {
    Verify { by_admin: bool, caller: u8, doctor: u8 },
    SetProfile { who: u8, age: u8 },
    Grant { patient: u8, doctor: u8 },
    Append { doctor: u8, patient: u8 },
}

#[derive(Default)]
struct Model {
    certified: BTreeSet<usize>,
    grants: BTreeSet<(usize, usize)>,
    ages: BTreeMap<usize, u32>,
    authors: BTreeMap<usize, std::vec::Vec<usize>>,
}

fn idx(n: u8) -> usize {
    n as usize % POOL
}

fn expect_error<T: core::fmt::Debug, X: core::fmt::Debug>(
    result: Result<T, Result<ContractError, X>>,
    expected: ContractError,
) -> Result<(), TestCaseError> {
    match result {
        Err(Ok(e)) => prop_assert_eq!(e, expected),
        other => prop_assert!(false, "expected {:?}, got {:?}", expected, other),
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_ledger_matches_model(actions in proptest::collection::vec(any::<Action>(), 1..40)) {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let contract_id = env.register(MedichainContract, (admin.clone(),));
        let client = MedichainContractClient::new(&env, &contract_id);

        let ids: std::vec::Vec<Address> = (0..POOL).map(|_| Address::generate(&env)).collect();
        let name = String::from_str(&env, "Dr. Model");
        let text = String::from_str(&env, "x");
        let mut model = Model::default();

        for action in actions {
            match action {
                Action::Verify { by_admin, caller, doctor } => {
                    let d = idx(doctor);
                    let caller = if by_admin { admin.clone() } else { ids[idx(caller)].clone() };
                    let result = client.try_verify_doctor(&caller, &ids[d], &name);
                    if by_admin {
                        prop_assert!(result.is_ok());
                        model.certified.insert(d);
                    } else {
                        expect_error(result, ContractError::Unauthorized)?;
                    }
                }
                Action::SetProfile { who, age } => {
                    let p = idx(who);
                    let age = age as u32;
                    let result = client.try_set_profile(&ids[p], &text, &age, &text, &text);
                    if age > medichain::validation::MAX_AGE {
                        expect_error(result, ContractError::InvalidArgument)?;
                    } else {
                        prop_assert!(result.is_ok());
                        model.ages.insert(p, age);
                    }
                }
                Action::Grant { patient, doctor } => {
                    let (p, d) = (idx(patient), idx(doctor));
                    client.grant_access(&ids[p], &ids[d]);
                    model.grants.insert((p, d));
                }
                Action::Append { doctor, patient } => {
                    let (d, p) = (idx(doctor), idx(patient));
                    let result = client.try_add_record(&ids[d], &ids[p], &text, &text);
                    if !model.certified.contains(&d) {
                        expect_error(result, ContractError::NotCertified)?;
                    } else if !model.grants.contains(&(p, d)) {
                        expect_error(result, ContractError::Unauthorized)?;
                    } else {
                        let authors = model.authors.entry(p).or_default();
                        match result {
                            Ok(Ok(seq)) => prop_assert_eq!(seq, authors.len() as u64),
                            other => prop_assert!(false, "expected append, got {:?}", other),
                        }
                        authors.push(d);
                    }
                }
            }
        }

        for (i, id) in ids.iter().enumerate() {
            prop_assert_eq!(client.doctors(id).1, model.certified.contains(&i));
            prop_assert_eq!(
                client.get_profile(id).map(|p| p.age),
                model.ages.get(&i).copied()
            );
            for (j, other) in ids.iter().enumerate() {
                prop_assert_eq!(client.is_granted(id, other), model.grants.contains(&(i, j)));
            }

            let records = client.list_records(id);
            let authors = model.authors.get(&i).cloned().unwrap_or_default();
            prop_assert_eq!(records.len() as usize, authors.len());
            for (seq, record) in records.iter().enumerate() {
                prop_assert_eq!(record.sequence, seq as u64);
                prop_assert_eq!(&record.author, &ids[authors[seq]]);
            }
        }
    }
}
