//! Shared setup for contract tests.

use crate::{SphereBond, SphereBondClient};
use soroban_sdk::testutils::{Address as _, Events as _};
use soroban_sdk::{Address, Env, String, Symbol, TryFromVal};

/// Registers the contract with all auths mocked.
pub fn setup() -> (Env, SphereBondClient<'static>) {
    let e = Env::default();
    e.mock_all_auths();
    let contract_id = e.register(SphereBond, ());
    let client = SphereBondClient::new(&e, &contract_id);
    (e, client)
}

/// Registers the contract and creates bond #1 between two fresh partners.
pub fn setup_with_bond() -> (Env, SphereBondClient<'static>, Address, Address, u64) {
    let (e, client) = setup();
    let partner1 = Address::generate(&e);
    let partner2 = Address::generate(&e);
    let bond_id = client.create_bond(&partner1, &partner2);
    (e, client, partner1, partner2, bond_id)
}

pub fn text(e: &Env, s: &str) -> String {
    String::from_str(e, s)
}

/// Schedules and completes `n` date nights on `bond_id` as `caller`.
pub fn complete_date_nights(
    e: &Env,
    client: &SphereBondClient<'_>,
    caller: &Address,
    bond_id: u64,
    n: u32,
) {
    let height = e.ledger().sequence() + 100;
    for _ in 0..n {
        let id = client.schedule_date_night(caller, &bond_id, &height, &text(e, "Date night"));
        assert!(client.complete_date_night(caller, &bond_id, &id));
    }
}

/// Records `n` milestones on `bond_id` as `caller`.
pub fn add_milestones(e: &Env, client: &SphereBondClient<'_>, caller: &Address, bond_id: u64, n: u32) {
    for _ in 0..n {
        client.add_milestone(
            caller,
            &bond_id,
            &text(e, "Milestone"),
            &text(e, "Description"),
        );
    }
}

/// True if the most recent invocation published an event whose first topic is `name`.
pub fn published(e: &Env, name: &str) -> bool {
    let target = Symbol::new(e, name);
    e.events().all().iter().any(|(_, topics, _)| {
        topics
            .get(0)
            .and_then(|topic| Symbol::try_from_val(e, &topic).ok())
            .is_some_and(|symbol| symbol == target)
    })
}
