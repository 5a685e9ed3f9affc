//! Tests for the reward catalog.

#![cfg(test)]

use crate::test_helpers::{self, published, text};
use crate::types::{Tier, MAX_DESCRIPTION_LEN};
use crate::Error;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, String};

#[test]
fn test_create_reward() {
    let (e, client) = test_helpers::setup();
    let creator = Address::generate(&e);

    let id = client.create_reward(
        &creator,
        &text(&e, "Special Date"),
        &text(&e, "A romantic evening"),
        &200,
        &Tier::Bronze,
    );
    assert_eq!(id, 1);
    assert!(published(&e, "reward_created"));

    let reward = client.get_reward(&id).unwrap();
    assert_eq!(reward.title, text(&e, "Special Date"));
    assert_eq!(reward.description, text(&e, "A romantic evening"));
    assert_eq!(reward.cost, 200);
    assert_eq!(reward.min_tier, Tier::Bronze);
    assert_eq!(reward.created_by, creator);
}

/// Catalog entries are global: anyone may add one, ids are shared across callers.
#[test]
fn test_reward_ids_are_global() {
    let (e, client) = test_helpers::setup();
    let a = Address::generate(&e);
    let b = Address::generate(&e);

    assert_eq!(client.create_reward(&a, &text(&e, "r1"), &text(&e, "d"), &10, &Tier::Bronze), 1);
    assert_eq!(client.create_reward(&b, &text(&e, "r2"), &text(&e, "d"), &20, &Tier::Gold), 2);
    assert_eq!(client.get_reward_count(), 2);
}

#[test]
fn test_create_reward_zero_cost_rejected() {
    let (e, client) = test_helpers::setup();
    let creator = Address::generate(&e);
    assert_eq!(
        client.try_create_reward(&creator, &text(&e, "free"), &text(&e, "d"), &0, &Tier::Bronze),
        Err(Ok(Error::InvalidCost))
    );
    assert_eq!(client.get_reward_count(), 0);
}

#[test]
fn test_create_reward_description_too_long() {
    let (e, client) = test_helpers::setup();
    let creator = Address::generate(&e);
    let description = String::from_bytes(&e, &[b'z'; (MAX_DESCRIPTION_LEN + 1) as usize]);
    assert_eq!(
        client.try_create_reward(&creator, &text(&e, "t"), &description, &5, &Tier::Silver),
        Err(Ok(Error::TextTooLong))
    );
}

#[test]
fn test_get_missing_reward_returns_none() {
    let (_e, client) = test_helpers::setup();
    assert_eq!(client.get_reward(&1), None);
}
