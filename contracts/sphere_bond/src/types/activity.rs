//! Per-bond activity records: scheduled date nights and recorded milestones.

use soroban_sdk::{contracttype, Address, String};

pub const MAX_TITLE_LEN: u32 = 64;
pub const MAX_DESCRIPTION_LEN: u32 = 256;

/// A joint activity scheduled at a future ledger sequence.
///
/// `completed` only ever moves from false to true; `completed_at` is set in the same step.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DateNight {
    pub bond_id: u64,
    pub id: u64,
    pub scheduled_height: u32,
    pub description: String,
    pub completed: bool,
    pub completed_at: Option<u32>,
}

/// A recorded achievement. Immutable once written.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Milestone {
    pub bond_id: u64,
    pub id: u64,
    pub title: String,
    pub description: String,
    pub recorded_by: Address,
    pub recorded_at: u32,
}
