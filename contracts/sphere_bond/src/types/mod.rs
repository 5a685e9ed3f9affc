//! Ledger record types: bonds, shared activities, and the reward catalog.
//!
//! Includes the derived tier view, text bounds and their validation.

pub mod activity;
pub mod bond;
pub mod reward;

pub use activity::{DateNight, Milestone, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
pub use bond::{Bond, BondRecord, BondStatus, Tier};
pub use reward::{Redemption, Reward};

use crate::Error;
use soroban_sdk::String;

/// Rejects text longer than `max` bytes.
///
/// # Errors
/// `Error::TextTooLong` when the limit is exceeded.
#[inline]
pub fn validate_text(text: &String, max: u32) -> Result<(), Error> {
    if text.len() > max {
        return Err(Error::TextTooLong);
    }
    Ok(())
}
