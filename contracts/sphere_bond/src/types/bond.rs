//! Bond record and its public view.
//!
//! `BondRecord` is what sits in persistent storage. `Bond` is what queries return:
//! the same fields plus the tier, derived from `points` at read time and never stored.

use soroban_sdk::{contracttype, Address};

/// Loyalty tier. Ordered `Bronze < Silver < Gold`; rewards gate on this ordering.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Tier {
    Bronze = 0,
    Silver = 1,
    Gold = 2,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum BondStatus {
    Active = 0,
    Inactive = 1,
}

/// Stored bond state.
///
/// # Fields
/// * `id` - Bond identifier, allocated from the global bond counter (starts at 1).
/// * `partner1` - Account that created the bond.
/// * `partner2` - Account named by the creator. Never equal to `partner1`.
/// * `status` - `Active` on creation.
/// * `points` - Current point balance.
/// * `created_at` - Ledger sequence at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BondRecord {
    pub id: u64,
    pub partner1: Address,
    pub partner2: Address,
    pub status: BondStatus,
    pub points: u64,
    pub created_at: u32,
}

impl BondRecord {
    #[must_use]
    #[inline]
    pub fn is_partner(&self, account: &Address) -> bool {
        self.partner1 == *account || self.partner2 == *account
    }

    #[must_use]
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == BondStatus::Active
    }

    /// Builds the query view with the given (already derived) tier.
    #[must_use]
    pub fn into_view(self, tier: Tier) -> Bond {
        Bond {
            id: self.id,
            partner1: self.partner1,
            partner2: self.partner2,
            status: self.status,
            points: self.points,
            tier,
            created_at: self.created_at,
        }
    }
}

/// Bond as returned by `get_bond`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bond {
    pub id: u64,
    pub partner1: Address,
    pub partner2: Address,
    pub status: BondStatus,
    pub points: u64,
    pub tier: Tier,
    pub created_at: u32,
}
