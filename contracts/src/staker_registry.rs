//! Staker Registry
//!
//! Append-only, per-pool list of every address that ever deposited into the
//! pool, in first-deposit order. Storage maps are unordered, so reports page
//! over this index instead of the stake mapping.
//!
//! Layout per `(project_id, pool_id)`:
//! - `stakers[(pool, i)]` holds the i-th staker, `0 <= i < count`
//! - `members[(pool, user)]` marks addresses already listed

use odra::prelude::*;
use crate::types::{PoolKey, StakeKey};

/// Ordered staker index for every pool
#[odra::module]
pub struct StakerRegistry {
    /// (pool, index) -> staker
    stakers: Mapping<(PoolKey, u64), Address>,
    /// pool -> number of stakers
    counts: Mapping<PoolKey, u64>,
    /// (pool, staker) -> listed
    members: Mapping<StakeKey, bool>,
}

#[odra::module]
impl StakerRegistry {
    /// Append `staker` to the pool's list unless already present.
    /// Returns true when the staker was appended.
    pub fn register(&mut self, pool: PoolKey, staker: Address) -> bool {
        let member_key = StakeKey::new(pool, staker);
        if self.members.get(&member_key).unwrap_or(false) {
            return false;
        }

        let index = self.staker_count(pool);
        self.stakers.set(&(pool, index), staker);
        self.counts.set(&pool, index + 1);
        self.members.set(&member_key, true);
        true
    }

    /// Number of distinct stakers in the pool
    pub fn staker_count(&self, pool: PoolKey) -> u64 {
        self.counts.get(&pool).unwrap_or(0)
    }

    /// Staker at `index`, in first-deposit order
    pub fn staker_at(&self, pool: PoolKey, index: u64) -> Option<Address> {
        self.stakers.get(&(pool, index))
    }

    /// Stakers in `[start, end)`, clamped to the list length
    pub fn stakers_in_range(&self, pool: PoolKey, start: u64, end: u64) -> Vec<Address> {
        let end = end.min(self.staker_count(pool));
        (start..end)
            .filter_map(|index| self.staker_at(pool, index))
            .collect()
    }
}
