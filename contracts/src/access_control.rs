//! Access Control
//!
//! Single-owner access control for the staking pool. The owner is the only
//! account allowed to create projects and pools, disable projects, maintain
//! project whitelists and read per-pool staking reports.

use odra::prelude::*;
use crate::errors::StakingError;
use crate::events::OwnershipTransferred;

/// Owner-based access control, embedded in contracts as a sub-module
#[odra::module]
pub struct Ownership {
    /// Current owner
    owner: Var<Address>,
}

#[odra::module]
impl Ownership {
    /// Set the initial owner
    pub fn init(&mut self, owner: Address) {
        self.owner.set(owner);
    }

    /// Get the current owner
    pub fn get_owner(&self) -> Address {
        match self.owner.get() {
            Some(owner) => owner,
            None => self.env().revert(StakingError::Unauthorized),
        }
    }

    /// Check if account is the owner
    pub fn is_owner(&self, account: Address) -> bool {
        self.owner.get() == Some(account)
    }

    /// Hand ownership to another account (owner only)
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.require_owner();

        let previous_owner = self.get_owner();
        self.owner.set(new_owner);

        self.env().emit_event(OwnershipTransferred {
            previous_owner,
            new_owner,
        });
    }

    /// Revert if caller is not the owner
    pub fn require_owner(&self) {
        if !self.is_owner(self.env().caller()) {
            self.env().revert(StakingError::Unauthorized);
        }
    }
}
