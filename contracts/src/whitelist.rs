//! Project Whitelist
//!
//! Owner-maintained, per-project list of whitelisted addresses. Entries are
//! kept in insertion order and never removed.

use odra::prelude::*;

/// Ordered whitelist for every project
#[odra::module]
pub struct Whitelist {
    /// (project_id, index) -> address
    entries: Mapping<(u64, u64), Address>,
    /// project_id -> number of entries
    counts: Mapping<u64, u64>,
    /// (project_id, address) -> whitelisted
    members: Mapping<(u64, Address), bool>,
}

#[odra::module]
impl Whitelist {
    /// Whitelist `account` for the project. Returns false if it already was.
    pub fn add(&mut self, project_id: u64, account: Address) -> bool {
        if self.contains(project_id, account) {
            return false;
        }

        let index = self.count(project_id);
        self.entries.set(&(project_id, index), account);
        self.counts.set(&project_id, index + 1);
        self.members.set(&(project_id, account), true);
        true
    }

    /// Check if `account` is whitelisted for the project
    pub fn contains(&self, project_id: u64, account: Address) -> bool {
        self.members.get(&(project_id, account)).unwrap_or(false)
    }

    /// Number of whitelisted addresses for the project
    pub fn count(&self, project_id: u64) -> u64 {
        self.counts.get(&project_id).unwrap_or(0)
    }

    /// All whitelisted addresses for the project, in insertion order
    pub fn addresses(&self, project_id: u64) -> Vec<Address> {
        (0..self.count(project_id))
            .filter_map(|index| self.entries.get(&(project_id, index)))
            .collect()
    }
}
