//! Events emitted by the staking pool.

use odra::prelude::*;
use odra::casper_types::U256;

#[odra::event]
pub struct ProjectAdded {
    pub project_id: u64,
    pub project_name: String,
}

#[odra::event]
pub struct ProjectDisabled {
    pub project_id: u64,
}

#[odra::event]
pub struct PoolAdded {
    pub project_id: u64,
    pub pool_id: u64,
}

#[odra::event]
pub struct Deposit {
    pub user: Address,
    pub project_id: u64,
    pub pool_id: u64,
    pub amount: U256,
}

#[odra::event]
pub struct Withdraw {
    pub user: Address,
    pub project_id: u64,
    pub pool_id: u64,
    pub amount: U256,
}

#[odra::event]
pub struct AddressWhitelisted {
    pub project_id: u64,
    pub account: Address,
}

#[odra::event]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}
