//! Common types used across the staking pool.

use odra::prelude::*;
use odra::casper_types::U256;

/// A named, time-windowed staking campaign
#[odra::odra_type]
pub struct Project {
    /// Sequential project id
    pub id: u64,
    /// Unique, non-empty project name
    pub name: String,
    /// Sum of every stake ever deposited into the project's pools
    pub total_amount_staked: U256,
    /// Number of pools created under this project
    pub number_of_pools: u64,
    /// Deposits open at this time (seconds)
    pub start_timestamp: u64,
    /// Deposits close and withdrawals open at this time (seconds)
    pub end_timestamp: u64,
}

/// Pool within a project, keyed by `(project_id, pool_id)`
#[odra::odra_type]
#[derive(Default)]
pub struct StakingPoolInfo {
    /// Per-user cap, fixed at creation
    pub max_staking_amount_per_user: U256,
    /// Sum of every stake ever deposited into the pool
    pub total_amount_staked: U256,
}

/// A user's stake in one pool
#[odra::odra_type]
#[derive(Default)]
pub struct UserStake {
    /// Amount staked (kept after withdrawal for reporting)
    pub amount_staked: U256,
    /// Set once the stake has been paid back
    pub has_withdrawn: bool,
}

/// One row of a paginated pool report
#[odra::odra_type]
pub struct StakingInfoEntry {
    pub user_address: Address,
    pub pool_id: u64,
    /// Share of the pool total, scaled by 1e8
    pub percentage_of_tokens_staked_in_pool: U256,
    pub amount_of_tokens_staked_in_pool: U256,
}

/// Storage key of a pool
#[odra::odra_type]
#[derive(Copy)]
pub struct PoolKey {
    pub project_id: u64,
    pub pool_id: u64,
}

impl PoolKey {
    pub fn new(project_id: u64, pool_id: u64) -> Self {
        Self { project_id, pool_id }
    }
}

/// Storage key of a user's stake in a pool
#[odra::odra_type]
#[derive(Copy)]
pub struct StakeKey {
    pub project_id: u64,
    pub pool_id: u64,
    pub user: Address,
}

impl StakeKey {
    pub fn new(pool: PoolKey, user: Address) -> Self {
        Self {
            project_id: pool.project_id,
            pool_id: pool.pool_id,
            user,
        }
    }
}
