//! Lattice Staking Pool Contract
//!
//! Tracks named, time-bounded projects, each split into staking pools with a
//! per-user cap, and records how much of the staking token every user has
//! committed to every pool.
//!
//! Key mechanics:
//! - The owner creates projects `[start, end)` and pools under them
//! - Users deposit while the project window is open, up to the pool cap
//! - After the window closes each user withdraws their whole stake once
//! - The owner pages through a pool's stakers in first-deposit order
//!
//! Pool and project totals count everything ever staked; withdrawals only
//! flip the user's `has_withdrawn` flag.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::accounting;
use crate::access_control::Ownership;
use crate::errors::StakingError;
use crate::events::{
    AddressWhitelisted, Deposit, OwnershipTransferred, PoolAdded, ProjectAdded, ProjectDisabled,
    Withdraw,
};
use crate::staker_registry::StakerRegistry;
use crate::token_adapter::TokenAdapter;
use crate::types::{PoolKey, Project, StakeKey, StakingInfoEntry, StakingPoolInfo, UserStake};
use crate::whitelist::Whitelist;

/// Lattice Staking Pool Contract
#[odra::module(events = [
    ProjectAdded,
    ProjectDisabled,
    PoolAdded,
    Deposit,
    Withdraw,
    AddressWhitelisted,
    OwnershipTransferred
])]
pub struct LatticeStakingPool {
    /// Owner access control
    ownership: SubModule<Ownership>,
    /// Staking token binding
    token: SubModule<TokenAdapter>,

    // === Project/Pool Store ===
    /// Number of projects ever created
    project_count: Var<u64>,
    /// project_id -> project
    projects: Mapping<u64, Project>,
    /// project name -> project_id (names are never reused)
    project_ids_by_name: Mapping<String, u64>,
    /// (project_id, pool_id) -> pool
    pools: Mapping<PoolKey, StakingPoolInfo>,

    // === Stakes ===
    /// (project_id, pool_id, user) -> stake
    stakes: Mapping<StakeKey, UserStake>,
    /// Per-pool staker index for pagination
    registry: SubModule<StakerRegistry>,

    /// Per-project whitelist
    whitelist: SubModule<Whitelist>,
}

#[odra::module]
impl LatticeStakingPool {
    /// Initialize the pool; the deployer becomes the owner
    pub fn init(&mut self, staking_token: Address) {
        let deployer = self.env().caller();
        self.ownership.init(deployer);
        self.token.init(staking_token);
        self.project_count.set(0);
    }

    // ========== Project/Pool Administration ==========

    /// Create a project open for deposits in `[start_timestamp, end_timestamp)` (owner only)
    pub fn add_project(&mut self, name: String, start_timestamp: u64, end_timestamp: u64) -> u64 {
        self.ownership.require_owner();

        if name.is_empty() {
            self.env().revert(StakingError::EmptyProjectName);
        }
        if self.is_project_name_taken(name.clone()) {
            self.env().revert(StakingError::ProjectNameTaken);
        }
        if let Err(error) = accounting::validate_project_window(start_timestamp, end_timestamp, self.now()) {
            self.env().revert(error);
        }

        let project_id = self.number_of_projects();
        self.projects.set(
            &project_id,
            Project {
                id: project_id,
                name: name.clone(),
                total_amount_staked: U256::zero(),
                number_of_pools: 0,
                start_timestamp,
                end_timestamp,
            },
        );
        self.project_ids_by_name.set(&name, project_id);
        self.project_count.set(project_id + 1);

        self.env().emit_event(ProjectAdded {
            project_id,
            project_name: name,
        });

        project_id
    }

    /// Add a pool with a fixed per-user cap to a project (owner only)
    pub fn add_staking_pool(&mut self, project_id: u64, max_staking_amount_per_user: U256) -> u64 {
        self.ownership.require_owner();

        let mut project = self.require_project(project_id);
        let pool_id = project.number_of_pools;

        self.pools.set(
            &PoolKey::new(project_id, pool_id),
            StakingPoolInfo {
                max_staking_amount_per_user,
                total_amount_staked: U256::zero(),
            },
        );
        project.number_of_pools += 1;
        self.projects.set(&project_id, project);

        self.env().emit_event(PoolAdded { project_id, pool_id });

        pool_id
    }

    /// Close a project's deposit window now (owner only).
    /// Calling it again moves the end to the new current time.
    pub fn disable_project(&mut self, project_id: u64) {
        self.ownership.require_owner();

        let mut project = self.require_project(project_id);
        project.end_timestamp = self.now();
        self.projects.set(&project_id, project);

        self.env().emit_event(ProjectDisabled { project_id });
    }

    /// Whitelist addresses for a project (owner only)
    pub fn whitelist_addresses(&mut self, project_id: u64, addresses: Vec<Address>) {
        self.ownership.require_owner();
        self.require_project(project_id);

        for account in addresses {
            if self.whitelist.add(project_id, account) {
                self.env().emit_event(AddressWhitelisted { project_id, account });
            }
        }
    }

    // ========== Staking ==========

    /// Stake `amount` of the staking token into a pool.
    /// Caller must have approved this contract for `amount`.
    pub fn deposit(&mut self, project_id: u64, pool_id: u64, amount: U256) {
        if amount.is_zero() {
            self.env().revert(StakingError::AmountNotSpecified);
        }

        let mut project = self.require_project(project_id);
        let pool_key = PoolKey::new(project_id, pool_id);
        let mut pool = self.require_pool(pool_key);

        if let Err(error) =
            accounting::check_deposit_window(project.start_timestamp, project.end_timestamp, self.now())
        {
            self.env().revert(error);
        }

        let user = self.env().caller();
        let stake_key = StakeKey::new(pool_key, user);
        let mut stake = self.stakes.get(&stake_key).unwrap_or_default();

        let new_stake = match accounting::stake_after_deposit(
            stake.amount_staked,
            amount,
            pool.max_staking_amount_per_user,
        ) {
            Ok(total) => total,
            Err(error) => self.env().revert(error),
        };

        self.token.pull_tokens(user, amount);

        stake.amount_staked = new_stake;
        self.stakes.set(&stake_key, stake);

        pool.total_amount_staked += amount;
        self.pools.set(&pool_key, pool);

        project.total_amount_staked += amount;
        self.projects.set(&project_id, project);

        self.registry.register(pool_key, user);

        self.env().emit_event(Deposit {
            user,
            project_id,
            pool_id,
            amount,
        });
    }

    /// Withdraw the caller's whole stake from a pool once the project has ended
    pub fn withdraw(&mut self, project_id: u64, pool_id: u64) {
        let project = self.require_project(project_id);
        let pool_key = PoolKey::new(project_id, pool_id);
        self.require_pool(pool_key);

        if let Err(error) = accounting::check_withdraw_window(project.end_timestamp, self.now()) {
            self.env().revert(error);
        }

        let user = self.env().caller();
        let stake_key = StakeKey::new(pool_key, user);
        let mut stake = self.stakes.get(&stake_key).unwrap_or_default();

        if stake.has_withdrawn {
            self.env().revert(StakingError::AlreadyWithdrawn);
        }
        if stake.amount_staked.is_zero() {
            self.env().revert(StakingError::NothingToWithdraw);
        }

        let amount = stake.amount_staked;
        self.token.push_tokens(user, amount);

        stake.has_withdrawn = true;
        self.stakes.set(&stake_key, stake);

        self.env().emit_event(Withdraw {
            user,
            project_id,
            pool_id,
            amount,
        });
    }

    // ========== Query Functions ==========

    /// Number of projects ever created
    pub fn number_of_projects(&self) -> u64 {
        self.project_count.get().unwrap_or(0)
    }

    /// Number of pools in a project
    pub fn number_of_pools(&self, project_id: u64) -> u64 {
        self.require_project(project_id).number_of_pools
    }

    /// Total ever staked across a project's pools
    pub fn get_total_amount_staked_in_project(&self, project_id: u64) -> U256 {
        self.require_project(project_id).total_amount_staked
    }

    /// Total ever staked in a pool
    pub fn get_total_amount_staked_in_pool(&self, project_id: u64, pool_id: u64) -> U256 {
        self.require_project(project_id);
        self.require_pool(PoolKey::new(project_id, pool_id)).total_amount_staked
    }

    /// Amount a user staked in a pool
    pub fn get_amount_staked_by_user_in_pool(&self, project_id: u64, pool_id: u64, user: Address) -> U256 {
        self.require_project(project_id);
        let pool_key = PoolKey::new(project_id, pool_id);
        self.require_pool(pool_key);
        self.user_staked_amount(project_id, pool_id, user)
    }

    /// A user's share of the pool total, scaled by 1e8 (1e8 = 100%)
    pub fn get_percentage_amount_staked_by_user_in_pool(
        &self,
        project_id: u64,
        pool_id: u64,
        user: Address,
    ) -> U256 {
        self.require_project(project_id);
        let pool_key = PoolKey::new(project_id, pool_id);
        let pool = self.require_pool(pool_key);

        let amount = self.user_staked_amount(project_id, pool_id, user);
        match accounting::percentage_of(amount, pool.total_amount_staked) {
            Ok(percentage) => percentage,
            Err(error) => self.env().revert(error),
        }
    }

    /// Page through a pool's stakers in first-deposit order (owner only).
    /// Pages are 1-indexed.
    pub fn get_total_staking_info_for_project_per_pool(
        &self,
        project_id: u64,
        pool_id: u64,
        page_number: u64,
        page_size: u64,
    ) -> Vec<StakingInfoEntry> {
        self.ownership.require_owner();
        self.require_project(project_id);
        let pool_key = PoolKey::new(project_id, pool_id);
        let pool = self.require_pool(pool_key);

        let (start, end) = match accounting::page_window(
            page_number,
            page_size,
            self.registry.staker_count(pool_key),
        ) {
            Ok(window) => window,
            Err(error) => self.env().revert(error),
        };

        let mut entries = Vec::new();
        for user_address in self.registry.stakers_in_range(pool_key, start, end) {
            let amount = self.user_staked_amount(project_id, pool_id, user_address);
            let percentage = match accounting::percentage_of(amount, pool.total_amount_staked) {
                Ok(percentage) => percentage,
                Err(error) => self.env().revert(error),
            };
            entries.push(StakingInfoEntry {
                user_address,
                pool_id,
                percentage_of_tokens_staked_in_pool: percentage,
                amount_of_tokens_staked_in_pool: amount,
            });
        }
        entries
    }

    /// Number of distinct stakers in a pool
    pub fn number_of_stakers(&self, project_id: u64, pool_id: u64) -> u64 {
        self.require_project(project_id);
        let pool_key = PoolKey::new(project_id, pool_id);
        self.require_pool(pool_key);
        self.registry.staker_count(pool_key)
    }

    /// Get project record
    pub fn get_project(&self, project_id: u64) -> Option<Project> {
        self.projects.get(&project_id)
    }

    /// Get pool record
    pub fn get_staking_pool(&self, project_id: u64, pool_id: u64) -> Option<StakingPoolInfo> {
        self.pools.get(&PoolKey::new(project_id, pool_id))
    }

    /// Raw stake amount, zero if the user never deposited
    pub fn user_staked_amount(&self, project_id: u64, pool_id: u64, user: Address) -> U256 {
        self.stake_of(project_id, pool_id, user).amount_staked
    }

    /// Whether the user already withdrew from the pool
    pub fn did_user_withdraw_funds(&self, project_id: u64, pool_id: u64, user: Address) -> bool {
        self.stake_of(project_id, pool_id, user).has_withdrawn
    }

    /// Whether any project, past or present, uses this name
    pub fn is_project_name_taken(&self, name: String) -> bool {
        self.project_ids_by_name.get(&name).is_some()
    }

    /// Project id registered under `name`
    pub fn project_name_to_project_id(&self, name: String) -> Option<u64> {
        self.project_ids_by_name.get(&name)
    }

    /// Whitelisted addresses of a project, in insertion order
    pub fn get_whitelisted_addresses_for_project(&self, project_id: u64) -> Vec<Address> {
        self.require_project(project_id);
        self.whitelist.addresses(project_id)
    }

    /// Whether `account` is whitelisted for a project
    pub fn is_address_whitelisted(&self, project_id: u64, account: Address) -> bool {
        self.require_project(project_id);
        self.whitelist.contains(project_id, account)
    }

    /// Staking token address
    pub fn staking_token(&self) -> Address {
        self.token.token_address()
    }

    /// Staking tokens currently held by the pool
    pub fn get_held_balance(&self) -> U256 {
        self.token.held_balance()
    }

    // ========== Ownership ==========

    /// Get owner address
    pub fn get_owner(&self) -> Address {
        self.ownership.get_owner()
    }

    /// Transfer ownership (owner only)
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.ownership.transfer_ownership(new_owner);
    }

    // ========== Internal Functions ==========

    /// Current block time in seconds
    fn now(&self) -> u64 {
        accounting::block_time_to_seconds(self.env().get_block_time())
    }

    fn require_project(&self, project_id: u64) -> Project {
        match self.projects.get(&project_id) {
            Some(project) => project,
            None => self.env().revert(StakingError::ProjectNotFound),
        }
    }

    fn require_pool(&self, pool_key: PoolKey) -> StakingPoolInfo {
        match self.pools.get(&pool_key) {
            Some(pool) => pool,
            None => self.env().revert(StakingError::PoolNotFound),
        }
    }

    fn stake_of(&self, project_id: u64, pool_id: u64, user: Address) -> UserStake {
        let key = StakeKey::new(PoolKey::new(project_id, pool_id), user);
        self.stakes.get(&key).unwrap_or_default()
    }
}
