//! Lattice Staking Contracts
//!
//! Casper-native staking pool accounting for time-bounded projects.
//!
//! ## Architecture
//!
//! - **LatticeStakingPool**: Projects, pools, deposits, withdrawals and reports
//! - **StakerRegistry**: Append-only per-pool staker index used for pagination
//! - **Whitelist**: Owner-maintained per-project address list
//! - **Ownership**: Single-owner access control
//! - **TokenAdapter**: CEP-18 pull/push binding to the staking token
//! - **StakeToken**: Minimal CEP-18 token used as the staking asset
//!
//! ## Windows
//!
//! A project accepts deposits in `[start, end)` and withdrawals from `end`
//! onwards. Disabling a project pulls `end` forward to the current block time.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod events;
pub mod accounting;

// Contract modules
pub mod access_control;
pub mod staker_registry;
pub mod whitelist;
pub mod token_adapter;
pub mod staking_pool;
pub mod stake_token;
