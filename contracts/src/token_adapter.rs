//! Token Adapter
//!
//! Binds the staking pool to the CEP-18 token it accepts. The pool only ever
//! pulls tokens in on deposit (`transfer_from`, requires a prior `approve`)
//! and pushes them back out on withdrawal (`transfer`).
//!
//! A revert raised by the token propagates unchanged and unwinds the whole
//! entry point. A token that reports failure by returning `false` is turned
//! into `TokenTransferFailed`.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::StakingError;

/// CEP-18 token interface for cross-contract calls
#[odra::external_contract]
pub trait Cep18Token {
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
    fn approve(&mut self, spender: Address, amount: U256) -> bool;
    fn allowance(&self, owner: Address, spender: Address) -> U256;
    fn balance_of(&self, account: Address) -> U256;
    fn total_supply(&self) -> U256;
}

/// Staking token binding, embedded in the pool as a sub-module
#[odra::module]
pub struct TokenAdapter {
    /// CEP-18 token contract address
    token: Var<Address>,
}

#[odra::module]
impl TokenAdapter {
    /// Bind the adapter to a token contract
    pub fn init(&mut self, token: Address) {
        self.token.set(token);
    }

    /// Get token address. Always bound by `init`.
    pub fn token_address(&self) -> Address {
        match self.token.get() {
            Some(token) => token,
            None => self.env().revert(StakingError::TokenNotConfigured),
        }
    }

    /// Pull `amount` from `from` into this contract (deposit flow)
    pub fn pull_tokens(&mut self, from: Address, amount: U256) {
        let self_address = self.env().self_address();
        let mut token = self.token_ref();
        if !token.transfer_from(from, self_address, amount) {
            self.env().revert(StakingError::TokenTransferFailed);
        }
    }

    /// Push `amount` from this contract to `to` (withdrawal flow)
    pub fn push_tokens(&mut self, to: Address, amount: U256) {
        let mut token = self.token_ref();
        if !token.transfer(to, amount) {
            self.env().revert(StakingError::TokenTransferFailed);
        }
    }

    /// Token balance held by this contract
    pub fn held_balance(&self) -> U256 {
        self.token_ref().balance_of(self.env().self_address())
    }

    fn token_ref(&self) -> Cep18TokenContractRef {
        Cep18TokenContractRef::new(self.env().clone(), self.token_address())
    }
}
