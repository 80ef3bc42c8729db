//! In-memory stake ledger.
//!
//! A plain map of account → deposit, with every payout credited to its
//! recipient so callers can see where withdrawn value went. Each mutation
//! either applies fully or leaves the ledger unchanged.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};
use warden_types::{Result, StakeLedger, WardenError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryStakeLedger {
    /// Per-account deposits.
    deposits: HashMap<Address, U256>,
    /// Value paid out by `withdraw_to`, per recipient.
    payouts: HashMap<Address, U256>,
}

impl InMemoryStakeLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total value paid out to `recipient` so far.
    #[must_use]
    pub fn paid_to(&self, recipient: Address) -> U256 {
        self.payouts.get(&recipient).copied().unwrap_or_default()
    }

    /// Sum of all deposits currently held.
    #[must_use]
    pub fn total_deposits(&self) -> U256 {
        self.deposits
            .values()
            .fold(U256::ZERO, |acc, v| acc.saturating_add(*v))
    }
}

impl StakeLedger for InMemoryStakeLedger {
    fn balance_of(&self, account: Address) -> U256 {
        self.deposits.get(&account).copied().unwrap_or_default()
    }

    fn deposit_to(&mut self, account: Address, amount: U256) -> Result<()> {
        let current = self.balance_of(account);
        let updated = current
            .checked_add(amount)
            .ok_or(WardenError::DepositOverflow(account))?;
        self.deposits.insert(account, updated);
        Ok(())
    }

    fn withdraw_to(&mut self, account: Address, recipient: Address, amount: U256) -> Result<()> {
        let available = self.balance_of(account);
        if available < amount {
            return Err(WardenError::InsufficientDeposit {
                needed: amount,
                available,
            });
        }
        self.deposits.insert(account, available - amount);
        let paid = self.payouts.entry(recipient).or_default();
        *paid = paid.saturating_add(amount);
        Ok(())
    }
}
