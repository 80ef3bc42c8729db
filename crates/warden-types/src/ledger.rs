//! Boundaries to the collaborators that actually hold value.
//!
//! - [`StakeLedger`]: the coordinator's per-account deposit book
//!   (`balanceOf` / `depositTo` / `withdrawTo`).
//! - [`ValueTransfer`]: the account's native value-send primitive, used to
//!   pay the coordinator's prefund.
//!
//! The wallet core implements neither; it only issues calls against them.

use alloy_primitives::{Address, U256};
use thiserror::Error;

use crate::Result;

/// The external ledger tracking each account's prepaid deposit.
///
/// Mutations are atomic inside the ledger; the wallet core never
/// read-modify-writes a balance itself.
pub trait StakeLedger {
    /// Current deposit held for `account`.
    fn balance_of(&self, account: Address) -> U256;

    /// Add `amount` to `account`'s deposit.
    fn deposit_to(&mut self, account: Address, amount: U256) -> Result<()>;

    /// Move `amount` out of `account`'s deposit and pay it to `recipient`.
    fn withdraw_to(&mut self, account: Address, recipient: Address, amount: U256) -> Result<()>;
}

impl<L: StakeLedger + ?Sized> StakeLedger for &mut L {
    fn balance_of(&self, account: Address) -> U256 {
        (**self).balance_of(account)
    }

    fn deposit_to(&mut self, account: Address, amount: U256) -> Result<()> {
        (**self).deposit_to(account, amount)
    }

    fn withdraw_to(&mut self, account: Address, recipient: Address, amount: U256) -> Result<()> {
        (**self).withdraw_to(account, recipient, amount)
    }
}

/// Execution budget handed to a value transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GasBudget {
    /// Forward everything the current call has left.
    All,
    /// Forward at most this much.
    Limited(u64),
}

/// Why a native value transfer did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The account does not hold enough native value.
    #[error("WD_ERR_400: Insufficient funds for transfer: need {needed}, have {available}")]
    InsufficientFunds { needed: U256, available: U256 },

    /// The recipient's receive hook failed.
    #[error("WD_ERR_401: Recipient {recipient} reverted: {reason}")]
    Reverted { recipient: Address, reason: String },

    /// The transfer ran out of its execution budget.
    #[error("WD_ERR_402: Transfer ran out of gas")]
    OutOfGas,
}

/// Native value-send primitive of the hosting environment.
pub trait ValueTransfer {
    /// Send `amount` to `to`, granting it `gas` to run its receive logic.
    fn send_value(
        &mut self,
        to: Address,
        amount: U256,
        gas: GasBudget,
    ) -> std::result::Result<(), TransferError>;
}

impl<T: ValueTransfer + ?Sized> ValueTransfer for &mut T {
    fn send_value(
        &mut self,
        to: Address,
        amount: U256,
        gas: GasBudget,
    ) -> std::result::Result<(), TransferError> {
        (**self).send_value(to, amount, gas)
    }
}

/// One call to [`RecordingTransfer::send_value`].
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferAttempt {
    pub to: Address,
    pub amount: U256,
    pub gas: GasBudget,
    /// Whether the value actually left the account.
    pub delivered: bool,
}

/// Records every transfer attempt against a native balance. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Default)]
pub struct RecordingTransfer {
    /// Native value the account still holds.
    pub balance: U256,
    attempts: Vec<TransferAttempt>,
    refuse: bool,
}

#[cfg(any(test, feature = "test-helpers"))]
impl RecordingTransfer {
    /// Holds `balance` and lets every recipient accept value.
    pub fn funded(balance: U256) -> Self {
        Self {
            balance,
            ..Self::default()
        }
    }

    /// Every recipient reverts on receive.
    pub fn refusing(balance: U256) -> Self {
        Self {
            balance,
            refuse: true,
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> &[TransferAttempt] {
        &self.attempts
    }

    /// Total value that actually left the account towards `to`.
    pub fn delivered_to(&self, to: Address) -> U256 {
        self.attempts
            .iter()
            .filter(|a| a.delivered && a.to == to)
            .fold(U256::ZERO, |acc, a| acc + a.amount)
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl ValueTransfer for RecordingTransfer {
    fn send_value(
        &mut self,
        to: Address,
        amount: U256,
        gas: GasBudget,
    ) -> std::result::Result<(), TransferError> {
        let result = if self.refuse {
            Err(TransferError::Reverted {
                recipient: to,
                reason: "receive refused".to_string(),
            })
        } else if amount > self.balance {
            Err(TransferError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            })
        } else {
            self.balance -= amount;
            Ok(())
        };
        self.attempts.push(TransferAttempt {
            to,
            amount,
            gas,
            delivered: result.is_ok(),
        });
        result
    }
}
