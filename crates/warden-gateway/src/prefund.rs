//! Prefund payment back to the coordinator.
//!
//! The coordinator advances execution cost for an operation and asks the
//! account to cover the shortfall (`missing_funds`) during validation. The
//! payment is **fire-and-forget**: the coordinator re-checks what it actually
//! received after the call returns and fails the operation itself if it was
//! underpaid. [`pay_prefund`] therefore reports what happened as a plain
//! [`PrefundOutcome`] value, and the gateway drops it.

use std::fmt;

use alloy_primitives::{Address, U256};
use warden_types::{GasBudget, TransferError, ValueTransfer};

/// What happened to a prefund payment. Safe to discard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefundOutcome {
    /// Nothing was owed; no transfer was attempted.
    Skipped,
    /// The full amount was sent.
    Sent { amount: U256 },
    /// The transfer was attempted and failed.
    Failed { amount: U256, error: TransferError },
}

impl PrefundOutcome {
    /// Whether a transfer was attempted at all.
    #[must_use]
    pub fn attempted(&self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

impl fmt::Display for PrefundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => write!(f, "SKIPPED"),
            Self::Sent { amount } => write!(f, "SENT({amount})"),
            Self::Failed { amount, .. } => write!(f, "FAILED({amount})"),
        }
    }
}

/// Send exactly `missing_funds` to `coordinator` with all remaining gas.
///
/// Zero owed is a no-op. A failed transfer is logged and returned, never
/// raised.
pub fn pay_prefund<T>(transfer: &mut T, coordinator: Address, missing_funds: U256) -> PrefundOutcome
where
    T: ValueTransfer + ?Sized,
{
    if missing_funds.is_zero() {
        return PrefundOutcome::Skipped;
    }

    match transfer.send_value(coordinator, missing_funds, GasBudget::All) {
        Ok(()) => PrefundOutcome::Sent {
            amount: missing_funds,
        },
        Err(error) => {
            tracing::debug!(
                coordinator = %coordinator,
                amount = %missing_funds,
                error = %error,
                "Prefund transfer failed; left for the coordinator to police"
            );
            PrefundOutcome::Failed {
                amount: missing_funds,
                error,
            }
        }
    }
}
