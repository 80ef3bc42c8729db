//! Error types for the Warden wallet core.
//!
//! All errors use the `WD_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Caller identity errors
//! - 2xx: Stake ledger errors
//! - 3xx: Account errors
//! - 4xx: Value transfer errors (see [`TransferError`](crate::TransferError))
//! - 5xx: Signature recovery errors (`warden_auth::RecoveryError`)
//! - 9xx: General / configuration errors
//!
//! An authorization rejection is **not** an error: it is the
//! [`ValidationOutcome::Rejected`](crate::ValidationOutcome::Rejected) value.

use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Central error enum for all Warden operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WardenError {
    // =================================================================
    // Caller Identity Errors (1xx)
    // =================================================================
    /// A privileged validation entry point was invoked by someone other
    /// than the trusted coordinator.
    #[error("WD_ERR_100: Caller {caller} is not the coordinator {expected}")]
    CallerNotCoordinator { caller: Address, expected: Address },

    /// An owner-only entry point was invoked by someone other than the owner.
    #[error("WD_ERR_101: Caller {caller} is not the account owner {owner}")]
    CallerNotOwner { caller: Address, owner: Address },

    // =================================================================
    // Stake Ledger Errors (2xx)
    // =================================================================
    /// The stake ledger refused the request.
    #[error("WD_ERR_200: Stake ledger rejected request: {reason}")]
    LedgerRejected { reason: String },

    /// The account's deposit does not cover the requested withdrawal.
    #[error("WD_ERR_201: Insufficient deposit: need {needed}, have {available}")]
    InsufficientDeposit { needed: U256, available: U256 },

    /// A deposit would overflow the 256-bit balance.
    #[error("WD_ERR_202: Deposit overflow for account {0}")]
    DepositOverflow(Address),

    // =================================================================
    // Account Errors (3xx)
    // =================================================================
    /// The account's owner is the zero address; the account is unusable.
    #[error("WD_ERR_300: Account owner must not be the zero address")]
    ZeroOwner,

    // =================================================================
    // General / Configuration (9xx)
    // =================================================================
    /// Configuration error (missing or zero identities, bad values).
    #[error("WD_ERR_900: Configuration error: {0}")]
    Configuration(String),

    /// Serialization / deserialization error.
    #[error("WD_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Unrecoverable internal error.
    #[error("WD_ERR_902: Internal error: {0}")]
    Internal(String),
}

impl WardenError {
    /// Whether this error is a caller-identity precondition failure.
    #[must_use]
    pub fn is_identity_mismatch(&self) -> bool {
        matches!(
            self,
            Self::CallerNotCoordinator { .. } | Self::CallerNotOwner { .. }
        )
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, WardenError>;

impl From<serde_json::Error> for WardenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_not_coordinator_carries_both_identities() {
        let caller = Address::repeat_byte(0x11);
        let expected = Address::repeat_byte(0x22);
        let err = WardenError::CallerNotCoordinator { caller, expected };
        let msg = format!("{err}");
        assert!(msg.starts_with("WD_ERR_100"), "Got: {msg}");
        assert!(msg.contains(&caller.to_string()));
        assert!(msg.contains(&expected.to_string()));
        assert!(err.is_identity_mismatch());
    }

    #[test]
    fn coordinator_and_owner_mismatches_are_distinguishable() {
        let a = Address::repeat_byte(0x01);
        let b = Address::repeat_byte(0x02);
        let wrong_coordinator = WardenError::CallerNotCoordinator { caller: a, expected: b };
        let wrong_owner = WardenError::CallerNotOwner { caller: a, owner: b };
        assert_ne!(wrong_coordinator, wrong_owner);
        assert!(format!("{wrong_owner}").starts_with("WD_ERR_101"));
        assert!(wrong_owner.is_identity_mismatch());
    }

    #[test]
    fn insufficient_deposit_display() {
        let err = WardenError::InsufficientDeposit {
            needed: U256::from(100),
            available: U256::from(50),
        };
        let msg = format!("{err}");
        assert!(msg.contains("WD_ERR_201"));
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
        assert!(!err.is_identity_mismatch());
    }

    #[test]
    fn all_errors_have_wd_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(WardenError::ZeroOwner),
            Box::new(WardenError::LedgerRejected { reason: "paused".into() }),
            Box::new(WardenError::DepositOverflow(Address::ZERO)),
            Box::new(WardenError::Configuration("test".into())),
            Box::new(WardenError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("WD_ERR_"),
                "Error missing WD_ERR_ prefix: {msg}"
            );
        }
    }

    #[test]
    fn serde_json_error_converts() {
        let err = serde_json::from_str::<u64>("not json").unwrap_err();
        let converted: WardenError = err.into();
        assert!(matches!(converted, WardenError::Serialization(_)));
    }
}
