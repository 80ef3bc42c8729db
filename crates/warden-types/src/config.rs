//! Gateway configuration.
//!
//! The coordinator identity is injected here rather than compiled in, so
//! embedders and tests can point an account at a different coordinator.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{Result, WardenError, constants};

/// Identities every account in a deployment trusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct GatewayConfig {
    /// The only caller allowed to trigger operation validation.
    pub coordinator: Address,
    /// Identity of the stake ledger holding account deposits.
    ///
    /// Recorded on every deposit and withdrawal event. The gateway does not
    /// dispatch on it: calls go to the `StakeLedger` handle it was built with.
    pub stake_ledger: Address,
}

impl GatewayConfig {
    /// Both roles played by the same entry point, as in ERC-4337.
    #[must_use]
    pub fn with_entry_point(entry_point: Address) -> Self {
        Self {
            coordinator: entry_point,
            stake_ledger: entry_point,
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject zero identities.
    pub fn validate(&self) -> Result<()> {
        if self.coordinator.is_zero() {
            return Err(WardenError::Configuration(
                "coordinator must not be the zero address".to_string(),
            ));
        }
        if self.stake_ledger.is_zero() {
            return Err(WardenError::Configuration(
                "stake_ledger must not be the zero address".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::with_entry_point(constants::CANONICAL_ENTRY_POINT)
    }
}
