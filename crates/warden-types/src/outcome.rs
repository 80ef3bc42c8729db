//! The two-valued result of validating a user operation.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::constants::{SIG_VALIDATION_FAILED, SIG_VALIDATION_SUCCEEDED};

/// Outcome of checking an operation's signature against the account.
///
/// Rejection is an ordinary return value, never an error: the coordinator
/// branches on [`ValidationOutcome::code`] to decide what to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// Signed by the owner or an operator. Wire code `0`.
    Authorized,
    /// Signed by anyone else, or the signature was malformed. Wire code `1`.
    Rejected,
}

impl ValidationOutcome {
    /// Wire code returned to the coordinator: `0` or `1`, nothing else.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Authorized => SIG_VALIDATION_SUCCEEDED,
            Self::Rejected => SIG_VALIDATION_FAILED,
        }
    }

    #[must_use]
    pub const fn is_authorized(self) -> bool {
        matches!(self, Self::Authorized)
    }

    /// `Authorized` when `ok`, `Rejected` otherwise.
    #[must_use]
    pub const fn from_bool(ok: bool) -> Self {
        if ok { Self::Authorized } else { Self::Rejected }
    }
}

/// Widens the wire code to a word. Convert with `.into()`: `U256::from(outcome)`
/// picks up ruint's inherent `Uint::from` and does not compile.
impl From<ValidationOutcome> for U256 {
    fn from(outcome: ValidationOutcome) -> Self {
        Self::from(outcome.code())
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authorized => write!(f, "AUTHORIZED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}
