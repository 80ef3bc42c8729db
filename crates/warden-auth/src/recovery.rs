//! Signer recovery from a raw `r || s || v` secp256k1 signature.
//!
//! Every malformed input maps to a [`RecoveryError`]; nothing here panics.

use alloy_primitives::{Address, B256, Signature, U256};
use thiserror::Error;
use warden_types::constants::{SECP256K1_ORDER, SIGNATURE_LENGTH};

/// Why no signer could be recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    #[error("WD_ERR_500: Signature must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// `r` or `s` is zero or not below the group order.
    #[error("WD_ERR_501: Signature scalar {component} out of range")]
    ScalarOutOfRange { component: &'static str },

    #[error("WD_ERR_502: Invalid recovery id {0}")]
    InvalidRecoveryId(u8),

    /// Well-formed, but no public key maps to it.
    #[error("WD_ERR_503: No public key recoverable: {0}")]
    Unrecoverable(String),
}

/// Parse a 65-byte signature, checking every component before use.
///
/// `v` may be given as `0`/`1` or in legacy `27`/`28` form.
pub fn parse_signature(raw: &[u8]) -> Result<Signature, RecoveryError> {
    if raw.len() != SIGNATURE_LENGTH {
        return Err(RecoveryError::InvalidLength {
            expected: SIGNATURE_LENGTH,
            actual: raw.len(),
        });
    }

    let r = U256::from_be_slice(&raw[..32]);
    let s = U256::from_be_slice(&raw[32..64]);
    check_scalar("r", r)?;
    check_scalar("s", s)?;

    let y_parity = match raw[64] {
        0 | 27 => false,
        1 | 28 => true,
        v => return Err(RecoveryError::InvalidRecoveryId(v)),
    };

    Ok(Signature::new(r, s, y_parity))
}

fn check_scalar(component: &'static str, value: U256) -> Result<(), RecoveryError> {
    if value.is_zero() || value >= SECP256K1_ORDER {
        return Err(RecoveryError::ScalarOutOfRange { component });
    }
    Ok(())
}

/// Recover the address whose key produced `raw` over `digest`.
pub fn recover_signer(digest: B256, raw: &[u8]) -> Result<Address, RecoveryError> {
    let signature = parse_signature(raw)?;
    signature
        .recover_address_from_prehash(&digest)
        .map_err(|err| RecoveryError::Unrecoverable(err.to_string()))
}
