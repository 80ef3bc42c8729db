//! System-wide constants for the Warden wallet core.

use alloy_primitives::{Address, U256, address, uint};

/// Personal-message envelope prefix for a 32-byte payload (EIP-191 version `0x45`).
///
/// The leading `0x19` byte keeps the envelope from ever parsing as RLP.
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Length of a raw `r || s || v` recoverable signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// Order `n` of the secp256k1 group. Valid `r` and `s` lie in `[1, n)`.
pub const SECP256K1_ORDER: U256 =
    uint!(0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141_U256);

/// Canonical address of the ERC-4337 v0.6 entry point contract.
///
/// Default identity for both the coordinator and the stake ledger.
pub const CANONICAL_ENTRY_POINT: Address = address!("0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789");

/// Wire code returned to the coordinator for an authorized operation.
pub const SIG_VALIDATION_SUCCEEDED: u8 = 0;

/// Wire code returned to the coordinator for a rejected operation.
pub const SIG_VALIDATION_FAILED: u8 = 1;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
