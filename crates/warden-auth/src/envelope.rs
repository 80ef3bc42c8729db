//! Personal-message envelope (EIP-191, version `0x45`).
//!
//! The owner's key may sign 32-byte payloads for other protocols too. Signing
//! `keccak256(prefix || hash)` instead of `hash` keeps a signature made for
//! this wallet from ever verifying as a raw-digest signature elsewhere, and
//! the other way round.

use alloy_primitives::{B256, eip191_hash_message};

/// `keccak256("\x19Ethereum Signed Message:\n32" || operation_hash)`.
#[must_use]
pub fn to_eth_signed_message_hash(operation_hash: B256) -> B256 {
    eip191_hash_message(operation_hash)
}
