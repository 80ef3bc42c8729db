//! # warden-auth
//!
//! **Authorization Engine**: decides whether a user operation was signed by
//! the account's owner or one of its operators.
//!
//! ## Pipeline
//!
//! ```text
//! operation_hash ──▶ envelope (EIP-191) ──▶ ecrecover ──▶ owner? / operator? ──▶ ValidationOutcome
//! ```
//!
//! Authorization is pure: no I/O, no mutation, and a rejection is a value
//! ([`ValidationOutcome::Rejected`](warden_types::ValidationOutcome::Rejected)),
//! never an error.

pub mod engine;
pub mod envelope;
pub mod recovery;

pub use engine::{UNRECOVERED_SIGNER, authorize, authorize_account};
pub use envelope::to_eth_signed_message_hash;
pub use recovery::{RecoveryError, parse_signature, recover_signer};
