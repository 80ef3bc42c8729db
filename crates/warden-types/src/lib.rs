//! # warden-types
//!
//! Shared types, errors, and configuration for the **Warden**
//! account-abstraction wallet core.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Operation model**: [`UserOperation`], [`ValidationOutcome`]
//! - **Account capability**: [`AccountAuthority`], [`StaticAccount`]
//! - **Value boundaries**: [`StakeLedger`], [`ValueTransfer`], [`GasBudget`], [`TransferError`]
//! - **Configuration**: [`GatewayConfig`]
//! - **Errors**: [`WardenError`] with `WD_ERR_` prefix codes
//! - **Constants**: envelope prefix, curve order, canonical entry point

pub mod account;
pub mod config;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod operation;
pub mod outcome;

pub use account::*;
pub use config::*;
pub use error::*;
pub use ledger::*;
pub use operation::*;
pub use outcome::*;

// Re-exported so downstream crates agree on one set of primitive types.
pub use alloy_primitives::{Address, B256, Bytes, U256};
