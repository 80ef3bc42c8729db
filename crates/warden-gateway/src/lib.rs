//! # warden-gateway
//!
//! **Settlement Gateway**: the account's privileged entry points and the
//! value movements behind them.
//!
//! ## Flow
//!
//! ```text
//! coordinator ─▶ validate(op, hash, missing_funds)
//!                  1. caller == coordinator?      (else CallerNotCoordinator)
//!                  2. authorize(hash, signature)  → Authorized | Rejected
//!                  3. pay_prefund(missing_funds)  → fire-and-forget
//!                  4. return outcome (code 0 / 1)
//!
//! anyone      ─▶ deposit(amount)   → StakeLedger::deposit_to
//! owner       ─▶ withdraw()        → StakeLedger::withdraw_to(owner, full balance)
//! anyone      ─▶ balance()         → StakeLedger::balance_of
//! ```
//!
//! Calls are synchronous and never interleave; the only shared state is the
//! ledger's entry for this account, mutated through the ledger's own atomic
//! operations.

pub mod gateway;
pub mod memory_ledger;
pub mod prefund;

pub use gateway::SettlementGateway;
pub use memory_ledger::InMemoryStakeLedger;
pub use prefund::{PrefundOutcome, pay_prefund};
