//! The authorization decision: owner OR any operator, 1-of-N.
//!
//! 1. Wrap the coordinator-supplied operation hash in the personal-message
//!    envelope
//! 2. Recover the signer from the raw signature
//! 3. Authorized iff the signer is the owner or an operator
//!
//! The decision is a pure function of its inputs. It never returns an error
//! and never panics: a bad or foreign signature is just [`ValidationOutcome::Rejected`].

use alloy_primitives::{Address, B256};
use warden_types::{AccountAuthority, ValidationOutcome};

use crate::envelope::to_eth_signed_message_hash;
use crate::recovery::recover_signer;

/// Address standing in for "no signer recovered".
///
/// Usable accounts never have a zero owner, and the operator query is never
/// consulted for it, so it cannot authorize anything.
pub const UNRECOVERED_SIGNER: Address = Address::ZERO;

/// Decide whether `signature` over `operation_hash` was made by `owner` or by
/// an address for which `is_operator` holds.
pub fn authorize<F>(
    operation_hash: B256,
    signature: &[u8],
    owner: Address,
    is_operator: F,
) -> ValidationOutcome
where
    F: FnOnce(Address) -> bool,
{
    let digest = to_eth_signed_message_hash(operation_hash);

    let signer = recover_signer(digest, signature).unwrap_or_else(|err| {
        tracing::debug!(
            operation_hash = %operation_hash,
            error = %err,
            "Signature recovery failed"
        );
        UNRECOVERED_SIGNER
    });

    if signer == UNRECOVERED_SIGNER {
        return ValidationOutcome::Rejected;
    }

    let is_owner = signer == owner;
    let outcome = if is_owner {
        ValidationOutcome::Authorized
    } else {
        ValidationOutcome::from_bool(is_operator(signer))
    };

    tracing::debug!(
        operation_hash = %operation_hash,
        signer = %signer,
        is_owner,
        outcome = %outcome,
        "Operation signature checked"
    );

    outcome
}

/// [`authorize`] against an account's own owner and operator set.
pub fn authorize_account<A>(
    operation_hash: B256,
    signature: &[u8],
    account: &A,
) -> ValidationOutcome
where
    A: AccountAuthority + ?Sized,
{
    authorize(operation_hash, signature, account.owner(), |who| {
        account.is_operator(who)
    })
}
