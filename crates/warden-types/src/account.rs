//! The account capability consumed by the authorization engine.
//!
//! How the operator set is stored and managed is up to the concrete account;
//! the core only ever asks two questions: who owns the account, and is this
//! address an operator.

use std::collections::BTreeSet;

use alloy_primitives::Address;

use crate::{Result, WardenError};

/// Identity queries a concrete account must answer.
///
/// Invariant: once the account is usable, [`owner`](Self::owner) never
/// returns [`Address::ZERO`].
pub trait AccountAuthority {
    /// The account's owner. Fixed at account creation.
    fn owner(&self) -> Address;

    /// Whether `who` is currently a delegated operator signer.
    fn is_operator(&self, who: Address) -> bool;
}

impl<A: AccountAuthority + ?Sized> AccountAuthority for &A {
    fn owner(&self) -> Address {
        (**self).owner()
    }

    fn is_operator(&self, who: Address) -> bool {
        (**self).is_operator(who)
    }
}

impl<A: AccountAuthority + ?Sized> AccountAuthority for Box<A> {
    fn owner(&self) -> Address {
        (**self).owner()
    }

    fn is_operator(&self, who: Address) -> bool {
        (**self).is_operator(who)
    }
}

/// An account whose operator set is fixed when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAccount {
    owner: Address,
    operators: BTreeSet<Address>,
}

impl StaticAccount {
    /// Build an account. Fails with [`WardenError::ZeroOwner`] for a zero owner.
    ///
    /// The zero address is dropped from the operator set.
    pub fn new(owner: Address, operators: impl IntoIterator<Item = Address>) -> Result<Self> {
        if owner.is_zero() {
            return Err(WardenError::ZeroOwner);
        }
        let operators = operators.into_iter().filter(|op| !op.is_zero()).collect();
        Ok(Self { owner, operators })
    }

    #[must_use]
    pub fn operators(&self) -> impl Iterator<Item = &Address> {
        self.operators.iter()
    }
}

impl AccountAuthority for StaticAccount {
    fn owner(&self) -> Address {
        self.owner
    }

    fn is_operator(&self, who: Address) -> bool {
        self.operators.contains(&who)
    }
}

/// Dummy account for testing. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl StaticAccount {
    /// Owner `0x11…11`, operators `0x22…22` and `0x33…33`.
    pub fn dummy() -> Self {
        Self {
            owner: Address::repeat_byte(0x11),
            operators: [Address::repeat_byte(0x22), Address::repeat_byte(0x33)]
                .into_iter()
                .collect(),
        }
    }
}
