//! Access-controlled settlement gateway.
//!
//! Every entry point carries its own caller precondition:
//!
//! | entry point | who may call          |
//! |-------------|-----------------------|
//! | `validate`  | the coordinator only  |
//! | `withdraw`  | the account owner only|
//! | `deposit`   | anyone                |
//! | `balance`   | anyone (read-only)    |
//!
//! A failed precondition aborts the call with an identity error carrying
//! both the caller and the identity it was checked against. Nothing is
//! persisted between calls: each `validate` stands alone.

use alloy_primitives::{Address, B256, U256};
use warden_auth::authorize_account;
use warden_types::{
    AccountAuthority, GatewayConfig, Result, StakeLedger, UserOperation, ValidationOutcome,
    ValueTransfer, WardenError,
};

use crate::prefund::pay_prefund;

/// The account's privileged surface towards the coordinator and its owner.
pub struct SettlementGateway<A, L, T> {
    config: GatewayConfig,
    /// This account's own identity on the stake ledger.
    address: Address,
    account: A,
    ledger: L,
    transfer: T,
}

impl<A, L, T> SettlementGateway<A, L, T>
where
    A: AccountAuthority,
    L: StakeLedger,
    T: ValueTransfer,
{
    /// Wire up a gateway.
    ///
    /// # Errors
    /// - `Configuration` if the config or the account address is invalid
    /// - `ZeroOwner` if the account is not usable
    pub fn new(
        config: GatewayConfig,
        address: Address,
        account: A,
        ledger: L,
        transfer: T,
    ) -> Result<Self> {
        config.validate()?;
        if address.is_zero() {
            return Err(WardenError::Configuration(
                "account address must not be the zero address".to_string(),
            ));
        }
        if account.owner().is_zero() {
            return Err(WardenError::ZeroOwner);
        }
        Ok(Self {
            config,
            address,
            account,
            ledger,
            transfer,
        })
    }

    /// Validate `op` for the coordinator and pay its prefund.
    ///
    /// The prefund is attempted whatever the outcome, and its own result is
    /// dropped: a rejected signature or a failed transfer both still return
    /// `Ok`. Only a wrong caller is an error, and then nothing is paid.
    ///
    /// # Errors
    /// - `CallerNotCoordinator` if `caller` is not the configured coordinator
    pub fn validate(
        &mut self,
        caller: Address,
        op: &UserOperation,
        operation_hash: B256,
        missing_funds: U256,
    ) -> Result<ValidationOutcome> {
        self.require_coordinator(caller)?;

        let outcome = authorize_account(operation_hash, &op.signature, &self.account);
        let prefund = pay_prefund(&mut self.transfer, caller, missing_funds);

        tracing::info!(
            account = %self.address,
            sender = %op.sender,
            operation_hash = %operation_hash,
            outcome = %outcome,
            prefund = %prefund,
            "User operation validated"
        );

        Ok(outcome)
    }

    /// Add `amount` to this account's stake deposit. Open to any caller.
    pub fn deposit(&mut self, caller: Address, amount: U256) -> Result<()> {
        self.ledger.deposit_to(self.address, amount)?;
        tracing::info!(
            account = %self.address,
            ledger = %self.config.stake_ledger,
            from = %caller,
            amount = %amount,
            "Stake deposit added"
        );
        Ok(())
    }

    /// Pay the whole stake deposit out to the owner. Owner only.
    ///
    /// Returns the amount withdrawn.
    ///
    /// # Errors
    /// - `CallerNotOwner` if `caller` is not the owner (deposit untouched)
    /// - any error the ledger raises for the transfer
    pub fn withdraw(&mut self, caller: Address) -> Result<U256> {
        let owner = self.require_owner(caller)?;
        let amount = self.ledger.balance_of(self.address);
        self.ledger.withdraw_to(self.address, owner, amount)?;
        tracing::info!(
            account = %self.address,
            ledger = %self.config.stake_ledger,
            owner = %owner,
            amount = %amount,
            "Stake deposit withdrawn"
        );
        Ok(amount)
    }

    /// Current stake deposit held for this account.
    #[must_use]
    pub fn balance(&self) -> U256 {
        self.ledger.balance_of(self.address)
    }

    fn require_coordinator(&self, caller: Address) -> Result<()> {
        let expected = self.config.coordinator;
        if caller != expected {
            tracing::warn!(
                account = %self.address,
                caller = %caller,
                expected = %expected,
                "Validation refused: caller is not the coordinator"
            );
            return Err(WardenError::CallerNotCoordinator { caller, expected });
        }
        Ok(())
    }

    fn require_owner(&self, caller: Address) -> Result<Address> {
        let owner = self.account.owner();
        if caller != owner {
            tracing::warn!(
                account = %self.address,
                caller = %caller,
                owner = %owner,
                "Withdrawal refused: caller is not the owner"
            );
            return Err(WardenError::CallerNotOwner { caller, owner });
        }
        Ok(owner)
    }
}

impl<A, L, T> SettlementGateway<A, L, T>
where
    A: AccountAuthority,
{
    #[must_use]
    pub fn owner(&self) -> Address {
        self.account.owner()
    }

    #[must_use]
    pub fn coordinator(&self) -> Address {
        self.config.coordinator
    }

    /// Where the deposit book lives. Stamped on deposit and withdrawal
    /// events; the `L` handle is trusted to be that ledger.
    #[must_use]
    pub fn stake_ledger(&self) -> Address {
        self.config.stake_ledger
    }

    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    #[must_use]
    pub fn account(&self) -> &A {
        &self.account
    }

    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    #[must_use]
    pub fn transfer(&self) -> &T {
        &self.transfer
    }
}

#[cfg(test)]
mod tests {
    use alloy_signer::SignerSync;
    use alloy_signer_local::PrivateKeySigner;
    use warden_auth::to_eth_signed_message_hash;
    use warden_types::{GasBudget, RecordingTransfer, StaticAccount};

    use super::*;
    use crate::InMemoryStakeLedger;

    const COORDINATOR: Address = Address::repeat_byte(0xC0);
    const ACCOUNT: Address = Address::repeat_byte(0xA1);

    type TestGateway = SettlementGateway<StaticAccount, InMemoryStakeLedger, RecordingTransfer>;

    fn gateway_for(owner: Address, transfer: RecordingTransfer) -> TestGateway {
        SettlementGateway::new(
            GatewayConfig::with_entry_point(COORDINATOR),
            ACCOUNT,
            StaticAccount::new(owner, []).unwrap(),
            InMemoryStakeLedger::new(),
            transfer,
        )
        .unwrap()
    }

    fn signed_op(signer: &PrivateKeySigner, hash: B256) -> UserOperation {
        let sig = signer
            .sign_hash_sync(&to_eth_signed_message_hash(hash))
            .unwrap()
            .as_bytes();
        UserOperation {
            sender: ACCOUNT,
            ..UserOperation::default()
        }
        .with_signature(sig.to_vec())
    }

    #[test]
    fn zero_account_address_rejected() {
        let result = SettlementGateway::new(
            GatewayConfig::default(),
            Address::ZERO,
            StaticAccount::dummy(),
            InMemoryStakeLedger::new(),
            RecordingTransfer::default(),
        );
        assert!(matches!(result, Err(WardenError::Configuration(_))));
    }

    #[test]
    fn zero_owner_rejected() {
        struct Ownerless;
        impl AccountAuthority for Ownerless {
            fn owner(&self) -> Address {
                Address::ZERO
            }
            fn is_operator(&self, _who: Address) -> bool {
                false
            }
        }

        let result = SettlementGateway::new(
            GatewayConfig::default(),
            ACCOUNT,
            Ownerless,
            InMemoryStakeLedger::new(),
            RecordingTransfer::default(),
        );
        assert!(matches!(result, Err(WardenError::ZeroOwner)));
    }

    #[test]
    fn coordinator_validates_owner_operation() {
        let owner = PrivateKeySigner::random();
        let mut gw = gateway_for(owner.address(), RecordingTransfer::funded(U256::from(10_000)));
        let hash = B256::repeat_byte(0xAA);
        let op = signed_op(&owner, hash);

        let outcome = gw.validate(COORDINATOR, &op, hash, U256::from(1_000)).unwrap();
        assert_eq!(outcome, ValidationOutcome::Authorized);
        assert_eq!(outcome.code(), 0);

        let attempts = gw.transfer().attempts();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].to, COORDINATOR);
        assert_eq!(attempts[0].amount, U256::from(1_000));
        assert_eq!(attempts[0].gas, GasBudget::All);
    }

    #[test]
    fn non_coordinator_cannot_validate() {
        let owner = PrivateKeySigner::random();
        let mut gw = gateway_for(owner.address(), RecordingTransfer::funded(U256::from(10_000)));
        let hash = B256::repeat_byte(0xAA);
        let op = signed_op(&owner, hash);
        let intruder = Address::repeat_byte(0xEE);

        let err = gw.validate(intruder, &op, hash, U256::from(1_000)).unwrap_err();
        assert_eq!(
            err,
            WardenError::CallerNotCoordinator {
                caller: intruder,
                expected: COORDINATOR,
            }
        );
        assert!(gw.transfer().attempts().is_empty());
    }

    #[test]
    fn owner_cannot_validate_either() {
        let owner = PrivateKeySigner::random();
        let mut gw = gateway_for(owner.address(), RecordingTransfer::funded(U256::from(10_000)));
        let hash = B256::repeat_byte(0x01);
        let op = signed_op(&owner, hash);
        let err = gw.validate(owner.address(), &op, hash, U256::ZERO).unwrap_err();
        assert!(matches!(err, WardenError::CallerNotCoordinator { .. }));
    }

    #[test]
    fn rejected_operation_still_pays_prefund() {
        let owner = PrivateKeySigner::random();
        let stranger = PrivateKeySigner::random();
        let mut gw = gateway_for(owner.address(), RecordingTransfer::funded(U256::from(10_000)));
        let hash = B256::repeat_byte(0xBB);
        let op = signed_op(&stranger, hash);

        let outcome = gw.validate(COORDINATOR, &op, hash, U256::from(250)).unwrap();
        assert_eq!(outcome, ValidationOutcome::Rejected);
        assert_eq!(outcome.code(), 1);
        assert_eq!(gw.transfer().delivered_to(COORDINATOR), U256::from(250));
    }

    #[test]
    fn zero_missing_funds_attempts_no_transfer() {
        let owner = PrivateKeySigner::random();
        let stranger = PrivateKeySigner::random();
        let mut gw = gateway_for(owner.address(), RecordingTransfer::funded(U256::from(10_000)));
        let hash = B256::repeat_byte(0xCC);

        let good = signed_op(&owner, hash);
        let bad = signed_op(&stranger, hash);
        assert!(gw.validate(COORDINATOR, &good, hash, U256::ZERO).unwrap().is_authorized());
        assert!(!gw.validate(COORDINATOR, &bad, hash, U256::ZERO).unwrap().is_authorized());
        assert!(gw.transfer().attempts().is_empty());
    }

    #[test]
    fn failed_prefund_does_not_fail_validation() {
        let owner = PrivateKeySigner::random();
        let mut gw = gateway_for(owner.address(), RecordingTransfer::refusing(U256::from(10_000)));
        let hash = B256::repeat_byte(0xDD);
        let op = signed_op(&owner, hash);

        let outcome = gw.validate(COORDINATOR, &op, hash, U256::from(1_000)).unwrap();
        assert_eq!(outcome, ValidationOutcome::Authorized);
        assert_eq!(gw.transfer().attempts().len(), 1);
        assert_eq!(gw.transfer().delivered_to(COORDINATOR), U256::ZERO);
    }

    #[test]
    fn deposit_open_to_anyone() {
        let mut gw = gateway_for(Address::repeat_byte(0x11), RecordingTransfer::default());
        gw.deposit(Address::repeat_byte(0x99), U256::from(700)).unwrap();
        gw.deposit(COORDINATOR, U256::from(300)).unwrap();
        assert_eq!(gw.balance(), U256::from(1_000));
    }

    #[test]
    fn owner_withdraws_everything() {
        let owner = Address::repeat_byte(0x11);
        let mut gw = gateway_for(owner, RecordingTransfer::default());
        gw.deposit(owner, U256::from(4_200)).unwrap();

        let withdrawn = gw.withdraw(owner).unwrap();
        assert_eq!(withdrawn, U256::from(4_200));
        assert_eq!(gw.balance(), U256::ZERO);
        assert_eq!(gw.ledger().paid_to(owner), U256::from(4_200));
    }

    #[test]
    fn non_owner_cannot_withdraw() {
        let owner = Address::repeat_byte(0x11);
        let mut gw = gateway_for(owner, RecordingTransfer::default());
        gw.deposit(owner, U256::from(4_200)).unwrap();

        for caller in [COORDINATOR, Address::repeat_byte(0x22)] {
            let err = gw.withdraw(caller).unwrap_err();
            assert_eq!(err, WardenError::CallerNotOwner { caller, owner });
        }
        assert_eq!(gw.balance(), U256::from(4_200));
    }

    #[test]
    fn accessors_expose_identities() {
        let owner = Address::repeat_byte(0x11);
        let gw = gateway_for(owner, RecordingTransfer::default());
        assert_eq!(gw.owner(), owner);
        assert_eq!(gw.coordinator(), COORDINATOR);
        assert_eq!(gw.address(), ACCOUNT);
        assert_eq!(gw.stake_ledger(), COORDINATOR);
        assert_eq!(gw.account().owner(), owner);
    }

    #[test]
    fn split_coordinator_and_ledger_identities() {
        let ledger = Address::repeat_byte(0x1E);
        let owner = Address::repeat_byte(0x11);
        let mut gw = SettlementGateway::new(
            GatewayConfig {
                coordinator: COORDINATOR,
                stake_ledger: ledger,
            },
            ACCOUNT,
            StaticAccount::new(owner, []).unwrap(),
            InMemoryStakeLedger::new(),
            RecordingTransfer::default(),
        )
        .unwrap();

        assert_eq!(gw.coordinator(), COORDINATOR);
        assert_eq!(gw.stake_ledger(), ledger);

        gw.deposit(owner, U256::from(50)).unwrap();
        assert_eq!(gw.withdraw(owner).unwrap(), U256::from(50));
        assert_eq!(gw.ledger().paid_to(owner), U256::from(50));
    }
}
