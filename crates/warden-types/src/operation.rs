//! The user operation submitted by the coordinator.
//!
//! Apart from [`UserOperation::signature`], every field is opaque to the
//! wallet core: the coordinator hashes them and hands the hash in alongside
//! the operation.

use alloy_primitives::{Address, B256, Bytes, ChainId, U256, keccak256};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};

use self::abi::{HashEnvelope, PackedForHash};

mod abi {
    alloy_sol_types::sol! {
        struct PackedForHash {
            address sender;
            uint256 nonce;
            bytes32 hashInitCode;
            bytes32 hashCallData;
            uint256 callGasLimit;
            uint256 verificationGasLimit;
            uint256 preVerificationGas;
            uint256 maxFeePerGas;
            uint256 maxPriorityFeePerGas;
            bytes32 hashPaymasterAndData;
        }

        struct HashEnvelope {
            bytes32 encodedHash;
            address entryPoint;
            uint256 chainId;
        }
    }
}

/// An ERC-4337 (v0.6 layout) user operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOperation {
    pub sender: Address,
    pub nonce: U256,
    pub init_code: Bytes,
    pub call_data: Bytes,
    pub call_gas_limit: U256,
    pub verification_gas_limit: U256,
    pub pre_verification_gas: U256,
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
    pub paymaster_and_data: Bytes,
    /// Raw `r || s || v` signature over the operation hash.
    pub signature: Bytes,
}

impl UserOperation {
    /// Canonical operation hash as the coordinator computes it.
    ///
    /// Covers every field except `signature`, bound to the entry point and
    /// chain. The wallet core never calls this itself; it always trusts the
    /// hash passed in by the coordinator.
    #[must_use]
    pub fn hash(&self, entry_point: Address, chain_id: ChainId) -> B256 {
        let packed = PackedForHash {
            sender: self.sender,
            nonce: self.nonce,
            hashInitCode: keccak256(&self.init_code),
            hashCallData: keccak256(&self.call_data),
            callGasLimit: self.call_gas_limit,
            verificationGasLimit: self.verification_gas_limit,
            preVerificationGas: self.pre_verification_gas,
            maxFeePerGas: self.max_fee_per_gas,
            maxPriorityFeePerGas: self.max_priority_fee_per_gas,
            hashPaymasterAndData: keccak256(&self.paymaster_and_data),
        };
        let envelope = HashEnvelope {
            encodedHash: keccak256(packed.abi_encode()),
            entryPoint: entry_point,
            chainId: U256::from(chain_id),
        };
        keccak256(envelope.abi_encode())
    }

    /// Same operation with a different signature.
    #[must_use]
    pub fn with_signature(mut self, signature: impl Into<Bytes>) -> Self {
        self.signature = signature.into();
        self
    }
}
