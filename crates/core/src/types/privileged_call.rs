use alloy::primitives::{Address, B256, Bytes, U256, keccak256};
use alloy::sol_types::SolValue;
use serde_json::{Value, json};

use crate::actions::action::Action;
use crate::types::dispatch_error::DispatchError;

/// Predecessor and salt used when the caller does not ask for anything else.
pub const SENTINEL: B256 = B256::ZERO;

/// One governance-gated operation to run on a remote contract through the
/// timelock.
///
/// With the default zero predecessor and salt, two calls with the same target,
/// value and data share an operation id, so the timelock refuses to schedule
/// the second one until the first has been executed or cancelled. Use
/// [`PrivilegedCall::with_salt`] to make an operation unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivilegedCall {
    pub target: Address,
    pub value: U256,
    pub data: Bytes,
    pub predecessor: B256,
    pub salt: B256,
}

impl PrivilegedCall {
    pub fn new(target: Address, value: U256, data: Bytes) -> Self {
        Self {
            target,
            value,
            data,
            predecessor: SENTINEL,
            salt: SENTINEL,
        }
    }

    pub fn from_action(action: &dyn Action) -> Self {
        Self::new(action.target(), action.value(), action.data())
    }

    pub fn with_salt(mut self, salt: B256) -> Self {
        self.salt = salt;
        self
    }

    pub fn with_predecessor(mut self, predecessor: B256) -> Self {
        self.predecessor = predecessor;
        self
    }

    pub fn validate(&self) -> Result<(), DispatchError> {
        if self.target == Address::ZERO {
            return Err(DispatchError::invalid(
                "privileged call target is the zero address",
            ));
        }
        Ok(())
    }

    /// Id the timelock derives for this call:
    /// `keccak256(abi.encode(target, value, data, predecessor, salt))`.
    pub fn operation_id(&self) -> B256 {
        let encoded = (
            self.target,
            self.value,
            self.data.clone(),
            self.predecessor,
            self.salt,
        )
            .abi_encode_params();
        keccak256(encoded)
    }

    pub fn describe(&self) -> Value {
        json!({
            "target": self.target.to_string(),
            "value": self.value.to_string(),
            "data": self.data.to_string(),
            "predecessor": self.predecessor.to_string(),
            "salt": self.salt.to_string(),
            "operation_id": self.operation_id().to_string(),
        })
    }
}
