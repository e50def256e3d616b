use alloy::primitives::{Address, Bytes};
use alloy::sol_types::SolCall;
use serde_json::{Value, json};

use crate::{actions::action::Action, bindings::gas_tank::GasTank};

/// Sender allows (or stops allowing) `payee` to be paid from its deposit.
pub struct ApprovePayee {
    gas_tank: Address,
    payee: Address,
    approved: bool,
}

impl ApprovePayee {
    pub fn new(gas_tank: Address, payee: Address, approved: bool) -> Self {
        Self {
            gas_tank,
            payee,
            approved,
        }
    }
}

impl Action for ApprovePayee {
    fn target(&self) -> Address {
        self.gas_tank
    }
    fn data(&self) -> Bytes {
        let bytes_data = GasTank::approveCall::new((self.payee, self.approved)).abi_encode();
        Bytes::from(bytes_data)
    }
    fn describe(&self) -> Value {
        json!({
            "action": "ApprovePayee",
            "gas_tank": self.gas_tank.to_string(),
            "payee": self.payee.to_string(),
            "approved": self.approved,
        })
    }
}
