use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use serde_json::{Value, json};

use crate::{actions::action::Action, bindings::gas_tank::GasTank};

pub struct EmergencyWithdraw {
    gas_tank: Address,
    token: Address,
    amount: U256,
}

impl EmergencyWithdraw {
    pub fn new(gas_tank: Address, token: Address, amount: U256) -> Self {
        Self {
            gas_tank,
            token,
            amount,
        }
    }
}

impl Action for EmergencyWithdraw {
    fn target(&self) -> Address {
        self.gas_tank
    }
    fn data(&self) -> Bytes {
        let bytes_data =
            GasTank::emergencyWithdrawCall::new((self.token, self.amount)).abi_encode();
        Bytes::from(bytes_data)
    }
    fn requires_timelock(&self) -> bool {
        true
    }
    fn describe(&self) -> Value {
        json!({
            "action": "EmergencyWithdraw",
            "gas_tank": self.gas_tank.to_string(),
            "token": self.token.to_string(),
            "amount": self.amount.to_string(),
        })
    }
}
