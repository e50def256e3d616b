use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use serde_json::{Value, json};

use crate::{actions::action::Action, bindings::gas_tank::GasTank};

pub struct WithdrawGas {
    gas_tank: Address,
    amount: U256,
}

impl WithdrawGas {
    pub fn new(gas_tank: Address, amount: U256) -> Self {
        Self { gas_tank, amount }
    }
}

impl Action for WithdrawGas {
    fn target(&self) -> Address {
        self.gas_tank
    }
    fn data(&self) -> Bytes {
        let bytes_data = GasTank::withdrawGasCall::new((self.amount,)).abi_encode();
        Bytes::from(bytes_data)
    }
    fn describe(&self) -> Value {
        json!({
            "action": "WithdrawGas",
            "gas_tank": self.gas_tank.to_string(),
            "amount": self.amount.to_string(),
        })
    }
}
