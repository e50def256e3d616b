use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use serde_json::{Value, json};

use crate::{actions::action::Action, bindings::gas_tank::GasTank};

pub struct DepositGas {
    gas_tank: Address,
    receiver: Address,
    amount: U256,
}

impl DepositGas {
    pub fn new(gas_tank: Address, receiver: Address, amount: U256) -> Self {
        Self {
            gas_tank,
            receiver,
            amount,
        }
    }
}

impl Action for DepositGas {
    fn target(&self) -> Address {
        self.gas_tank
    }
    fn value(&self) -> U256 {
        self.amount
    }
    fn data(&self) -> Bytes {
        let bytes_data = GasTank::depositGasCall::new((self.receiver,)).abi_encode();
        Bytes::from(bytes_data)
    }
    fn describe(&self) -> Value {
        json!({
            "action": "DepositGas",
            "gas_tank": self.gas_tank.to_string(),
            "receiver": self.receiver.to_string(),
            "amount": self.amount.to_string(),
        })
    }
}
