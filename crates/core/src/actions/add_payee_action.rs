use alloy::primitives::{Address, Bytes};
use alloy::sol_types::SolCall;
use serde_json::{Value, json};

use crate::{actions::action::Action, bindings::gas_tank::GasTank};

pub struct AddPayee {
    gas_tank: Address,
    payee: Address,
}

impl AddPayee {
    pub fn new(gas_tank: Address, payee: Address) -> Self {
        Self { gas_tank, payee }
    }
}

impl Action for AddPayee {
    fn target(&self) -> Address {
        self.gas_tank
    }
    fn data(&self) -> Bytes {
        let bytes_data = GasTank::addPayeeCall::new((self.payee,)).abi_encode();
        Bytes::from(bytes_data)
    }
    fn requires_timelock(&self) -> bool {
        true
    }
    fn describe(&self) -> Value {
        json!({
            "action": "AddPayee",
            "gas_tank": self.gas_tank.to_string(),
            "payee": self.payee.to_string(),
        })
    }
}
