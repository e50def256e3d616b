use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use serde_json::{Value, json};

use crate::{actions::action::Action, bindings::gas_tank::GasTank};

pub struct Pay {
    gas_tank: Address,
    payer: Address,
    payee: Address,
    amount: U256,
}

impl Pay {
    pub fn new(gas_tank: Address, payer: Address, payee: Address, amount: U256) -> Self {
        Self {
            gas_tank,
            payer,
            payee,
            amount,
        }
    }
}

impl Action for Pay {
    fn target(&self) -> Address {
        self.gas_tank
    }
    fn data(&self) -> Bytes {
        let bytes_data =
            GasTank::payCall::new((self.payer, self.payee, self.amount)).abi_encode();
        Bytes::from(bytes_data)
    }
    fn describe(&self) -> Value {
        json!({
            "action": "Pay",
            "gas_tank": self.gas_tank.to_string(),
            "payer": self.payer.to_string(),
            "payee": self.payee.to_string(),
            "amount": self.amount.to_string(),
        })
    }
}
