use alloy::primitives::{Address, Bytes, U256};
use serde_json::Value;

/// A contract call that can be encoded without being submitted.
pub trait Action: Send + Sync {
    fn target(&self) -> Address;
    fn value(&self) -> U256 {
        U256::ZERO
    }
    fn data(&self) -> Bytes; // encode to tx data
    // GasTank functions restricted to the timelock owner.
    fn requires_timelock(&self) -> bool {
        false
    }
    fn describe(&self) -> Value;
}
