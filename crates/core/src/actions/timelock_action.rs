use alloy::primitives::{Address, B256, Bytes, U256};
use alloy::sol_types::SolCall;
use serde_json::{Value, json};

use crate::types::{dispatch_decision::DispatchDecision, privileged_call::PrivilegedCall};
use crate::{actions::action::Action, bindings::timelock::Timelock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Schedule,
    Execute,
}

/// The transaction sent to the timelock for one privileged call: either the
/// `schedule` that starts its delay or the `execute` that runs it.
pub struct TimelockAction {
    mode: Mode,
    timelock: Address,
    delay: U256,
    call: PrivilegedCall,
}

impl TimelockAction {
    pub fn new(timelock: Address, call: PrivilegedCall, decision: &DispatchDecision) -> Self {
        let mode = if decision.schedule {
            Mode::Schedule
        } else {
            Mode::Execute
        };
        Self {
            mode,
            timelock,
            delay: U256::from(decision.delay_seconds),
            call,
        }
    }

    pub fn operation_id(&self) -> B256 {
        self.call.operation_id()
    }
}

impl Action for TimelockAction {
    fn target(&self) -> Address {
        self.timelock
    }

    // execute forwards the call's value to the target
    fn value(&self) -> U256 {
        match self.mode {
            Mode::Schedule => U256::ZERO,
            Mode::Execute => self.call.value,
        }
    }

    fn data(&self) -> Bytes {
        let call = &self.call;
        let tx_data = match self.mode {
            Mode::Schedule => Timelock::scheduleCall::new((
                call.target,
                call.value,
                call.data.clone(),
                call.predecessor,
                call.salt,
                self.delay,
            ))
            .abi_encode(),
            Mode::Execute => Timelock::executeCall::new((
                call.target,
                call.value,
                call.data.clone(),
                call.predecessor,
                call.salt,
            ))
            .abi_encode(),
        };

        Bytes::from(tx_data)
    }

    fn describe(&self) -> Value {
        match self.mode {
            Mode::Schedule => {
                json!({
                    "action": "Schedule",
                    "timelock": self.timelock.to_string(),
                    "delay": self.delay.to_string(),
                    "inner": self.call.describe(),
                })
            }
            Mode::Execute => {
                json!({
                    "action": "Execute",
                    "timelock": self.timelock.to_string(),
                    "inner": self.call.describe(),
                })
            }
        }
    }
}
