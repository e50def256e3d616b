pub mod actions {
    pub mod action;
    pub mod add_payee_action;
    pub mod approve_payee_action;
    pub mod deposit_gas_action;
    pub mod emergency_withdraw_action;
    pub mod pay_action;
    pub mod remove_payee_action;
    pub mod timelock_action;
    pub mod withdraw_gas_action;
}

pub mod bindings {
    pub mod gas_tank;
    pub mod timelock;
}

pub mod client {
    pub mod operator_client;
    pub mod signer_kind;
}

pub mod dispatch {
    pub mod dispatcher;
    pub mod rpc_timelock;
    pub mod timelock_client;
}

pub mod types {
    pub mod config_wrapper;
    pub mod dispatch_decision;
    pub mod dispatch_error;
    pub mod operation_state;
    pub mod operator_config;
    pub mod privileged_call;
    pub mod salt_policy;
}

pub mod utils {
    pub mod parse;
}

pub use client::operator_client::{OperatorClient, connect, connect_read_only};
pub use client::signer_kind::SignerKind;
pub use dispatch::dispatcher::{dispatch, preview};
pub use dispatch::timelock_client::TimelockClient;
pub use types::{
    dispatch_decision::DispatchDecision, dispatch_error::DispatchError,
    operation_state::OperationState, operator_config::OperatorConfig,
    privileged_call::PrivilegedCall, salt_policy::SaltPolicy,
};
