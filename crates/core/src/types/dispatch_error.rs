use alloy::contract::Error as ContractError;
use alloy::providers::PendingTransactionError;
use alloy::transports::{RpcError, TransportError};
use thiserror::Error;

/// Failure surfaced by anything that talks to the GasTank or the timelock.
///
/// Nothing is retried or recovered locally. A JSON-RPC error response is how a
/// node reports a revert during gas estimation or submission, so it becomes a
/// [`DispatchError::RemoteRejection`] carrying the node's message. Every other
/// transport failure is a [`DispatchError::Transport`].
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("remote rejection: {reason}")]
    RemoteRejection { reason: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("signer error: {0}")]
    Signer(String),
}

impl DispatchError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        DispatchError::RemoteRejection {
            reason: reason.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        DispatchError::InvalidInput(message.into())
    }
}

impl From<TransportError> for DispatchError {
    fn from(err: TransportError) -> Self {
        match err {
            RpcError::ErrorResp(payload) => DispatchError::rejected(payload.message.to_string()),
            other => DispatchError::Transport(other.to_string()),
        }
    }
}

impl From<PendingTransactionError> for DispatchError {
    fn from(err: PendingTransactionError) -> Self {
        match err {
            PendingTransactionError::TransportError(err) => err.into(),
            other => DispatchError::Transport(other.to_string()),
        }
    }
}

impl From<ContractError> for DispatchError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::TransportError(err) => err.into(),
            ContractError::PendingTransactionError(err) => err.into(),
            // Decoding failures mean the target answered with something other
            // than the declared ABI, e.g. no code at the address.
            other => DispatchError::rejected(other.to_string()),
        }
    }
}
