use alloy::primitives::{Address, B256, Bytes, U256};
use async_trait::async_trait;

use crate::types::{dispatch_error::DispatchError, operation_state::OperationState};

/// The governance collaborator a privileged call is dispatched to.
#[async_trait]
pub trait TimelockClient: Send + Sync {
    type Receipt: Send;

    fn address(&self) -> Address;

    async fn schedule(
        &self,
        target: Address,
        value: U256,
        data: Bytes,
        predecessor: B256,
        salt: B256,
        delay: U256,
    ) -> Result<Self::Receipt, DispatchError>;

    async fn execute(
        &self,
        target: Address,
        value: U256,
        data: Bytes,
        predecessor: B256,
        salt: B256,
    ) -> Result<Self::Receipt, DispatchError>;

    async fn min_delay(&self) -> Result<U256, DispatchError>;

    async fn operation_state(&self, id: B256) -> Result<OperationState, DispatchError>;
}
