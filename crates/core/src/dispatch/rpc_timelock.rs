use alloy::primitives::{Address, B256, Bytes, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionReceipt;
use async_trait::async_trait;
use log::{debug, info};

use super::timelock_client::TimelockClient;
use crate::bindings::timelock::Timelock;
use crate::types::{dispatch_error::DispatchError, operation_state::OperationState};

/// Timelock reached through an `alloy` provider. Transactions are signed by
/// whatever wallet the provider was built with.
pub struct RpcTimelock<P> {
    address: Address,
    provider: P,
}

impl<P> RpcTimelock<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self { address, provider }
    }
}

/// A mined transaction that reverted is a rejection, not a success.
pub fn ensure_success(receipt: TransactionReceipt) -> Result<TransactionReceipt, DispatchError> {
    if receipt.status() {
        Ok(receipt)
    } else {
        Err(DispatchError::rejected(format!(
            "transaction {} reverted",
            receipt.transaction_hash
        )))
    }
}

#[async_trait]
impl<P> TimelockClient for RpcTimelock<P>
where
    P: Provider + Clone + Send + Sync + 'static,
{
    type Receipt = TransactionReceipt;

    fn address(&self) -> Address {
        self.address
    }

    async fn schedule(
        &self,
        target: Address,
        value: U256,
        data: Bytes,
        predecessor: B256,
        salt: B256,
        delay: U256,
    ) -> Result<TransactionReceipt, DispatchError> {
        let timelock = Timelock::new(self.address, self.provider.clone());
        let pending = timelock
            .schedule(target, value, data, predecessor, salt, delay)
            .send()
            .await?;
        info!("Schedule submitted: {}", pending.tx_hash());

        let receipt = pending.get_receipt().await?;
        debug!("Schedule mined in block {:?}", receipt.block_number);
        ensure_success(receipt)
    }

    async fn execute(
        &self,
        target: Address,
        value: U256,
        data: Bytes,
        predecessor: B256,
        salt: B256,
    ) -> Result<TransactionReceipt, DispatchError> {
        let timelock = Timelock::new(self.address, self.provider.clone());
        let pending = timelock
            .execute(target, value, data, predecessor, salt)
            .value(value)
            .send()
            .await?;
        info!("Execute submitted: {}", pending.tx_hash());

        let receipt = pending.get_receipt().await?;
        debug!("Execute mined in block {:?}", receipt.block_number);
        ensure_success(receipt)
    }

    async fn min_delay(&self) -> Result<U256, DispatchError> {
        let timelock = Timelock::new(self.address, self.provider.clone());
        Ok(timelock.getMinDelay().call().await?.delay)
    }

    async fn operation_state(&self, id: B256) -> Result<OperationState, DispatchError> {
        let timelock = Timelock::new(self.address, self.provider.clone());
        let done = timelock.isOperationDone(id).call().await?.done;
        let ready = timelock.isOperationReady(id).call().await?.ready;
        let pending = timelock.isOperationPending(id).call().await?.pending;

        Ok(OperationState::from_flags(pending, ready, done))
    }
}
