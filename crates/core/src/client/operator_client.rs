use alloy::network::{TransactionBuilder, TxSigner};
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use log::{debug, info};

use super::signer_kind::SignerKind;
use crate::actions::action::Action;
use crate::dispatch::{dispatcher, rpc_timelock::RpcTimelock, rpc_timelock::ensure_success};
use crate::types::{
    dispatch_decision::DispatchDecision, dispatch_error::DispatchError,
    operator_config::OperatorConfig, privileged_call::PrivilegedCall,
};

/// Owns the signing wallet and the RPC connection for one operator session.
pub struct OperatorClient<P> {
    provider: P,
    config: OperatorConfig,
    sender: Address,
}

/// Builds a signing client for `config`. Nothing is sent until an action is
/// submitted; hardware signers read the chain id first.
pub async fn connect(
    config: OperatorConfig,
    signer_kind: SignerKind,
) -> Result<OperatorClient<impl Provider + Clone + 'static>, DispatchError> {
    let wallet = signer_kind.build_wallet(&config).await?;
    let sender = wallet.default_signer().address();
    debug!("Using {:?} signer {}", signer_kind, sender);

    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .on_builtin(&config.rpc_url)
        .await?;

    Ok(OperatorClient::new(provider, config, sender))
}

/// A timelock handle for queries, no signer attached.
pub async fn connect_read_only(
    config: &OperatorConfig,
) -> Result<RpcTimelock<impl Provider + Clone + 'static>, DispatchError> {
    let provider = ProviderBuilder::new().on_builtin(&config.rpc_url).await?;
    Ok(RpcTimelock::new(config.timelock, provider))
}

impl<P> OperatorClient<P>
where
    P: Provider + Clone + Send + Sync + 'static,
{
    pub fn new(provider: P, config: OperatorConfig, sender: Address) -> Self {
        Self {
            provider,
            config,
            sender,
        }
    }

    pub fn address(&self) -> Address {
        self.sender
    }

    pub fn config(&self) -> &OperatorConfig {
        &self.config
    }

    pub fn gas_tank_address(&self) -> Address {
        self.config.gas_tank
    }

    pub fn timelock(&self) -> RpcTimelock<P> {
        RpcTimelock::new(self.config.timelock, self.provider.clone())
    }

    /// Sends `action` straight from the signer, bypassing the timelock.
    pub async fn send_direct(
        &self,
        action: &dyn Action,
    ) -> Result<TransactionReceipt, DispatchError> {
        if action.target() == Address::ZERO {
            return Err(DispatchError::invalid("action target is the zero address"));
        }

        let tx = TransactionRequest::default()
            .with_from(self.sender)
            .with_to(action.target())
            .with_value(action.value())
            .with_input(action.data());

        let pending = self.provider.send_transaction(tx).await?;
        info!("Transaction submitted: {}", pending.tx_hash());

        let receipt = pending.get_receipt().await?;
        ensure_success(receipt)
    }

    pub async fn dispatch(
        &self,
        call: &PrivilegedCall,
        decision: &DispatchDecision,
    ) -> Result<TransactionReceipt, DispatchError> {
        dispatcher::dispatch(&self.timelock(), call, decision).await
    }
}
