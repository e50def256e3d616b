use alloy::network::EthereumWallet;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::ledger::{HDPath, LedgerSigner};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::trezor::{TrezorHDPath, TrezorSigner};
use log::debug;

use crate::types::{dispatch_error::DispatchError, operator_config::OperatorConfig};

/// Where transaction signatures come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignerKind {
    #[default]
    PrivateKey,
    Trezor,
    Ledger,
}

async fn read_chain_id(rpc_url: &str) -> Result<u64, DispatchError> {
    let provider = ProviderBuilder::new().on_builtin(rpc_url).await?;
    Ok(provider.get_chain_id().await?)
}

pub fn private_key_signer(key: &str) -> Result<PrivateKeySigner, DispatchError> {
    key.trim()
        .trim_start_matches("0x")
        .parse::<PrivateKeySigner>()
        .map_err(|e| DispatchError::invalid(format!("malformed private key: {e}")))
}

impl SignerKind {
    pub async fn build_wallet(&self, config: &OperatorConfig) -> Result<EthereumWallet, DispatchError> {
        match self {
            SignerKind::PrivateKey => {
                let key = config
                    .private_key
                    .as_deref()
                    .ok_or_else(|| DispatchError::invalid("no private key configured"))?;
                Ok(EthereumWallet::from(private_key_signer(key)?))
            }
            SignerKind::Trezor => {
                let chain_id = read_chain_id(&config.rpc_url).await?;
                debug!("Connecting to Trezor for chain {}", chain_id);
                let signer = TrezorSigner::new(TrezorHDPath::TrezorLive(0), Some(chain_id))
                    .await
                    .map_err(|e| DispatchError::Signer(e.to_string()))?;
                Ok(EthereumWallet::from(signer))
            }
            SignerKind::Ledger => {
                let chain_id = read_chain_id(&config.rpc_url).await?;
                debug!("Connecting to Ledger for chain {}", chain_id);
                let signer = LedgerSigner::new(HDPath::LedgerLive(0), Some(chain_id))
                    .await
                    .map_err(|e| DispatchError::Signer(e.to_string()))?;
                Ok(EthereumWallet::from(signer))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    // Well known development key, account 0 of the default test mnemonic.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_private_key_signer() {
        let signer = private_key_signer(DEV_KEY).unwrap();
        assert_eq!(
            signer.address(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );

        let unprefixed = private_key_signer(DEV_KEY.trim_start_matches("0x")).unwrap();
        assert_eq!(unprefixed.address(), signer.address());
    }

    #[test]
    fn test_malformed_private_key() {
        assert!(matches!(
            private_key_signer("0x1234"),
            Err(DispatchError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_private_key() {
        let config = OperatorConfig {
            rpc_url: "http://127.0.0.1:1".to_string(),
            private_key: None,
            gas_tank: address!("0xCfbCCC95E48D481128783Fa962a1828f47Fc8A42"),
            timelock: address!("0x1111111111111111111111111111111111111111"),
            payee: None,
            block_explorer: None,
        };

        assert!(matches!(
            SignerKind::PrivateKey.build_wallet(&config).await,
            Err(DispatchError::InvalidInput(_))
        ));
    }
}
