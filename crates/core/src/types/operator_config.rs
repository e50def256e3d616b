use alloy::primitives::Address;
use dotenv::dotenv;
use eyre::{Result, eyre};
use log::debug;
use std::env;
use std::path::Path;

use super::config_wrapper::ConfigWrapper;
use crate::utils::parse::{parse_address, parse_optional_address};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Everything the operator tools need from outside the process.
#[derive(Clone)]
pub struct OperatorConfig {
    pub rpc_url: String,
    pub private_key: Option<String>,
    pub gas_tank: Address,
    pub timelock: Address,
    pub payee: Option<Address>,
    pub block_explorer: Option<String>,
}

// Keep key material out of logs.
impl std::fmt::Debug for OperatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorConfig")
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("gas_tank", &self.gas_tank)
            .field("timelock", &self.timelock)
            .field("payee", &self.payee)
            .field("block_explorer", &self.block_explorer)
            .finish()
    }
}

impl OperatorConfig {
    /// Loads `.env`, then reads the given TOML file. Without an explicit path,
    /// `config.toml` is used when present and the environment otherwise.
    pub fn load(path: Option<&str>) -> Result<Self> {
        dotenv().ok();

        match path {
            Some(p) => Self::from_wrapper(&ConfigWrapper::from_file(Some(p))?),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_wrapper(&ConfigWrapper::from_file(None)?)
            }
            None => {
                debug!("No {} found, reading configuration from environment", DEFAULT_CONFIG_PATH);
                Self::from_env()
            }
        }
    }

    pub fn from_wrapper(cw: &ConfigWrapper) -> Result<Self> {
        Ok(Self {
            rpc_url: cw.get_rpc_url()?,
            private_key: cw.get_private_key()?,
            gas_tank: cw.get_contract_address("gas_tank")?,
            timelock: cw.get_contract_address("timelock")?,
            payee: cw.get_payee_address()?,
            block_explorer: cw.get_block_explorer_url(),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from `RPC_URL`, `PRIVATE_KEY`, `GAS_TANK_ADDRESS`,
    /// `TIMELOCK_ADDRESS`, `PAYEE_ADDRESS` and `BLOCK_EXPLORER_URL` as
    /// returned by `lookup`. An empty `PAYEE_ADDRESS` means no payee.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required =
            |name: &str| lookup(name).ok_or_else(|| eyre!("Environment variable {} not set", name));

        Ok(Self {
            rpc_url: required("RPC_URL")?,
            private_key: lookup("PRIVATE_KEY"),
            gas_tank: parse_address(&required("GAS_TANK_ADDRESS")?)?,
            timelock: parse_address(&required("TIMELOCK_ADDRESS")?)?,
            payee: match lookup("PAYEE_ADDRESS") {
                Some(value) => parse_optional_address(&value)?,
                None => None,
            },
            block_explorer: lookup("BLOCK_EXPLORER_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
        })
    }

    pub fn payee(&self) -> Result<Address> {
        self.payee
            .ok_or_else(|| eyre!("No payee given and none configured"))
    }

    pub fn transaction_url(&self, tx_hash: &str) -> Option<String> {
        self.block_explorer
            .as_ref()
            .map(|explorer| format!("{}/tx/{}", explorer, tx_hash))
    }
}
