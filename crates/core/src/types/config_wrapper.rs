use alloy::primitives::Address;
use eyre::{Result, eyre};
use serde::Deserialize;
use std::{env, fs};
use toml::Value;

use crate::utils::parse::{parse_address, parse_optional_address};

/// Raw `[contracts]` section, before `env:` indirection is resolved.
#[derive(Deserialize, Debug, Default)]
struct ContractsSection {
    gas_tank: Option<String>,
    timelock: Option<String>,
    payee: Option<String>,
}

pub struct ConfigWrapper {
    raw_config: Value,
}

impl ConfigWrapper {
    pub fn new(raw_config: Value) -> Self {
        Self { raw_config }
    }

    pub fn from_file(path: Option<&str>) -> Result<Self> {
        let path = path.unwrap_or("config.toml");
        let config_content = fs::read_to_string(path)
            .map_err(|e| eyre!("Failed to read config file {}: {}", path, e))?;
        let raw_config: Value = config_content.parse::<Value>()?;

        Ok(Self { raw_config })
    }

    /// Values of the form `env:NAME` are read from the environment variable `NAME`.
    fn resolve(value: &str) -> Result<String> {
        if let Some(env_var) = value.strip_prefix("env:") {
            env::var(env_var).map_err(|_| eyre!("Environment variable {} not set", env_var))
        } else {
            Ok(value.to_string())
        }
    }

    fn get_top_level(&self, key: &str) -> Option<&str> {
        self.raw_config.get(key).and_then(|v| v.as_str())
    }

    fn contracts(&self) -> Result<ContractsSection> {
        match self.raw_config.get("contracts") {
            Some(section) => Ok(section.clone().try_into::<ContractsSection>()?),
            None => Ok(ContractsSection::default()),
        }
    }

    pub fn get_rpc_url(&self) -> Result<String> {
        let url_str = self
            .get_top_level("rpc_url")
            .ok_or_else(|| eyre!("rpc_url not found in config"))?;
        Self::resolve(url_str)
    }

    pub fn get_private_key(&self) -> Result<Option<String>> {
        self.get_top_level("private_key")
            .map(Self::resolve)
            .transpose()
    }

    pub fn get_block_explorer_url(&self) -> Option<String> {
        self.get_top_level("block_explorer")
            .map(|url| url.trim_end_matches('/').to_string())
    }

    pub fn get_contract_address(&self, name: &str) -> Result<Address> {
        let contracts = self.contracts()?;
        let raw = match name {
            "gas_tank" => contracts.gas_tank,
            "timelock" => contracts.timelock,
            _ => None,
        }
        .ok_or_else(|| eyre!("{} address not found in config", name))?;

        Ok(parse_address(&Self::resolve(&raw)?)?)
    }

    pub fn get_payee_address(&self) -> Result<Option<Address>> {
        match self.contracts()?.payee {
            Some(raw) => Ok(parse_optional_address(&Self::resolve(&raw)?)?),
            None => Ok(None),
        }
    }
}
