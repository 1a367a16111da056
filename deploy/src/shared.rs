use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use dotenvy::dotenv;

use crate::error::{DeployError, Result};

const KEY_SUFFIX: &str = "_PK";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Local,
    Testnet,
    Mainnet,
}

impl Network {
    pub fn name(&self) -> &str {
        match self {
            Network::Local => "local",
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
        }
    }

    /// Development networks accept manual block production.
    pub fn is_dev(&self) -> bool {
        matches!(self, Network::Local)
    }
}

impl FromStr for Network {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(Network::Local),
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            _ => Err(DeployError::InvalidNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone)]
pub struct Config {
    /// Only needed to connect, `show` works without it.
    pub fuel_url: Option<String>,
    pub network: Network,
    /// Named account -> private key.
    pub accounts: BTreeMap<String, String>,
    pub artifacts_dir: PathBuf,
    pub deployments_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("fuel_url", &self.fuel_url)
            .field("network", &self.network)
            .field("accounts", &self.accounts.keys().collect::<Vec<_>>())
            .field("artifacts_dir", &self.artifacts_dir)
            .field("deployments_dir", &self.deployments_dir)
            .finish()
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Config> {
        if let Some(path) = ignore_missing(dotenv())? {
            log::debug!("loaded {}", path.display());
        }
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Result<Config>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut fuel_url = None;
        let mut network = Network::Local;
        let mut accounts = BTreeMap::new();
        let mut artifacts_dir = PathBuf::from("..");
        let mut deployments_dir = PathBuf::from("deployments");

        for (key, value) in vars {
            let key = key.as_ref();
            let value: String = value.into();
            match key {
                "FUEL_URL" => fuel_url = Some(value),
                "NETWORK" => network = value.parse()?,
                "ARTIFACTS_DIR" => artifacts_dir = PathBuf::from(value),
                "DEPLOYMENTS_DIR" => deployments_dir = PathBuf::from(value),
                _ => {
                    if let Some(name) = key.strip_suffix(KEY_SUFFIX).filter(|n| !n.is_empty()) {
                        accounts.insert(name.to_lowercase(), value);
                    }
                }
            }
        }

        Ok(Config {
            fuel_url,
            network,
            accounts,
            artifacts_dir,
            deployments_dir,
        })
    }
}

/// A missing `.env` is fine, a broken one is not.
fn ignore_missing<T>(loaded: std::result::Result<T, dotenvy::Error>) -> Result<Option<T>> {
    match loaded {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err.into()),
    }
}
