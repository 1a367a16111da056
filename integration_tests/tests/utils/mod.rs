use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use erc20_deploy::deployer::{DeployEnvironment, DeployOptions, DeployResult};
use erc20_deploy::error::{DeployError, Result};
use fuels::prelude::*;
use maplit::hashmap;

pub const DEPLOYER_ADDRESS: &str = "fuel1deployer0000000000000000000000000000000000000000000000000";

/// In-memory deploy framework that records every call it receives.
pub struct MockEnvironment {
    accounts: HashMap<String, String>,
    fail_deploy: bool,
    pub resolved: Mutex<Vec<String>>,
    pub deployments: Mutex<Vec<(String, DeployOptions<String>)>>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self::with_accounts(hashmap! {
            "deployer".to_string() => DEPLOYER_ADDRESS.to_string(),
        })
    }

    pub fn with_accounts(accounts: HashMap<String, String>) -> Self {
        MockEnvironment {
            accounts,
            fail_deploy: false,
            resolved: Mutex::new(vec![]),
            deployments: Mutex::new(vec![]),
        }
    }

    pub fn failing_deploy(mut self) -> Self {
        self.fail_deploy = true;
        self
    }

    pub fn deploy_calls(&self) -> Vec<(String, DeployOptions<String>)> {
        self.deployments.lock().unwrap().clone()
    }

    pub fn result_for(n: usize) -> DeployResult {
        DeployResult {
            address: format!("0x{:064x}", 0xc0de + n),
            transaction_hash: format!("0x{:064x}", 0xbeef + n),
        }
    }
}

impl DeployEnvironment for MockEnvironment {
    type Account = String;

    async fn named_account(&self, name: &str) -> Result<String> {
        self.resolved.lock().unwrap().push(name.to_string());
        self.accounts
            .get(name)
            .cloned()
            .ok_or_else(|| DeployError::UnknownAccount(name.to_string()))
    }

    async fn deploy(&self, contract: &str, options: DeployOptions<String>) -> Result<DeployResult> {
        let mut deployments = self.deployments.lock().unwrap();
        deployments.push((contract.to_string(), options));
        if self.fail_deploy {
            return Err(io::Error::other("insufficient funds for gas").into());
        }
        Ok(Self::result_for(deployments.len()))
    }
}

pub async fn get_local_wallets() -> (WalletUnlocked, WalletUnlocked) {
    let wallets = launch_custom_provider_and_get_wallets(
        WalletsConfig::new(Some(2), Some(1), Some(1_000_000_000)),
        None,
        None,
    )
        .await
        .unwrap();
    (wallets[0].clone(), wallets[1].clone())
}

pub fn output_lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Writes a zeroed placeholder bytecode where the deployer expects the
/// compiled contract.
pub fn write_artifact(artifacts: &Path, contract: &str) {
    let dir = artifacts.join(contract).join("out/release");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{contract}.bin")), [0u8; 64]).unwrap();
}

pub fn is_hex_id(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .map_or(false, |hex| hex.len() == 64 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
