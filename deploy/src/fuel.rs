use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Utc;
use fuels::accounts::ViewOnlyAccount;
use fuels::crypto::SecretKey;
use fuels::prelude::{
    Bech32Address,
    Contract,
    ContractId,
    LoadConfiguration,
    Provider,
    TxPolicies,
    WalletUnlocked,
};
use rand::Rng;

use crate::deployer::{DeployEnvironment, DeployOptions, DeployResult};
use crate::error::{DeployError, Result};
use crate::record::{DeploymentRecord, DeploymentStore};
use crate::shared::{Config, Network};

/// Deploys compiled Sway artifacts through a fuel node and records them.
pub struct FuelEnvironment {
    network: Network,
    accounts: HashMap<String, WalletUnlocked>,
    /// Named accounts whose configured key did not parse.
    invalid_keys: BTreeSet<String>,
    artifacts_dir: PathBuf,
    store: DeploymentStore,
}

impl FuelEnvironment {
    pub fn new(
        network: Network,
        accounts: HashMap<String, WalletUnlocked>,
        artifacts_dir: impl Into<PathBuf>,
        deployments_dir: impl AsRef<Path>,
    ) -> Self {
        FuelEnvironment {
            network,
            accounts,
            invalid_keys: BTreeSet::new(),
            artifacts_dir: artifacts_dir.into(),
            store: DeploymentStore::new(deployments_dir, network),
        }
    }

    pub async fn connect(config: &Config) -> Result<Self> {
        let fuel_url = config
            .fuel_url
            .as_deref()
            .ok_or(DeployError::MissingEnv("FUEL_URL"))?;
        let provider = Provider::connect(fuel_url).await?;
        let mut accounts = HashMap::new();
        let mut invalid_keys = BTreeSet::new();
        for (name, pk) in &config.accounts {
            match SecretKey::from_str(pk) {
                Ok(secret) => {
                    let wallet = WalletUnlocked::new_from_private_key(secret, Some(provider.clone()));
                    log::debug!("named account {name}: {}", wallet.address());
                    accounts.insert(name.clone(), wallet);
                }
                Err(_) => {
                    log::debug!("ignoring {}_PK, not a private key", name.to_uppercase());
                    invalid_keys.insert(name.clone());
                }
            }
        }
        let mut env = Self::new(
            config.network,
            accounts,
            &config.artifacts_dir,
            &config.deployments_dir,
        );
        env.invalid_keys = invalid_keys;
        Ok(env)
    }

    pub fn store(&self) -> &DeploymentStore {
        &self.store
    }

    pub fn artifact_path(&self, contract: &str) -> PathBuf {
        self.artifacts_dir
            .join(contract)
            .join("out/release")
            .join(format!("{contract}.bin"))
    }

    fn wallet_of(&self, address: &Bech32Address) -> Result<&WalletUnlocked> {
        self.accounts
            .values()
            .find(|wallet| wallet.address() == address)
            .ok_or_else(|| DeployError::UnknownSender(address.to_string()))
    }
}

impl DeployEnvironment for FuelEnvironment {
    type Account = Bech32Address;

    async fn named_account(&self, name: &str) -> Result<Bech32Address> {
        if let Some(wallet) = self.accounts.get(name) {
            return Ok(wallet.address().clone());
        }
        if self.invalid_keys.contains(name) {
            return Err(DeployError::InvalidKey(name.to_string()));
        }
        Err(DeployError::UnknownAccount(name.to_string()))
    }

    async fn deploy(
        &self,
        contract: &str,
        options: DeployOptions<Bech32Address>,
    ) -> Result<DeployResult> {
        let wallet = self.wallet_of(&options.from)?;
        if !options.args.is_empty() {
            return Err(DeployError::ConstructorArgs {
                contract: contract.to_string(),
                count: options.args.len(),
            });
        }
        let path = self.artifact_path(contract);
        if !path.is_file() {
            return Err(DeployError::MissingArtifact(path));
        }

        if options.log {
            log::info!("deploying \"{contract}\" from {} ...", options.from);
        }
        let salt = rand::thread_rng().gen::<[u8; 32]>();
        let response = Contract::load_from(&path, LoadConfiguration::default())?
            .with_salt(salt)
            .deploy(wallet, TxPolicies::default())
            .await?;
        let tx_id = response
            .tx_id
            .ok_or_else(|| DeployError::NoTransactionId(contract.to_string()))?;

        if options.auto_mine && self.network.is_dev() {
            wallet.try_provider()?.produce_blocks(1, None).await?;
        }

        let result = DeployResult {
            address: format!("{:#x}", ContractId::from(response.contract_id)),
            transaction_hash: format!("{:#x}", tx_id),
        };
        if options.log {
            log::info!(
                "deployed \"{contract}\" at {} (tx: {})",
                result.address,
                result.transaction_hash,
            );
        }

        self.store.save(&DeploymentRecord {
            contract: contract.to_string(),
            address: result.address.clone(),
            transaction_hash: result.transaction_hash.clone(),
            deployer: options.from.to_string(),
            network: self.network.name().to_string(),
            deployed_at: Utc::now(),
        })?;
        Ok(result)
    }
}
