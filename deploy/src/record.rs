use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::shared::Network;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub contract: String,
    pub address: String,
    pub transaction_hash: String,
    pub deployer: String,
    pub network: String,
    pub deployed_at: DateTime<Utc>,
}

/// Latest deployment of each contract, one JSON file per contract under
/// `<root>/<network>/`.
#[derive(Debug, Clone)]
pub struct DeploymentStore {
    dir: PathBuf,
}

impl DeploymentStore {
    pub fn new(root: impl AsRef<Path>, network: Network) -> Self {
        DeploymentStore {
            dir: root.as_ref().join(network.name()),
        }
    }

    pub fn path(&self, contract: &str) -> PathBuf {
        self.dir.join(format!("{contract}.json"))
    }

    /// Overwrites any earlier record of the same contract.
    pub fn save(&self, record: &DeploymentRecord) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(&record.contract);
        fs::write(&path, serde_json::to_string_pretty(record)?)?;
        log::debug!("recorded {} deployment at {}", record.contract, path.display());
        Ok(path)
    }

    pub fn load(&self, contract: &str) -> Result<Option<DeploymentRecord>> {
        match fs::read_to_string(self.path(contract)) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
