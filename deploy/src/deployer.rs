use std::fmt;

use crate::error::Result;

/// Named account that pays for and submits deployments.
pub const DEPLOYER: &str = "deployer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions<A> {
    pub from: A,
    pub args: Vec<String>,
    /// Whether the framework itself logs the deployment.
    pub log: bool,
    /// Produce one extra block once the deployment has committed, on
    /// development networks only. Fuel nodes already commit the create
    /// transaction before `deploy` returns, so this only moves the dev
    /// chain forward for whatever runs next.
    pub auto_mine: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployResult {
    pub address: String,
    pub transaction_hash: String,
}

/// Execution context handed to deploy scripts.
///
/// Implementations resolve named accounts and submit contract-creation
/// transactions, recording every successful deployment. Errors from either
/// operation are returned unchanged to the script, which never retries.
#[allow(async_fn_in_trait)]
pub trait DeployEnvironment {
    type Account: fmt::Display + fmt::Debug + Clone;

    async fn named_account(&self, name: &str) -> Result<Self::Account>;

    async fn deploy(
        &self,
        contract: &str,
        options: DeployOptions<Self::Account>,
    ) -> Result<DeployResult>;
}
