use std::io::Write;

use crate::deployer::{DeployEnvironment, DeployOptions, DEPLOYER};
use crate::error::Result;
use crate::scripts::DeployScript;

pub const CONTRACT_NAME: &str = "ERC20LMT202330551171";

/// Deploys the ERC20LMT202330551171 token from the `deployer` account.
pub struct DeployYourContract;

impl DeployScript for DeployYourContract {
    fn name(&self) -> &'static str {
        "00_deploy_your_contract"
    }

    fn tags(&self) -> &'static [&'static str] {
        &[CONTRACT_NAME]
    }

    async fn run<E: DeployEnvironment>(&self, env: &E, out: &mut impl Write) -> Result<()> {
        let deployer = env.named_account(DEPLOYER).await?;

        let erc20 = env
            .deploy(
                CONTRACT_NAME,
                DeployOptions {
                    from: deployer.clone(),
                    args: vec![],
                    log: true,
                    auto_mine: true,
                },
            )
            .await?;

        writeln!(out, "==================================================")?;
        writeln!(out, "🎉 {CONTRACT_NAME} contract deployed successfully!")?;
        writeln!(out, "📝 Contract address: {}", erc20.address)?;
        writeln!(out, "🔗 Transaction hash: {}", erc20.transaction_hash)?;
        writeln!(out, "👤 Deployer: {}", deployer)?;
        Ok(())
    }
}
