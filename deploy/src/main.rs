use std::io;

use clap::{Parser, Subcommand};
use erc20_deploy::fuel::FuelEnvironment;
use erc20_deploy::record::DeploymentStore;
use erc20_deploy::scripts::{run_script, DeployYourContract};
use erc20_deploy::shared::Config;

#[derive(Debug, Parser)]
#[command(name = "deploy")]
#[command(about = "Deploy and record the ERC20LMT202330551171 contract", long_about = None)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Whether to print debug info.
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the deploy scripts selected by tag.
    Deploy {
        /// Only run scripts carrying one of these tags.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// Print the recorded deployment of a contract.
    Show {
        contract: String,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(log_level)?;

    let config = Config::from_env()?;
    log::debug!("{:#?}", config);

    match args.command {
        Command::Deploy { tags } => {
            let env = FuelEnvironment::connect(&config).await?;
            let ran = run_script(&env, &DeployYourContract, &tags, &mut io::stdout()).await?;
            if !ran {
                log::warn!("no deploy script matched tags {:?}", tags);
            }
        }
        Command::Show { contract } => {
            let store = DeploymentStore::new(&config.deployments_dir, config.network);
            match store.load(&contract)? {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => eyre::bail!("no {} deployment recorded on {}", contract, config.network),
            }
        }
    }
    Ok(())
}
