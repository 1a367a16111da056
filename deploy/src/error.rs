use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("missing env var {0}")]
    MissingEnv(&'static str),
    #[error("invalid .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("invalid network: {0}, must be local, testnet or mainnet")]
    InvalidNetwork(String),
    #[error("invalid private key for named account `{0}`")]
    InvalidKey(String),
    #[error("no named account `{0}` configured")]
    UnknownAccount(String),
    #[error("sender {0} is not a configured account")]
    UnknownSender(String),
    #[error("contract {contract} takes no constructor arguments, got {count}")]
    ConstructorArgs { contract: String, count: usize },
    #[error("contract artifact not found: {}", .0.display())]
    MissingArtifact(PathBuf),
    #[error("deployment of {0} returned no transaction id")]
    NoTransactionId(String),
    #[error("fuel error: {0}")]
    Fuel(#[from] fuels::types::errors::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = DeployError> = std::result::Result<T, E>;
