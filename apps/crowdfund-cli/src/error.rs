use crowdfund_client::{
    crowdfund_sdk::RouteError,
    ActionError, ClientError, DeployError,
};
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Deploy(#[from] DeployError),
}
