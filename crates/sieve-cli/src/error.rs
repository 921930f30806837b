use crate::utils::parser::ParseError;
use stoichsieve::engine::config::ConfigError;
use stoichsieve::engine::error::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    Argument(#[from] ParseError),

    #[error(
        "No Materials Project API key available. Pass --api-key or set the MP_API_KEY environment variable."
    )]
    MissingApiKey,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
