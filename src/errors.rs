use std::result::Result as StdResult;

use mfuko_config::ConfigError;
use mfuko_core::CoreError;
use mfuko_domain::TagParseError;
use thiserror::Error;

/// Unified error type for data loading, configuration and backend calls.
#[derive(Error, Debug)]
pub enum MfukoError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Data source error: {0}")]
    DataSource(String),
    #[error(transparent)]
    Tag(#[from] TagParseError),
}

pub type Result<T> = StdResult<T, MfukoError>;

impl From<std::io::Error> for MfukoError {
    fn from(err: std::io::Error) -> Self {
        MfukoError::DataSource(err.to_string())
    }
}

impl From<serde_json::Error> for MfukoError {
    fn from(err: serde_json::Error) -> Self {
        MfukoError::DataSource(err.to_string())
    }
}

impl From<ConfigError> for MfukoError {
    fn from(err: ConfigError) -> Self {
        MfukoError::Config(err.to_string())
    }
}
