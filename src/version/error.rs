use thiserror::Error;

use crate::version::date_format::DateFormat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("Invalid date format: {format}. Supported formats: {}", DateFormat::supported_list())]
    InvalidDateFormat { format: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Strategy(#[from] StrategyError),
}
