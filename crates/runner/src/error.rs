use thiserror::Error;

use common::error::Error as QpError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Potential processing error: {0}")]
    QpError(#[from] QpError),
}
