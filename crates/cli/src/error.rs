//! CLI error types.

use thiserror::Error;

/// CLI errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration file could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// An error occurred in the endpoint layer.
    #[error(transparent)]
    Endpoint(#[from] endpoint::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
