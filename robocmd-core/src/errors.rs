use robocmd_hal::HalError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = anyhow::Result<T>;

#[derive(Error, Debug)]
pub enum RoboError {
    #[error(transparent)]
    Hal(#[from] HalError),

    #[error("Failed to read profile {path}: {source}")]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse profile {path}: {source}")]
    ProfileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
