//! Error types for the CLI application.

use prospector_fetch::FetchError;
use prospector_pipeline::PipelineError;
use prospector_store::StoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pipeline error
    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    /// Job store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Page source could not be created
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested job or result does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A saved search job ended in failure
    #[error("Job {id} failed: {message}")]
    JobFailed {
        /// Job ID
        id: i64,
        /// Stored failure message
        message: String,
    },

    /// Background task failed to complete
    #[error("Task error: {0}")]
    Task(String),
}
