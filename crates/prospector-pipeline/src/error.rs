//! Error types for pipeline runs

use thiserror::Error;

/// User-facing message when no company survives selection
pub const NO_CANDIDATES_MESSAGE: &str = "企業が見つかりませんでした。検索条件を変更してください。";

/// Errors that can end a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Nothing to prospect
    #[error("{}", NO_CANDIDATES_MESSAGE)]
    NoCandidates,

    /// Criteria rejected before the run started
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    /// Job store error
    #[error("Storage error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export rendering failed
    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),

    /// The run panicked
    #[error("Unexpected error: {0}")]
    Panicked(String),
}
