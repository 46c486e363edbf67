//! Prospector Storage Layer
//!
//! Two interchangeable [`JobStore`] backends behind one contract:
//!
//! - [`SqliteJobStore`]: durable, one `search_history` table
//! - [`MemoryJobStore`]: process-local, for tests and throwaway runs
//!
//! The backend is chosen by [`StoreConfig`] at composition time through
//! [`open_store`].
//!
//! # Examples
//!
//! ```
//! use prospector_domain::{JobStore, StatusUpdate};
//! use prospector_store::{open_store, StoreConfig};
//!
//! let store = open_store(&StoreConfig::Memory).unwrap();
//! let id = store.create_job("業界: fintech, 売上: 30to50", 3).unwrap();
//! store.set_status(id, StatusUpdate::processing()).unwrap();
//! assert!(store.get_job(id).unwrap().is_some());
//! ```

#![warn(missing_docs)]

mod memory;
mod sqlite;

pub use memory::MemoryJobStore;
pub use sqlite::SqliteJobStore;

use prospector_domain::{JobId, JobStatus, JobStore};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Result rows could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Job not found
    #[error("Job not found: {0}")]
    NotFound(JobId),

    /// Status change not allowed by the job lifecycle
    #[error("Job {id}: cannot move from {from} to {to}")]
    InvalidTransition {
        /// Job concerned
        id: JobId,
        /// Current status
        from: JobStatus,
        /// Requested status
        to: JobStatus,
    },

    /// Stored data does not decode
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Internal lock poisoned
    #[error("Store lock poisoned")]
    Lock,
}

/// A job store shared across threads
pub type SharedJobStore = Arc<dyn JobStore<Error = StoreError> + Send + Sync>;

/// Default database file
pub const DEFAULT_DB_PATH: &str = "sales_bot.db";

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

/// Which backend to open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Process-local, lost on exit
    Memory,
    /// SQLite database file
    Sqlite {
        /// Database path
        #[serde(default = "default_db_path")]
        path: PathBuf,
    },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Sqlite {
            path: default_db_path(),
        }
    }
}

/// Open the configured backend
pub fn open_store(config: &StoreConfig) -> Result<SharedJobStore, StoreError> {
    match config {
        StoreConfig::Memory => {
            info!("Using in-memory job store");
            Ok(Arc::new(MemoryJobStore::new()))
        }
        StoreConfig::Sqlite { path } => {
            info!(path = %path.display(), "Opening SQLite job store");
            Ok(Arc::new(SqliteJobStore::new(path)?))
        }
    }
}
