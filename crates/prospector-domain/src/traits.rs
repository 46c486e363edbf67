//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{JobId, SearchJob, StatusUpdate};

/// One organic search result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHit {
    /// Result title
    pub title: String,
    /// Target URL
    pub url: String,
    /// Result snippet
    pub snippet: String,
}

/// Plain-text view of a fetched page or search result page
///
/// Sources strip markup before handing text over; extractors never see HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Visible text
    pub text: String,
    /// Hyperlink targets, in document order
    pub links: Vec<String>,
    /// Structured results when the page is a search page
    pub hits: Vec<SearchHit>,
}

impl Page {
    /// A page with text only
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// True when the page carries no usable text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Trait for retrieving page text and search results
///
/// Implemented by the infrastructure layer (prospector-fetch). Failures are
/// expected and routine; callers treat them as "no data".
pub trait PageSource {
    /// Error type for retrieval operations
    type Error: std::fmt::Display;

    /// Fetch a page by URL
    fn fetch_page(&self, url: &str) -> Result<Page, Self::Error>;

    /// Run a web search query
    fn search(&self, query: &str) -> Result<Page, Self::Error>;
}

/// Trait for persisting search jobs
///
/// Implemented by the infrastructure layer (prospector-store). Methods take
/// `&self` so a store can be shared between request handlers and workers.
pub trait JobStore {
    /// Error type for store operations
    type Error;

    /// Create a pending job and return its identifier
    fn create_job(&self, conditions: &str, requested_count: usize) -> Result<JobId, Self::Error>;

    /// Apply a status change; illegal transitions are rejected
    fn set_status(&self, id: JobId, update: StatusUpdate) -> Result<(), Self::Error>;

    /// Get a job by ID
    fn get_job(&self, id: JobId) -> Result<Option<SearchJob>, Self::Error>;

    /// Most recent jobs first, at most `limit`
    fn list_jobs(&self, limit: usize) -> Result<Vec<SearchJob>, Self::Error>;
}
