//! Prospector Fetch Layer
//!
//! [`PageSource`] implementations for the lead pipeline.
//!
//! # Sources
//!
//! - [`HttpSource`]: live company sites and a search endpoint
//! - [`OfflineSource`]: never has data; every company falls back to synthetic facts
//! - [`StaticSource`]: canned fixtures for tests
//!
//! [`Source`] picks one at composition time so callers can hold a single
//! concrete type.

#![warn(missing_docs)]

mod config;
mod fixture;
pub mod html;
pub mod http;

pub use config::{FetchConfig, DEFAULT_SEARCH_ENDPOINT, DEFAULT_USER_AGENT};
pub use fixture::{OfflineSource, StaticSource};
pub use http::HttpSource;

use prospector_domain::{Page, PageSource};
use thiserror::Error;

/// Errors that can occur while retrieving pages
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, including timeouts
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP {status} for {url}")]
    Status {
        /// Requested URL
        url: String,
        /// Status code
        status: u16,
    },

    /// No data available from this source
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// Invalid fetch configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Internal lock poisoned
    #[error("Lock poisoned")]
    Lock,
}

impl FetchError {
    /// True when the request ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Http(e) if e.is_timeout())
    }
}

/// The page source chosen for a run
pub enum Source {
    /// Live HTTP
    Http(HttpSource),
    /// No network
    Offline(OfflineSource),
    /// Fixtures
    Static(StaticSource),
}

impl Source {
    /// Live source when `offline` is false, otherwise [`OfflineSource`]
    pub fn from_config(config: &FetchConfig, offline: bool) -> Result<Self, FetchError> {
        if offline {
            return Ok(Source::Offline(OfflineSource));
        }
        Ok(Source::Http(HttpSource::new(config.clone())?))
    }

    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Http(_) => "http",
            Source::Offline(_) => "offline",
            Source::Static(_) => "static",
        }
    }
}

impl From<StaticSource> for Source {
    fn from(source: StaticSource) -> Self {
        Source::Static(source)
    }
}

impl PageSource for Source {
    type Error = FetchError;

    fn fetch_page(&self, url: &str) -> Result<Page, Self::Error> {
        match self {
            Source::Http(source) => source.fetch_page(url),
            Source::Offline(source) => source.fetch_page(url),
            Source::Static(source) => source.fetch_page(url),
        }
    }

    fn search(&self, query: &str) -> Result<Page, Self::Error> {
        match self {
            Source::Http(source) => source.search(query),
            Source::Offline(source) => source.search(query),
            Source::Static(source) => source.search(query),
        }
    }
}
