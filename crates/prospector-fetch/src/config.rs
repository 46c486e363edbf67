//! Configuration for page retrieval

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Browser-like agent string sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default search endpoint
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Configuration for [`HttpSource`](crate::HttpSource)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout for a company page fetch (seconds)
    #[serde(default = "default_timeout_secs")]
    pub page_timeout_secs: u64,

    /// Timeout for a search request (seconds)
    #[serde(default = "default_timeout_secs")]
    pub search_timeout_secs: u64,

    /// Minimum gap between two requests (milliseconds)
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Search endpoint; the query is sent as `q`, the result count as `num`
    #[serde(default = "default_search_endpoint")]
    pub search_endpoint: String,

    /// Results requested per search
    #[serde(default = "default_max_search_results")]
    pub max_search_results: usize,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_request_delay_ms() -> u64 {
    2000
}

fn default_search_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

fn default_max_search_results() -> usize {
    10
}

impl FetchConfig {
    /// Page fetch timeout as a Duration
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    /// Search timeout as a Duration
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    /// Request spacing as a Duration
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.page_timeout_secs == 0 {
            return Err("page_timeout_secs must be greater than 0".to_string());
        }
        if self.search_timeout_secs == 0 {
            return Err("search_timeout_secs must be greater than 0".to_string());
        }
        if self.max_search_results == 0 {
            return Err("max_search_results must be greater than 0".to_string());
        }
        let endpoint = &self.search_endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(format!("search_endpoint is not an http(s) URL: {}", self.search_endpoint));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            page_timeout_secs: default_timeout_secs(),
            search_timeout_secs: default_timeout_secs(),
            request_delay_ms: default_request_delay_ms(),
            search_endpoint: default_search_endpoint(),
            max_search_results: default_max_search_results(),
        }
    }
}

impl FetchConfig {
    /// Impatient preset: short timeouts and no spacing between requests
    pub fn impatient() -> Self {
        Self {
            page_timeout_secs: 3,
            search_timeout_secs: 5,
            request_delay_ms: 0,
            ..Self::default()
        }
    }
}
