//! Live page source over blocking HTTP
//!
//! Exactly one attempt per URL or query. Requests are spaced by the configured
//! delay so a batch never hammers a single host.
//!
//! # Examples
//!
//! ```no_run
//! use prospector_domain::PageSource;
//! use prospector_fetch::{FetchConfig, HttpSource};
//!
//! let source = HttpSource::new(FetchConfig::default()).unwrap();
//! let page = source.search("物流 SaaS 企業 会社 代表取締役").unwrap();
//! println!("{} hits", page.hits.len());
//! ```

use crate::config::FetchConfig;
use crate::html::parse_page;
use crate::FetchError;
use prospector_domain::{Page, PageSource};
use reqwest::blocking::Client;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// [`PageSource`] backed by `reqwest::blocking`
///
/// Must not be created or used on an async runtime thread; wrap calls in
/// `spawn_blocking` when driving it from async code.
pub struct HttpSource {
    client: Client,
    config: FetchConfig,
    last_request: Mutex<Option<Instant>>,
}

impl HttpSource {
    /// Build a client from the configuration
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        config.validate().map_err(FetchError::Config)?;
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.page_timeout())
            .build()?;
        Ok(Self {
            client,
            config,
            last_request: Mutex::new(None),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Search URL for a query
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?q={}&num={}",
            self.config.search_endpoint,
            urlencoding::encode(query),
            self.config.max_search_results
        )
    }

    fn throttle(&self) -> Result<(), FetchError> {
        let mut last = self.last_request.lock().map_err(|_| FetchError::Lock)?;
        let delay = self.config.request_delay();
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < delay {
                std::thread::sleep(delay - elapsed);
            }
        }
        *last = Some(Instant::now());
        Ok(())
    }

    fn get(&self, url: &str, timeout: Duration) -> Result<Page, FetchError> {
        self.throttle()?;
        let started = Instant::now();
        let response = match self.client.get(url).timeout(timeout).send() {
            Ok(response) => response,
            Err(e) => {
                let e = FetchError::from(e);
                if e.is_timeout() {
                    warn!(url, timeout_secs = timeout.as_secs(), "Request timed out");
                }
                return Err(e);
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let page = parse_page(&body);
        debug!(
            url,
            bytes = body.len(),
            links = page.links.len(),
            hits = page.hits.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(page)
    }
}

impl PageSource for HttpSource {
    type Error = FetchError;

    fn fetch_page(&self, url: &str) -> Result<Page, Self::Error> {
        self.get(url, self.config.page_timeout())
    }

    fn search(&self, query: &str) -> Result<Page, Self::Error> {
        let url = self.search_url(query);
        self.get(&url, self.config.search_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let source = HttpSource::new(FetchConfig::impatient()).unwrap();
        let url = source.search_url("田中 太郎 site:facebook.com");
        assert_eq!(
            url,
            "https://www.google.com/search?q=%E7%94%B0%E4%B8%AD%20%E5%A4%AA%E9%83%8E%20site%3Afacebook.com&num=10"
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = FetchConfig {
            max_search_results: 0,
            ..FetchConfig::impatient()
        };
        assert!(matches!(HttpSource::new(config), Err(FetchError::Config(_))));
    }

    #[test]
    fn test_unreachable_host_is_an_error() {
        let source = HttpSource::new(FetchConfig::impatient()).unwrap();
        assert!(source.fetch_page("http://127.0.0.1:9/").is_err());
    }

    #[test]
    fn test_silent_server_times_out() {
        // Accepted by the backlog but never answered
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let config = FetchConfig {
            page_timeout_secs: 1,
            ..FetchConfig::impatient()
        };
        let source = HttpSource::new(config).unwrap();

        let err = source.fetch_page(&url).unwrap_err();
        assert!(err.is_timeout());
        assert!(!FetchError::Unavailable("offline".to_string()).is_timeout());
        drop(listener);
    }
}
