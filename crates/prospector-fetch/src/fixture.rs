//! In-process page sources: offline and canned

use crate::FetchError;
use prospector_domain::{Page, PageSource};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

/// Source that never has data
///
/// Every call fails with [`FetchError::Unavailable`], which drives the
/// pipeline onto snippet facts and synthetic keymen.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

impl PageSource for OfflineSource {
    type Error = FetchError;

    fn fetch_page(&self, url: &str) -> Result<Page, Self::Error> {
        Err(FetchError::Unavailable(format!("offline: {}", url)))
    }

    fn search(&self, query: &str) -> Result<Page, Self::Error> {
        Err(FetchError::Unavailable(format!("offline: {}", query)))
    }
}

/// Canned pages and search results for tests and demos
///
/// Clones share the same fixtures and call counter.
///
/// # Examples
///
/// ```
/// use prospector_domain::{Page, PageSource};
/// use prospector_fetch::StaticSource;
///
/// let mut source = StaticSource::new();
/// source.add_page("https://a.example", Page::from_text("代表取締役 山田太郎"));
/// assert!(source.fetch_page("https://a.example").is_ok());
/// assert!(source.fetch_page("https://b.example").is_err());
/// assert_eq!(source.call_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pages: Arc<Mutex<HashMap<String, Page>>>,
    searches: Arc<Mutex<HashMap<String, Page>>>,
    errors: Arc<Mutex<HashSet<String>>>,
    call_count: Arc<Mutex<usize>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl StaticSource {
    /// An empty source; every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `page` for `url`
    pub fn add_page(&mut self, url: impl Into<String>, page: Page) {
        lock(&self.pages).insert(url.into(), page);
    }

    /// Serve `page` for the exact `query`
    pub fn add_search(&mut self, query: impl Into<String>, page: Page) {
        lock(&self.searches).insert(query.into(), page);
    }

    /// Fail with [`FetchError::Status`] for a URL or query
    pub fn add_error(&mut self, key: impl Into<String>) {
        lock(&self.errors).insert(key.into());
    }

    /// Number of fetches and searches served or refused
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }

    fn lookup(&self, table: &Mutex<HashMap<String, Page>>, key: &str) -> Result<Page, FetchError> {
        *lock(&self.call_count) += 1;
        if lock(&self.errors).contains(key) {
            return Err(FetchError::Status {
                url: key.to_string(),
                status: 500,
            });
        }
        lock(table)
            .get(key)
            .cloned()
            .ok_or_else(|| FetchError::Unavailable(format!("no fixture for {}", key)))
    }
}

impl PageSource for StaticSource {
    type Error = FetchError;

    fn fetch_page(&self, url: &str) -> Result<Page, Self::Error> {
        self.lookup(&self.pages, url)
    }

    fn search(&self, query: &str) -> Result<Page, Self::Error> {
        self.lookup(&self.searches, query)
    }
}
