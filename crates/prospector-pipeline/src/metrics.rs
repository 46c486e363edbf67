//! Metrics collected during a pipeline run

use std::time::Duration;

/// Counters for one run
///
/// Tracks where each company's facts and keymen came from, so an operator
/// can tell a live run from one that fell back to synthetic data throughout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunMetrics {
    /// Companies processed
    pub companies: usize,
    /// Companies whose facts came from a fetched page
    pub page_facts: usize,
    /// Companies whose facts came from the snippet alone
    pub snippet_facts: usize,
    /// Keymen found in page or search text
    pub extracted_keymen: usize,
    /// Keymen produced by the synthetic generator
    pub synthetic_keymen: usize,
    /// Fetches and searches attempted
    pub requests: usize,
    /// Fetches and searches that failed
    pub failed_requests: usize,
    /// Social profile URLs found
    pub profiles_found: usize,
    /// Output rows
    pub rows: usize,
    /// Wall-clock run time
    pub elapsed: Duration,
}

impl RunMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fetch or search and whether it succeeded
    pub fn record_request(&mut self, ok: bool) {
        self.requests += 1;
        if !ok {
            self.failed_requests += 1;
        }
    }

    /// Record a described company
    pub fn record_company(&mut self, from_page: bool) {
        self.companies += 1;
        if from_page {
            self.page_facts += 1;
        } else {
            self.snippet_facts += 1;
        }
    }

    /// Record keymen kept for a company
    pub fn record_keymen(&mut self, extracted: usize, synthetic: usize) {
        self.extracted_keymen += extracted;
        self.synthetic_keymen += synthetic;
    }

    /// Record profiles found for one keyman
    pub fn record_profiles(&mut self, found: usize) {
        self.profiles_found += found;
    }

    /// Total keymen across companies
    pub fn total_keymen(&self) -> usize {
        self.extracted_keymen + self.synthetic_keymen
    }

    /// Fraction of requests that succeeded; 0 when none were made
    pub fn request_success_rate(&self) -> f64 {
        if self.requests == 0 {
            return 0.0;
        }
        (self.requests - self.failed_requests) as f64 / self.requests as f64
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let lines = [
            "Run Metrics Summary".to_string(),
            "===================".to_string(),
            format!(
                "Companies: {} (page facts: {}, snippet facts: {})",
                self.companies, self.page_facts, self.snippet_facts
            ),
            format!(
                "Keymen: {} (extracted: {}, synthetic: {})",
                self.total_keymen(),
                self.extracted_keymen,
                self.synthetic_keymen
            ),
            format!(
                "Requests: {} ({} failed, {:.0}% ok)",
                self.requests,
                self.failed_requests,
                self.request_success_rate() * 100.0
            ),
            format!("Profiles found: {}", self.profiles_found),
            format!("Rows: {}", self.rows),
            format!("Elapsed: {:.1}s", self.elapsed.as_secs_f64()),
        ];
        lines.join("\n")
    }
}
