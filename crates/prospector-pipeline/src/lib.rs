//! Prospector Pipeline
//!
//! Turns loose search criteria into lead rows, one row per (company, keyman).
//!
//! # Overview
//!
//! ```text
//! criteria → catalog / search hits → company facts → keymen → profiles → LeadRow
//! ```
//!
//! [`LeadPipeline`] is generic over a [`PageSource`](prospector_domain::PageSource)
//! and never fails because a page could not be fetched; it degrades to snippet
//! facts and synthetic keymen instead. [`JobRunner`] wraps a run in the job
//! lifecycle of a [`JobStore`](prospector_domain::JobStore), and
//! [`ExportFormat`] renders finished rows.
//!
//! # Example Usage
//!
//! ```
//! use prospector_domain::SearchCriteria;
//! use prospector_fetch::OfflineSource;
//! use prospector_pipeline::{ExportFormat, LeadPipeline, PipelineConfig};
//!
//! let config = PipelineConfig {
//!     catalog_seed: Some(42),
//!     ..PipelineConfig::offline()
//! };
//! let mut rng = config.seed().rng();
//! let mut pipeline = LeadPipeline::new(OfflineSource, config);
//!
//! let criteria = SearchCriteria::new("beauty", "50to100").with_count(2);
//! let output = pipeline.run(&criteria, &mut rng).unwrap();
//! let csv = ExportFormat::Csv.render(&output.rows).unwrap();
//! assert!(csv.starts_with("企業名,"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod export;
pub mod metrics;
pub mod pipeline;
pub mod runner;

pub use config::PipelineConfig;
pub use error::{PipelineError, NO_CANDIDATES_MESSAGE};
pub use export::ExportFormat;
pub use metrics::RunMetrics;
pub use pipeline::{
    Candidate, LeadPipeline, RunOutput, FALLBACK_INDUSTRY, FALLBACK_REVENUE, PROFILE_PATHS,
};
pub use runner::JobRunner;
