//! Prospector Extractor
//!
//! Turns plain page text into structured lead data.
//!
//! # Overview
//!
//! - [`TextFactExtractor`]: founding year, revenue, profit, headcount,
//!   business domains and focus points
//! - [`PersonExtractor`]: title/name pairs from a fixed title vocabulary
//! - [`synthetic_keymen`]: deterministic stand-in keymen, unique per
//!   [`NameScope`]
//! - [`SocialProfileResolver`]: Facebook / X profile URLs via web search
//!
//! # Architecture
//!
//! ```text
//! page text ─┬→ TextFactExtractor → CompanyFacts
//!            └→ PersonExtractor → dedupe → KeymanRecord (or synthetic fallback)
//! keyman ────→ SocialProfileResolver → SocialProfileSet
//! ```
//!
//! Extraction never fails. Missing facts are `None`; unreachable pages are
//! the caller's concern.
//!
//! # Example Usage
//!
//! ```
//! use prospector_extractor::TextFactExtractor;
//!
//! let facts = TextFactExtractor::default()
//!     .extract("2018年設立、従業員70名、売上高52億円、営業利益6億円。");
//! assert_eq!(facts.founded_year.as_deref(), Some("2018年"));
//! assert_eq!(facts.employees.as_deref(), Some("70名"));
//! ```

#![warn(missing_docs)]

mod config;
pub mod facts;
pub mod keyman;
pub mod social;
pub mod synthetic;

pub use config::{ExtractorConfig, SocialConfig};
pub use facts::{company_name, TextFactExtractor};
pub use keyman::{dedupe, is_valid_name, PersonExtractor, TITLE_VOCABULARY};
pub use social::{
    clean_url, is_valid_facebook_url, is_valid_twitter_url, Platform, SocialProfileResolver,
};
pub use synthetic::{synthetic_keyman, synthetic_keymen, NameScope};
