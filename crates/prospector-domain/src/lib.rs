//! Prospector Domain Layer
//!
//! Core data model and trait interfaces for the lead prospecting pipeline.
//! Everything else in the workspace depends on this crate; it holds no I/O.
//!
//! ## Key Concepts
//!
//! - **CompanyRecord**: a candidate company with the facts extracted about it
//! - **KeymanRecord**: a named decision-maker at a company, real or synthetic
//! - **SocialProfileSet**: Facebook / X profile URLs resolved for one keyman
//! - **LeadRow**: one flattened export row (company × keyman), 13 fixed fields
//! - **SearchJob**: a persisted batch run with a monotonic status lifecycle
//!
//! ## Architecture
//!
//! - Pure data and validation only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for page retrieval and job persistence

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod company;
pub mod criteria;
pub mod job;
pub mod keyman;
pub mod lead;
pub mod social;
pub mod traits;

// Re-exports for convenience
pub use company::{CompanyFacts, CompanyRecord};
pub use criteria::{BandRange, Industry, RevenueBand, SearchCriteria};
pub use job::{JobId, JobStatus, SearchJob, StatusUpdate};
pub use keyman::{KeymanOrigin, KeymanRecord};
pub use lead::LeadRow;
pub use social::{SocialProfileSet, NO_PROFILE};
pub use traits::{JobStore, Page, PageSource, SearchHit};
