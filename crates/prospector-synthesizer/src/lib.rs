//! Prospector Synthesizer
//!
//! Synthetic candidate companies for when live discovery is unavailable.
//!
//! # Overview
//!
//! ```text
//! seeds (5 per industry) → catalog_for (100 variants) → select (revenue band)
//! ```
//!
//! The catalog is deterministic for a given RNG; [`CatalogSeed`] chooses
//! between a fixed seed and a clock-derived one at the call site.
//!
//! # Example Usage
//!
//! ```
//! use prospector_domain::{Industry, RevenueBand};
//! use prospector_synthesizer::{catalog_for, select, CatalogSeed, DEFAULT_CATALOG_SIZE};
//!
//! let mut rng = CatalogSeed::Fixed(7).rng();
//! let catalog = catalog_for(Industry::Fintech, DEFAULT_CATALOG_SIZE, &mut rng);
//! let picked = select(&catalog, RevenueBand::From30To50.range());
//! assert_eq!(picked.len(), 100);
//! ```

#![warn(missing_docs)]

pub mod band;
pub mod catalog;
pub mod seeds;

pub use band::{select, SELECTION_LIMIT};
pub use catalog::{catalog_for, CatalogEntry, CatalogSeed, DEFAULT_CATALOG_SIZE};
pub use seeds::{seeds_for, SeedEntry};
