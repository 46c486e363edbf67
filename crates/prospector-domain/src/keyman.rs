//! Decision-maker ("keyman") records

use serde::{Deserialize, Serialize};

/// Where a keyman record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeymanOrigin {
    /// Found in fetched page or search text
    Extracted,
    /// Produced by the deterministic fallback generator
    Synthetic,
}

/// A named person associated with a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeymanRecord {
    /// Person name (2–10 characters)
    pub name: String,

    /// Title from the recognised vocabulary
    pub title: String,

    /// Provenance of the record
    pub origin: KeymanOrigin,
}

impl KeymanRecord {
    /// A keyman found in real text
    pub fn extracted(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            origin: KeymanOrigin::Extracted,
        }
    }

    /// A keyman produced by the fallback generator
    pub fn synthetic(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            origin: KeymanOrigin::Synthetic,
        }
    }

    /// Whether this record was generated rather than found
    pub fn is_synthetic(&self) -> bool {
        self.origin == KeymanOrigin::Synthetic
    }
}
