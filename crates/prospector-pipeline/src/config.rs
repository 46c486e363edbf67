//! Configuration for pipeline runs

use prospector_extractor::{ExtractorConfig, SocialConfig};
use prospector_synthesizer::{CatalogSeed, DEFAULT_CATALOG_SIZE};
use serde::{Deserialize, Serialize};

/// Configuration for [`LeadPipeline`](crate::LeadPipeline)
///
/// # Examples
///
/// ```
/// use prospector_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.catalog_size, 100);
/// assert!(!config.resolve_social);
///
/// // No network at all
/// let config = PipelineConfig::offline();
/// assert!(config.offline);
///
/// // Social lookups on both platforms
/// let config = PipelineConfig::thorough();
/// assert!(config.resolve_social);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Synthetic catalog size before band selection
    #[serde(default = "default_catalog_size")]
    pub catalog_size: usize,

    /// Keymen per company for free-text runs
    #[serde(default = "default_max_keymen")]
    pub max_keymen: usize,

    /// Look up Facebook / X profiles for every keyman
    #[serde(default)]
    pub resolve_social: bool,

    /// Fixed catalog seed; unset means a new catalog every run
    #[serde(default)]
    pub catalog_seed: Option<u64>,

    /// Never touch the network
    #[serde(default)]
    pub offline: bool,

    /// Platforms searched when `resolve_social` is on
    #[serde(default)]
    pub social: SocialConfig,

    /// Fact extraction limits
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

fn default_catalog_size() -> usize {
    DEFAULT_CATALOG_SIZE
}

fn default_max_keymen() -> usize {
    5
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            catalog_size: default_catalog_size(),
            max_keymen: default_max_keymen(),
            resolve_social: false,
            social: SocialConfig::default(),
            catalog_seed: None,
            offline: false,
            extractor: ExtractorConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Offline preset: synthetic data only, no profile lookups
    pub fn offline() -> Self {
        Self {
            offline: true,
            resolve_social: false,
            ..Self::default()
        }
    }

    /// Thorough preset: profile lookups on every platform
    pub fn thorough() -> Self {
        Self {
            resolve_social: true,
            social: SocialConfig {
                facebook_enabled: true,
                x_enabled: true,
            },
            ..Self::default()
        }
    }

    /// Seed source for the synthetic catalog
    pub fn seed(&self) -> CatalogSeed {
        CatalogSeed::from_option(self.catalog_seed)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog_size == 0 {
            return Err("catalog_size must be greater than 0".to_string());
        }
        if !(1..=10).contains(&self.max_keymen) {
            return Err(format!("max_keymen must be between 1 and 10, got {}", self.max_keymen));
        }
        self.extractor.validate()
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
