//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Which social platforms the resolver queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialConfig {
    /// Search for Facebook profiles
    #[serde(default = "default_true")]
    pub facebook_enabled: bool,

    /// Search for X / Twitter profiles
    #[serde(default = "default_true")]
    pub x_enabled: bool,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            facebook_enabled: true,
            x_enabled: true,
        }
    }
}

/// Configuration for fact and person extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Characters of the snippet kept as the description
    #[serde(default = "default_description_chars")]
    pub description_chars: usize,

    /// Characters of page text scanned for domain and focus keywords
    #[serde(default = "default_domain_window_chars")]
    pub domain_window_chars: usize,

    /// Maximum business categories reported
    #[serde(default = "default_max_business_domains")]
    pub max_business_domains: usize,

    /// Maximum focus phrases joined together
    #[serde(default = "default_max_focus_points")]
    pub max_focus_points: usize,

    /// Character cap on the joined focus phrases
    #[serde(default = "default_focus_chars")]
    pub focus_chars: usize,
}

fn default_true() -> bool {
    true
}

fn default_description_chars() -> usize {
    200
}

fn default_domain_window_chars() -> usize {
    1000
}

fn default_max_business_domains() -> usize {
    3
}

fn default_max_focus_points() -> usize {
    2
}

fn default_focus_chars() -> usize {
    100
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.description_chars == 0 {
            return Err("description_chars must be greater than 0".to_string());
        }
        if self.max_business_domains == 0 {
            return Err("max_business_domains must be greater than 0".to_string());
        }
        if self.max_focus_points == 0 {
            return Err("max_focus_points must be greater than 0".to_string());
        }
        if self.focus_chars == 0 {
            return Err("focus_chars must be greater than 0".to_string());
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

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            description_chars: default_description_chars(),
            domain_window_chars: default_domain_window_chars(),
            max_business_domains: default_max_business_domains(),
            max_focus_points: default_max_focus_points(),
            focus_chars: default_focus_chars(),
        }
    }
}
