//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use prospector_fetch::FetchConfig;
use prospector_pipeline::{ExportFormat, PipelineConfig};
use prospector_store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Where `--save` records jobs
    #[serde(default)]
    pub store: StoreConfig,

    /// Pipeline defaults; command flags override them
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// HTTP settings for live runs
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary table
    Table,
    /// Listing grouped by company
    Detail,
    /// CSV
    Csv,
    /// TSV
    Tsv,
    /// JSON
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// The file format behind this output, if it is one
    pub fn export_format(&self) -> Option<ExportFormat> {
        match self {
            OutputFormat::Table | OutputFormat::Detail => None,
            OutputFormat::Csv => Some(ExportFormat::Csv),
            OutputFormat::Tsv => Some(ExportFormat::Tsv),
            OutputFormat::Json => Some(ExportFormat::Json),
            OutputFormat::Markdown => Some(ExportFormat::Markdown),
        }
    }
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".prospector").join("config.toml"))
    }

    /// Load configuration from the default path or create default.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::path()?)
    }

    /// Load configuration from a file, or defaults when it does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.pipeline.validate().map_err(CliError::Config)?;
        config.fetch.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::path()?)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(!config.pipeline.offline);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Markdown;
        config.pipeline.offline = true;
        config.store = StoreConfig::Sqlite {
            path: dir.path().join("leads.db"),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.format, OutputFormat::Markdown);
        assert!(loaded.pipeline.offline);
        assert_eq!(loaded.store, config.store);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[settings]\nformat = \"detail\"\n\n[store]\nbackend = \"memory\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Detail);
        assert!(config.settings.color);
        assert_eq!(config.store, StoreConfig::Memory);
    }

    #[test]
    fn test_export_format_mapping() {
        assert_eq!(OutputFormat::Table.export_format(), None);
        assert_eq!(OutputFormat::Tsv.export_format(), Some(ExportFormat::Tsv));
    }
}
