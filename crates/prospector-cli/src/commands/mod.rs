//! Command implementations.

pub mod export;
pub mod history;
pub mod lookup;
pub mod search;
pub mod show;

pub use self::export::execute_export;
pub use self::history::execute_history;
pub use self::lookup::execute_lookup;
pub use self::search::execute_search;
pub use self::show::execute_show;

use crate::cli::RunOptions;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use prospector_pipeline::PipelineConfig;
use std::fs;

/// Pipeline settings for one run: configured defaults plus command flags.
pub(crate) fn pipeline_config(
    base: &PipelineConfig,
    options: &RunOptions,
) -> Result<PipelineConfig> {
    let config = PipelineConfig {
        max_keymen: options.max_keymen.unwrap_or(base.max_keymen),
        resolve_social: base.resolve_social || options.social,
        offline: base.offline || options.offline,
        catalog_seed: options.seed.or(base.catalog_seed),
        ..base.clone()
    };
    config.validate().map_err(CliError::InvalidInput)?;
    Ok(config)
}

/// Run blocking work (live HTTP, SQLite) off the async runtime.
pub(crate) async fn blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| CliError::Task(e.to_string()))?
}

/// Print rendered output, or write it to `output` when given.
pub(crate) fn emit(content: &str, output: Option<&str>, formatter: &Formatter) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("{}", formatter.success(&format!("Saved to {}", path)));
        }
        None => println!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> RunOptions {
        RunOptions {
            max_keymen: None,
            social: false,
            offline: false,
            seed: None,
            output: None,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let base = PipelineConfig::default();
        let config = pipeline_config(
            &base,
            &RunOptions {
                max_keymen: Some(3),
                social: true,
                seed: Some(9),
                ..options()
            },
        )
        .unwrap();
        assert_eq!(config.max_keymen, 3);
        assert!(config.resolve_social);
        assert_eq!(config.catalog_seed, Some(9));
        assert!(!config.offline);
    }

    #[test]
    fn test_config_offline_survives_missing_flag() {
        let config = pipeline_config(&PipelineConfig::offline(), &options()).unwrap();
        assert!(config.offline);
        assert_eq!(config.max_keymen, 5);
    }

    #[test]
    fn test_out_of_range_keymen_rejected() {
        let result = pipeline_config(
            &PipelineConfig::default(),
            &RunOptions {
                max_keymen: Some(11),
                ..options()
            },
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
