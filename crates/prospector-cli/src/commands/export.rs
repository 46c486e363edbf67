//! Export command implementation.

use super::emit;
use crate::cli::{CliFormat, ExportArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use prospector_domain::{JobId, JobStore};
use prospector_pipeline::ExportFormat;
use prospector_store::open_store;

/// File format for an export; CSV unless a file format was asked for.
pub fn resolve_format(format: Option<CliFormat>) -> Result<ExportFormat> {
    match format {
        None => Ok(ExportFormat::Csv),
        Some(format) => OutputFormat::from(format)
            .export_format()
            .ok_or_else(|| {
                CliError::InvalidInput("Export supports csv, tsv, json or markdown".to_string())
            }),
    }
}

/// Execute the export command.
pub async fn execute_export(
    args: ExportArgs,
    format: Option<CliFormat>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let export = resolve_format(format)?;
    let store = open_store(&config.store)?;
    let id = JobId(args.id);

    let rows = store
        .get_job(id)?
        .and_then(|job| job.results)
        .filter(|rows| !rows.is_empty())
        .ok_or_else(|| CliError::NotFound(format!("No results for job {}", id)))?;

    emit(&export.render(&rows)?, args.output.as_deref(), formatter)
}
