//! Lookup command implementation.

use super::{blocking, emit, pipeline_config};
use crate::cli::LookupArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use prospector_fetch::Source;
use prospector_pipeline::{LeadPipeline, RunOutput};

/// Execute the lookup command.
pub async fn execute_lookup(
    args: LookupArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    if !(1..=100).contains(&args.count) {
        return Err(CliError::InvalidInput("Count must be between 1 and 100".to_string()));
    }
    if args.conditions.trim().is_empty() {
        return Err(CliError::InvalidInput("Conditions must not be empty".to_string()));
    }

    let pipeline = pipeline_config(&config.pipeline, &args.run)?;
    let fetch = config.fetch.clone();
    let conditions = args.conditions;
    let count = args.count;

    eprintln!("{}", formatter.info(&format!("Looking up \"{}\"", conditions)));
    if pipeline.offline {
        eprintln!("{}", formatter.warning("Offline: results come from the sample catalog"));
    }

    let output = blocking(move || -> Result<RunOutput> {
        let source = Source::from_config(&fetch, pipeline.offline)?;
        let mut rng = pipeline.seed().rng();
        Ok(LeadPipeline::new(source, pipeline).run_free_text(&conditions, count, &mut rng)?)
    })
    .await?;
    eprintln!("{}", output.metrics.summary());

    emit(&formatter.format_rows(&output.rows)?, args.run.output.as_deref(), formatter)
}
