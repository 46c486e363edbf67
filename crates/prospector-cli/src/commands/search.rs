//! Search command implementation.

use super::{blocking, emit, pipeline_config};
use crate::cli::SearchArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use prospector_domain::{JobStatus, JobStore, SearchCriteria, SearchJob};
use prospector_fetch::Source;
use prospector_pipeline::{JobRunner, LeadPipeline, RunOutput};
use prospector_store::open_store;
use tracing::debug;

/// Execute the search command.
pub async fn execute_search(
    args: SearchArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let pipeline = pipeline_config(&config.pipeline, &args.run)?;
    let criteria = SearchCriteria::new(args.industry, args.revenue)
        .with_count(args.count)
        .with_keywords(args.keywords)
        .with_max_keymen(pipeline.max_keymen);
    criteria.validate().map_err(CliError::InvalidInput)?;

    eprintln!("{}", formatter.info(&format!("Searching {}", criteria.conditions_text())));
    let fetch = config.fetch.clone();
    debug!(
        save = args.save,
        offline = pipeline.offline,
        count = criteria.num_companies,
        "Starting search"
    );

    let rows = if args.save {
        let store = open_store(&config.store)?;
        let job = blocking(move || -> Result<SearchJob> {
            let runner = JobRunner::new(pipeline);
            let id = runner.submit(store.as_ref(), &criteria)?;
            match Source::from_config(&fetch, runner.config().offline) {
                Ok(source) => {
                    runner.execute(store.as_ref(), source, id, &criteria)?;
                }
                Err(e) => runner.fail(store.as_ref(), id, &e.to_string())?,
            }
            store
                .get_job(id)?
                .ok_or_else(|| CliError::NotFound(format!("job {}", id)))
        })
        .await?;

        if job.status != JobStatus::Completed {
            return Err(CliError::JobFailed {
                id: job.id.value(),
                message: job.error_message.unwrap_or_default(),
            });
        }
        eprintln!("{}", formatter.success(&format!("Saved as job {}", job.id)));
        job.results.unwrap_or_default()
    } else {
        let output = blocking(move || -> Result<RunOutput> {
            let source = Source::from_config(&fetch, pipeline.offline)?;
            let mut rng = pipeline.seed().rng();
            Ok(LeadPipeline::new(source, pipeline).run(&criteria, &mut rng)?)
        })
        .await?;
        eprintln!("{}", output.metrics.summary());
        output.rows
    };

    emit(&formatter.format_rows(&rows)?, args.run.output.as_deref(), formatter)
}
