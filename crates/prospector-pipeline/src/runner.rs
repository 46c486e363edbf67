//! Job execution boundary
//!
//! Drives one persisted search job from `processing` to a terminal status.
//! Whatever happens inside the run, the job ends `completed` with rows or
//! `failed` with a message, never with partial results.

use crate::{LeadPipeline, PipelineConfig, PipelineError};
use prospector_domain::{JobId, JobStatus, JobStore, PageSource, SearchCriteria, StatusUpdate};
use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info, warn};

/// Executes search jobs against a [`JobStore`]
#[derive(Debug, Clone, Default)]
pub struct JobRunner {
    config: PipelineConfig,
}

fn store_error(e: impl Display) -> PipelineError {
    PipelineError::Store(e.to_string())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return message.to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "panic without message".to_string()
}

impl JobRunner {
    /// Create a runner; each execution builds its own pipeline from `config`
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Create a pending job for the criteria
    pub fn submit<St>(&self, store: &St, criteria: &SearchCriteria) -> Result<JobId, PipelineError>
    where
        St: JobStore + ?Sized,
        St::Error: Display,
    {
        self.config.validate().map_err(PipelineError::Config)?;
        criteria.validate().map_err(PipelineError::InvalidCriteria)?;
        store
            .create_job(&criteria.conditions_text(), criteria.num_companies)
            .map_err(store_error)
    }

    /// Run job `id` to completion and return its terminal status
    ///
    /// Errors are only returned when the store itself fails; pipeline errors
    /// and panics are recorded on the job.
    pub fn execute<St, S>(
        &self,
        store: &St,
        source: S,
        id: JobId,
        criteria: &SearchCriteria,
    ) -> Result<JobStatus, PipelineError>
    where
        St: JobStore + ?Sized,
        St::Error: Display,
        S: PageSource,
    {
        store.set_status(id, StatusUpdate::processing()).map_err(store_error)?;
        info!(%id, conditions = %criteria.conditions_text(), "Search job started");

        let config = self.config.clone();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut rng = config.seed().rng();
            LeadPipeline::new(source, config).run(criteria, &mut rng)
        }));

        let update = match outcome {
            Ok(Ok(output)) => {
                info!(
                    %id,
                    rows = output.rows.len(),
                    "Search job completed\n{}",
                    output.metrics.summary()
                );
                StatusUpdate::completed(output.rows)
            }
            Ok(Err(e)) => {
                warn!(%id, "Search job failed: {}", e);
                StatusUpdate::failed(e.to_string())
            }
            Err(payload) => {
                let e = PipelineError::Panicked(panic_message(payload.as_ref()));
                error!(%id, "Search job panicked: {}", e);
                StatusUpdate::failed(e.to_string())
            }
        };

        let status = update.status;
        store.set_status(id, update).map_err(store_error)?;
        Ok(status)
    }

    /// Record a failure that happened before the pipeline could start
    pub fn fail<St>(&self, store: &St, id: JobId, message: &str) -> Result<(), PipelineError>
    where
        St: JobStore + ?Sized,
        St::Error: Display,
    {
        warn!(%id, "Search job could not start: {}", message);
        store.set_status(id, StatusUpdate::failed(message)).map_err(store_error)
    }
}
