//! Search jobs and their status lifecycle
//!
//! A job moves `Pending → Processing → {Completed | Failed}` and never leaves a
//! terminal state. Results exist only on completed jobs, error messages only
//! on failed ones.

use crate::LeadRow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by the job store on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl JobId {
    /// Raw numeric value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a search job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Created, not yet started
    Pending,
    /// Running
    Processing,
    /// Finished with results
    Completed,
    /// Finished with an error message
    Failed,
}

impl JobStatus {
    /// Stored / wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }

    /// Completed and Failed are terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    /// Whether moving from `self` to `next` respects the lifecycle
    ///
    /// `Completed` is only reachable from `Processing`. Re-asserting the
    /// current non-terminal state is allowed, and a job may fail straight
    /// from `Pending` when it cannot be started.
    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        matches!(
            (self, next),
            (
                JobStatus::Pending,
                JobStatus::Pending | JobStatus::Processing | JobStatus::Failed
            ) | (
                JobStatus::Processing,
                JobStatus::Processing | JobStatus::Completed | JobStatus::Failed
            )
        )
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(JobStatus::Pending),
            "processing" => Ok(JobStatus::Processing),
            "completed" => Ok(JobStatus::Completed),
            "failed" => Ok(JobStatus::Failed),
            other => Err(format!("Unknown job status: {}", other)),
        }
    }
}

/// A status change applied to a stored job
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    /// Target status
    pub status: JobStatus,
    /// Lead rows (completed only)
    pub results: Option<Vec<LeadRow>>,
    /// Failure message (failed only)
    pub error_message: Option<String>,
}

impl StatusUpdate {
    /// Mark the job as running
    pub fn processing() -> Self {
        Self {
            status: JobStatus::Processing,
            results: None,
            error_message: None,
        }
    }

    /// Mark the job as done with its rows
    pub fn completed(results: Vec<LeadRow>) -> Self {
        Self {
            status: JobStatus::Completed,
            results: Some(results),
            error_message: None,
        }
    }

    /// Mark the job as failed
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: JobStatus::Failed,
            results: None,
            error_message: Some(message.into()),
        }
    }
}

/// A persisted batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchJob {
    /// Store-assigned identifier
    pub id: JobId,
    /// Human-readable criteria
    pub conditions: String,
    /// Number of companies requested
    pub requested_count: usize,
    /// Current status
    pub status: JobStatus,
    /// Lead rows, present only when completed
    pub results: Option<Vec<LeadRow>>,
    /// Failure message, present only when failed
    pub error_message: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last status change
    pub updated_at: DateTime<Utc>,
}

impl SearchJob {
    /// A freshly created pending job
    pub fn pending(id: JobId, conditions: impl Into<String>, requested_count: usize) -> Self {
        let now = Utc::now();
        Self {
            id,
            conditions: conditions.into(),
            requested_count,
            status: JobStatus::Pending,
            results: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a status change, enforcing the lifecycle
    ///
    /// Returns the rejected pair on an illegal transition.
    pub fn apply(&mut self, update: StatusUpdate) -> Result<(), (JobStatus, JobStatus)> {
        if !self.status.can_transition_to(update.status) {
            return Err((self.status, update.status));
        }
        self.status = update.status;
        self.results = match update.status {
            JobStatus::Completed => Some(update.results.unwrap_or_default()),
            _ => None,
        };
        self.error_message = match update.status {
            JobStatus::Failed => update.error_message,
            _ => None,
        };
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Number of result rows (0 unless completed)
    pub fn result_count(&self) -> usize {
        self.results.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions() {
        assert!(JobStatus::Pending.can_transition_to(JobStatus::Processing));
        assert!(JobStatus::Processing.can_transition_to(JobStatus::Completed));
        assert!(JobStatus::Processing.can_transition_to(JobStatus::Failed));
        assert!(JobStatus::Pending.can_transition_to(JobStatus::Failed));
    }

    #[test]
    fn test_terminal_states_are_final() {
        for terminal in [JobStatus::Completed, JobStatus::Failed] {
            for next in [
                JobStatus::Pending,
                JobStatus::Processing,
                JobStatus::Completed,
                JobStatus::Failed,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_no_backwards_transition() {
        assert!(!JobStatus::Processing.can_transition_to(JobStatus::Pending));
    }

    #[test]
    fn test_completion_requires_processing() {
        assert!(!JobStatus::Pending.can_transition_to(JobStatus::Completed));

        let mut job = SearchJob::pending(JobId(2), "業界: food, 売上: under10", 1);
        assert!(job.apply(StatusUpdate::completed(vec![LeadRow::default()])).is_err());
        assert_eq!(job.status, JobStatus::Pending);
        assert!(job.results.is_none());
    }

    #[test]
    fn test_apply_keeps_results_only_when_completed() {
        let mut job = SearchJob::pending(JobId(1), "業界: fintech, 売上: 30to50", 3);
        job.apply(StatusUpdate::processing()).unwrap();
        assert!(job.results.is_none());
        job.apply(StatusUpdate::completed(vec![LeadRow::default()])).unwrap();
        assert_eq!(job.result_count(), 1);
        assert!(job.error_message.is_none());
        assert!(job.apply(StatusUpdate::failed("late")).is_err());
        assert_eq!(job.status, JobStatus::Completed);
    }

    #[test]
    fn test_status_text_form() {
        for status in [
            JobStatus::Pending,
            JobStatus::Processing,
            JobStatus::Completed,
            JobStatus::Failed,
        ] {
            assert_eq!(status.as_str().parse::<JobStatus>().unwrap(), status);
        }
        assert!("done".parse::<JobStatus>().is_err());
    }
}
