//! Ephemeral job store
//!
//! Same contract as the SQLite store, lost when the process exits.

use crate::StoreError;
use prospector_domain::{JobId, JobStore, SearchJob, StatusUpdate};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct State {
    next_id: i64,
    jobs: BTreeMap<JobId, SearchJob>,
}

/// In-process [`JobStore`]
#[derive(Debug, Default)]
pub struct MemoryJobStore {
    state: Mutex<State>,
}

impl MemoryJobStore {
    /// An empty store; the first job gets id 1
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> Result<MutexGuard<'_, State>, StoreError> {
        self.state.lock().map_err(|_| StoreError::Lock)
    }

    /// Number of jobs held
    pub fn len(&self) -> usize {
        self.state().map_or(0, |state| state.jobs.len())
    }

    /// True when no job has been created
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl JobStore for MemoryJobStore {
    type Error = StoreError;

    fn create_job(&self, conditions: &str, requested_count: usize) -> Result<JobId, Self::Error> {
        let mut state = self.state()?;
        state.next_id += 1;
        let id = JobId(state.next_id);
        state.jobs.insert(id, SearchJob::pending(id, conditions, requested_count));
        Ok(id)
    }

    fn set_status(&self, id: JobId, update: StatusUpdate) -> Result<(), Self::Error> {
        let mut state = self.state()?;
        let job = state.jobs.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        job.apply(update)
            .map_err(|(from, to)| StoreError::InvalidTransition { id, from, to })
    }

    fn get_job(&self, id: JobId) -> Result<Option<SearchJob>, Self::Error> {
        Ok(self.state()?.jobs.get(&id).cloned())
    }

    fn list_jobs(&self, limit: usize) -> Result<Vec<SearchJob>, Self::Error> {
        Ok(self.state()?.jobs.values().rev().take(limit).cloned().collect())
    }
}
