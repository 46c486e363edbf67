//! Durable job store on SQLite
//!
//! Lead rows are stored as one JSON array per job; timestamps as RFC 3339
//! text.

use crate::StoreError;
use chrono::{DateTime, Utc};
use prospector_domain::{JobId, JobStatus, JobStore, LeadRow, SearchJob, StatusUpdate};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

const SELECT_JOB: &str = "SELECT id, search_conditions, num_companies, status, results, error_message, created_at, updated_at
     FROM search_history";

/// SQLite-backed [`JobStore`]
///
/// The connection sits behind a mutex so one store can be shared between
/// request handlers and job workers.
pub struct SqliteJobStore {
    conn: Mutex<Connection>,
}

/// A row as read, before JSON and timestamp decoding
struct RawJob {
    id: i64,
    conditions: String,
    requested_count: i64,
    status: String,
    results: Option<String>,
    error_message: Option<String>,
    created_at: String,
    updated_at: String,
}

impl RawJob {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            conditions: row.get(1)?,
            requested_count: row.get(2)?,
            status: row.get(3)?,
            results: row.get(4)?,
            error_message: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }

    fn decode(self) -> Result<SearchJob, StoreError> {
        let status: JobStatus = self.status.parse().map_err(StoreError::InvalidData)?;
        let results: Option<Vec<LeadRow>> = self
            .results
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?;
        let requested_count = usize::try_from(self.requested_count)
            .map_err(|_| {
                StoreError::InvalidData(format!("Negative company count: {}", self.requested_count))
            })?;
        Ok(SearchJob {
            id: JobId(self.id),
            conditions: self.conditions,
            requested_count,
            status,
            results,
            error_message: self.error_message,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
        })
    }
}

fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(text)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidData(format!("Bad timestamp {:?}: {}", text, e)))
}

impl SqliteJobStore {
    /// Open (or create) a database at `path`
    ///
    /// Use `:memory:` for a throwaway database.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use prospector_store::SqliteJobStore;
    ///
    /// let store = SqliteJobStore::new("sales_bot.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Lock)
    }

    fn load(conn: &Connection, id: JobId) -> Result<Option<SearchJob>, StoreError> {
        let raw = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_JOB),
                params![id.value()],
                RawJob::from_row,
            )
            .optional()?;
        raw.map(RawJob::decode).transpose()
    }
}

impl JobStore for SqliteJobStore {
    type Error = StoreError;

    fn create_job(&self, conditions: &str, requested_count: usize) -> Result<JobId, Self::Error> {
        let conn = self.conn()?;
        let now = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO search_history (search_conditions, num_companies, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![conditions, requested_count as i64, JobStatus::Pending.as_str(), now],
        )?;
        let id = JobId(conn.last_insert_rowid());
        debug!(%id, conditions, "Created search job");
        Ok(id)
    }

    fn set_status(&self, id: JobId, update: StatusUpdate) -> Result<(), Self::Error> {
        let conn = self.conn()?;
        let mut job = Self::load(&conn, id)?.ok_or(StoreError::NotFound(id))?;
        job.apply(update)
            .map_err(|(from, to)| StoreError::InvalidTransition { id, from, to })?;

        let results = job.results.as_ref().map(serde_json::to_string).transpose()?;
        conn.execute(
            "UPDATE search_history SET status = ?1, results = ?2, error_message = ?3, updated_at = ?4
             WHERE id = ?5",
            params![
                job.status.as_str(),
                results,
                job.error_message,
                job.updated_at.to_rfc3339(),
                id.value(),
            ],
        )?;
        debug!(%id, status = %job.status, "Updated search job");
        Ok(())
    }

    fn get_job(&self, id: JobId) -> Result<Option<SearchJob>, Self::Error> {
        let conn = self.conn()?;
        Self::load(&conn, id)
    }

    fn list_jobs(&self, limit: usize) -> Result<Vec<SearchJob>, Self::Error> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id DESC LIMIT ?1", SELECT_JOB))?;
        let raws = stmt
            .query_map(params![limit as i64], RawJob::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        raws.into_iter().map(RawJob::decode).collect()
    }
}
