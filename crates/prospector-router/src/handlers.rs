//! HTTP request handlers for the Router service.
//!
//! Job submission, status, history, export and health endpoints using axum.
//! Jobs run on the blocking pool; handlers only touch the store.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use chrono::{DateTime, Utc};
use prospector_domain::{JobId, JobStatus, LeadRow, SearchCriteria};
use prospector_fetch::{FetchConfig, Source};
use prospector_pipeline::{ExportFormat, JobRunner, PipelineError};
use prospector_store::{SharedJobStore, StoreError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Acknowledgement returned when a search is accepted
pub const SEARCH_STARTED_MESSAGE: &str = "検索を開始しました。しばらくお待ちください。";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Job persistence
    pub store: SharedJobStore,
    /// Pipeline settings for every job
    pub runner: Arc<JobRunner>,
    /// HTTP settings used to build each job's page source
    pub fetch: Arc<FetchConfig>,
}

/// Search accepted response
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// New job id
    pub search_id: i64,
    /// Human-readable acknowledgement
    pub message: String,
}

/// Job status response
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchStatusResponse {
    /// Job id
    pub search_id: i64,
    /// Current status
    pub status: JobStatus,
    /// Lead rows, only once completed
    pub results: Option<Vec<LeadRow>>,
    /// Failure message, only once failed
    pub error_message: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// One history entry
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Job id
    pub search_id: i64,
    /// Criteria summary
    pub conditions: String,
    /// Companies requested
    pub num_companies: usize,
    /// Current status
    pub status: JobStatus,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Rows produced so far
    pub result_count: usize,
}

/// History response
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Newest first
    pub history: Vec<HistoryEntry>,
}

/// History query parameters
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Maximum entries returned
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

fn default_history_limit() -> usize {
    20
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Current UTC time, RFC 3339
    pub timestamp: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request rejected
    BadRequest(String),
    /// Unknown job or missing results
    NotFound(String),
    /// Job store failure
    StoreError(StoreError),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::StoreError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::StoreError(e)
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::InvalidCriteria(msg) => AppError::BadRequest(msg),
            other => AppError::InternalError(other.to_string()),
        }
    }
}

/// Build the job's source and run it to a terminal status
///
/// Runs on the blocking pool; the live HTTP client must not be created on a
/// runtime thread.
fn run_job(state: AppState, id: JobId, criteria: SearchCriteria) {
    let store = state.store.as_ref();
    let outcome = match Source::from_config(&state.fetch, state.runner.config().offline) {
        Ok(source) => state.runner.execute(store, source, id, &criteria).map(|status| {
            info!(%id, %status, "Search job finished");
        }),
        Err(e) => state.runner.fail(store, id, &e.to_string()),
    };
    if let Err(e) = outcome {
        error!(%id, "Could not record job outcome: {}", e);
    }
}

/// POST /api/search - Start a search job
async fn create_search(
    State(state): State<AppState>,
    Json(criteria): Json<SearchCriteria>,
) -> Result<Json<SearchResponse>, AppError> {
    let id = state.runner.submit(state.store.as_ref(), &criteria)?;
    info!(%id, conditions = %criteria.conditions_text(), "Search job accepted");

    let job_state = state.clone();
    tokio::task::spawn_blocking(move || run_job(job_state, id, criteria));

    Ok(Json(SearchResponse {
        search_id: id.value(),
        message: SEARCH_STARTED_MESSAGE.to_string(),
    }))
}

/// GET /api/search/:id - Job status and results
async fn get_search(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SearchStatusResponse>, AppError> {
    let job = state
        .store
        .get_job(JobId(id))?
        .ok_or_else(|| AppError::NotFound("検索が見つかりません".to_string()))?;

    let results = match job.status {
        JobStatus::Completed => job.results,
        _ => None,
    };

    Ok(Json(SearchStatusResponse {
        search_id: job.id.value(),
        status: job.status,
        results,
        error_message: job.error_message,
        created_at: job.created_at,
    }))
}

/// GET /api/history - Recent jobs, newest first
async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let history = state
        .store
        .list_jobs(query.limit)?
        .into_iter()
        .map(|job| HistoryEntry {
            search_id: job.id.value(),
            result_count: job.result_count(),
            conditions: job.conditions,
            num_companies: job.requested_count,
            status: job.status,
            created_at: job.created_at,
        })
        .collect();

    Ok(Json(HistoryResponse { history }))
}

/// GET /api/export/:id/:format - Download results as a file
async fn export_results(
    State(state): State<AppState>,
    Path((id, format)): Path<(i64, String)>,
) -> Result<Response, AppError> {
    let rows = state
        .store
        .get_job(JobId(id))?
        .and_then(|job| job.results)
        .filter(|rows| !rows.is_empty())
        .ok_or_else(|| AppError::NotFound("結果が見つかりません".to_string()))?;

    let format: ExportFormat = format
        .parse()
        .map_err(|_| AppError::BadRequest("サポートされていないフォーマットです".to_string()))?;
    let body = format.render(&rows)?;

    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", format.file_name(JobId(id))),
        ),
    ];
    Ok((headers, body).into_response())
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api/search", post(create_search))
        .route("/api/search/:id", get(get_search))
        .route("/api/history", get(get_history))
        .route("/api/export/:id/:format", get(export_results))
        .route("/health", get(health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use prospector_pipeline::PipelineConfig;
    use prospector_store::MemoryJobStore;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState {
        AppState {
            store: Arc::new(MemoryJobStore::new()),
            runner: Arc::new(JobRunner::new(PipelineConfig::offline())),
            fetch: Arc::new(FetchConfig::default()),
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_job_is_not_found() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/api/search/999")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_out_of_range_count_rejected() {
        let state = create_test_state();
        let app = create_router(state.clone());

        let request = Request::builder()
            .method("POST")
            .uri("/api/search")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"industry": "fintech", "revenue": "30to50", "num_companies": 101}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.store.list_jobs(10).unwrap().is_empty());
    }
}
