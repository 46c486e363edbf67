//! Integration tests for the Router service

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use prospector_domain::{
    CompanyRecord, JobStatus, KeymanRecord, LeadRow, SocialProfileSet, StatusUpdate,
};
use prospector_fetch::FetchConfig;
use prospector_pipeline::{JobRunner, PipelineConfig};
use prospector_router::handlers::{
    create_router, AppState, ErrorResponse, HealthCheckResponse, HistoryResponse, SearchResponse,
    SearchStatusResponse,
};
use prospector_store::MemoryJobStore;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt; // for oneshot

/// Helper to create test application state
fn create_test_state() -> AppState {
    let config = PipelineConfig {
        catalog_seed: Some(17),
        ..PipelineConfig::offline()
    };
    AppState {
        store: Arc::new(MemoryJobStore::new()),
        runner: Arc::new(JobRunner::new(config)),
        fetch: Arc::new(FetchConfig::default()),
    }
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn submit(app: &Router, json: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/search")
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn wait_for_terminal(app: &Router, id: i64) -> SearchStatusResponse {
    for _ in 0..200 {
        let (status, body) = get(app, &format!("/api/search/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        let job: SearchStatusResponse = serde_json::from_slice(&body).unwrap();
        if job.status.is_terminal() {
            return job;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("job {} did not finish", id);
}

fn sample_rows() -> Vec<LeadRow> {
    let company =
        CompanyRecord::new("株式会社ペイメント", "https://pay.example.jp", "オンライン決済");
    let none = SocialProfileSet::none();
    vec![
        LeadRow::new(&company, &KeymanRecord::extracted("田中 太郎", "代表取締役"), &none),
        LeadRow::new(&company, &KeymanRecord::extracted("鈴木 一郎", "CTO"), &none),
    ]
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_router(create_test_state());

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: HealthCheckResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "healthy");
    assert!(chrono::DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
}

#[tokio::test]
async fn test_search_runs_to_completion() {
    let app = create_router(create_test_state());

    let (status, body) = submit(
        &app,
        r#"{"industry": "fintech", "revenue": "30to50", "num_companies": 3, "max_keymen": 2}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let accepted: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(accepted.message, "検索を開始しました。しばらくお待ちください。");

    let job = wait_for_terminal(&app, accepted.search_id).await;
    assert_eq!(job.status, JobStatus::Completed);
    assert!(job.error_message.is_none());
    let rows = job.results.unwrap();
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r.x_url == "なし"));
}

#[tokio::test]
async fn test_invalid_keymen_count_rejected() {
    let app = create_router(create_test_state());

    let body = r#"{"industry": "beauty", "revenue": "10to30", "max_keymen": 0}"#;
    let (status, body) = submit(&app, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert!(error.error.contains("max_keymen"));
}

#[tokio::test]
async fn test_history_newest_first() {
    let state = create_test_state();
    let first = state.store.create_job("業界: food, 売上: under10", 2).unwrap();
    let second = state.store.create_job("業界: retail, 売上: 10to30", 4).unwrap();
    state.store.set_status(second, StatusUpdate::processing()).unwrap();
    state.store.set_status(second, StatusUpdate::completed(sample_rows())).unwrap();
    let app = create_router(state);

    let (status, body) = get(&app, "/api/history").await;
    assert_eq!(status, StatusCode::OK);
    let history: HistoryResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(history.history.len(), 2);
    assert_eq!(history.history[0].search_id, second.value());
    assert_eq!(history.history[0].result_count, 2);
    assert_eq!(history.history[0].num_companies, 4);
    assert_eq!(history.history[1].search_id, first.value());
    assert_eq!(history.history[1].status, JobStatus::Pending);

    let (_, body) = get(&app, "/api/history?limit=1").await;
    let history: HistoryResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(history.history.len(), 1);
}

#[tokio::test]
async fn test_export_csv_attachment() {
    let state = create_test_state();
    let id = state.store.create_job("業界: fintech, 売上: 30to50", 1).unwrap();
    state.store.set_status(id, StatusUpdate::processing()).unwrap();
    state.store.set_status(id, StatusUpdate::completed(sample_rows())).unwrap();
    let app = create_router(state);

    let request = Request::builder()
        .uri(format!("/api/export/{}/csv", id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert_eq!(disposition, format!("attachment; filename=sales_leads_{}.csv", id));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    let lines: Vec<&str> = text.split("\r\n").filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("企業名,企業URL"));
    assert!(lines[2].contains("鈴木 一郎,CTO"));
}

#[tokio::test]
async fn test_export_errors() {
    let state = create_test_state();
    let pending = state.store.create_job("業界: food, 売上: under10", 1).unwrap();
    let done = state.store.create_job("業界: food, 売上: under10", 1).unwrap();
    state.store.set_status(done, StatusUpdate::processing()).unwrap();
    state.store.set_status(done, StatusUpdate::completed(sample_rows())).unwrap();
    let app = create_router(state);

    let (status, _) = get(&app, &format!("/api/export/{}/csv", pending)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/api/export/404/json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&app, &format!("/api/export/{}/xlsx", done)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "サポートされていないフォーマットです");

    let (status, body) = get(&app, &format!("/api/export/{}/markdown", done)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().starts_with("| 企業名 |"));
}
