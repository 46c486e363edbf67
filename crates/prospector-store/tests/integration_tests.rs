//! Integration tests for prospector-store
//!
//! Every scenario runs against both backends.

use prospector_domain::{JobId, JobStatus, JobStore, LeadRow, StatusUpdate};
use prospector_store::{
    open_store, MemoryJobStore, SharedJobStore, SqliteJobStore, StoreConfig, StoreError,
};
use std::sync::Arc;
use tempfile::TempDir;

fn backends() -> (TempDir, Vec<SharedJobStore>) {
    let dir = TempDir::new().unwrap();
    let sqlite = SqliteJobStore::new(dir.path().join("jobs.db")).unwrap();
    (dir, vec![Arc::new(MemoryJobStore::new()), Arc::new(sqlite)])
}

fn row(company: &str, keyman: &str) -> LeadRow {
    LeadRow {
        company_name: company.to_string(),
        keyman_name: keyman.to_string(),
        facebook_url: "なし".to_string(),
        x_url: "なし".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_create_and_get_pending_job() {
    let (_dir, stores) = backends();
    for store in stores {
        let id = store.create_job("業界: fintech, 売上: 30to50", 3).unwrap();
        let job = store.get_job(id).unwrap().expect("job exists");
        assert_eq!(job.id, id);
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.conditions, "業界: fintech, 売上: 30to50");
        assert_eq!(job.requested_count, 3);
        assert!(job.results.is_none());
        assert!(job.error_message.is_none());
    }
}

#[test]
fn test_completed_job_keeps_rows_in_order() {
    let (_dir, stores) = backends();
    for store in stores {
        let id = store.create_job("業界: beauty", 2).unwrap();
        store.set_status(id, StatusUpdate::processing()).unwrap();
        let rows = vec![row("A社", "田中 健一"), row("A社", "鈴木 大輔"), row("B社", "高橋 翔太")];
        store.set_status(id, StatusUpdate::completed(rows.clone())).unwrap();

        let job = store.get_job(id).unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.results, Some(rows));
        assert_eq!(job.result_count(), 3);
        assert!(job.updated_at >= job.created_at);
    }
}

#[test]
fn test_failed_job_has_message_and_no_results() {
    let (_dir, stores) = backends();
    for store in stores {
        let id = store.create_job("業界: food", 1).unwrap();
        store.set_status(id, StatusUpdate::processing()).unwrap();
        let message = "企業が見つかりませんでした。検索条件を変更してください。";
        store.set_status(id, StatusUpdate::failed(message)).unwrap();
        let job = store.get_job(id).unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Failed);
        assert!(job.results.is_none());
        assert_eq!(
            job.error_message.as_deref(),
            Some("企業が見つかりませんでした。検索条件を変更してください。")
        );
    }
}

#[test]
fn test_terminal_status_is_final() {
    let (_dir, stores) = backends();
    for store in stores {
        let id = store.create_job("業界: retail", 1).unwrap();
        store.set_status(id, StatusUpdate::processing()).unwrap();
        store.set_status(id, StatusUpdate::completed(vec![])).unwrap();
        let err = store.set_status(id, StatusUpdate::processing()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidTransition {
                from: JobStatus::Completed,
                to: JobStatus::Processing,
                ..
            }
        ));
        assert!(store.set_status(id, StatusUpdate::failed("late")).is_err());
        assert_eq!(store.get_job(id).unwrap().unwrap().status, JobStatus::Completed);
    }
}

#[test]
fn test_unknown_job() {
    let (_dir, stores) = backends();
    for store in stores {
        assert!(store.get_job(JobId(999)).unwrap().is_none());
        assert!(matches!(
            store.set_status(JobId(999), StatusUpdate::processing()),
            Err(StoreError::NotFound(JobId(999)))
        ));
    }
}

#[test]
fn test_history_newest_first_with_limit() {
    let (_dir, stores) = backends();
    for store in stores {
        let ids: Vec<JobId> = (1..=5)
            .map(|n| store.create_job(&format!("job {}", n), n).unwrap())
            .collect();
        let history = store.list_jobs(3).unwrap();
        let listed: Vec<JobId> = history.iter().map(|job| job.id).collect();
        assert_eq!(listed, vec![ids[4], ids[3], ids[2]]);
        assert_eq!(store.list_jobs(50).unwrap().len(), 5);
    }
}

#[test]
fn test_sqlite_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales_bot.db");
    let id = {
        let store = SqliteJobStore::new(&path).unwrap();
        let id = store.create_job("業界: logistics", 2).unwrap();
        store.set_status(id, StatusUpdate::processing()).unwrap();
        store.set_status(id, StatusUpdate::completed(vec![row("C社", "伊藤 修")])).unwrap();
        id
    };

    let reopened = open_store(&StoreConfig::Sqlite { path }).unwrap();
    let job = reopened.get_job(id).unwrap().unwrap();
    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.results.unwrap()[0].keyman_name, "伊藤 修");
}

#[test]
fn test_memory_config_opens_fresh_store() {
    let store = open_store(&StoreConfig::Memory).unwrap();
    assert!(store.list_jobs(10).unwrap().is_empty());
}
