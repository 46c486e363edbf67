//! End-to-end runs over offline and fixture sources

use prospector_domain::{JobStatus, JobStore, LeadRow, Page, SearchCriteria, SearchHit};
use prospector_fetch::{OfflineSource, StaticSource};
use prospector_pipeline::{
    ExportFormat, JobRunner, LeadPipeline, PipelineConfig, PipelineError, NO_CANDIDATES_MESSAGE,
};
use prospector_store::MemoryJobStore;
use prospector_synthesizer::CatalogSeed;
use std::collections::BTreeMap;

fn fixed(seed: u64) -> PipelineConfig {
    PipelineConfig {
        catalog_seed: Some(seed),
        ..PipelineConfig::offline()
    }
}

#[test]
fn test_fintech_three_companies_offline() {
    let config = fixed(2024);
    let mut rng = config.seed().rng();
    let mut pipeline = LeadPipeline::new(OfflineSource, config);
    let criteria = SearchCriteria::new("fintech", "30to50").with_count(3);

    let selected = pipeline.select_companies(&criteria, &mut CatalogSeed::Fixed(2024).rng());
    assert_eq!(selected.len(), 3);
    assert!(selected.iter().all(|e| (30.0..50.0).contains(&e.revenue_value)));

    let output = pipeline.run(&criteria, &mut rng).unwrap();

    let mut per_company: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &output.rows {
        *per_company.entry(row.company_url.as_str()).or_default() += 1;
    }
    assert_eq!(per_company.len(), 3);
    assert!(per_company.values().all(|n| (1..=5).contains(n)));
    assert_eq!(per_company.values().sum::<usize>(), output.rows.len());

    for row in &output.rows {
        assert_eq!(row.values().len(), LeadRow::HEADERS.len());
        assert!(!row.company_name.is_empty());
        assert!(!row.keyman_name.is_empty());
        assert_eq!(row.facebook_url, "なし");
        assert_eq!(row.x_url, "なし");
    }

    let json = ExportFormat::Json.render(&output.rows).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    for object in parsed.as_array().unwrap() {
        assert_eq!(object.as_object().unwrap().len(), 13);
    }

    assert_eq!(output.metrics.companies, 3);
    assert_eq!(output.metrics.rows, output.rows.len());
    assert_eq!(output.metrics.extracted_keymen, 0);
}

#[test]
fn test_same_seed_same_rows() {
    let criteria = SearchCriteria::new("manufacturing", "100to300").with_count(4);
    let run = |seed| {
        let config = fixed(seed);
        let mut rng = config.seed().rng();
        LeadPipeline::new(OfflineSource, config).run(&criteria, &mut rng).unwrap().rows
    };
    assert_eq!(run(9), run(9));
}

#[test]
fn test_rows_follow_company_then_keyman_order() {
    let mut source = StaticSource::new();
    source.add_search(
        "越境EC 企業 会社 代表取締役",
        Page {
            hits: vec![
                SearchHit {
                    title: "株式会社アルファ - 越境EC".to_string(),
                    url: "https://alpha.example".to_string(),
                    snippet: "越境ECの物流支援。".to_string(),
                },
                SearchHit {
                    title: "ベータ株式会社".to_string(),
                    url: "https://beta.example".to_string(),
                    snippet: "2012年設立。".to_string(),
                },
            ],
            ..Default::default()
        },
    );
    source.add_page(
        "https://alpha.example",
        Page::from_text("代表取締役 山田太郎。\nCFO：佐藤花子。"),
    );
    let mut pipeline = LeadPipeline::new(source, PipelineConfig::default());
    let output = pipeline
        .run_free_text("越境EC", 5, &mut CatalogSeed::Fixed(1).rng())
        .unwrap();

    let companies: Vec<&str> = output.rows.iter().map(|r| r.company_name.as_str()).collect();
    let first_beta = companies.iter().position(|c| *c == "ベータ株式会社").unwrap();
    assert!(companies[..first_beta].iter().all(|c| *c == "株式会社アルファ"));
    assert!(companies[first_beta..].iter().all(|c| *c == "ベータ株式会社"));

    assert_eq!(output.rows[0].keyman_name, "山田太郎");
    assert_eq!(output.rows[0].keyman_title, "代表取締役");
    assert_eq!(output.metrics.page_facts, 1);
    assert_eq!(output.rows[first_beta].founded_year, "2012年");
}

#[test]
fn test_job_runner_round_trip() {
    let store = MemoryJobStore::new();
    let runner = JobRunner::new(fixed(5));
    let criteria = SearchCriteria::new("fintech", "30to50").with_count(3).with_max_keymen(2);

    let id = runner.submit(&store, &criteria).unwrap();
    assert_eq!(store.get_job(id).unwrap().unwrap().status, JobStatus::Pending);

    let status = runner.execute(&store, OfflineSource, id, &criteria).unwrap();
    assert_eq!(status, JobStatus::Completed);

    let job = store.get_job(id).unwrap().unwrap();
    assert_eq!(job.conditions, "業界: fintech, 売上: 30to50");
    assert_eq!(job.result_count(), 6);
    assert!(job.results.unwrap().iter().all(|r| r.keyman_name.contains(' ')));
}

#[test]
fn test_empty_catalog_fails_job_without_results() {
    let config = PipelineConfig {
        catalog_size: 0,
        ..fixed(5)
    };
    let criteria = SearchCriteria::new("fintech", "30to50").with_count(3);

    let mut pipeline = LeadPipeline::new(OfflineSource, config.clone());
    let result = pipeline.run(&criteria, &mut config.seed().rng());
    assert!(matches!(result, Err(PipelineError::NoCandidates)));

    let store = MemoryJobStore::new();
    let id = store
        .create_job(&criteria.conditions_text(), criteria.num_companies)
        .unwrap();
    let status = JobRunner::new(config)
        .execute(&store, OfflineSource, id, &criteria)
        .unwrap();
    assert_eq!(status, JobStatus::Failed);

    let job = store.get_job(id).unwrap().unwrap();
    assert_eq!(job.status, JobStatus::Failed);
    assert_eq!(job.error_message.as_deref(), Some(NO_CANDIDATES_MESSAGE));
    assert!(job.results.is_none());
}

#[test]
fn test_free_text_zero_count_has_no_candidates() {
    let mut pipeline = LeadPipeline::new(OfflineSource, fixed(5));
    let result = pipeline.run_free_text("物流 SaaS", 0, &mut CatalogSeed::Fixed(5).rng());
    assert!(matches!(result, Err(PipelineError::NoCandidates)));
}
