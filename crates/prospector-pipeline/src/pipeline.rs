//! The lead pipeline: companies → facts → keymen → profiles → rows

use crate::{PipelineConfig, PipelineError, RunMetrics};
use prospector_domain::{
    CompanyRecord, KeymanRecord, LeadRow, Page, PageSource, SearchCriteria, SearchHit,
    SocialProfileSet,
};
use prospector_extractor::{
    company_name, dedupe, synthetic_keymen, NameScope, PersonExtractor, SocialProfileResolver,
    TextFactExtractor,
};
use prospector_synthesizer::{catalog_for, select, CatalogEntry};
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Sub-pages tried after the landing page, in order
pub const PROFILE_PATHS: [&str; 4] = ["/company", "/about", "/company/profile", "/about-us"];

/// Industry and band used when a free-text search finds nothing
pub const FALLBACK_INDUSTRY: &str = "it_saas";
/// See [`FALLBACK_INDUSTRY`]
pub const FALLBACK_REVENUE: &str = "10to30";

/// A company to prospect, from the catalog or a live search hit
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Result title, company name first
    pub title: String,
    /// Homepage
    pub url: String,
    /// Search snippet
    pub snippet: String,
    /// Revenue in 億円 when known
    pub revenue_value: Option<f64>,
}

impl From<CatalogEntry> for Candidate {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            title: entry.title,
            url: entry.url,
            snippet: entry.snippet,
            revenue_value: Some(entry.revenue_value),
        }
    }
}

impl From<SearchHit> for Candidate {
    fn from(hit: SearchHit) -> Self {
        Self {
            title: hit.title,
            url: hit.url,
            snippet: hit.snippet,
            revenue_value: None,
        }
    }
}

/// Rows and metrics from one run
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Lead rows, company order then keyman order
    pub rows: Vec<LeadRow>,
    /// What happened along the way
    pub metrics: RunMetrics,
}

/// The landing page as already fetched by [`LeadPipeline::describe`]
enum Landing {
    Unfetched,
    Fetched(Option<Page>),
}

/// Single-threaded, blocking pipeline over one [`PageSource`]
///
/// Every fetch is attempted exactly once. A failed fetch is "no data" and
/// only moves the run onto snippet facts or synthetic keymen.
///
/// # Examples
///
/// ```
/// use prospector_domain::SearchCriteria;
/// use prospector_fetch::OfflineSource;
/// use prospector_pipeline::{LeadPipeline, PipelineConfig};
/// use prospector_synthesizer::CatalogSeed;
///
/// let mut pipeline = LeadPipeline::new(OfflineSource, PipelineConfig::offline());
/// let criteria = SearchCriteria::new("fintech", "30to50").with_count(3);
/// let output = pipeline.run(&criteria, &mut CatalogSeed::Fixed(7).rng()).unwrap();
/// assert!(output.rows.len() >= 3);
/// println!("{}", output.metrics.summary());
/// ```
pub struct LeadPipeline<S: PageSource> {
    source: S,
    config: PipelineConfig,
    facts: TextFactExtractor,
    persons: PersonExtractor,
    metrics: RunMetrics,
}

impl<S: PageSource> LeadPipeline<S> {
    /// Create a pipeline over a page source
    pub fn new(source: S, config: PipelineConfig) -> Self {
        let facts = TextFactExtractor::new(config.extractor.clone());
        Self {
            source,
            config,
            facts,
            persons: PersonExtractor::new(),
            metrics: RunMetrics::new(),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Metrics accumulated since the last run started
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    fn fetch(&mut self, url: &str) -> Option<Page> {
        match self.source.fetch_page(url) {
            Ok(page) => {
                self.metrics.record_request(true);
                Some(page)
            }
            Err(e) => {
                self.metrics.record_request(false);
                debug!(url, "Fetch failed: {}", e);
                None
            }
        }
    }

    fn search(&mut self, query: &str) -> Option<Page> {
        match self.source.search(query) {
            Ok(page) => {
                self.metrics.record_request(true);
                Some(page)
            }
            Err(e) => {
                self.metrics.record_request(false);
                debug!(query, "Search failed: {}", e);
                None
            }
        }
    }

    /// Catalog for the criteria, narrowed to the band and the requested count
    pub fn select_companies<R: Rng + ?Sized>(
        &self,
        criteria: &SearchCriteria,
        rng: &mut R,
    ) -> Vec<CatalogEntry> {
        let catalog = catalog_for(criteria.industry(), self.config.catalog_size, rng);
        let mut selected = select(&catalog, criteria.band());
        selected.truncate(criteria.num_companies);
        debug!(
            industry = %criteria.industry(),
            revenue = %criteria.revenue,
            selected = selected.len(),
            "Selected companies"
        );
        selected
    }

    /// Assemble a company record, using page text when the landing page has any
    pub fn describe(&mut self, candidate: &Candidate) -> CompanyRecord {
        self.describe_with_page(candidate).0
    }

    fn describe_with_page(&mut self, candidate: &Candidate) -> (CompanyRecord, Option<Page>) {
        let landing = self.fetch(&candidate.url);
        let page_text = landing
            .as_ref()
            .filter(|page| !page.is_blank())
            .map(|page| page.text.as_str());
        let facts = match page_text {
            Some(text) => self.facts.extract_with_snippet(text, &candidate.snippet),
            None => self.facts.extract(&candidate.snippet),
        };
        self.metrics.record_company(page_text.is_some());

        let record = CompanyRecord::new(
            company_name(&candidate.title),
            candidate.url.clone(),
            self.facts.description(&candidate.snippet),
        )
        .with_facts(facts)
        .with_revenue_value(candidate.revenue_value);
        (record, landing)
    }

    /// Up to `max` keymen for a company
    ///
    /// Site pages first (stopping at the first page with any match), then one
    /// search when that left fewer than `max`, then the synthetic ladder when
    /// nothing was found at all.
    pub fn find_keymen(
        &mut self,
        company: &str,
        url: &str,
        max: usize,
        scope: &mut NameScope,
    ) -> Vec<KeymanRecord> {
        self.keymen_for(company, url, max, scope, Landing::Unfetched)
    }

    fn keymen_for(
        &mut self,
        company: &str,
        url: &str,
        max: usize,
        scope: &mut NameScope,
        landing: Landing,
    ) -> Vec<KeymanRecord> {
        let mut keymen = match landing {
            Landing::Fetched(page) => page
                .map(|p| self.persons.extract(&p.text))
                .unwrap_or_default(),
            Landing::Unfetched => self.keymen_on_page(url),
        };

        let base = url.trim_end_matches('/');
        for path in PROFILE_PATHS {
            if !keymen.is_empty() {
                break;
            }
            keymen = self.keymen_on_page(&format!("{}{}", base, path));
        }

        if keymen.len() < max {
            let query = format!("{} 代表取締役 社長 役員", company);
            if let Some(page) = self.search(&query) {
                keymen.extend(self.persons.extract(&page.text));
            }
        }

        if keymen.is_empty() {
            debug!(company, "No keymen in page text, generating synthetic keymen");
            keymen = synthetic_keymen(company, max, scope);
        }

        let mut keymen = dedupe(keymen);
        keymen.truncate(max);

        let synthetic = keymen.iter().filter(|k| k.is_synthetic()).count();
        self.metrics.record_keymen(keymen.len() - synthetic, synthetic);
        keymen
    }

    fn keymen_on_page(&mut self, url: &str) -> Vec<KeymanRecord> {
        self.fetch(url)
            .map(|page| self.persons.extract(&page.text))
            .unwrap_or_default()
    }

    fn profiles(&mut self, keyman: &KeymanRecord, company: &str) -> SocialProfileSet {
        if !self.config.resolve_social {
            return SocialProfileSet::none();
        }
        let resolver = SocialProfileResolver::new(&self.source, self.config.social);
        let profiles = resolver.resolve(&keyman.name, company, &keyman.title);
        self.metrics.record_profiles(profiles.found_count());
        profiles
    }

    /// Run the criteria-driven pipeline
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        criteria: &SearchCriteria,
        rng: &mut R,
    ) -> Result<RunOutput, PipelineError> {
        criteria.validate().map_err(PipelineError::InvalidCriteria)?;
        self.metrics = RunMetrics::new();
        info!(
            conditions = %criteria.conditions_text(),
            count = criteria.num_companies,
            "Pipeline run started"
        );

        let candidates = self
            .select_companies(criteria, rng)
            .into_iter()
            .map(Candidate::from)
            .collect();
        self.process(candidates, criteria.max_keymen)
    }

    /// Run from free-text conditions through a live search
    ///
    /// When the search yields no hits the run continues on the
    /// [`FALLBACK_INDUSTRY`] / [`FALLBACK_REVENUE`] catalog.
    pub fn run_free_text<R: Rng + ?Sized>(
        &mut self,
        conditions: &str,
        count: usize,
        rng: &mut R,
    ) -> Result<RunOutput, PipelineError> {
        self.metrics = RunMetrics::new();
        info!(conditions, count, "Free-text run started");

        let query = format!("{} 企業 会社 代表取締役", conditions);
        let hits = self.search(&query).map(|page| page.hits).unwrap_or_default();

        let candidates: Vec<Candidate> = if hits.is_empty() {
            warn!(conditions, "Search returned no companies, using sample catalog");
            let fallback =
                SearchCriteria::new(FALLBACK_INDUSTRY, FALLBACK_REVENUE).with_count(count);
            self.select_companies(&fallback, rng)
                .into_iter()
                .map(Candidate::from)
                .collect()
        } else {
            hits.into_iter().take(count).map(Candidate::from).collect()
        };
        self.process(candidates, self.config.max_keymen)
    }

    fn process(
        &mut self,
        candidates: Vec<Candidate>,
        max_keymen: usize,
    ) -> Result<RunOutput, PipelineError> {
        if candidates.is_empty() {
            return Err(PipelineError::NoCandidates);
        }

        let started = Instant::now();
        let total = candidates.len();
        let mut scope = NameScope::new();
        let mut rows = Vec::new();

        for (index, candidate) in candidates.iter().enumerate() {
            let (company, landing) = self.describe_with_page(candidate);
            info!(company = %company.name, "Company {}/{}", index + 1, total);

            let keymen = self.keymen_for(
                &company.name,
                &company.url,
                max_keymen,
                &mut scope,
                Landing::Fetched(landing),
            );
            for keyman in &keymen {
                let profiles = self.profiles(keyman, &company.name);
                rows.push(LeadRow::new(&company, keyman, &profiles));
            }
        }

        self.metrics.rows = rows.len();
        self.metrics.elapsed = started.elapsed();
        info!(rows = rows.len(), companies = total, "Pipeline run finished");
        Ok(RunOutput {
            rows,
            metrics: self.metrics.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospector_fetch::{OfflineSource, StaticSource};
    use prospector_synthesizer::CatalogSeed;

    fn candidate(url: &str, snippet: &str) -> Candidate {
        Candidate {
            title: "株式会社テスト | 物流DX".to_string(),
            url: url.to_string(),
            snippet: snippet.to_string(),
            revenue_value: Some(20.0),
        }
    }

    #[test]
    fn test_describe_falls_back_to_snippet() {
        let mut pipeline = LeadPipeline::new(OfflineSource, PipelineConfig::offline());
        let entry = candidate("https://t.example", "2019年設立、従業員40名のクラウド企業。");
        let record = pipeline.describe(&entry);
        assert_eq!(record.name, "株式会社テスト");
        assert_eq!(record.facts.founded_year.as_deref(), Some("2019年"));
        assert_eq!(record.facts.employees.as_deref(), Some("40名"));
        assert_eq!(record.facts.business_domains, vec!["SaaS"]);
        assert_eq!(record.revenue_value, Some(20.0));
        assert_eq!(pipeline.metrics().snippet_facts, 1);
    }

    #[test]
    fn test_describe_prefers_page_text() {
        let mut source = StaticSource::new();
        source.add_page("https://t.example", Page::from_text("設立：2001年 従業員数：900名"));
        let mut pipeline = LeadPipeline::new(source, PipelineConfig::default());
        let record = pipeline.describe(&candidate("https://t.example", "2019年設立、従業員40名。"));
        assert_eq!(record.facts.founded_year.as_deref(), Some("2001年"));
        assert_eq!(record.facts.employees.as_deref(), Some("900名"));
        assert_eq!(pipeline.metrics().page_facts, 1);
    }

    #[test]
    fn test_blank_page_counts_as_unavailable() {
        let mut source = StaticSource::new();
        source.add_page("https://t.example", Page::from_text("   "));
        let mut pipeline = LeadPipeline::new(source, PipelineConfig::default());
        let record = pipeline.describe(&candidate("https://t.example", "2019年設立"));
        assert_eq!(record.facts.founded_year.as_deref(), Some("2019年"));
    }

    #[test]
    fn test_keymen_stop_at_first_matching_page() {
        let mut source = StaticSource::new();
        source.add_page("https://t.example/about", Page::from_text("代表取締役 山田太郎"));
        source.add_page("https://t.example/about-us", Page::from_text("取締役 佐藤次郎"));
        source.add_search(
            "株式会社テスト 代表取締役 社長 役員",
            Page::from_text("CTO：鈴木一郎。"),
        );
        let mut pipeline = LeadPipeline::new(source.clone(), PipelineConfig::default());
        let keymen =
            pipeline.find_keymen("株式会社テスト", "https://t.example/", 5, &mut NameScope::new());

        let names: Vec<&str> = keymen.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["山田太郎", "鈴木一郎"]);
        assert!(keymen.iter().all(|k| !k.is_synthetic()));
        // landing, /company, /about, then the search
        assert_eq!(source.call_count(), 4);
    }

    #[test]
    fn test_enough_site_keymen_skip_search() {
        let mut source = StaticSource::new();
        source.add_page("https://t.example", Page::from_text("代表取締役 山田太郎"));
        let mut pipeline = LeadPipeline::new(source.clone(), PipelineConfig::default());
        let keymen =
            pipeline.find_keymen("株式会社テスト", "https://t.example", 1, &mut NameScope::new());
        assert_eq!(keymen.len(), 1);
        assert_eq!(source.call_count(), 1);
    }

    #[test]
    fn test_synthetic_keymen_when_nothing_found() {
        let mut pipeline = LeadPipeline::new(OfflineSource, PipelineConfig::offline());
        let mut scope = NameScope::new();
        let keymen = pipeline.find_keymen("株式会社テスト", "https://t.example", 3, &mut scope);
        assert_eq!(keymen.len(), 3);
        assert!(keymen.iter().all(KeymanRecord::is_synthetic));
        assert_eq!(keymen[0].title, "代表取締役");
        assert_eq!(scope.len(), 3);
        assert_eq!(pipeline.metrics().synthetic_keymen, 3);
    }

    #[test]
    fn test_invalid_criteria_rejected() {
        let mut pipeline = LeadPipeline::new(OfflineSource, PipelineConfig::offline());
        let criteria = SearchCriteria::new("fintech", "30to50").with_count(0);
        let result = pipeline.run(&criteria, &mut CatalogSeed::Fixed(1).rng());
        assert!(matches!(result, Err(PipelineError::InvalidCriteria(_))));
    }

    #[test]
    fn test_free_text_uses_search_hits() {
        let mut source = StaticSource::new();
        source.add_search(
            "物流 SaaS 企業 会社 代表取締役",
            Page {
                hits: vec![SearchHit {
                    title: "株式会社ロジテック | 物流".to_string(),
                    url: "https://logi.example".to_string(),
                    snippet: "倉庫管理のクラウドサービス。".to_string(),
                }],
                ..Default::default()
            },
        );
        source.add_page("https://logi.example", Page::from_text("代表取締役 田中太郎"));
        let mut pipeline = LeadPipeline::new(source, PipelineConfig::default());
        let output = pipeline
            .run_free_text("物流 SaaS", 5, &mut CatalogSeed::Fixed(3).rng())
            .unwrap();

        assert_eq!(output.rows.len(), 1);
        assert_eq!(output.rows[0].company_name, "株式会社ロジテック");
        assert_eq!(output.rows[0].keyman_name, "田中太郎");
        assert_eq!(output.rows[0].keyman_title, "代表取締役");
        assert_eq!(output.rows[0].facebook_url, "なし");
    }

    #[test]
    fn test_free_text_falls_back_to_sample_catalog() {
        let mut pipeline = LeadPipeline::new(OfflineSource, PipelineConfig::offline());
        let output = pipeline
            .run_free_text("何でも", 2, &mut CatalogSeed::Fixed(3).rng())
            .unwrap();
        assert_eq!(output.metrics.companies, 2);
        assert_eq!(output.metrics.snippet_facts, 2);
        assert!(output.rows.len() >= 2);
    }

    #[test]
    fn test_social_profiles_resolved_when_enabled() {
        let mut source = StaticSource::new();
        source.add_page("https://t.example", Page::from_text("代表取締役 山田太郎"));
        source.add_search(
            "山田太郎 株式会社テスト site:facebook.com",
            Page {
                links: vec!["/url?q=https://www.facebook.com/yamada.taro&sa=U".to_string()],
                ..Default::default()
            },
        );
        let mut pipeline = LeadPipeline::new(source, PipelineConfig::thorough());
        let keymen =
            pipeline.find_keymen("株式会社テスト", "https://t.example", 1, &mut NameScope::new());
        let profiles = pipeline.profiles(&keymen[0], "株式会社テスト");
        assert_eq!(profiles.facebook.as_deref(), Some("https://www.facebook.com/yamada.taro"));
        assert_eq!(profiles.x_display(), "なし");
        assert_eq!(pipeline.metrics().profiles_found, 1);
    }
}
