//! Synthetic company catalog
//!
//! Expands the five seeds of an industry into a fixed-size catalog of
//! plausible variants. All randomness flows through the caller's RNG, so a
//! fixed seed reproduces the catalog exactly.

use crate::seeds::{seeds_for, SeedEntry};
use prospector_domain::Industry;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Catalog size used by the pipeline
pub const DEFAULT_CATALOG_SIZE: usize = 100;

const CORPORATE_MARK: &str = "株式会社";
const TITLE_SEPARATOR: &str = " | ";

const PREFIXES: [&str; 18] = [
    "",
    "ネクスト",
    "アドバンス",
    "プレミアム",
    "グローバル",
    "ジャパン",
    "デジタル",
    "スマート",
    "フューチャー",
    "モダン",
    "エキスパート",
    "プロ",
    "トップ",
    "エリート",
    "ハイクオリティ",
    "イノベーティブ",
    "クリエイティブ",
    "ダイナミック",
];

const LOCATIONS: [&str; 18] = [
    "東京", "大阪", "名古屋", "福岡", "札幌", "横浜", "神戸", "京都", "仙台", "広島", "関西",
    "関東", "九州", "北海道", "東北", "中部", "中国", "四国",
];

const SUFFIXES: [&str; 11] = [
    "ホールディングス",
    "グループ",
    "ラボ",
    "スタジオ",
    "ワークス",
    "システムズ",
    "ソリューションズ",
    "サービス",
    "パートナーズ",
    "アソシエイツ",
    "エンタープライズ",
];

/// Revenue brackets in 億円, inclusive
const REVENUE_BRACKETS: [(u32, u32); 10] = [
    (3, 8),
    (8, 15),
    (15, 25),
    (25, 35),
    (35, 50),
    (50, 70),
    (70, 90),
    (90, 120),
    (120, 200),
    (200, 500),
];

/// Headcount brackets, inclusive
const EMPLOYEE_BRACKETS: [(u32, u32); 8] = [
    (15, 30),
    (30, 50),
    (50, 80),
    (80, 120),
    (120, 200),
    (200, 350),
    (350, 500),
    (500, 1000),
];

const FOUNDED_YEARS: std::ops::RangeInclusive<u32> = 2015..=2022;

static RE_FOUNDED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}年設立").unwrap());
static RE_EMPLOYEES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"従業員\d+名").unwrap());
static RE_REVENUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"売上高\d+億円").unwrap());
static RE_PROFIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"営業利益\d+(\.\d+)?億円").unwrap());

/// A catalog candidate, shaped like a search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// `株式会社Name | tagline`
    pub title: String,
    /// Homepage URL
    pub url: String,
    /// Description snippet
    pub snippet: String,
    /// Revenue in 億円
    pub revenue_value: f64,
}

impl From<&SeedEntry> for CatalogEntry {
    fn from(seed: &SeedEntry) -> Self {
        Self {
            title: seed.title.to_string(),
            url: seed.url.to_string(),
            snippet: seed.snippet.to_string(),
            revenue_value: seed.revenue_value,
        }
    }
}

/// Where catalog randomness comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSeed {
    /// Reproducible catalog
    Fixed(u64),
    /// Seed from the wall clock (a new catalog per run)
    #[default]
    TimeBased,
}

impl CatalogSeed {
    /// `Some(seed)` is fixed, `None` is time-based
    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or(CatalogSeed::TimeBased, CatalogSeed::Fixed)
    }

    /// Build the RNG for one run
    pub fn rng(&self) -> StdRng {
        match self {
            CatalogSeed::Fixed(seed) => StdRng::seed_from_u64(*seed),
            CatalogSeed::TimeBased => {
                let nanos = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or_default();
                StdRng::seed_from_u64(nanos)
            }
        }
    }
}

/// Build a catalog of exactly `target` entries for an industry
///
/// The industry's seeds come first, verbatim; variants follow.
pub fn catalog_for<R: Rng + ?Sized>(
    industry: Industry,
    target: usize,
    rng: &mut R,
) -> Vec<CatalogEntry> {
    let seeds = seeds_for(industry);
    let mut catalog: Vec<CatalogEntry> =
        seeds.iter().take(target).map(CatalogEntry::from).collect();

    let mut variation_index = 0usize;
    while catalog.len() < target {
        let base = &seeds[variation_index % seeds.len()];
        variation_index += 1;
        catalog.push(vary(base, variation_index, rng));
    }

    debug!(industry = %industry, size = catalog.len(), "Built synthetic catalog");
    catalog
}

fn pick<'a, R: Rng + ?Sized>(items: &[&'a str], rng: &mut R) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn pick_bracket<R: Rng + ?Sized>(brackets: &[(u32, u32)], rng: &mut R) -> u32 {
    let (low, high) = brackets[rng.random_range(0..brackets.len())];
    rng.random_range(low..=high)
}

fn vary<R: Rng + ?Sized>(base: &SeedEntry, variation_index: usize, rng: &mut R) -> CatalogEntry {
    let (head, tagline) = match base.title.split_once(TITLE_SEPARATOR) {
        Some((head, tagline)) => (head, tagline),
        None => (base.title, ""),
    };
    let base_name = head.replace(CORPORATE_MARK, "").trim().to_string();

    let name = match variation_index % 3 {
        0 => format!("{}{}", pick(&PREFIXES, rng), base_name),
        1 => format!("{}{}", pick(&LOCATIONS, rng), base_name),
        _ => format!("{}{}", base_name, pick(&SUFFIXES, rng)),
    };

    let slug: String = name
        .replace(CORPORATE_MARK, "")
        .replace(' ', "-")
        .to_lowercase()
        .chars()
        .take(20)
        .collect();
    let url = format!("https://example-{}-{}.com", variation_index, slug);

    let revenue = pick_bracket(&REVENUE_BRACKETS, rng);
    let margin: f64 = rng.random_range(0.05..=0.15);
    let profit = (f64::from(revenue) * margin * 10.0).round() / 10.0;
    let employees = pick_bracket(&EMPLOYEE_BRACKETS, rng);
    let year = rng.random_range(FOUNDED_YEARS);

    let snippet = rewrite_snippet(base.snippet, year, employees, revenue, profit);

    CatalogEntry {
        title: format!("{}{}{}{}", CORPORATE_MARK, name, TITLE_SEPARATOR, tagline),
        url,
        snippet,
        revenue_value: f64::from(revenue),
    }
}

fn rewrite_snippet(snippet: &str, year: u32, employees: u32, revenue: u32, profit: f64) -> String {
    let text = RE_FOUNDED.replace_all(snippet, NoExpand(&format!("{}年設立", year)));
    let text = RE_EMPLOYEES.replace_all(&text, NoExpand(&format!("従業員{}名", employees)));
    let text = RE_REVENUE.replace_all(&text, NoExpand(&format!("売上高{}億円", revenue)));
    let text = RE_PROFIT.replace_all(&text, NoExpand(&format!("営業利益{:.1}億円", profit)));
    text.into_owned()
}
