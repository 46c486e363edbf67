//! Company fact extraction from free Japanese text
//!
//! Each fact has an ordered list of patterns; the first pattern that matches
//! anywhere in the text wins. Nothing here fails: a fact that cannot be found
//! is simply absent.

use crate::config::ExtractorConfig;
use prospector_domain::company::FACT_SEPARATOR;
use prospector_domain::CompanyFacts;
use regex::Regex;
use std::sync::LazyLock;

static FOUNDED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"設立[：:\s]*(\d{4})年",
        r"(\d{4})年に?設立",
        r"創業[：:\s]*(\d{4})年",
        r"(\d{4})年に?創業",
    ])
});

static REVENUE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"売上高?[：:\s]*([0-9,\.]+\s*(?:億円|百万円|千万円|万円|円))",
        r"売上[：:\s]*([0-9,\.]+\s*(?:億円|百万円|千万円|万円))",
        r"年商[：:\s]*([0-9,\.]+\s*(?:億円|百万円|千万円|万円))",
        r"売上規模[：:\s]*([0-9,\.]+\s*(?:億円|百万円|千万円|万円))",
    ])
});

static PROFIT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"営業利益[：:\s]*([0-9,\.]+\s*(?:億円|百万円|千万円|万円))",
        r"経常利益[：:\s]*([0-9,\.]+\s*(?:億円|百万円|千万円|万円))",
        r"純利益[：:\s]*([0-9,\.]+\s*(?:億円|百万円|千万円|万円))",
        r"当期利益[：:\s]*([0-9,\.]+\s*(?:億円|百万円|千万円|万円))",
    ])
});

static EMPLOYEE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"従業員数?[：:\s]*([0-9,]+)\s*(?:名|人)",
        r"社員数[：:\s]*([0-9,]+)\s*(?:名|人)",
        r"([0-9,]+)\s*名?の従業員",
        r"([0-9,]+)\s*人体制",
    ])
});

/// Business categories and their trigger keywords, in priority order
pub const BUSINESS_DOMAINS: [(&str, &[&str]); 10] = [
    ("SaaS", &["SaaS", "クラウド", "サブスクリプション"]),
    ("AI/機械学習", &["AI", "機械学習", "ディープラーニング", "人工知能"]),
    ("DX", &["DX", "デジタルトランスフォーメーション", "デジタル化"]),
    ("フィンテック", &["フィンテック", "FinTech", "決済", "金融テクノロジー"]),
    ("マーケティング", &["マーケティング", "MA", "マーケティングオートメーション"]),
    ("HR Tech", &["HRTech", "人事", "採用管理", "タレントマネジメント"]),
    ("Eコマース", &["EC", "Eコマース", "オンラインショップ", "通販"]),
    ("IoT", &["IoT", "センサー", "スマートデバイス"]),
    ("ヘルスケア", &["ヘルスケア", "医療", "メディカル"]),
    ("エンタープライズ", &["エンタープライズ", "大企業向け", "基幹システム"]),
];

/// Focus triggers, in priority order
pub const FOCUS_KEYWORDS: [&str; 13] = [
    "成長",
    "拡大",
    "強化",
    "注力",
    "推進",
    "展開",
    "グローバル",
    "海外展開",
    "シェア拡大",
    "新規事業",
    "R&D",
    "研究開発",
    "イノベーション",
];

static FOCUS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FOCUS_KEYWORDS
        .iter()
        .map(|kw| Regex::new(&format!("[^。、]*{}[^。、]*", regex::escape(kw))).unwrap())
        .collect()
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Founding year as `"YYYY年"`
pub fn founded_year(text: &str) -> Option<String> {
    first_capture(&FOUNDED_PATTERNS, text).map(|year| format!("{}年", year))
}

/// Revenue phrase, verbatim
pub fn revenue(text: &str) -> Option<String> {
    first_capture(&REVENUE_PATTERNS, text)
}

/// Profit phrase, verbatim
pub fn profit(text: &str) -> Option<String> {
    first_capture(&PROFIT_PATTERNS, text)
}

/// Headcount as `"N名"`, separators stripped
pub fn employee_count(text: &str) -> Option<String> {
    first_capture(&EMPLOYEE_PATTERNS, text).map(|count| format!("{}名", count.replace(',', "")))
}

/// Company name from a search-result title
///
/// Keeps the text before the first `|`, then before the first `-`.
pub fn company_name(title: &str) -> String {
    let head = title.split('|').next().unwrap_or_default();
    head.split('-').next().unwrap_or_default().trim().to_string()
}

/// Extracts [`CompanyFacts`] from page text plus the search snippet
#[derive(Debug, Clone, Default)]
pub struct TextFactExtractor {
    config: ExtractorConfig,
}

impl TextFactExtractor {
    /// Create an extractor with the given limits
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Snippet shortened for the description column
    pub fn description(&self, snippet: &str) -> String {
        truncate_chars(snippet, self.config.description_chars)
    }

    /// Facts from fetched page text, with the snippet joining the keyword window
    pub fn extract_with_snippet(&self, text: &str, snippet: &str) -> CompanyFacts {
        let window = self.keyword_window(text, snippet);
        CompanyFacts {
            founded_year: founded_year(text),
            revenue: revenue(text),
            profit: profit(text),
            employees: employee_count(text),
            business_domains: self.business_domains(&window),
            focus_points: self.focus_points(&window),
        }
    }

    /// Facts from a single text, which is also the whole keyword window
    ///
    /// Used on the search snippet when no page text is available.
    pub fn extract(&self, text: &str) -> CompanyFacts {
        CompanyFacts {
            founded_year: founded_year(text),
            revenue: revenue(text),
            profit: profit(text),
            employees: employee_count(text),
            business_domains: self.business_domains(text),
            focus_points: self.focus_points(text),
        }
    }

    fn keyword_window(&self, text: &str, snippet: &str) -> String {
        let mut window = truncate_chars(text, self.config.domain_window_chars);
        window.push_str(snippet);
        window
    }

    /// Matching business categories, at most the configured count
    pub fn business_domains(&self, window: &str) -> Vec<String> {
        BUSINESS_DOMAINS
            .iter()
            .filter(|(_, triggers)| triggers.iter().any(|kw| window.contains(kw)))
            .map(|(domain, _)| domain.to_string())
            .take(self.config.max_business_domains)
            .collect()
    }

    /// First clause per trigger, joined and length-capped
    pub fn focus_points(&self, window: &str) -> Option<String> {
        let phrases: Vec<&str> = FOCUS_PATTERNS
            .iter()
            .filter_map(|re| re.find(window))
            .map(|m| m.as_str())
            .take(self.config.max_focus_points)
            .collect();
        if phrases.is_empty() {
            return None;
        }
        Some(truncate_chars(&phrases.join(FACT_SEPARATOR), self.config.focus_chars))
    }
}
