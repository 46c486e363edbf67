//! Search criteria: industry keys, revenue bands, and the request shape
//!
//! Industry and band keys are external-facing strings and are kept verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Revenue interval in units of 100 million yen, `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandRange {
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound
    pub max: f64,
}

impl BandRange {
    /// Range used when no recognised band key is given
    pub const OPEN: BandRange = BandRange { min: 0.0, max: 10_000.0 };

    /// Create a range
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` falls in `[min, max)`
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value < self.max
    }

    /// Centre of the interval
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Resolve a band key, falling back to [`BandRange::OPEN`]
    pub fn for_key(key: &str) -> Self {
        RevenueBand::from_key(key).map_or(Self::OPEN, |band| band.range())
    }
}

/// Named revenue bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevenueBand {
    /// Under 1 billion yen
    Under10,
    /// 1–3 billion yen
    From10To30,
    /// 3–5 billion yen
    From30To50,
    /// 5–10 billion yen
    From50To100,
    /// 10–30 billion yen
    From100To300,
    /// 30–50 billion yen
    From300To500,
    /// 50–100 billion yen
    From500To1000,
    /// 100 billion yen and above
    Over1000,
}

impl RevenueBand {
    /// All bands in ascending order
    pub const ALL: [RevenueBand; 8] = [
        RevenueBand::Under10,
        RevenueBand::From10To30,
        RevenueBand::From30To50,
        RevenueBand::From50To100,
        RevenueBand::From100To300,
        RevenueBand::From300To500,
        RevenueBand::From500To1000,
        RevenueBand::Over1000,
    ];

    /// External key
    pub fn key(&self) -> &'static str {
        match self {
            RevenueBand::Under10 => "under10",
            RevenueBand::From10To30 => "10to30",
            RevenueBand::From30To50 => "30to50",
            RevenueBand::From50To100 => "50to100",
            RevenueBand::From100To300 => "100to300",
            RevenueBand::From300To500 => "300to500",
            RevenueBand::From500To1000 => "500to1000",
            RevenueBand::Over1000 => "over1000",
        }
    }

    /// Parse an external key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.key() == key)
    }

    /// Interval covered by the band
    pub fn range(&self) -> BandRange {
        match self {
            RevenueBand::Under10 => BandRange::new(0.0, 10.0),
            RevenueBand::From10To30 => BandRange::new(10.0, 30.0),
            RevenueBand::From30To50 => BandRange::new(30.0, 50.0),
            RevenueBand::From50To100 => BandRange::new(50.0, 100.0),
            RevenueBand::From100To300 => BandRange::new(100.0, 300.0),
            RevenueBand::From300To500 => BandRange::new(300.0, 500.0),
            RevenueBand::From500To1000 => BandRange::new(500.0, 1000.0),
            RevenueBand::Over1000 => BandRange::new(1000.0, 10_000.0),
        }
    }
}

impl fmt::Display for RevenueBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Industries with hand-authored seed data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    /// Beauty and cosmetics
    Beauty,
    /// IT / SaaS
    ItSaas,
    /// Real estate
    RealEstate,
    /// Financial technology
    Fintech,
    /// Healthcare
    Healthcare,
    /// Retail
    Retail,
    /// Manufacturing
    Manufacturing,
    /// Food and beverage
    Food,
    /// Education
    Education,
    /// Logistics
    Logistics,
}

impl Industry {
    /// All industries in seed-table order
    pub const ALL: [Industry; 10] = [
        Industry::Beauty,
        Industry::ItSaas,
        Industry::RealEstate,
        Industry::Fintech,
        Industry::Healthcare,
        Industry::Retail,
        Industry::Manufacturing,
        Industry::Food,
        Industry::Education,
        Industry::Logistics,
    ];

    /// External key
    pub fn key(&self) -> &'static str {
        match self {
            Industry::Beauty => "beauty",
            Industry::ItSaas => "it_saas",
            Industry::RealEstate => "realestate",
            Industry::Fintech => "fintech",
            Industry::Healthcare => "healthcare",
            Industry::Retail => "retail",
            Industry::Manufacturing => "manufacturing",
            Industry::Food => "food",
            Industry::Education => "education",
            Industry::Logistics => "logistics",
        }
    }

    /// Parse an external key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|industry| industry.key() == key)
    }

    /// Parse a key, defaulting unknown keys to [`Industry::ItSaas`]
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or(Industry::ItSaas)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Loose criteria for one prospecting run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Industry key
    pub industry: String,

    /// Revenue band key
    pub revenue: String,

    /// Free keywords (informational; recorded in the conditions text)
    #[serde(default)]
    pub keywords: String,

    /// Number of companies to return
    #[serde(default = "default_num_companies")]
    pub num_companies: usize,

    /// Maximum keymen per company
    #[serde(default = "default_max_keymen")]
    pub max_keymen: usize,
}

fn default_num_companies() -> usize {
    5
}

fn default_max_keymen() -> usize {
    5
}

impl SearchCriteria {
    /// Criteria with default counts
    pub fn new(industry: impl Into<String>, revenue: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            revenue: revenue.into(),
            keywords: String::new(),
            num_companies: default_num_companies(),
            max_keymen: default_max_keymen(),
        }
    }

    /// Set the company count
    pub fn with_count(mut self, count: usize) -> Self {
        self.num_companies = count;
        self
    }

    /// Set the keyman cap
    pub fn with_max_keymen(mut self, max: usize) -> Self {
        self.max_keymen = max;
        self
    }

    /// Set the keywords
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    /// Resolved industry (unknown keys fall back to IT / SaaS)
    pub fn industry(&self) -> Industry {
        Industry::resolve(&self.industry)
    }

    /// Resolved revenue interval
    pub fn band(&self) -> BandRange {
        BandRange::for_key(&self.revenue)
    }

    /// Human-readable summary stored with a job
    pub fn conditions_text(&self) -> String {
        let mut text = format!("業界: {}, 売上: {}", self.industry, self.revenue);
        if !self.keywords.is_empty() {
            text.push_str(&format!(", キーワード: {}", self.keywords));
        }
        text
    }

    /// Validate counts
    pub fn validate(&self) -> Result<(), String> {
        if self.num_companies == 0 {
            return Err("num_companies must be at least 1".to_string());
        }
        if self.num_companies > 100 {
            return Err("num_companies cannot exceed 100".to_string());
        }
        if self.max_keymen == 0 {
            return Err("max_keymen must be at least 1".to_string());
        }
        if self.max_keymen > 10 {
            return Err("max_keymen cannot exceed 10".to_string());
        }
        Ok(())
    }
}
