//! Company records and the facts extracted about them

use serde::{Deserialize, Serialize};

/// Separator used when rendering multi-valued facts (full-width comma)
pub const FACT_SEPARATOR: &str = "、";

/// Descriptive facts pulled out of page or snippet text
///
/// Every field is optional: extraction never fails, it only finds less.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyFacts {
    /// Founding year, rendered as `"YYYY年"`
    pub founded_year: Option<String>,

    /// Revenue phrase exactly as it appeared (e.g. `"52億円"`)
    pub revenue: Option<String>,

    /// Profit phrase exactly as it appeared
    pub profit: Option<String>,

    /// Headcount rendered as `"N名"` with separators stripped
    pub employees: Option<String>,

    /// Up to three business categories, in declaration order
    #[serde(default)]
    pub business_domains: Vec<String>,

    /// Up to two focus phrases joined by a full-width comma
    pub focus_points: Option<String>,
}

impl CompanyFacts {
    /// Business domains joined for display
    pub fn business_domains_text(&self) -> String {
        self.business_domains.join(FACT_SEPARATOR)
    }

    /// True when nothing at all was extracted
    pub fn is_empty(&self) -> bool {
        self.founded_year.is_none()
            && self.revenue.is_none()
            && self.profit.is_none()
            && self.employees.is_none()
            && self.business_domains.is_empty()
            && self.focus_points.is_none()
    }
}

/// A candidate company, assembled once and never mutated afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Display name
    pub name: String,

    /// Homepage URL
    pub url: String,

    /// Short description (at most 200 characters of the search snippet)
    pub description: String,

    /// Extracted facts
    #[serde(flatten)]
    pub facts: CompanyFacts,

    /// Revenue in units of 100 million yen; used for band filtering only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_value: Option<f64>,
}

impl CompanyRecord {
    /// Create a record with no extracted facts yet
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
            facts: CompanyFacts::default(),
            revenue_value: None,
        }
    }

    /// Attach extracted facts
    pub fn with_facts(mut self, facts: CompanyFacts) -> Self {
        self.facts = facts;
        self
    }

    /// Attach the numeric revenue used by band filtering
    pub fn with_revenue_value(mut self, value: Option<f64>) -> Self {
        self.revenue_value = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_domains_text_uses_full_width_comma() {
        let facts = CompanyFacts {
            business_domains: vec!["SaaS".into(), "DX".into()],
            ..Default::default()
        };
        assert_eq!(facts.business_domains_text(), "SaaS、DX");
    }

    #[test]
    fn test_empty_facts() {
        assert!(CompanyFacts::default().is_empty());
        let facts = CompanyFacts {
            employees: Some("70名".into()),
            ..Default::default()
        };
        assert!(!facts.is_empty());
    }

    #[test]
    fn test_builder() {
        let record = CompanyRecord::new("株式会社テスト", "https://example.com", "desc")
            .with_revenue_value(Some(12.0));
        assert_eq!(record.revenue_value, Some(12.0));
        assert!(record.facts.is_empty());
    }
}
