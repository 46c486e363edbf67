//! Flattened lead rows
//!
//! A [`LeadRow`] is the unit every export format consumes: one row per
//! (company, keyman) pair. Field order and header text are external contract;
//! downstream spreadsheets key off them.

use crate::{CompanyRecord, KeymanRecord, SocialProfileSet};
use serde::{Deserialize, Serialize};

/// One exported lead: company facts joined with one keyman
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadRow {
    /// 企業名
    #[serde(rename = "企業名")]
    pub company_name: String,
    /// 企業URL
    #[serde(rename = "企業URL")]
    pub company_url: String,
    /// 事業概要
    #[serde(rename = "事業概要")]
    pub description: String,
    /// 設立年
    #[serde(rename = "設立年")]
    pub founded_year: String,
    /// 売上
    #[serde(rename = "売上")]
    pub revenue: String,
    /// 利益
    #[serde(rename = "利益")]
    pub profit: String,
    /// 従業員規模
    #[serde(rename = "従業員規模")]
    pub employees: String,
    /// 事業領域
    #[serde(rename = "事業領域")]
    pub business_domains: String,
    /// 注力ポイント
    #[serde(rename = "注力ポイント")]
    pub focus_points: String,
    /// キーマン氏名
    #[serde(rename = "キーマン氏名")]
    pub keyman_name: String,
    /// 役職名
    #[serde(rename = "役職名")]
    pub keyman_title: String,
    /// Facebook URL
    #[serde(rename = "Facebook URL")]
    pub facebook_url: String,
    /// X（旧Twitter） URL
    #[serde(rename = "X（旧Twitter） URL")]
    pub x_url: String,
}

impl LeadRow {
    /// Column headers, in export order
    pub const HEADERS: [&'static str; 13] = [
        "企業名",
        "企業URL",
        "事業概要",
        "設立年",
        "売上",
        "利益",
        "従業員規模",
        "事業領域",
        "注力ポイント",
        "キーマン氏名",
        "役職名",
        "Facebook URL",
        "X（旧Twitter） URL",
    ];

    /// Join a company, one of its keymen and that keyman's profiles
    pub fn new(
        company: &CompanyRecord,
        keyman: &KeymanRecord,
        profiles: &SocialProfileSet,
    ) -> Self {
        let facts = &company.facts;
        Self {
            company_name: company.name.clone(),
            company_url: company.url.clone(),
            description: company.description.clone(),
            founded_year: facts.founded_year.clone().unwrap_or_default(),
            revenue: facts.revenue.clone().unwrap_or_default(),
            profit: facts.profit.clone().unwrap_or_default(),
            employees: facts.employees.clone().unwrap_or_default(),
            business_domains: facts.business_domains_text(),
            focus_points: facts.focus_points.clone().unwrap_or_default(),
            keyman_name: keyman.name.clone(),
            keyman_title: keyman.title.clone(),
            facebook_url: profiles.facebook_display().to_string(),
            x_url: profiles.x_display().to_string(),
        }
    }

    /// Field values in the same order as [`LeadRow::HEADERS`]
    pub fn values(&self) -> [&str; 13] {
        [
            &self.company_name,
            &self.company_url,
            &self.description,
            &self.founded_year,
            &self.revenue,
            &self.profit,
            &self.employees,
            &self.business_domains,
            &self.focus_points,
            &self.keyman_name,
            &self.keyman_title,
            &self.facebook_url,
            &self.x_url,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompanyFacts;

    fn sample_row() -> LeadRow {
        let facts = CompanyFacts {
            founded_year: Some("2018年".into()),
            business_domains: vec!["SaaS".into(), "フィンテック".into()],
            ..Default::default()
        };
        let company =
            CompanyRecord::new("株式会社フィンテックラボ", "https://example.com", "決済SaaS")
                .with_facts(facts);
        let keyman = KeymanRecord::extracted("田中 太郎", "代表取締役");
        LeadRow::new(&company, &keyman, &SocialProfileSet::none())
    }

    #[test]
    fn test_missing_facts_become_empty_strings() {
        let row = sample_row();
        assert_eq!(row.founded_year, "2018年");
        assert_eq!(row.revenue, "");
        assert_eq!(row.business_domains, "SaaS、フィンテック");
        assert_eq!(row.facebook_url, "なし");
    }

    #[test]
    fn test_json_keys_follow_header_order() {
        let json = serde_json::to_string(&sample_row()).unwrap();
        let mut last = 0;
        for header in LeadRow::HEADERS {
            let key = format!("\"{}\"", header);
            let pos = json.find(&key).unwrap_or_else(|| panic!("missing key {}", header));
            assert!(pos >= last, "{} out of order", header);
            last = pos;
        }
    }

    #[test]
    fn test_values_align_with_headers() {
        let row = sample_row();
        let values = row.values();
        assert_eq!(values.len(), LeadRow::HEADERS.len());
        assert_eq!(values[0], "株式会社フィンテックラボ");
        assert_eq!(values[9], "田中 太郎");
        assert_eq!(values[10], "代表取締役");
    }
}
