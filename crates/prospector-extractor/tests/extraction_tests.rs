//! Extraction over realistic company page text

use prospector_domain::KeymanRecord;
use prospector_extractor::{
    dedupe, is_valid_twitter_url, synthetic_keymen, NameScope, PersonExtractor, TextFactExtractor,
};
use prospector_fetch::html::parse_page;

const PROFILE_PAGE: &str = "会社概要\n\
社名：株式会社ロジテック\n\
設立：2012年4月\n\
従業員数：1,250名\n\
売上高：85億円（2023年度）\n\
経常利益：7.5億円\n\
代表取締役社長 田中太郎。\n\
取締役 佐藤次郎。\n\
CTO：鈴木一郎。\n\
クラウド型の倉庫管理SaaSを提供し、アジア市場への海外展開を推進しています。";

#[test]
fn test_profile_page_facts() {
    let facts = TextFactExtractor::default().extract(PROFILE_PAGE);
    assert_eq!(facts.founded_year.as_deref(), Some("2012年"));
    assert_eq!(facts.employees.as_deref(), Some("1250名"));
    assert_eq!(facts.revenue.as_deref(), Some("85億円"));
    assert_eq!(facts.profit.as_deref(), Some("7.5億円"));
    assert_eq!(facts.business_domains, vec!["SaaS"]);
    assert!(facts.focus_points.unwrap().contains("推進"));
}

#[test]
fn test_profile_page_keymen() {
    let keymen = dedupe(PersonExtractor::new().extract(PROFILE_PAGE));
    let pairs: Vec<(&str, &str)> =
        keymen.iter().map(|k| (k.name.as_str(), k.title.as_str())).collect();
    assert_eq!(pairs[0], ("田中太郎", "代表取締役社長"));
    assert!(pairs.contains(&("鈴木一郎", "CTO")));
    assert!(pairs.contains(&("佐藤次郎", "取締役")));
    assert!(keymen.iter().all(|k| !k.is_synthetic()));
}

const PROFILE_TABLE: &str = r#"<html><body><table>
    <tr><th>代表取締役</th><td>山田 太郎</td></tr>
    <tr><th>設立</th><td>2012年4月</td></tr>
    <tr><th>従業員数</th><td>120名</td></tr>
    <tr><th>取締役</th><td>佐藤 次郎</td></tr>
    </table></body></html>"#;

#[test]
fn test_table_layout_keymen() {
    let page = parse_page(PROFILE_TABLE);
    let keymen = PersonExtractor::new().extract(&page.text);
    assert_eq!(
        keymen,
        vec![
            KeymanRecord::extracted("山田 太郎", "代表取締役"),
            KeymanRecord::extracted("佐藤 次郎", "取締役"),
        ]
    );

    let facts = TextFactExtractor::default().extract(&page.text);
    assert_eq!(facts.founded_year.as_deref(), Some("2012年"));
    assert_eq!(facts.employees.as_deref(), Some("120名"));
}

#[test]
fn test_synthetic_ladder_is_reproducible() {
    let first = synthetic_keymen("株式会社ロジテック", 5, &mut NameScope::new());
    let second = synthetic_keymen("株式会社ロジテック", 5, &mut NameScope::new());
    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
}

#[test]
fn test_x_status_links_rejected() {
    assert!(!is_valid_twitter_url("https://twitter.com/logitech_jp/status/1789"));
    assert!(is_valid_twitter_url("https://twitter.com/logitech_jp"));
}
