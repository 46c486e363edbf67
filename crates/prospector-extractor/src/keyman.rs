//! Person (keyman) extraction from page text
//!
//! For each title in [`TITLE_VOCABULARY`], in priority order, two passes run
//! over the text: title-then-name, then name-then-title. A title that only
//! occurs as part of a longer vocabulary title (取締役 inside 代表取締役) is not
//! matched on its own. Results keep discovery order and are not deduplicated
//! here; see [`dedupe`].

use prospector_domain::KeymanRecord;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Recognised titles, highest priority first
pub const TITLE_VOCABULARY: [&str; 13] = [
    "代表取締役社長",
    "代表取締役",
    "取締役社長",
    "社長",
    "CEO",
    "COO",
    "CTO",
    "CFO",
    "CMO",
    "取締役",
    "執行役員",
    "事業部長",
    "部長",
];

/// Kana / kanji run with optional interior spaces; never spans a line break
const NAME_RUN: &str = r"[ぁ-ん一-龯ァ-ヶー]+[ぁ-ん一-龯ァ-ヶー \x{3000}]+[ぁ-ん一-龯ァ-ヶー]+";

struct TitlePatterns {
    title: &'static str,
    title_first: Regex,
    name_first: Regex,
}

static TITLE_PATTERNS: LazyLock<Vec<TitlePatterns>> = LazyLock::new(|| {
    TITLE_VOCABULARY
        .iter()
        .map(|title| {
            let escaped = regex::escape(title);
            TitlePatterns {
                title,
                title_first: Regex::new(&format!(r"{}[：:\s]*({})", escaped, NAME_RUN)).unwrap(),
                name_first: Regex::new(&format!(r"({})[：:\s]*{}", NAME_RUN, escaped)).unwrap(),
            }
        })
        .collect()
});

/// Whether a trimmed capture is plausible as a person name
///
/// 2 to 10 characters, with at least 2 left once ASCII and ideographic
/// spaces are removed.
pub fn is_valid_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(2..=10).contains(&length) {
        return false;
    }
    name.chars().filter(|c| *c != ' ' && *c != '　').count() >= 2
}

/// Whether the title occurrence at byte `start` lies inside a longer title
fn is_shadowed(text: &str, start: usize, title: &str) -> bool {
    let end = start + title.len();
    TITLE_VOCABULARY
        .iter()
        .filter(|longer| longer.len() > title.len() && longer.contains(title))
        .any(|longer| {
            text.match_indices(longer)
                .any(|(at, _)| at <= start && end <= at + longer.len())
        })
}

/// Extracts title/name pairs from text
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonExtractor;

impl PersonExtractor {
    /// Create an extractor
    pub fn new() -> Self {
        Self
    }

    /// All valid (name, title) pairs in discovery order
    pub fn extract(&self, text: &str) -> Vec<KeymanRecord> {
        let mut found = Vec::new();
        for patterns in TITLE_PATTERNS.iter() {
            let passes = [(&patterns.title_first, true), (&patterns.name_first, false)];
            for (regex, title_leads) in passes {
                for caps in regex.captures_iter(text) {
                    let (Some(whole), Some(capture)) = (caps.get(0), caps.get(1)) else {
                        continue;
                    };
                    let title_at = if title_leads {
                        whole.start()
                    } else {
                        whole.end() - patterns.title.len()
                    };
                    if is_shadowed(text, title_at, patterns.title) {
                        continue;
                    }
                    let name = capture.as_str().trim();
                    if is_valid_name(name) {
                        found.push(KeymanRecord::extracted(name, patterns.title));
                    }
                }
            }
        }
        found
    }
}

/// Drop later records whose name was already seen
///
/// Exact string comparison on the name; titles are ignored. Idempotent.
pub fn dedupe(keymen: Vec<KeymanRecord>) -> Vec<KeymanRecord> {
    let mut seen = HashSet::new();
    keymen
        .into_iter()
        .filter(|keyman| seen.insert(keyman.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(keymen: &[KeymanRecord], name: &str, title: &str) -> Option<usize> {
        keymen.iter().position(|k| k.name == name && k.title == title)
    }

    #[test]
    fn test_title_priority_order() {
        let text = "代表取締役社長 田中太郎。取締役 鈴木一郎。";
        let keymen = PersonExtractor::new().extract(text);
        let president = position(&keymen, "田中太郎", "代表取締役社長").expect("president found");
        let director = position(&keymen, "鈴木一郎", "取締役").expect("director found");
        assert!(president < director);
    }

    #[test]
    fn test_name_then_title() {
        let keymen = PersonExtractor::new().extract("山田花子：部長");
        assert_eq!(position(&keymen, "山田花子", "部長"), Some(0));
    }

    #[test]
    fn test_ascii_title_with_colon() {
        let keymen = PersonExtractor::new().extract("CTO：佐藤 健一\n");
        assert!(position(&keymen, "佐藤 健一", "CTO").is_some());
    }

    #[test]
    fn test_overlong_capture_is_dropped() {
        let text = format!("部長 {}", "あ".repeat(15));
        assert!(PersonExtractor::new().extract(&text).is_empty());
    }

    #[test]
    fn test_name_stops_at_line_break() {
        let keymen = PersonExtractor::new().extract("代表取締役\n山田 太郎\n設立\n2012年4月");
        assert_eq!(keymen, vec![KeymanRecord::extracted("山田 太郎", "代表取締役")]);
    }

    #[test]
    fn test_full_width_space_inside_name() {
        let keymen = PersonExtractor::new().extract("CFO：佐藤　花子\n");
        assert_eq!(position(&keymen, "佐藤　花子", "CFO"), Some(0));
    }

    #[test]
    fn test_inner_title_not_matched() {
        let keymen = PersonExtractor::new().extract("代表取締役社長 田中太郎。");
        assert_eq!(keymen, vec![KeymanRecord::extracted("田中太郎", "代表取締役社長")]);
        assert!(is_shadowed("代表取締役社長", 6, "取締役"));
        assert!(!is_shadowed("取締役 鈴木一郎", 0, "取締役"));
    }

    #[test]
    fn test_no_titles_no_keymen() {
        assert!(PersonExtractor::new().extract("お問い合わせはこちら").is_empty());
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("田中"));
        assert!(is_valid_name("田中 太郎"));
        assert!(!is_valid_name("田"));
        assert!(!is_valid_name("田　 "));
        assert!(!is_valid_name("あいうえおかきくけこさ"));
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let keymen = vec![
            KeymanRecord::extracted("田中太郎", "代表取締役社長"),
            KeymanRecord::extracted("田中太郎", "社長"),
            KeymanRecord::extracted("鈴木一郎", "取締役"),
        ];
        let unique = dedupe(keymen);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].title, "代表取締役社長");
        assert_eq!(unique[1].name, "鈴木一郎");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: dedupe is idempotent and leaves names unique
        #[test]
        fn test_dedupe_idempotent(names in proptest::collection::vec("[a-d]{1,2}", 0..20)) {
            let keymen: Vec<KeymanRecord> = names
                .iter()
                .map(|n| KeymanRecord::extracted(n.clone(), "部長"))
                .collect();
            let once = dedupe(keymen);
            let twice = dedupe(once.clone());
            prop_assert_eq!(&once, &twice);
            let unique: HashSet<&String> = once.iter().map(|k| &k.name).collect();
            prop_assert_eq!(unique.len(), once.len());
        }
    }
}
