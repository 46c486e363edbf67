//! Deterministic synthetic keymen
//!
//! Used when no real names can be found for a company. Each (company, title,
//! index) triple hashes to its own RNG seed, so the same inputs in a fresh
//! [`NameScope`] always yield the same name.

use prospector_domain::KeymanRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

const GIVEN_NAMES: [&str; 50] = [
    "健一", "大輔", "翔太", "拓也", "直樹", "雄介", "修", "慎一", "和也", "康平", "美穂", "優子",
    "麻衣", "智子", "由美", "真理子", "絵里", "加奈", "恵", "沙織", "裕太", "勇気", "達也", "浩二",
    "正樹", "誠", "剛", "聡", "淳", "亮", "陽子", "明美", "久美子", "千春", "愛", "舞", "香織",
    "美咲", "さくら", "桜子", "俊介", "賢治", "将太", "啓介", "優太", "孝之", "貴史", "克也",
    "浩之", "大樹",
];

const FAMILY_NAMES: [&str; 50] = [
    "田中", "鈴木", "高橋", "渡辺", "伊藤", "山本", "中村", "小林", "加藤", "吉田", "佐々木",
    "山田", "佐藤", "松本", "井上", "木村", "林", "斎藤", "清水", "山崎", "森", "阿部", "池田",
    "橋本", "山口", "石川", "前田", "藤田", "後藤", "長谷川", "村上", "近藤", "石井", "遠藤",
    "青木", "坂本", "西村", "福田", "太田", "岡田", "竹内", "金子", "藤井", "原田", "中島",
    "野口", "岩崎", "堀", "上田", "杉山",
];

/// Title ladder for generated keymen
pub const SYNTHETIC_TITLES: [&str; 6] = [
    "代表取締役",
    "副社長",
    "マーケティング責任者",
    "執行役員 事業開発",
    "執行役員 営業本部長",
    "執行役員 プロダクト開発",
];

/// Titles actually used per company
pub const SYNTHETIC_KEYMEN_PER_COMPANY: usize = 5;

const MAX_ATTEMPTS: usize = 100;

/// Names already handed out within one job
///
/// Created per job and passed down explicitly; two jobs never share one.
#[derive(Debug, Clone, Default)]
pub struct NameScope {
    used: HashSet<String>,
}

impl NameScope {
    /// An empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a name has been handed out
    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Record a name; returns false if it was already present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.used.insert(name.into())
    }

    /// Number of recorded names
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// True when no names are recorded
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

fn seed_for(company: &str, title: &str, index: usize) -> u64 {
    let digest = md5::compute(format!("{}_{}_{}", company, title, index));
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.0[..8]);
    u64::from_be_bytes(bytes)
}

/// Generate one keyman for a company title slot
///
/// Draws up to 100 family/given combinations and takes the first unused in
/// `scope`. If every draw collides, the fixed last-resort name for `index` is
/// returned without a uniqueness check, so it can repeat an earlier name.
pub fn synthetic_keyman(
    company: &str,
    title: &str,
    index: usize,
    scope: &mut NameScope,
) -> KeymanRecord {
    let mut rng = StdRng::seed_from_u64(seed_for(company, title, index));

    for _ in 0..MAX_ATTEMPTS {
        let given = GIVEN_NAMES[rng.random_range(0..GIVEN_NAMES.len())];
        let family = FAMILY_NAMES[rng.random_range(0..FAMILY_NAMES.len())];
        let name = format!("{} {}", family, given);
        if scope.insert(name.clone()) {
            return KeymanRecord::synthetic(name, title);
        }
    }

    let name = format!(
        "{} {}",
        FAMILY_NAMES[index % FAMILY_NAMES.len()],
        GIVEN_NAMES[(index * 17) % GIVEN_NAMES.len()]
    );
    debug!(company, title, name = %name, "Synthetic name draws exhausted, using fixed name");
    scope.insert(name.clone());
    KeymanRecord::synthetic(name, title)
}

/// Generate up to `max` keymen down the title ladder
pub fn synthetic_keymen(company: &str, max: usize, scope: &mut NameScope) -> Vec<KeymanRecord> {
    SYNTHETIC_TITLES
        .iter()
        .take(SYNTHETIC_KEYMEN_PER_COMPANY.min(max))
        .enumerate()
        .map(|(index, title)| synthetic_keyman(company, title, index, scope))
        .collect()
}
