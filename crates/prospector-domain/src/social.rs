//! Social profile URLs for a keyman

use serde::{Deserialize, Serialize};

/// Sentinel rendered when no profile was found
pub const NO_PROFILE: &str = "なし";

/// Facebook and X profile URLs for one person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProfileSet {
    /// Canonical Facebook profile URL
    pub facebook: Option<String>,
    /// Canonical X / Twitter profile URL
    pub x: Option<String>,
}

impl SocialProfileSet {
    /// A set with neither profile resolved
    pub fn none() -> Self {
        Self::default()
    }

    /// Facebook URL or the sentinel
    pub fn facebook_display(&self) -> &str {
        self.facebook.as_deref().unwrap_or(NO_PROFILE)
    }

    /// X URL or the sentinel
    pub fn x_display(&self) -> &str {
        self.x.as_deref().unwrap_or(NO_PROFILE)
    }

    /// Number of resolved profiles (0–2)
    pub fn found_count(&self) -> usize {
        usize::from(self.facebook.is_some()) + usize::from(self.x.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_display() {
        let set = SocialProfileSet {
            facebook: Some("https://facebook.com/taro".into()),
            x: None,
        };
        assert_eq!(set.facebook_display(), "https://facebook.com/taro");
        assert_eq!(set.x_display(), NO_PROFILE);
        assert_eq!(set.found_count(), 1);
    }
}
