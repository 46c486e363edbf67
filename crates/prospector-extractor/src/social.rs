//! Social profile resolution for keymen
//!
//! One search per enabled platform; the first hyperlink that cleans up into a
//! valid profile URL wins. Search failures resolve to "no profile".

use crate::config::SocialConfig;
use prospector_domain::{PageSource, SocialProfileSet};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Supported platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// facebook.com
    Facebook,
    /// x.com / twitter.com
    X,
}

static RE_REDIRECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/url\?q=([^&]+)").unwrap());

static RE_FACEBOOK_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"facebook\.com/profile\.php\?id=(\d+)").unwrap());
static RE_FACEBOOK_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"facebook\.com/([a-zA-Z0-9._-]+)/?$").unwrap());
static RE_FACEBOOK_PEOPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"facebook\.com/people/[^/]+/\d+").unwrap());
static RE_TWITTER_HANDLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[/.])(?:twitter\.com|x\.com)/[a-zA-Z0-9_]+/?$").unwrap()
});

impl Platform {
    /// Domains that identify the platform in a URL
    pub fn domains(&self) -> &'static [&'static str] {
        match self {
            Platform::Facebook => &["facebook.com"],
            Platform::X => &["twitter.com", "x.com"],
        }
    }

    /// Search query for one person at one company
    pub fn query(&self, name: &str, company: &str) -> String {
        match self {
            Platform::Facebook => format!("{} {} site:facebook.com", name, company),
            Platform::X => format!("{} {} (site:twitter.com OR site:x.com)", name, company),
        }
    }

    /// Whether a cleaned URL looks like a profile page
    pub fn is_valid(&self, url: &str) -> bool {
        match self {
            Platform::Facebook => is_valid_facebook_url(url),
            Platform::X => is_valid_twitter_url(url),
        }
    }
}

/// Whether a URL looks like a Facebook profile
pub fn is_valid_facebook_url(url: &str) -> bool {
    if RE_FACEBOOK_ID.is_match(url) || RE_FACEBOOK_PEOPLE.is_match(url) {
        return true;
    }
    RE_FACEBOOK_HANDLE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .is_some_and(|handle| handle.as_str() != "profile.php")
}

/// Whether a URL looks like an X / Twitter profile
pub fn is_valid_twitter_url(url: &str) -> bool {
    if url.contains("/status/") || url.contains("/hashtag/") {
        return false;
    }
    RE_TWITTER_HANDLE.is_match(url)
}

/// Normalise a search-result href for a platform
///
/// Unwraps `/url?q=` redirects, percent-decodes, and strips query and
/// fragment. Facebook numeric profiles keep their `id` parameter. Returns
/// `None` when the URL does not belong to the platform.
pub fn clean_url(href: &str, platform: Platform) -> Option<String> {
    let target = RE_REDIRECT
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map_or(href, |m| m.as_str());

    let decoded = urlencoding::decode(target)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| target.to_string());

    if !platform.domains().iter().any(|domain| decoded.contains(domain)) {
        return None;
    }

    if platform == Platform::Facebook {
        if let Some(id) = RE_FACEBOOK_ID.captures(&decoded).and_then(|caps| caps.get(1)) {
            return Some(format!("https://www.facebook.com/profile.php?id={}", id.as_str()));
        }
    }

    let end = decoded.find(['?', '#']).unwrap_or(decoded.len());
    Some(decoded[..end].to_string())
}

/// Resolves Facebook / X profiles through a [`PageSource`]
pub struct SocialProfileResolver<'a, S: PageSource> {
    source: &'a S,
    config: SocialConfig,
}

impl<'a, S: PageSource> SocialProfileResolver<'a, S> {
    /// Create a resolver over a page source
    pub fn new(source: &'a S, config: SocialConfig) -> Self {
        Self { source, config }
    }

    /// Profiles for a person; never fails
    ///
    /// `title` only labels the log line; it is not part of either query.
    pub fn resolve(&self, name: &str, company: &str, title: &str) -> SocialProfileSet {
        debug!(name, company, title, "Resolving social profiles");
        SocialProfileSet {
            facebook: self
                .config
                .facebook_enabled
                .then(|| self.find(Platform::Facebook, name, company))
                .flatten(),
            x: self
                .config
                .x_enabled
                .then(|| self.find(Platform::X, name, company))
                .flatten(),
        }
    }

    /// First valid profile URL for one platform
    pub fn find(&self, platform: Platform, name: &str, company: &str) -> Option<String> {
        let query = platform.query(name, company);
        let page = match self.source.search(&query) {
            Ok(page) => page,
            Err(e) => {
                warn!(?platform, %query, "Profile search failed: {}", e);
                return None;
            }
        };

        let found = page
            .links
            .iter()
            .filter_map(|href| clean_url(href, platform))
            .find(|url| platform.is_valid(url));
        debug!(?platform, name, found = found.is_some(), "Profile search finished");
        found
    }
}
