// src/config.rs
// =============================================================================
// The fixed constants the pipeline runs with.
//
// There is no CLI and no environment lookup: `ShowcaseConfig::default()` is
// the only configuration production code ever sees. The `with_*` builders
// exist so tests can point the pipeline at a local mock server.
// =============================================================================

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{Result, ShowcaseError};

/// Account whose repositories are showcased
pub const DEFAULT_ACCOUNT: &str = "alejyoo";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
/// Host serving raw repository files (where cover previews live)
pub const DEFAULT_RAW_CONTENT_BASE: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_FALLBACK_IMAGE_BASE: &str = "https://opengraph.githubassets.com/1";
/// How many projects end up on the page
pub const DEFAULT_TOP_COUNT: usize = 2;
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_MAX_CONCURRENT_PROBES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    pub account: String,
    pub api_base: String,
    pub raw_content_base: String,
    pub fallback_image_base: String,
    pub top_count: usize,
    pub per_page: u32,
    /// Upper bound on image probes in flight at once
    pub max_concurrent_probes: usize,
    /// `None` means requests may wait forever
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            raw_content_base: DEFAULT_RAW_CONTENT_BASE.to_string(),
            fallback_image_base: DEFAULT_FALLBACK_IMAGE_BASE.to_string(),
            top_count: DEFAULT_TOP_COUNT,
            per_page: DEFAULT_PER_PAGE,
            max_concurrent_probes: DEFAULT_MAX_CONCURRENT_PROBES,
            request_timeout: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ShowcaseConfig {
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_raw_content_base(mut self, base: impl Into<String>) -> Self {
        self.raw_content_base = base.into();
        self
    }

    pub fn with_fallback_image_base(mut self, base: impl Into<String>) -> Self {
        self.fallback_image_base = base.into();
        self
    }

    pub fn with_top_count(mut self, count: usize) -> Self {
        self.top_count = count;
        self
    }

    pub fn with_max_concurrent_probes(mut self, limit: usize) -> Self {
        self.max_concurrent_probes = limit;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Builds the single HTTP client shared by the list request and every probe.
    ///
    /// reqwest's `Client` is reference counted internally, so callers clone
    /// it per task instead of building new ones.
    pub fn http_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(self.user_agent.as_str());

        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(ShowcaseError::Client)
    }
}

/// Appends `segments` to the path of `base`, one percent-encoded segment each.
///
/// A trailing slash on `base` is ignored, so `https://host/1/` and
/// `https://host/1` produce the same result.
pub(crate) fn join_segments(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|source| ShowcaseError::InvalidBase {
        base: base.to_string(),
        source,
    })?;

    url.path_segments_mut()
        .map_err(|_| ShowcaseError::CannotBeABase(base.to_string()))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_defaults_match_portfolio_constants() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.account, "alejyoo");
        assert_eq!(config.top_count, 2);
        assert_eq!(config.per_page, 100);
        assert_eq!(config.request_timeout, None);
        assert!(config.user_agent.starts_with("repo-showcase/"));
    }

    #[test]
    fn test_join_segments_on_bare_host() {
        let url = join_segments("https://api.github.com", &["users", "alejyoo", "repos"]).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/alejyoo/repos");
    }

    #[test]
    fn test_join_segments_keeps_base_path() {
        let url = join_segments("https://opengraph.githubassets.com/1/", &["alejyoo", "site"]).unwrap();
        assert_eq!(url.as_str(), "https://opengraph.githubassets.com/1/alejyoo/site");
    }

    #[test]
    fn test_join_segments_encodes_each_segment() {
        let url = join_segments("https://example.com", &["a b", "c/d"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/a%20b/c%2Fd");
    }

    #[test]
    fn test_join_segments_rejects_garbage_base() {
        let err = join_segments("not a url", &["x"]).unwrap_err();
        assert!(matches!(err, ShowcaseError::InvalidBase { .. }));
        assert!(err.to_string().contains("`not a url`"));
        assert!(err.source().is_some());

        let err = join_segments("mailto:someone@example.com", &["x"]).unwrap_err();
        assert!(matches!(err, ShowcaseError::CannotBeABase(ref base) if base == "mailto:someone@example.com"));
    }

    #[test]
    fn test_http_client_failure_keeps_reqwest_source() {
        let config = ShowcaseConfig {
            user_agent: "bad\nagent".to_string(),
            ..ShowcaseConfig::default()
        };
        let err = config.http_client().unwrap_err();
        assert!(matches!(err, ShowcaseError::Client(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_http_client_builds_with_timeout() {
        let config = ShowcaseConfig::default().with_request_timeout(Duration::from_secs(5));
        assert!(config.http_client().is_ok());
    }
}
