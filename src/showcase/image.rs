// src/showcase/image.rs
// =============================================================================
// Picks the preview image for a repository.
//
// Convention: a repository may ship its own cover at
//   {raw_content_base}/{account}/{repo}/master/assets/cover-preview.png
//
// We send a HEAD request there (no body download). A 2xx answer means the
// cover exists and we use it. Anything else (404, 500, DNS failure, refused
// connection, timeout) means we fall back to GitHub's generated card:
//   {fallback_image_base}/{account}/{repo}
//
// Nothing in this module returns an error. Every failure cause collapses
// into ProbeOutcome::Missing.
// =============================================================================

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::{join_segments, ShowcaseConfig};
use crate::error::Result;

/// Path of the cover image inside a repository, relative to the repo root
const COVER_PATH: [&str; 3] = ["master", "assets", "cover-preview.png"];

/// What a HEAD probe found out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered with a 2xx status
    Found,
    /// Non-success status, or the request never completed
    Missing,
}

impl ProbeOutcome {
    pub fn is_found(self) -> bool {
        matches!(self, ProbeOutcome::Found)
    }
}

/// Sends a HEAD request to `url` and reports whether it answered 2xx.
pub async fn probe(client: &Client, url: &Url) -> ProbeOutcome {
    match client.head(url.clone()).send().await {
        Ok(response) if response.status().is_success() => ProbeOutcome::Found,
        Ok(response) => {
            debug!(%url, status = response.status().as_u16(), "cover probe: non-success status");
            ProbeOutcome::Missing
        }
        Err(e) => {
            debug!(%url, error = %e, "cover probe: request failed");
            ProbeOutcome::Missing
        }
    }
}

/// URL where a repository's custom cover would live.
pub fn cover_url(config: &ShowcaseConfig, repo_name: &str) -> Result<Url> {
    let mut segments = vec![config.account.as_str(), repo_name];
    segments.extend(COVER_PATH);
    join_segments(&config.raw_content_base, &segments)
}

/// GitHub's generated social card for a repository. No request is made for it.
pub fn fallback_image_url(config: &ShowcaseConfig, repo_name: &str) -> String {
    format!(
        "{}/{}/{}",
        config.fallback_image_base.trim_end_matches('/'),
        config.account,
        repo_name
    )
}

/// Resolves the image URL for one repository: the custom cover when the
/// probe finds it, otherwise the generated fallback.
pub async fn resolve_image(client: &Client, config: &ShowcaseConfig, repo_name: &str) -> String {
    let outcome = match cover_url(config, repo_name) {
        Ok(url) => {
            let outcome = probe(client, &url).await;
            if outcome.is_found() {
                return url.to_string();
            }
            outcome
        }
        Err(e) => {
            debug!(repo = repo_name, error = %e, "cover probe: could not build URL");
            ProbeOutcome::Missing
        }
    };

    debug!(repo = repo_name, ?outcome, "using fallback image");
    fallback_image_url(config, repo_name)
}
