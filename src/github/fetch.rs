// src/github/fetch.rs
// =============================================================================
// Fetches the repository list for the configured account.
//
// One request, no retries, no pagination:
//   GET {api_base}/users/{account}/repos?per_page={per_page}
//   Accept: application/vnd.github+json
//
// A non-success status becomes a FetchError carrying the status text.
// Transport and JSON decode failures propagate as ShowcaseError::Http.
// =============================================================================

use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::types::RemoteRepository;
use crate::config::{join_segments, ShowcaseConfig};
use crate::error::{FetchError, Result};

/// Media type GitHub recommends for REST API responses
const GITHUB_JSON: &str = "application/vnd.github+json";

// Fetches the first page of repositories for `config.account`
//
// Returns the repositories in the order GitHub served them; ranking is the
// caller's job.
pub async fn fetch_user_repos(client: &Client, config: &ShowcaseConfig) -> Result<Vec<RemoteRepository>> {
    let url = repos_url(config)?;
    debug!(%url, "fetching repository list");

    let response = client.get(url).header(ACCEPT, GITHUB_JSON).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), account = %config.account, "repository list request failed");
        return Err(FetchError::from_status(status).into());
    }

    let repos: Vec<RemoteRepository> = response.json().await?;
    debug!(count = repos.len(), "received repositories");

    Ok(repos)
}

// Builds the list endpoint URL, e.g.
//   https://api.github.com/users/alejyoo/repos?per_page=100
fn repos_url(config: &ShowcaseConfig) -> Result<Url> {
    let mut url = join_segments(&config.api_base, &["users", &config.account, "repos"])?;
    url.query_pairs_mut()
        .append_pair("per_page", &config.per_page.to_string());
    Ok(url)
}
