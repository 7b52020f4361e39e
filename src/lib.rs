// src/lib.rs
// =============================================================================
// repo-showcase: the data behind the "projects" section of a portfolio page.
//
// What happens on every call:
// 1. Fetch the account's repositories from the GitHub API (one request)
// 2. Drop forks and keep the most-starred ones
// 3. Build a Project card for each, probing for a custom cover image
//
// Nothing is cached or retained between calls. The page-rendering layer calls
// get_top_projects() and renders whatever comes back.
// =============================================================================

pub mod config;
pub mod error;
pub mod github;
pub mod showcase;

use tracing::info;

pub use config::ShowcaseConfig;
pub use error::{FetchError, Result, ShowcaseError};
pub use github::RemoteRepository;
pub use showcase::{Project, ProbeOutcome};

/// Top projects for the portfolio, using the built-in constants.
///
/// Fails only when the repository list cannot be fetched or decoded; image
/// lookups never fail the call.
pub async fn get_top_projects() -> Result<Vec<Project>> {
    get_top_projects_with(&ShowcaseConfig::default()).await
}

/// Same as [`get_top_projects`], with explicit settings.
pub async fn get_top_projects_with(config: &ShowcaseConfig) -> Result<Vec<Project>> {
    let client = config.http_client()?;

    let repos = github::fetch_user_repos(&client, config).await?;
    let top = showcase::top_repositories(repos, config.top_count);
    let projects = showcase::enrich_all(&client, config, top).await;

    info!(account = %config.account, count = projects.len(), "assembled top projects");

    Ok(projects)
}
