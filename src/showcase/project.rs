// src/showcase/project.rs
// =============================================================================
// Maps ranked repositories onto the Project cards the page renders.
//
// Each repository is enriched independently (its own image probe, its own
// output record). The probes run concurrently, but results are collected in
// input order, so the cards come out in rank order no matter which probe
// answers first.
// =============================================================================

use futures::stream::{self, StreamExt}; // StreamExt gives us .buffered()
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::image::resolve_image;
use crate::config::ShowcaseConfig;
use crate::github::RemoteRepository;

/// Placeholder shown when a repository has no description
pub const NO_DESCRIPTION: &str = "No description.";

/// One project card on the portfolio page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Repository name, upper-cased
    pub title: String,
    pub description: String,
    /// Repository page on GitHub
    pub link: String,
    /// Custom cover or generated fallback; always set
    pub image: String,
    /// Accessibility text for the image
    pub alt: String,
}

impl Project {
    /// Builds the card for `repo` once its image has been resolved.
    pub fn from_repository(repo: &RemoteRepository, image: String) -> Self {
        let description = match repo.description.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => NO_DESCRIPTION.to_string(),
        };

        Self {
            title: repo.name.to_uppercase(),
            description,
            link: repo.url.clone(),
            image,
            alt: format!("{} app screenshot", repo.name),
        }
    }
}

/// Resolves the image for one repository and builds its card.
pub async fn enrich_repository(client: &Client, config: &ShowcaseConfig, repo: &RemoteRepository) -> Project {
    let image = resolve_image(client, config, &repo.name).await;
    Project::from_repository(repo, image)
}

// Enriches every repository, at most `max_concurrent_probes` at a time
//
// .buffered(n) (unlike .buffer_unordered(n)) yields results in the order the
// futures were created, which is what keeps the rank order intact.
pub async fn enrich_all(client: &Client, config: &ShowcaseConfig, repos: Vec<RemoteRepository>) -> Vec<Project> {
    let limit = config.max_concurrent_probes.max(1);

    let futures = repos.into_iter().map(|repo| {
        let client = client.clone(); // Cheap: Client is an Arc internally
        async move { enrich_repository(&client, config, &repo).await }
    });

    stream::iter(futures).buffered(limit).collect().await
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why .buffered() and not futures::future::join_all()?
//    - join_all also keeps order, but starts every future at once
//    - .buffered(n) keeps order AND caps how many probes are in flight
//    - With the default top count of 2 the cap never kicks in
//
// 2. Why can't enrichment fail?
//    - resolve_image() turns every probe failure into the fallback URL
//    - Project::from_repository() is plain data mapping
//    - So enrich_all returns Vec<Project>, not Result<Vec<Project>>
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, description: Option<&str>) -> RemoteRepository {
        RemoteRepository {
            name: name.to_string(),
            description: description.map(str::to_string),
            url: format!("https://github.com/alejyoo/{}", name),
            popularity: 3,
            is_fork: false,
        }
    }

    #[test]
    fn test_project_fields_derived_from_repository() {
        let project = Project::from_repository(&repo("todo-list", Some("A tiny todo app")), "img".to_string());
        assert_eq!(project.title, "TODO-LIST");
        assert_eq!(project.description, "A tiny todo app");
        assert_eq!(project.link, "https://github.com/alejyoo/todo-list");
        assert_eq!(project.image, "img");
        assert_eq!(project.alt, "todo-list app screenshot");
    }

    #[test]
    fn test_missing_description_uses_placeholder() {
        let project = Project::from_repository(&repo("a", None), String::new());
        assert_eq!(project.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_empty_description_uses_placeholder() {
        let project = Project::from_repository(&repo("a", Some("")), String::new());
        assert_eq!(project.description, "No description.");
    }

    #[test]
    fn test_whitespace_description_is_kept() {
        let project = Project::from_repository(&repo("a", Some(" ")), String::new());
        assert_eq!(project.description, " ");
    }

    #[test]
    fn test_project_serializes_with_page_field_names() {
        let project = Project::from_repository(&repo("a", None), "img".to_string());
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["title"], "A");
        assert_eq!(json["alt"], "a app screenshot");
        assert_eq!(json["image"], "img");
    }

    #[tokio::test]
    async fn test_enrich_all_with_nothing_to_do() {
        let config = ShowcaseConfig::default();
        let client = config.http_client().unwrap();
        assert!(enrich_all(&client, &config, Vec::new()).await.is_empty());
    }
}
