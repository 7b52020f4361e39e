// src/github/types.rs

use serde::{Deserialize, Serialize};

/// One repository as returned by `GET /users/{account}/repos`.
///
/// Only the fields the showcase needs are decoded; serde ignores the rest of
/// GitHub's (large) repository object. The wire names differ from ours, hence
/// the renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "html_url")]
    pub url: String,
    /// Star count
    #[serde(rename = "stargazers_count")]
    pub popularity: u64,
    #[serde(rename = "fork")]
    pub is_fork: bool,
}
