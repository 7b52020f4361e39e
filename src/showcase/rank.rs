// src/showcase/rank.rs

use crate::github::RemoteRepository;

/// Keeps the `count` most popular non-fork repositories, most stars first.
///
/// Forks are removed before sorting, so a popular fork never pushes an
/// original repository off the list. `sort_by` is stable: repositories with
/// equal star counts keep the order GitHub returned them in.
pub fn top_repositories(repos: Vec<RemoteRepository>, count: usize) -> Vec<RemoteRepository> {
    let mut ranked: Vec<RemoteRepository> = repos.into_iter().filter(|repo| !repo.is_fork).collect();

    ranked.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    ranked.truncate(count);

    ranked
}
