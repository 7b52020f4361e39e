// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Listing one account's public repositories (first page only)
// - The wire type those repositories are decoded into
//
// Anything past the first page is silently ignored; accounts with more than
// `per_page` repositories only ever see the first batch.
// =============================================================================

mod fetch;
mod types;

// Re-export so callers can write `github::fetch_user_repos`
pub use fetch::fetch_user_repos;
pub use types::RemoteRepository;
