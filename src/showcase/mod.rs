// src/showcase/mod.rs
// =============================================================================
// Turns the raw repository list into the project cards shown on the page.
//
// Submodules:
// - rank: drops forks and keeps the most-starred repositories
// - image: picks the preview image, probing for a custom cover first
// - project: maps a repository onto a Project and fans out over the top list
// =============================================================================

mod image;
mod project;
mod rank;

pub use image::{cover_url, fallback_image_url, probe, resolve_image, ProbeOutcome};
pub use project::{enrich_all, enrich_repository, Project, NO_DESCRIPTION};
pub use rank::top_repositories;
