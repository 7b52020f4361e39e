// src/error.rs
// =============================================================================
// Error types for the showcase pipeline.
//
// Only the repository list request can fail the whole operation. The image
// probe never produces an error (see showcase/image.rs), so nothing here
// describes it.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// The repository list endpoint answered with a non-success status.
///
/// The display text carries the status description, e.g.
/// `Failed to fetch repos: Not Found`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to fetch repos: {reason}")]
pub struct FetchError {
    /// Numeric HTTP status code
    pub status: u16,
    /// Canonical status text ("Not Found", "Forbidden", ...)
    pub reason: String,
}

impl FetchError {
    pub fn from_status(status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
        }
    }
}

/// Everything that can make `get_top_projects` fail.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Non-success status from the list endpoint
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Transport failure or malformed JSON on the list request
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The HTTP client could not be constructed
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A configured base URL does not parse
    #[error("invalid base URL `{base}`: {source}")]
    InvalidBase {
        base: String,
        #[source]
        source: url::ParseError,
    },

    /// A configured base URL parses but cannot have path segments appended
    #[error("base URL `{0}` cannot take path segments")]
    CannotBeABase(String),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
