//! Error types for release publishing operations.
//!
//! All failures surface through [`ReleaseError`] with actionable messages and
//! recovery suggestions; the two recognized skip cases are not errors and are
//! modeled separately in [`crate::publish::SkipReason`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release publishing operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all release publishing operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// No GitHub token available in the environment
    #[error("GitHub token not provided. Set GH_TOKEN or GITHUB_TOKEN environment variable")]
    MissingToken,

    /// HTTP transport failure talking to the release host
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The release host answered with a non-success status
    #[error("GitHub API returned {status} for {operation}: {message}")]
    Api {
        /// Operation that failed (e.g. `create_release`)
        operation: String,
        /// HTTP status code returned by the service
        status: reqwest::StatusCode,
        /// Error message extracted from the response body
        message: String,
    },

    /// Local build artifact could not be read
    #[error("Failed to read release artifact {path}: {source}")]
    ArtifactRead {
        /// Path to the missing or unreadable artifact
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// API endpoint URL did not parse
    #[error("Invalid API endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// IO errors outside artifact reads
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::MissingToken => vec![
                "Export a token: export GITHUB_TOKEN=<token>".to_string(),
                "In a workflow, pass it explicitly: env: GITHUB_TOKEN: ${{ secrets.GITHUB_TOKEN }}"
                    .to_string(),
            ],
            ReleaseError::Api { status, .. } if status.as_u16() == 401 || status.as_u16() == 403 => {
                vec![
                    "Check that the token is valid and has not expired".to_string(),
                    "The workflow token needs 'contents: write' permission to create releases"
                        .to_string(),
                ]
            }
            ReleaseError::Api { status, .. } if status.as_u16() == 422 => vec![
                "A release for this tag may already exist - delete it or push a new tag"
                    .to_string(),
            ],
            ReleaseError::ArtifactRead { path, .. } => vec![
                format!("Expected the distribution archive at {}", path.display()),
                "Build the distribution before publishing: ./gradlew :distro:all:shadowJar"
                    .to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
