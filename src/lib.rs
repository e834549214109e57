//! # Imposter Release
//!
//! CI release publisher for the Imposter project.
//!
//! Creates a GitHub release for the tag that triggered the workflow and
//! uploads the distribution archive twice: once as `imposter.jar` and once
//! as `imposter-<version>.jar` for consumers of the pre-0.7.0 naming
//! convention. Non-tag triggers are skipped with a warning rather than
//! failed, so the same workflow can also run on branch pushes.
//!
//! ## Usage
//!
//! ```bash
//! imposter-release refs/tags/v1.2.3   # explicit ref
//! imposter-release                    # ref read from GITHUB_REF
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod github;
pub mod publish;
pub mod version;

// Re-export main types for public API
pub use cli::Args;
pub use error::{ReleaseError, Result};
pub use github::{GitHubClient, ReleaseHost, ReleaseId};
pub use publish::{PublishOutcome, PublisherConfig, SkipReason};
