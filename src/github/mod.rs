//! GitHub release hosting.
//!
//! [`ReleaseHost`] is the minimal capability the publisher needs from a
//! release host; [`GitHubClient`] implements it against the GitHub REST API.

mod client;
mod host;

pub use client::GitHubClient;
pub use host::{ReleaseHost, ReleaseId};
