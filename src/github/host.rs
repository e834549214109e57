//! Release host capability trait.
//!
//! This module defines the two remote operations release publishing needs.
//! The real implementation is [`crate::github::GitHubClient`]; tests
//! substitute a recording double.

use crate::error::Result;
use bytes::Bytes;
use std::future::Future;

/// Identifier of a created release, as assigned by the host.
///
/// Asset uploads address the release by this id rather than by tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseId(pub u64);

impl std::fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait defining the remote operations required to publish a release
pub trait ReleaseHost {
    /// Create a release for `tag_name` in `owner/repo` and return its id
    fn create_release(
        &self,
        owner: &str,
        repo: &str,
        tag_name: &str,
        body: &str,
    ) -> impl Future<Output = Result<ReleaseId>>;

    /// Upload `content` as an asset named `asset_name` on an existing release
    fn upload_release_asset(
        &self,
        owner: &str,
        repo: &str,
        release: ReleaseId,
        asset_name: &str,
        content: Bytes,
    ) -> impl Future<Output = Result<()>>;
}
