//! Release publishing workflow.
//!
//! Drives the full sequence for a tag-triggered CI run: check the trigger
//! ref, create the release, and attach the distribution archive twice, under
//! the fixed name `imposter.jar` and the version-suffixed name
//! `imposter-<version>.jar` kept for consumers of the pre-0.7.0 naming
//! convention. Branch pushes and other non-tag triggers are skipped, not
//! failed.

use crate::error::{ReleaseError, Result};
use crate::github::{ReleaseHost, ReleaseId};
use crate::version;
use bytes::Bytes;
use std::fmt;
use std::path::{Path, PathBuf};

/// Owner of the repository releases are published to.
pub const REPO_OWNER: &str = "outofcoffee";

/// Repository releases are published to.
pub const REPO_NAME: &str = "imposter";

/// Descriptive body attached to every release.
pub const RELEASE_BODY: &str =
    "See [change log](https://github.com/outofcoffee/imposter/blob/master/CHANGELOG.md)";

/// Path of the distribution archive, relative to the checkout root.
pub const ARTIFACT_PATH: &str = "./distro/all/build/libs/imposter-all.jar";

/// Fixed asset name the latest-release download links point at.
pub const FIXED_ASSET_NAME: &str = "imposter.jar";

/// Settings for a publish run.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Release body text
    pub body: String,
    /// Local path of the artifact to upload
    pub artifact_path: PathBuf,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            owner: REPO_OWNER.to_string(),
            repo: REPO_NAME.to_string(),
            body: RELEASE_BODY.to_string(),
            artifact_path: PathBuf::from(ARTIFACT_PATH),
        }
    }
}

/// A recognized reason not to publish. These are normal terminations,
/// not errors: the process exits successfully after logging a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The trigger ref does not point at a tag (e.g. a branch push)
    UnsupportedRef(String),
    /// The ref matched the tag pattern but carries no version segment
    MissingVersion,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedRef(git_ref) => write!(f, "Unsupported ref: {}", git_ref),
            SkipReason::MissingVersion => write!(f, "No release version - aborting"),
        }
    }
}

/// Result of a publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// A release was created and both assets were uploaded
    Published {
        /// Release version, as extracted from the tag ref
        version: String,
        /// Identifier of the created release
        release: ReleaseId,
    },
    /// Nothing was published; no remote calls were made
    Skipped(SkipReason),
}

/// Decide whether `git_ref` triggers a release, returning the release
/// version extracted from it.
///
/// This is the pure guard half of [`publish`]: callers can run it before
/// constructing a client so that skipped runs never need credentials.
pub fn check_trigger(git_ref: &str) -> std::result::Result<&str, SkipReason> {
    if !version::is_tag_ref(git_ref) {
        return Err(SkipReason::UnsupportedRef(git_ref.to_string()));
    }
    match version::release_version(git_ref) {
        Some(release_version) => Ok(release_version),
        None => Err(SkipReason::MissingVersion),
    }
}

/// Build the version-suffixed asset name for a release version.
pub fn versioned_asset_name(release_version: &str) -> String {
    format!("imposter-{}.jar", version::numeric_version(release_version))
}

/// Publish a release for `git_ref`.
///
/// Creates the release, then uploads the artifact twice: first under
/// [`FIXED_ASSET_NAME`], then under the version-suffixed name. The artifact
/// is read from disk once per upload; content is not cached between them.
/// Remote and file-read failures propagate unhandled, so a failed upload can
/// leave a release without its assets.
pub async fn publish<H: ReleaseHost>(
    host: &H,
    config: &PublisherConfig,
    git_ref: &str,
) -> Result<PublishOutcome> {
    let release_version = match check_trigger(git_ref) {
        Ok(release_version) => release_version,
        Err(skip) => {
            log::warn!("{}", skip);
            return Ok(PublishOutcome::Skipped(skip));
        }
    };

    log::info!("Creating release: {}", release_version);
    let release = host
        .create_release(&config.owner, &config.repo, release_version, &config.body)
        .await?;

    upload_asset(host, config, release, FIXED_ASSET_NAME).await?;
    upload_asset(host, config, release, &versioned_asset_name(release_version)).await?;

    log::info!("Assets uploaded to release: {}", release_version);
    Ok(PublishOutcome::Published {
        version: release_version.to_string(),
        release,
    })
}

/// Upload the configured artifact to `release` under `asset_name`.
async fn upload_asset<H: ReleaseHost>(
    host: &H,
    config: &PublisherConfig,
    release: ReleaseId,
    asset_name: &str,
) -> Result<()> {
    log::info!(
        "Uploading {} as release asset {}...",
        config.artifact_path.display(),
        asset_name
    );
    let content = read_artifact(&config.artifact_path)?;
    host.upload_release_asset(&config.owner, &config.repo, release, asset_name, content)
        .await
}

/// Read the artifact into memory for upload.
fn read_artifact(path: &Path) -> Result<Bytes> {
    let data = std::fs::read(path).map_err(|source| ReleaseError::ArtifactRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Bytes::from(data))
}
