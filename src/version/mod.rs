//! Trigger ref inspection and release version derivation.
//!
//! CI hands the publisher a fully qualified git ref (e.g. `refs/tags/v1.2.3`).
//! Only tag refs trigger a release; the tag name becomes the release version
//! and a leading `v` is stripped to form the numeric version used in asset
//! file names.

use regex::Regex;
use std::sync::LazyLock;

/// Matches refs that point at a tag. Unanchored: any ref containing a
/// `refs/tags/<name>` segment is accepted.
static TAG_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"refs/tags/.+").expect("tag ref regex is valid"));

/// Check whether `git_ref` refers to a tag and therefore triggers a release.
pub fn is_tag_ref(git_ref: &str) -> bool {
    TAG_REF_RE.is_match(git_ref)
}

/// Extract the release version from a tag ref.
///
/// The version is the third slash-separated segment of the ref
/// (`refs/tags/v1.2.3` -> `v1.2.3`). Returns `None` when the segment is
/// missing or empty, which callers treat as a skip rather than an error.
pub fn release_version(git_ref: &str) -> Option<&str> {
    git_ref.split('/').nth(2).filter(|v| !v.is_empty())
}

/// Derive the numeric version used in versioned asset names.
///
/// Strips a single leading `v` when present; all other tag names pass
/// through unchanged.
pub fn numeric_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_refs_are_recognized() {
        assert!(is_tag_ref("refs/tags/v1.2.3"));
        assert!(is_tag_ref("refs/tags/1.0.0"));
        assert!(is_tag_ref("refs/tags/release-candidate"));
    }

    #[test]
    fn test_branch_refs_are_not_tag_refs() {
        assert!(!is_tag_ref("refs/heads/main"));
        assert!(!is_tag_ref("refs/heads/feature/tags"));
        assert!(!is_tag_ref("refs/pull/42/merge"));
    }

    #[test]
    fn test_bare_tags_prefix_is_not_a_tag_ref() {
        // The tag name itself must be non-empty.
        assert!(!is_tag_ref("refs/tags/"));
        assert!(!is_tag_ref("refs/tags"));
    }

    #[test]
    fn test_tag_ref_match_is_unanchored() {
        assert!(is_tag_ref("prefix/refs/tags/v1.0.0"));
    }

    #[test]
    fn test_version_is_third_segment() {
        assert_eq!(release_version("refs/tags/v1.2.3"), Some("v1.2.3"));
        assert_eq!(release_version("refs/tags/2.0.0"), Some("2.0.0"));
    }

    #[test]
    fn test_version_segments_beyond_third_are_ignored() {
        assert_eq!(release_version("refs/tags/v1.2.3/extra"), Some("v1.2.3"));
    }

    #[test]
    fn test_missing_or_empty_version_segment_is_none() {
        assert_eq!(release_version("refs/tags/"), None);
        assert_eq!(release_version("refs/tags"), None);
        assert_eq!(release_version("a/b//refs/tags/v1"), None);
    }

    #[test]
    fn test_numeric_version_strips_single_leading_v() {
        assert_eq!(numeric_version("v1.2.3"), "1.2.3");
        assert_eq!(numeric_version("1.2.3"), "1.2.3");
        assert_eq!(numeric_version("vv1.0"), "v1.0");
    }

    #[test]
    fn test_numeric_version_only_strips_prefix() {
        // Any leading 'v' goes, even when the remainder is not numeric.
        assert_eq!(numeric_version("version-1"), "ersion-1");
        assert_eq!(numeric_version("release-1"), "release-1");
    }
}
