//! Command line argument parsing.
//!
//! The tool takes a single input: the git ref that triggered the run. In CI
//! it arrives through `GITHUB_REF`, so the positional argument is usually
//! omitted.

use clap::Parser;

/// Publish a tagged Imposter release with its distribution assets
#[derive(Parser, Debug)]
#[command(
    name = "imposter-release",
    version,
    about = "Publish a tagged Imposter release with its distribution assets",
    long_about = "Create a GitHub release for a tag ref and upload the \
distribution archive under both its fixed and version-suffixed asset names.

Usage:
  imposter-release refs/tags/v1.2.3
  imposter-release            (reads the ref from GITHUB_REF)

Non-tag refs are skipped with a warning; the run still succeeds."
)]
pub struct Args {
    /// Git ref that triggered the run (e.g. refs/tags/v1.2.3)
    #[arg(index = 1, value_name = "REF", env = "GITHUB_REF")]
    pub git_ref: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
