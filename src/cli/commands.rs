//! Command execution coordinating the release workflow.
//!
//! Wires argument parsing, the GitHub client, and the publisher together,
//! and maps outcomes and failures to exit codes for the CI runner.

use crate::cli::{Args, OutputManager};
use crate::error::Result;
use crate::github::GitHubClient;
use crate::publish::{self, PublishOutcome, PublisherConfig};

/// Execute the release workflow and translate errors into an exit code
pub async fn execute_command(args: Args) -> Result<i32> {
    let output = OutputManager::new();

    match execute_publish(&args, &output).await {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => {
            output.error(&format!("Release failed: {}", e));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    output.println(&format!("  • {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}

/// Run the publisher for the triggering ref.
///
/// Skip cases are resolved before the client is built, so branch-push
/// invocations succeed without any credentials in the environment.
pub async fn execute_publish(args: &Args, output: &OutputManager) -> Result<i32> {
    let release_version = match publish::check_trigger(&args.git_ref) {
        Ok(release_version) => release_version,
        Err(skip) => {
            output.warn(&skip.to_string());
            return Ok(0);
        }
    };

    let client = GitHubClient::from_env()?;
    let config = PublisherConfig::default();

    output.info(&format!("Creating release: {}", release_version));

    match publish::publish(&client, &config, &args.git_ref).await? {
        PublishOutcome::Published { version, release } => {
            output.success(&format!("Assets uploaded to release: {}", version));
            output.indent(&format!("{} (release {})", publish::FIXED_ASSET_NAME, release));
            output.indent(&publish::versioned_asset_name(&version));
            Ok(0)
        }
        PublishOutcome::Skipped(skip) => {
            output.warn(&skip.to_string());
            Ok(0)
        }
    }
}
