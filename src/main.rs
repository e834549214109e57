//! Imposter Release - CI release publisher for the Imposter project.
//!
//! Invoked by the release workflow after the distribution archive is built;
//! creates the tagged GitHub release and attaches the archive under both of
//! its published asset names.

use imposter_release::cli;
use imposter_release::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            let output = OutputManager::new();
            output.error(&format!("Fatal error: {e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    output.indent(&suggestion);
                }
            }

            process::exit(1);
        }
    }
}
