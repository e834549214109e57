//! Command line interface for imposter-release.
//!
//! Parses the trigger ref, runs the publish workflow, and reports progress
//! and failures on the terminal.

mod args;
pub mod commands;
mod output;

pub use args::Args;
pub use commands::{execute_command, execute_publish};
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute_command(args).await
}
