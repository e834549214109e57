//! End-to-end tests for the imposter-release binary.
//!
//! These run the compiled binary with a scrubbed environment, so skip cases
//! and usage errors are exercised exactly as the CI runner would see them.
//! No test here reaches the network: skip cases return before any client is
//! built, and the missing-token case fails during client construction.

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    /// Binary invocation with trigger and credential env scrubbed.
    fn imposter_release() -> Command {
        let mut cmd = Command::cargo_bin("imposter-release").unwrap();
        cmd.env_remove("GITHUB_REF")
            .env_remove("GH_TOKEN")
            .env_remove("GITHUB_TOKEN");
        cmd
    }

    #[test]
    fn test_help_flag() {
        imposter_release()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("distribution archive"))
            .stdout(predicate::str::contains("REF"));
    }

    #[test]
    fn test_version_flag() {
        imposter_release()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_branch_push_is_skipped_without_credentials() {
        // No token in the environment: branch pushes must still succeed.
        imposter_release()
            .arg("refs/heads/main")
            .assert()
            .success()
            .stdout(predicate::str::contains("Unsupported ref: refs/heads/main"));
    }

    #[test]
    fn test_bare_tags_ref_is_skipped() {
        imposter_release()
            .arg("refs/tags/")
            .assert()
            .success()
            .stdout(predicate::str::contains("Unsupported ref: refs/tags/"));
    }

    #[test]
    fn test_ref_is_read_from_github_ref_env() {
        imposter_release()
            .env("GITHUB_REF", "refs/pull/42/merge")
            .assert()
            .success()
            .stdout(predicate::str::contains("Unsupported ref: refs/pull/42/merge"));
    }

    #[test]
    fn test_missing_ref_is_a_usage_error() {
        imposter_release()
            .assert()
            .failure()
            .stderr(predicate::str::contains("required arguments were not provided"));
    }

    #[test]
    fn test_tag_ref_without_token_fails() {
        imposter_release()
            .arg("refs/tags/v1.2.3")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("GitHub token not provided"));
    }
}
