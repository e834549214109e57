//! GitHub REST API client for release creation and asset upload.

use crate::error::{ReleaseError, Result};
use crate::github::host::{ReleaseHost, ReleaseId};
use bytes::Bytes;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Default GitHub REST API endpoint.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default endpoint for release asset uploads. GitHub serves uploads from a
/// separate host, not `api.github.com`.
const DEFAULT_UPLOAD_BASE: &str = "https://uploads.github.com";

/// Timeout for metadata requests such as release creation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for asset uploads, which carry the full distribution archive.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(600);

/// Release metadata returned by the create-release endpoint.
#[derive(Debug, Deserialize)]
struct CreatedRelease {
    id: u64,
    html_url: String,
}

/// Error body shape the API uses for non-success responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Resolve the API token through `lookup`, checking `GH_TOKEN` before
/// `GITHUB_TOKEN`.
fn token_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    lookup("GH_TOKEN")
        .or_else(|| lookup("GITHUB_TOKEN"))
        .ok_or(ReleaseError::MissingToken)
}

/// GitHub API client bound to a token and a pair of endpoints.
///
/// The endpoints are overridable so tests can point the client at a local
/// mock server and GitHub Enterprise deployments can use their own hosts.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    token: String,
    api_base: Url,
    upload_base: Url,
}

impl GitHubClient {
    /// Create a client authenticated by a token from the environment.
    ///
    /// Checks `GH_TOKEN` first, then `GITHUB_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let token = token_from(|name| std::env::var(name).ok())?;
        Self::with_token(token)
    }

    /// Create a client against the public GitHub endpoints.
    pub fn with_token(token: String) -> Result<Self> {
        Self::with_endpoints(token, DEFAULT_API_BASE, DEFAULT_UPLOAD_BASE)
    }

    /// Create a client against explicit API and upload endpoints.
    pub fn with_endpoints(token: String, api_base: &str, upload_base: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("imposter-release/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            token,
            api_base: Url::parse(api_base)?,
            upload_base: Url::parse(upload_base)?,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.as_str().trim_end_matches('/'), path)
    }

    fn upload_url(&self, path: &str) -> String {
        format!("{}/{}", self.upload_base.as_str().trim_end_matches('/'), path)
    }

    /// Turn a non-success response into a [`ReleaseError::Api`] error,
    /// preferring the API's own `message` field over the raw body.
    async fn api_error(operation: &str, response: reqwest::Response) -> ReleaseError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) => body,
        };
        ReleaseError::Api {
            operation: operation.to_string(),
            status,
            message,
        }
    }
}

impl ReleaseHost for GitHubClient {
    async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        tag_name: &str,
        body: &str,
    ) -> Result<ReleaseId> {
        let url = self.api_url(&format!("repos/{}/{}/releases", owner, repo));
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .json(&serde_json::json!({
                "tag_name": tag_name,
                "body": body,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error("create_release", response).await);
        }

        let release: CreatedRelease = response.json().await?;
        log::debug!("Created release {} at {}", release.id, release.html_url);
        Ok(ReleaseId(release.id))
    }

    async fn upload_release_asset(
        &self,
        owner: &str,
        repo: &str,
        release: ReleaseId,
        asset_name: &str,
        content: Bytes,
    ) -> Result<()> {
        let url = self.upload_url(&format!("repos/{}/{}/releases/{}/assets", owner, repo, release));
        log::debug!("POST {} ({} bytes) as {}", url, content.len(), asset_name);

        let response = self
            .http
            .post(&url)
            .query(&[("name", asset_name)])
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("Content-Type", "application/octet-stream")
            .timeout(UPLOAD_TIMEOUT)
            .body(content)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error("upload_release_asset", response).await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls_join_without_double_slashes() {
        let client = GitHubClient::with_endpoints(
            "token".to_string(),
            "https://api.example.com/",
            "https://uploads.example.com",
        )
        .unwrap();

        assert_eq!(
            client.api_url("repos/outofcoffee/imposter/releases"),
            "https://api.example.com/repos/outofcoffee/imposter/releases"
        );
        assert_eq!(
            client.upload_url("repos/outofcoffee/imposter/releases/1/assets"),
            "https://uploads.example.com/repos/outofcoffee/imposter/releases/1/assets"
        );
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let result = GitHubClient::with_endpoints(
            "token".to_string(),
            "not a url",
            "https://uploads.example.com",
        );
        assert!(matches!(result, Err(ReleaseError::Endpoint(_))));
    }

    #[test]
    fn test_token_lookup_prefers_gh_token() {
        let token = token_from(|name| match name {
            "GH_TOKEN" => Some("gh-token-value".to_string()),
            "GITHUB_TOKEN" => Some("github-token-value".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(token, "gh-token-value");
    }

    #[test]
    fn test_token_lookup_falls_back_to_github_token() {
        let token =
            token_from(|name| (name == "GITHUB_TOKEN").then(|| "github-token-value".to_string()))
                .unwrap();
        assert_eq!(token, "github-token-value");
    }

    #[test]
    fn test_token_lookup_fails_without_any_token() {
        let result = token_from(|_| None);
        assert!(matches!(result, Err(ReleaseError::MissingToken)));
    }
}
