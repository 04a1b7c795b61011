//! Minimal GitHub contents-API client.
//!
//! Wraps `PUT /repos/{owner}/{repo}/contents/{path}` for creating and
//! updating repository files as commits. One authenticated client is
//! constructed at startup from configuration and shared, immutably, by every
//! command invocation. The API base URL is a constructor input so tests can
//! point the client at a local mock server.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::publish::PublishError;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Authenticated client for a single GitHub repository.
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
    owner: String,
    repo: String,
}

/// Request body for the contents endpoint.
#[derive(Serialize)]
struct ContentsRequest<'a> {
    message: &'a str,
    /// File bytes, base64-encoded as the API requires
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

/// Commit reference returned by the contents endpoint.
#[derive(Debug, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

#[derive(Deserialize)]
struct ContentsResponse {
    commit: CommitRef,
}

impl GithubClient {
    /// Creates a client against the public GitHub API.
    ///
    /// # Arguments
    /// - `http` - Shared reqwest client (carries the request timeout)
    /// - `token` - Personal access token with contents write permission
    /// - `owner` - Repository owner
    /// - `repo` - Repository name
    pub fn new(http: reqwest::Client, token: String, owner: String, repo: String) -> Self {
        Self::with_api_base(http, GITHUB_API_BASE.to_string(), token, owner, repo)
    }

    /// Creates a client against an arbitrary API base URL.
    ///
    /// Used by tests to point the client at a local mock server.
    pub fn with_api_base(
        http: reqwest::Client,
        api_base: String,
        token: String,
        owner: String,
        repo: String,
    ) -> Self {
        Self {
            http,
            api_base,
            token,
            owner,
            repo,
        }
    }

    /// Creates a new file on the given branch.
    ///
    /// # Arguments
    /// - `path` - Repository path of the new file
    /// - `message` - Commit message
    /// - `content` - Raw file bytes
    /// - `branch` - Target branch
    ///
    /// # Returns
    /// - `Ok(CommitRef)` - Reference to the created commit
    /// - `Err(PublishError::RemoteWrite)` - Transport failure
    /// - `Err(PublishError::RemoteWriteStatus)` - API rejected the creation
    pub async fn create_file(
        &self,
        path: &str,
        message: &str,
        content: &[u8],
        branch: &str,
    ) -> Result<CommitRef, PublishError> {
        self.put_contents(path, message, content, branch, None).await
    }

    /// Updates an existing file in place, gated on its current blob sha.
    ///
    /// Unused by the `/news` flow, which always creates new files, but kept
    /// so future commands can overwrite published posts.
    #[allow(dead_code)]
    pub async fn update_file(
        &self,
        path: &str,
        message: &str,
        content: &[u8],
        sha: &str,
        branch: &str,
    ) -> Result<CommitRef, PublishError> {
        self.put_contents(path, message, content, branch, Some(sha))
            .await
    }

    async fn put_contents(
        &self,
        path: &str,
        message: &str,
        content: &[u8],
        branch: &str,
        sha: Option<&str>,
    ) -> Result<CommitRef, PublishError> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, self.owner, self.repo, path
        );
        let body = ContentsRequest {
            message,
            content: STANDARD.encode(content),
            branch,
            sha,
        };

        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .json(&body)
            .send()
            .await
            .map_err(|e| PublishError::RemoteWrite {
                path: path.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PublishError::RemoteWriteStatus {
                path: path.to_string(),
                status,
                message,
            });
        }

        let contents: ContentsResponse =
            response.json().await.map_err(|e| PublishError::RemoteWrite {
                path: path.to_string(),
                source: e,
            })?;

        Ok(contents.commit)
    }
}
