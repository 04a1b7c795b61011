//! Remote publication of a formatted post.
//!
//! The publisher runs the write side of a request: fetch the header image,
//! stage it in a local scratch directory, create the markdown file and then
//! the image file on the target branch, and always clean the scratch
//! directory up before returning. It holds no state across invocations.
//!
//! A failed image download aborts the request before any remote write. A
//! failed remote write after an earlier successful one is reported as-is;
//! the flow performs no rollback, so a markdown file can land without its
//! image. Scratch cleanup failures are logged and never surfaced.

use std::path::PathBuf;

use crate::{
    error::publish::PublishError,
    model::post::{PostRecord, PublishResult},
    service::github::GithubClient,
};

/// Pushes one formatted post (and its header image) to the content
/// repository. Constructed per request from the shared clients.
pub struct Publisher<'a> {
    github: &'a GithubClient,
    http: &'a reqwest::Client,
    branch: &'a str,
    site_base_url: &'a str,
    scratch_root: PathBuf,
}

impl<'a> Publisher<'a> {
    /// Creates a new Publisher instance.
    ///
    /// # Arguments
    /// - `github` - Shared contents-API client
    /// - `http` - Shared reqwest client for the image fetch
    /// - `branch` - Target branch for both file creations
    /// - `site_base_url` - Public base URL used to compose the post link
    /// - `scratch_root` - Local directory the image is staged under
    pub fn new(
        github: &'a GithubClient,
        http: &'a reqwest::Client,
        branch: &'a str,
        site_base_url: &'a str,
        scratch_root: PathBuf,
    ) -> Self {
        Self {
            github,
            http,
            branch,
            site_base_url,
            scratch_root,
        }
    }

    /// Publishes the post described by `record`.
    ///
    /// Fetches the header image when one was supplied, creates the markdown
    /// file and then the image file on the target branch, and returns the
    /// public URL the post will appear at. Scratch cleanup runs regardless
    /// of the outcome.
    ///
    /// # Returns
    /// - `Ok(PublishResult)` - Both files created; carries the post URL
    /// - `Err(PublishError::ImageFetch*)` - Image download failed; nothing
    ///   was written remotely
    /// - `Err(PublishError::RemoteWrite*)` - A file creation failed; an
    ///   earlier successful creation in this request is left in place
    pub async fn publish(&self, record: &PostRecord) -> Result<PublishResult, PublishError> {
        let result = self.push_files(record).await;

        self.cleanup(record).await;

        result
    }

    async fn push_files(&self, record: &PostRecord) -> Result<PublishResult, PublishError> {
        // The fetch gates the remote writes: a failed download aborts the
        // request before anything is committed
        let image = match (&record.header_image_url, &record.image_path) {
            (Some(url), Some(path)) => {
                let bytes = self.fetch_image(url.as_str()).await?;
                self.stage_image(path, &bytes).await?;
                Some((path.as_str(), bytes))
            }
            _ => None,
        };

        let commit = self
            .github
            .create_file(
                &record.markdown_path,
                &format!("New blog post: {}", record.title),
                record.rendered_content.as_bytes(),
                self.branch,
            )
            .await?;
        tracing::debug!("Created {} in commit {}", record.markdown_path, commit.sha);

        if let Some((path, bytes)) = image {
            let file_name = record.image_file_name().unwrap_or_default();
            let commit = self
                .github
                .create_file(path, &format!("Add image {}", file_name), &bytes, self.branch)
                .await?;
            tracing::debug!("Created {} in commit {}", path, commit.sha);
        }

        Ok(PublishResult {
            post_url: format!(
                "{}/post/{}-{}/",
                self.site_base_url, record.slug, record.safe_timestamp
            ),
        })
    }

    /// Downloads the header image bytes.
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, PublishError> {
        let response =
            self.http
                .get(url)
                .send()
                .await
                .map_err(|e| PublishError::ImageFetch {
                    url: url.to_string(),
                    source: e,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::ImageFetchStatus {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await.map_err(|e| PublishError::ImageFetch {
            url: url.to_string(),
            source: e,
        })?;

        Ok(bytes.to_vec())
    }

    /// Writes the fetched image under the scratch root, mirroring the
    /// repository layout the upload uses. The staged copy is transient and
    /// removed by `cleanup`.
    async fn stage_image(&self, image_path: &str, bytes: &[u8]) -> Result<(), PublishError> {
        let staged = self.scratch_root.join(image_path);
        if let Some(parent) = staged.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PublishError::ImageStage {
                    path: staged.display().to_string(),
                    source: e,
                })?;
        }
        tokio::fs::write(&staged, bytes)
            .await
            .map_err(|e| PublishError::ImageStage {
                path: staged.display().to_string(),
                source: e,
            })?;

        tracing::debug!("Staged header image at {}", staged.display());
        Ok(())
    }

    /// Best-effort removal of the per-request scratch directory. Failures
    /// are logged, never raised.
    async fn cleanup(&self, record: &PostRecord) {
        let scratch = self.scratch_root.join(&record.directory_path);

        match tokio::fs::remove_dir_all(&scratch).await {
            Ok(()) => tracing::debug!("Removed scratch directory {}", scratch.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                "Failed to remove scratch directory {}: {}",
                scratch.display(),
                e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::post::PostRequest;
    use crate::service::formatter;
    use chrono::{DateTime, TimeZone, Utc};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn record_with_image(image_url: &str) -> PostRecord {
        formatter::format(
            &PostRequest {
                title: "Hello".to_string(),
                author: "Jane".to_string(),
                body: "Body".to_string(),
                header_image_url: Some(image_url.to_string()),
                link: None,
            },
            fixed_now(),
        )
        .unwrap()
    }

    fn record_without_image() -> PostRecord {
        formatter::format(
            &PostRequest {
                title: "Hello".to_string(),
                author: "Jane".to_string(),
                body: "Body".to_string(),
                header_image_url: None,
                link: None,
            },
            fixed_now(),
        )
        .unwrap()
    }

    fn github_for(server: &mockito::ServerGuard) -> GithubClient {
        GithubClient::with_api_base(
            reqwest::Client::new(),
            server.url(),
            "test-token".to_string(),
            "owner".to_string(),
            "repo".to_string(),
        )
    }

    fn scratch(test_name: &str) -> PathBuf {
        std::env::temp_dir().join("newsbot-tests").join(test_name)
    }

    const MARKDOWN_PATH: &str = "/repos/owner/repo/contents/content/en/post/Hello-2024-01-02-03-04-05.md";
    const IMAGE_PATH: &str =
        "/repos/owner/repo/contents/public/post/Hello-2024-01-02-03-04-05/cat.png";
    const COMMIT_BODY: &str = r#"{"commit": {"sha": "abc123"}}"#;

    /// Tests publishing a post without a header image.
    ///
    /// Verifies that only the markdown file is created: no image fetch and
    /// no image write occur, and the confirmation URL is composed from the
    /// base URL, slug, and safe timestamp.
    ///
    /// Expected: Ok with post URL, exactly one contents-API call
    #[tokio::test]
    async fn publishes_markdown_only_without_image() {
        let mut server = mockito::Server::new_async().await;
        let markdown_mock = server
            .mock("PUT", MARKDOWN_PATH)
            .with_status(201)
            .with_body(COMMIT_BODY)
            .expect(1)
            .create_async()
            .await;

        let github = github_for(&server);
        let http = reqwest::Client::new();
        let publisher = Publisher::new(
            &github,
            &http,
            "main",
            "https://blog.test",
            scratch("markdown_only"),
        );

        let result = publisher.publish(&record_without_image()).await.unwrap();

        assert_eq!(
            result.post_url,
            "https://blog.test/post/Hello-2024-01-02-03-04-05/"
        );
        markdown_mock.assert_async().await;
    }

    /// Tests that a failed image fetch gates the remote writes.
    ///
    /// Verifies the fetch precedes the contents-API calls: when the image
    /// host answers with an error status, no file creation is attempted.
    ///
    /// Expected: Err(ImageFetchStatus), zero contents-API calls
    #[tokio::test]
    async fn failed_image_fetch_gates_remote_writes() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/img/cat.png")
            .with_status(404)
            .create_async()
            .await;
        let markdown_mock = server
            .mock("PUT", MARKDOWN_PATH)
            .expect(0)
            .create_async()
            .await;

        let github = github_for(&server);
        let http = reqwest::Client::new();
        let publisher = Publisher::new(
            &github,
            &http,
            "main",
            "https://blog.test",
            scratch("fetch_gates"),
        );

        let record = record_with_image(&format!("{}/img/cat.png", server.url()));
        let result = publisher.publish(&record).await;

        assert!(matches!(
            result,
            Err(PublishError::ImageFetchStatus { status, .. }) if status.as_u16() == 404
        ));
        markdown_mock.assert_async().await;
    }

    /// Tests publishing a post with a header image.
    ///
    /// Verifies the markdown file and the image file are both created on
    /// the target branch and the staged scratch copy is removed afterwards.
    ///
    /// Expected: Ok with post URL, both contents-API calls made, scratch
    /// directory gone
    #[tokio::test]
    async fn publishes_markdown_then_image() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/img/cat.png")
            .with_status(200)
            .with_body([0xffu8, 0xd8, 0xff].as_slice())
            .create_async()
            .await;
        let markdown_mock = server
            .mock("PUT", MARKDOWN_PATH)
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "message": "New blog post: Hello",
                "branch": "main",
            })))
            .with_status(201)
            .with_body(COMMIT_BODY)
            .expect(1)
            .create_async()
            .await;
        let image_mock = server
            .mock("PUT", IMAGE_PATH)
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "message": "Add image cat.png",
                "branch": "main",
            })))
            .with_status(201)
            .with_body(COMMIT_BODY)
            .expect(1)
            .create_async()
            .await;

        let github = github_for(&server);
        let http = reqwest::Client::new();
        let scratch_root = scratch("markdown_then_image");
        let publisher = Publisher::new(
            &github,
            &http,
            "main",
            "https://blog.test",
            scratch_root.clone(),
        );

        let record = record_with_image(&format!("{}/img/cat.png", server.url()));
        let result = publisher.publish(&record).await.unwrap();

        assert_eq!(
            result.post_url,
            "https://blog.test/post/Hello-2024-01-02-03-04-05/"
        );
        markdown_mock.assert_async().await;
        image_mock.assert_async().await;
        assert!(!scratch_root.join(&record.directory_path).exists());
    }

    /// Tests a remote image write failure after a successful markdown write.
    ///
    /// Verifies the error is reported without rollback of the markdown
    /// commit, and that the scratch directory is still removed.
    ///
    /// Expected: Err(RemoteWriteStatus), markdown call made, scratch
    /// directory gone
    #[tokio::test]
    async fn image_write_failure_still_cleans_scratch() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/img/cat.png")
            .with_status(200)
            .with_body("image-bytes")
            .create_async()
            .await;
        let markdown_mock = server
            .mock("PUT", MARKDOWN_PATH)
            .with_status(201)
            .with_body(COMMIT_BODY)
            .expect(1)
            .create_async()
            .await;
        server
            .mock("PUT", IMAGE_PATH)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let github = github_for(&server);
        let http = reqwest::Client::new();
        let scratch_root = scratch("image_write_failure");
        let publisher = Publisher::new(
            &github,
            &http,
            "main",
            "https://blog.test",
            scratch_root.clone(),
        );

        let record = record_with_image(&format!("{}/img/cat.png", server.url()));
        let result = publisher.publish(&record).await;

        assert!(matches!(
            result,
            Err(PublishError::RemoteWriteStatus { status, .. }) if status.as_u16() == 500
        ));
        markdown_mock.assert_async().await;
        assert!(!scratch_root.join(&record.directory_path).exists());
    }
}
