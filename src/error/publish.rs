use reqwest::StatusCode;
use thiserror::Error;

/// Failures while fetching the header image or pushing files to the content
/// repository.
///
/// Image errors abort the request before any remote write is attempted. A
/// remote write error after an earlier successful write leaves that write in
/// place; the flow performs no rollback.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Network failure downloading the header image.
    #[error("Failed to download header image from '{url}': {source}")]
    ImageFetch {
        /// The header image URL that was requested
        url: String,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The header image host answered with a non-success status.
    #[error("Header image request to '{url}' returned {status}")]
    ImageFetchStatus {
        /// The header image URL that was requested
        url: String,
        /// The non-success status code returned
        status: StatusCode,
    },

    /// Failure writing the downloaded image to the local scratch directory.
    #[error("Failed to stage header image at '{path}': {source}")]
    ImageStage {
        /// The local scratch path the image was written to
        path: String,
        /// The underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Transport failure creating a file through the contents API.
    #[error("Failed to push '{path}': {source}")]
    RemoteWrite {
        /// Repository path of the file being created
        path: String,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The contents API rejected a file creation.
    #[error("Failed to push '{path}': {status}: {message}")]
    RemoteWriteStatus {
        /// Repository path of the file being created
        path: String,
        /// The non-success status code returned
        status: StatusCode,
        /// Response body returned by the API
        message: String,
    },
}
