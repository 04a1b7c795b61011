use std::time::Duration;

use crate::error::AppError;

/// Request timeout applied to every outbound HTTP call. Neither the image
/// fetch nor the contents API has any other bound, so this is the only
/// thing keeping a stalled remote from holding an interaction open.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the shared reqwest client used for image fetches and GitHub API
/// calls.
///
/// The user agent is required by the GitHub API and identifies the bot by
/// crate name and version.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError)` - TLS backend initialization failed
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    Ok(client)
}
