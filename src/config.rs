use crate::error::{config::ConfigError, AppError};

const DEFAULT_GITHUB_BRANCH: &str = "main";

/// Relative image reference used in front matter when a post has no header
/// image. The site resolves it against its static asset root.
pub const FALLBACK_FEATURED_IMAGE: &str = "images/CUPFLB.png";

pub struct Config {
    pub discord_bot_token: String,

    pub github_token: String,
    pub github_repo_owner: String,
    pub github_repo_name: String,
    pub github_branch: String,

    pub site_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            github_token: std::env::var("GITHUB_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("GITHUB_TOKEN".to_string()))?,
            github_repo_owner: std::env::var("GITHUB_REPO_OWNER")
                .map_err(|_| ConfigError::MissingEnvVar("GITHUB_REPO_OWNER".to_string()))?,
            github_repo_name: std::env::var("GITHUB_REPO_NAME")
                .map_err(|_| ConfigError::MissingEnvVar("GITHUB_REPO_NAME".to_string()))?,
            github_branch: std::env::var("GITHUB_BRANCH")
                .unwrap_or_else(|_| DEFAULT_GITHUB_BRANCH.to_string()),
            site_base_url: std::env::var("SITE_BASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("SITE_BASE_URL".to_string()))?,
        })
    }
}
