mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;

use std::sync::Arc;

use crate::{config::Config, error::AppError, service::github::GithubClient};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env()?);
    let http_client = startup::setup_reqwest_client()?;

    // One authenticated client for the whole process; every interaction
    // borrows it through the handler
    let github = Arc::new(GithubClient::new(
        http_client.clone(),
        config.github_token.clone(),
        config.github_repo_owner.clone(),
        config.github_repo_name.clone(),
    ));

    tracing::info!("Starting newsbot");

    let client = bot::start::init_bot(config, http_client, github).await?;
    bot::start::start_bot(client).await?;

    Ok(())
}
