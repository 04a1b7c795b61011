use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, config::Config, error::AppError, service::github::GithubClient,
};

/// Builds the Discord client with the shared clients injected into the
/// event handler.
///
/// # Arguments
/// - `config` - Application configuration
/// - `http_client` - Shared reqwest client for image fetches
/// - `github` - Shared contents-API client
///
/// # Returns
/// - `Ok(Client)` - Gateway client ready to start
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: Arc<Config>,
    http_client: reqwest::Client,
    github: Arc<GithubClient>,
) -> Result<Client, AppError> {
    // Configure gateway intents - what events the bot will receive
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let handler = Handler::new(config.clone(), http_client, github);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot (blocks until shutdown).
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
