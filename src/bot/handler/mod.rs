use std::sync::Arc;

use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::{config::Config, service::github::GithubClient};

pub mod interaction;
pub mod ready;

/// Discord bot event handler
///
/// Owns the process-wide clients: the reqwest client used for image fetches
/// and the authenticated GitHub contents-API client. Both are constructed
/// once at startup and shared immutably across all interactions.
pub struct Handler {
    pub config: Arc<Config>,
    pub http_client: reqwest::Client,
    pub github: Arc<GithubClient>,
}

impl Handler {
    pub fn new(
        config: Arc<Config>,
        http_client: reqwest::Client,
        github: Arc<GithubClient>,
    ) -> Self {
        Self {
            config,
            http_client,
            github,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called for every interaction dispatched to the bot
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(self, ctx, interaction).await;
    }
}
