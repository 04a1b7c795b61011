//! Ready event handler for bot initialization.
//!
//! Fired once the bot completes the gateway handshake. Used to log the
//! connection and register the `/news` global command; registration is
//! idempotent, so reconnects simply overwrite the existing definition.

use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context used to register the command
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::create_global_command(&ctx.http, command::register()).await {
        Ok(created) => tracing::info!("Registered /{} command", created.name),
        Err(e) => tracing::error!("Failed to register /{} command: {:?}", command::COMMAND_NAME, e),
    }
}
