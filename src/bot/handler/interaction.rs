//! Interaction dispatch for slash commands.
//!
//! Every error is caught here and rendered as a reply to the invoking user;
//! nothing escapes into the gateway task.

use serenity::all::{
    CommandInteraction, Context, CreateMessage, EditInteractionResponse, Interaction,
};

use crate::{
    bot::command,
    error::{publish::PublishError, AppError},
    model::post::{PostRequest, PublishResult},
    service::{formatter, publisher::Publisher},
};

use super::Handler;

/// Routes an interaction to the matching command handler.
pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(cmd) = interaction else {
        return;
    };

    if cmd.data.name == command::COMMAND_NAME {
        handle_news(handler, &ctx, &cmd).await;
    }
}

/// Runs the `/news` command end to end.
///
/// The interaction is deferred first so the image fetch and the two GitHub
/// round-trips are not bounded by Discord's three-second acknowledgement
/// window. On success the deferred response is edited into the confirmation
/// message and a summary embed is sent into the channel; on failure the
/// response carries a human-readable error instead.
async fn handle_news(handler: &Handler, ctx: &Context, cmd: &CommandInteraction) {
    if let Err(e) = cmd.defer(&ctx.http).await {
        tracing::error!("Failed to defer /news interaction: {:?}", e);
        return;
    }

    let request = command::parse_request(cmd);

    match publish_post(handler, &request).await {
        Ok(result) => {
            tracing::info!("Published '{}' at {}", request.title, result.post_url);

            respond(
                ctx,
                cmd,
                format!(
                    "Blog post successfully sent and will be available momentarily at {}.",
                    result.post_url
                ),
            )
            .await;

            // Mirror the published post back into the channel
            let message = CreateMessage::new().embed(command::build_post_embed(&request));
            if let Err(e) = cmd.channel_id.send_message(&ctx.http, message).await {
                tracing::error!("Failed to send post summary embed: {:?}", e);
            }
        }
        Err(e) => {
            tracing::error!("/news command failed: {}", e);

            let reply = match &e {
                AppError::PublishErr(
                    PublishError::ImageFetch { .. }
                    | PublishError::ImageFetchStatus { .. }
                    | PublishError::ImageStage { .. },
                ) => "Failed to download image.".to_string(),
                _ => format!("Failed to create blog post: {}", e),
            };
            respond(ctx, cmd, reply).await;
        }
    }
}

/// Formats and publishes one post with fully local data.
async fn publish_post(
    handler: &Handler,
    request: &PostRequest,
) -> Result<PublishResult, AppError> {
    let record = formatter::format(request, chrono::Utc::now())?;

    let publisher = Publisher::new(
        &handler.github,
        &handler.http_client,
        &handler.config.github_branch,
        &handler.config.site_base_url,
        std::env::temp_dir().join(env!("CARGO_PKG_NAME")),
    );

    let result = publisher.publish(&record).await?;

    Ok(result)
}

/// Edits the deferred interaction response with the final reply text.
async fn respond(ctx: &Context, cmd: &CommandInteraction, content: String) {
    if let Err(e) = cmd
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await
    {
        tracing::error!("Failed to edit /news response: {:?}", e);
    }
}
