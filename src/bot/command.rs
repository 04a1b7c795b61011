//! The `/news` slash command: definition, option parsing, and the summary
//! embed.

use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed,
    CreateEmbedAuthor,
};

use crate::model::post::PostRequest;

pub const COMMAND_NAME: &str = "news";

/// Embed color used for post summaries
const EMBED_COLOR: u32 = 0x3498db;

/// Builds the global `/news` command definition.
///
/// Registered once in the `ready` handler. All options are strings; Discord
/// enforces presence of the required ones before the interaction reaches us.
pub fn register() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME)
        .description("Publish a blog post to the site")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "title",
                "Enter the title of the blog post",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "author",
                "Enter the author of the blog post",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "text",
                "Markdown text content of the blog post",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "header_image",
                "URL of the header image",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "link",
                "External url to be included in the blog post",
            )
            .required(false),
        )
}

/// Extracts a `PostRequest` from the interaction options.
///
/// Unknown options are ignored; missing ones are left empty and caught by
/// the formatter's validation.
pub fn parse_request(command: &CommandInteraction) -> PostRequest {
    let mut request = PostRequest {
        title: String::new(),
        author: String::new(),
        body: String::new(),
        header_image_url: None,
        link: None,
    };

    for option in &command.data.options {
        let Some(value) = option.value.as_str() else {
            continue;
        };

        match option.name.as_str() {
            "title" => request.title = value.to_string(),
            "author" => request.author = value.to_string(),
            "text" => request.body = value.to_string(),
            "header_image" => request.header_image_url = Some(value.to_string()),
            "link" => request.link = Some(value.to_string()),
            _ => {}
        }
    }

    request
}

/// Builds the summary embed mirroring the published post.
///
/// Title and body come straight from the request, the author is shown as
/// the embed author, the header image (when supplied) as the embed image,
/// and a supplied link as an "External Link" field.
pub fn build_post_embed(request: &PostRequest) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&request.title)
        .description(&request.body)
        .color(EMBED_COLOR)
        .author(CreateEmbedAuthor::new(&request.author));

    if let Some(url) = request.header_image_url.as_deref().filter(|u| !u.is_empty()) {
        embed = embed.image(url);
    }
    if let Some(link) = request.link.as_deref().filter(|l| !l.is_empty()) {
        embed = embed.field("External Link", link, false);
    }

    embed
}
