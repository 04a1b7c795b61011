//! Deterministic formatting of a post request into repository paths and a
//! front-matter-annotated markdown document.
//!
//! Everything here is a pure function of the request plus one captured clock
//! reading. The interaction handler captures the timestamp and passes it in,
//! so repeated calls with the same inputs produce byte-identical output.

use chrono::{DateTime, SecondsFormat, Utc};
use url::Url;

use crate::{
    config::FALLBACK_FEATURED_IMAGE,
    error::validation::ValidationError,
    model::post::{FrontMatter, PostRecord, PostRequest},
};

/// Sanitizes free text into a path-safe slug.
///
/// Spaces become hyphens first, then every remaining character outside
/// `[A-Za-z0-9-]` becomes a hyphen. The same sanitizer is used for the
/// directory path, the markdown file name, and the confirmation URL, so the
/// reported link always matches the committed path. Idempotent.
pub fn slugify(text: &str) -> String {
    text.replace(' ', "-")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Renders the path-safe variant of an ISO-8601 timestamp.
///
/// Derived from the already-rendered `date` string rather than the clock, so
/// the human-readable date and the path timestamp always describe the same
/// instant.
fn safe_timestamp(date: &str) -> String {
    date.replace(':', "-").replace('T', "-").replace('Z', "")
}

/// Last path segment of the header image URL.
///
/// Uploaded assets keep their original file name; a URL with no path yields
/// an empty name, which is accepted as-is.
fn image_file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default()
        .to_string()
}

/// Derives a `PostRecord` from the command input and a captured timestamp.
///
/// Validates that `title`, `author`, and `text` are non-empty and that a
/// supplied header image URL parses. An empty header image value behaves
/// like an absent one: the front matter falls back to the fixed featured
/// image and no image paths are derived.
///
/// A title consisting entirely of disallowed characters yields an all-hyphen
/// slug; path uniqueness comes from the timestamp, not from this layer.
///
/// # Arguments
/// - `request` - Raw command fields
/// - `now` - Captured UTC timestamp; both the front-matter date and the
///   path timestamp derive from this single instant
///
/// # Returns
/// - `Ok(PostRecord)` - Fully derived paths, front matter, and document
/// - `Err(ValidationError)` - Empty required field or unparseable image URL
pub fn format(request: &PostRequest, now: DateTime<Utc>) -> Result<PostRecord, ValidationError> {
    if request.title.is_empty() {
        return Err(ValidationError::MissingField("title"));
    }
    if request.author.is_empty() {
        return Err(ValidationError::MissingField("author"));
    }
    if request.body.is_empty() {
        return Err(ValidationError::MissingField("text"));
    }

    let header_image_url = match request.header_image_url.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(Url::parse(raw).map_err(|e| ValidationError::InvalidImageUrl {
            value: raw.to_string(),
            source: e,
        })?),
    };

    let date = now.to_rfc3339_opts(SecondsFormat::Secs, true);
    let safe_timestamp = safe_timestamp(&date);
    let slug = slugify(&request.title);

    let directory_path = format!("public/post/{}-{}", slug, safe_timestamp);
    let markdown_path = format!("content/en/post/{}-{}.md", slug, safe_timestamp);

    let image_path = header_image_url
        .as_ref()
        .map(|url| format!("{}/{}", directory_path, image_file_name(url)));

    // The site serves content rooted one level below public/
    let featured_image = match &image_path {
        Some(path) => path.strip_prefix("public/").unwrap_or(path).to_string(),
        None => FALLBACK_FEATURED_IMAGE.to_string(),
    };

    let front_matter = FrontMatter {
        title: request.title.clone(),
        date: date.clone(),
        author: request.author.clone(),
        draft: false,
        featured_image,
    };

    let mut rendered_content = front_matter.render();
    rendered_content.push_str(&format!("\n{}\n\n", request.body));
    if let Some(link) = request.link.as_deref().filter(|l| !l.is_empty()) {
        rendered_content.push_str(&format!("Visit the [link]({})!\n", link));
    }

    Ok(PostRecord {
        title: request.title.clone(),
        slug,
        date,
        safe_timestamp,
        directory_path,
        markdown_path,
        image_path,
        header_image_url,
        front_matter,
        rendered_content,
    })
}
