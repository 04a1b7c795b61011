//! Blog post domain models.
//!
//! A `PostRequest` holds the raw fields received from the `/news` command. It
//! is turned into a `PostRecord` by the formatter, which derives every path
//! and the rendered document from the request plus one captured clock
//! reading. Records are never mutated after construction; the slug and
//! timestamp inside a record are computed once and reused everywhere a path
//! or URL is built from them.

use url::Url;

/// Raw fields received from the `/news` command. Immutable once parsed.
#[derive(Debug, Clone)]
pub struct PostRequest {
    pub title: String,
    pub author: String,
    /// Markdown body of the post
    pub body: String,
    /// URL of the header image; an empty value behaves like an absent one
    pub header_image_url: Option<String>,
    /// Optional external link appended to the end of the post
    pub link: Option<String>,
}

/// Front-matter block prefixed to every generated post document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    /// ISO-8601 timestamp with a trailing `Z`
    pub date: String,
    pub author: String,
    pub draft: bool,
    /// Site-relative image path, or the fixed fallback reference
    pub featured_image: String,
}

impl FrontMatter {
    /// Renders the block the way the static-site generator consumes it.
    pub fn render(&self) -> String {
        format!(
            "---\ntitle: '{}'\ndate: '{}'\nauthor: '{}'\ndraft: {}\nfeatured_image: '{}'\n---\n",
            self.title, self.date, self.author, self.draft, self.featured_image
        )
    }
}

/// Fully derived post: paths, front matter, and the rendered document.
///
/// Produced deterministically from a `PostRequest` and the captured UTC
/// timestamp. `directory_path`, `markdown_path`, `image_path`, and the
/// confirmation URL all embed the same `{slug}-{safe_timestamp}` pair;
/// divergence between them would break the link reported back to the user.
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub title: String,
    /// Path-safe slug derived from the title
    pub slug: String,
    /// ISO-8601 timestamp used in the front matter `date` field
    pub date: String,
    /// The same instant with `:` and `T` replaced by `-` and `Z` dropped
    pub safe_timestamp: String,
    /// Repository directory holding the post's assets
    pub directory_path: String,
    /// Repository path of the markdown document
    pub markdown_path: String,
    /// Repository path of the header image, when one was supplied
    pub image_path: Option<String>,
    /// Parsed header image URL, when one was supplied
    pub header_image_url: Option<Url>,
    pub front_matter: FrontMatter,
    /// Front matter plus body plus optional link line
    pub rendered_content: String,
}

impl PostRecord {
    /// File name of the header image, as committed to the repository.
    pub fn image_file_name(&self) -> Option<&str> {
        self.image_path
            .as_deref()
            .and_then(|path| path.rsplit('/').next())
    }
}

/// Outcome of a successful publication.
#[derive(Debug)]
pub struct PublishResult {
    /// Public URL the post will be reachable at once the site rebuilds
    pub post_url: String,
}
