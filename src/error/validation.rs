use thiserror::Error;

/// Problems with command input, detected before any remote call is made
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required command field was empty.
    ///
    /// Discord marks these options as required, so this normally only occurs
    /// when a client sends an empty string.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The header image URL could not be parsed.
    #[error("Invalid header image URL '{value}': {source}")]
    InvalidImageUrl {
        /// The raw value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },
}
