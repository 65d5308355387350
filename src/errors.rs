use thiserror::Error;

/// All errors that can occur when using the Pexels video client.
#[derive(Error, Debug)]
pub enum PexelsError {
    /// The upstream answered with a non-success HTTP status. The body is not read.
    #[error("HTTP error, status: {status_code}")]
    Status { status_code: u16 },

    /// The response body could not be decoded as a search result.
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// A transport-level failure from reqwest (connect, read, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller passed an empty search query.
    #[error("search query must not be empty")]
    InvalidQuery,

    /// No API key was given to the builder and `PEXELS_API_KEY` is unset.
    #[error(
        "API key is required. Pass it to ClientBuilder::api_key() \
         or set the PEXELS_API_KEY environment variable."
    )]
    MissingApiKey,

    /// The API key contains characters that are not valid in an HTTP header.
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    /// The configured base URL, or a `next_page` link from the upstream, does not parse.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl PexelsError {
    /// The HTTP status code, if this error came from a non-success response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PexelsError::Status { status_code } => Some(*status_code),
            _ => None,
        }
    }
}

/// A convenience alias for `Result<T, PexelsError>`.
pub type Result<T> = std::result::Result<T, PexelsError>;
