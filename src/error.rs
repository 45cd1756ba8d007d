use thiserror::Error;

/// Errors surfaced to the caller of an extraction
///
/// Missing fields on the product page are never errors; they come back
/// as `None` in the [`ExtractionResult`](crate::results::ExtractionResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The URL was empty or does not point at a supported marketplace
    #[error("Invalid marketplace URL: {0}")]
    InvalidInput(String),

    /// The product page could not be retrieved
    #[error("Failed to fetch product data: {0}")]
    Fetch(String),
}

impl ExtractError {
    /// Whether re-submitting the same link might succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ExtractError::Fetch(_))
    }
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("invalid CSS selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("marketplace marker must not be empty")]
    EmptyMarker,

    #[error("fetch timeout must be at least 1 second")]
    ZeroTimeout,
}
