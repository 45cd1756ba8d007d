use crate::error::ExtractError;
use async_trait::async_trait;

/// Retrieves the raw markup of a product page
///
/// Implementations perform exactly one request per call and never retry;
/// retrying is left to whoever called the extractor.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and return the response body
    ///
    /// Non-success statuses and transport failures map to
    /// [`ExtractError::Fetch`].
    async fn fetch(&self, url: &str) -> Result<String, ExtractError>;
}
