//! Product metadata extraction for stash product links
//!
//! Paste a marketplace product link, get back a best-effort
//! `{name, brand, image_url}` to pre-fill the product form.

pub mod builder;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetchers;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod server;
pub mod utils;

// Re-export commonly used types for convenience
pub use builder::ExtractorBuilder;
pub use error::{ConfigError, ExtractError};
pub use extractor::ProductExtractor;
pub use results::{ExtractionRequest, ExtractionResult, ProductDraft};

/// Extract product fields from `source_url` with the default configuration
///
/// Builds a fresh HTTP client per call. Long-lived callers should build a
/// [`ProductExtractor`] once and reuse it.
///
/// The URL is validated before any client is built, so a bad link is always
/// [`ExtractError::InvalidInput`]. The default configuration always passes
/// validation; the only [`ConfigError`] left is the HTTP client failing to
/// initialise (e.g. no TLS backend), which is reported as
/// [`ExtractError::Fetch`]. Use [`ExtractorBuilder::build`] to see start-up
/// failures as a [`ConfigError`].
pub async fn extract(source_url: &str) -> Result<ExtractionResult, ExtractError> {
    filter::MarketplaceFilter::default().validate(source_url)?;

    let extractor = ExtractorBuilder::new()
        .build()
        .map_err(|e| ExtractError::Fetch(format!("HTTP client unavailable: {}", e)))?;

    extractor.extract(source_url).await
}
