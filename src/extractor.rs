//! Product metadata extraction
//!
//! Turns a marketplace product link into a best-effort
//! [`ExtractionResult`]. Only an unusable URL or a failed fetch is an
//! error; fields missing from the page simply come back as `None`.

use crate::config::{ExtractorConfig, SelectorConfig};
use crate::error::{ConfigError, ExtractError};
use crate::fetchers::{HttpFetcher, PageFetcher};
use crate::filter::MarketplaceFilter;
use crate::parsers::text::{clean_text, strip_decorations};
use crate::parsers::{HtmlPage, PageParser};
use crate::results::ExtractionResult;
use crate::utils::resolve_image_url;
use std::sync::Arc;

/// Extracts product name, brand and image from marketplace pages
#[derive(Clone)]
pub struct ProductExtractor {
    filter: MarketplaceFilter,
    selectors: SelectorConfig,
    fetcher: Arc<dyn PageFetcher>,
}

impl ProductExtractor {
    /// Create an extractor that fetches over HTTP
    pub fn new(config: &ExtractorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let fetcher = HttpFetcher::new(&config.fetch)?;
        Self::with_fetcher(config, Arc::new(fetcher))
    }

    /// Create an extractor with a custom page fetcher
    pub fn with_fetcher(
        config: &ExtractorConfig,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            filter: MarketplaceFilter::new(&config.marketplace)?,
            selectors: config.selectors.clone(),
            fetcher,
        })
    }

    /// The URL filter used to accept links
    pub fn filter(&self) -> &MarketplaceFilter {
        &self.filter
    }

    /// Fetch `source_url` and extract its product fields
    pub async fn extract(&self, source_url: &str) -> Result<ExtractionResult, ExtractError> {
        let url = self.filter.validate(source_url)?;

        let html = self.fetcher.fetch(url).await?;

        let result = extract_fields(&HtmlPage::parse(&html), url, &self.selectors);

        ::log::info!(
            "Extracted {:?} from {}",
            result.found_fields(),
            self.filter.normalize_url(url)
        );

        Ok(result)
    }
}

/// Pulls the three product fields out of a parsed page
///
/// Each lookup is independent; a miss leaves that field `None`.
pub fn extract_fields(
    page: &impl PageParser,
    page_url: &str,
    selectors: &SelectorConfig,
) -> ExtractionResult {
    let name = page
        .query_text(&selectors.title)
        .and_then(|t| clean_text(&t));
    if name.is_none() {
        ::log::debug!("No product title at {:?}", selectors.title);
    }

    let brand = page.query_text(&selectors.brand).and_then(|b| {
        strip_decorations(&b, &selectors.brand_prefixes, &selectors.brand_suffixes)
    });
    if brand.is_none() {
        ::log::debug!("No brand at {:?}", selectors.brand);
    }

    let image_url = selectors
        .images
        .iter()
        .find_map(|image| page.query_attribute(&image.selector, &image.attribute))
        .map(|src| resolve_image_url(page_url, &src));
    if image_url.is_none() {
        ::log::debug!("No product image matched {} selectors", selectors.images.len());
    }

    ExtractionResult::new(name, brand, image_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::stub::StubFetcher;

    const PRODUCT_PAGE: &str = r#"
        <html><body>
            <span id="productTitle" class="a-size-large">  Wireless Mouse  </span>
            <a id="bylineInfo" href="/stores/Logitech">Visit the Logitech Store</a>
            <img id="landingImage" src="https://m.media-amazon.com/images/I/mouse.jpg">
        </body></html>
    "#;

    fn extractor(fetcher: Arc<StubFetcher>) -> ProductExtractor {
        ProductExtractor::with_fetcher(&ExtractorConfig::default(), fetcher).unwrap()
    }

    #[tokio::test]
    async fn test_extract_full_page() {
        let fetcher = StubFetcher::ok(PRODUCT_PAGE);
        let result = extractor(fetcher.clone())
            .extract("https://www.amazon.com/dp/B000FAKE")
            .await
            .unwrap();

        assert_eq!(result.name.as_deref(), Some("Wireless Mouse"));
        assert_eq!(result.brand.as_deref(), Some("Logitech"));
        assert_eq!(
            result.image_url.as_deref(),
            Some("https://m.media-amazon.com/images/I/mouse.jpg")
        );
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_urls_skip_network() {
        let fetcher = StubFetcher::ok(PRODUCT_PAGE);
        let extractor = extractor(fetcher.clone());

        for url in [
            "",
            "   ",
            "https://example.com/dp/B000FAKE",
            "not a link",
            "www.amazon.com/dp/B000FAKE",
            "I bought it on amazon",
            "ftp://amazon.com/x",
        ] {
            let err = extractor.extract(url).await.unwrap_err();
            assert!(
                matches!(err, ExtractError::InvalidInput(_)),
                "{:?} should be rejected",
                url
            );
        }
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_surfaced() {
        let fetcher = StubFetcher::failing("HTTP 500 Internal Server Error");
        let err = extractor(fetcher.clone())
            .extract("https://www.amazon.com/dp/B000FAKE")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ExtractError::Fetch("HTTP 500 Internal Server Error".to_string())
        );
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_extract_is_idempotent() {
        let extractor = extractor(StubFetcher::ok(PRODUCT_PAGE));
        let first = extractor
            .extract("https://www.amazon.com/dp/B000FAKE")
            .await
            .unwrap();
        let second = extractor
            .extract("https://www.amazon.com/dp/B000FAKE")
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_page_gives_empty_result() {
        let result = extractor(StubFetcher::ok(""))
            .extract("https://www.amazon.com/dp/B000FAKE")
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ExtractorConfig::default();
        config.selectors.brand = "a[".to_string();
        let err = ProductExtractor::with_fetcher(&config, StubFetcher::ok("")).err();
        assert!(matches!(err, Some(ConfigError::Selector { .. })));
    }
}
