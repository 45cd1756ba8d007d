use crate::config::ExtractorConfig;
use crate::error::ConfigError;
use crate::extractor::ProductExtractor;
use crate::fetchers::PageFetcher;
use std::path::Path;
use std::sync::Arc;

/// Builder for configuring a [`ProductExtractor`]
#[derive(Default)]
pub struct ExtractorBuilder {
    config: ExtractorConfig,
    fetcher: Option<Arc<dyn PageFetcher>>,
}

impl ExtractorBuilder {
    /// Create a builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        self.config = ExtractorConfig::from_file(path)?;
        Ok(self)
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(mut self, json: &str) -> Result<Self, ConfigError> {
        self.config = ExtractorConfig::from_json(json)?;
        Ok(self)
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.fetch.timeout_secs = seconds;
        self
    }

    /// Override the marketplace marker URLs must contain
    pub fn with_marker(mut self, marker: &str) -> Self {
        self.config.marketplace.marker = marker.to_string();
        self
    }

    /// Use a custom page fetcher instead of HTTP
    pub fn with_fetcher(mut self, fetcher: Arc<dyn PageFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// The configuration as it stands
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Build the extractor
    pub fn build(self) -> Result<ProductExtractor, ConfigError> {
        ::log::debug!(
            "Building extractor (marker {:?}, timeout {}s)",
            self.config.marketplace.marker,
            self.config.fetch.timeout_secs
        );

        match self.fetcher {
            Some(fetcher) => ProductExtractor::with_fetcher(&self.config, fetcher),
            None => ProductExtractor::new(&self.config),
        }
    }
}
