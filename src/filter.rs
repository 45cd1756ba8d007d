use crate::config::MarketplaceConfig;
use crate::error::ExtractError;
use regex::Regex;
use url::Url;

/// Decides which pasted links are marketplace product URLs
#[derive(Debug, Clone)]
pub struct MarketplaceFilter {
    marker: String,
    url_regexes: Vec<Regex>,
}

impl Default for MarketplaceFilter {
    fn default() -> Self {
        Self {
            marker: MarketplaceConfig::default().marker.to_lowercase(),
            url_regexes: Vec::new(),
        }
    }
}

impl MarketplaceFilter {
    /// Create a new filter from configuration
    pub fn new(config: &MarketplaceConfig) -> Result<Self, regex::Error> {
        let mut url_regexes = Vec::with_capacity(config.url_patterns.len());
        for pattern in &config.url_patterns {
            url_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            marker: config.marker.to_lowercase(),
            url_regexes,
        })
    }

    /// Whether a pasted value looks like a marketplace product link
    ///
    /// Form handlers call this before triggering an extraction.
    pub fn is_marketplace_url(&self, url: &str) -> bool {
        let url = url.trim();
        if !is_web_link(url) {
            return false;
        }

        if !url.to_lowercase().contains(&self.marker) {
            return false;
        }

        // If patterns are specified, at least one must match
        if !self.url_regexes.is_empty() && !self.url_regexes.iter().any(|r| r.is_match(url)) {
            return false;
        }

        true
    }

    /// Validate a URL for extraction, returning it trimmed
    pub fn validate<'a>(&self, url: &'a str) -> Result<&'a str, ExtractError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ExtractError::InvalidInput("URL is empty".to_string()));
        }

        if !is_web_link(trimmed) {
            ::log::debug!("Rejected unparseable or non-http link: {}", trimmed);
            return Err(ExtractError::InvalidInput(format!(
                "not an http(s) link: {}",
                trimmed
            )));
        }

        if !self.is_marketplace_url(trimmed) {
            ::log::debug!("Rejected non-marketplace URL: {}", trimmed);
            return Err(ExtractError::InvalidInput(format!(
                "expected a {} product link, got {}",
                self.marker, trimmed
            )));
        }

        Ok(trimmed)
    }

    /// Drop the fragment so equivalent links compare equal
    pub fn normalize_url(&self, url: &str) -> String {
        match Url::parse(url) {
            Ok(mut parsed) => {
                parsed.set_fragment(None);
                parsed.to_string()
            }
            Err(_) => url.to_string(),
        }
    }
}

/// An absolute `http` or `https` URL with a host
fn is_web_link(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
}
