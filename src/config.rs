use crate::error::ConfigError;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Top-level configuration for the extractor and its HTTP front end
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Which URLs are accepted for extraction
    #[serde(default)]
    pub marketplace: MarketplaceConfig,

    /// Outbound request settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Where each field lives in the product page markup
    #[serde(default)]
    pub selectors: SelectorConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Marketplace URL acceptance rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    /// Substring every accepted URL must contain (case-insensitive)
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Regex patterns; when non-empty at least one must match
    #[serde(default)]
    pub url_patterns: Vec<String>,
}

/// Settings for the single outbound GET
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Honour HTTP(S)_PROXY from the environment
    #[serde(default = "default_system_proxy")]
    pub system_proxy: bool,
}

/// A selector plus the attribute holding the image location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSelector {
    pub selector: String,
    #[serde(default = "default_image_attribute")]
    pub attribute: String,
}

impl ImageSelector {
    pub fn new(selector: &str, attribute: &str) -> Self {
        Self {
            selector: selector.to_string(),
            attribute: attribute.to_string(),
        }
    }
}

/// CSS selectors and text decorations for the product page
///
/// Marketplace markup changes should only ever require edits here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    #[serde(default = "default_title_selector")]
    pub title: String,

    #[serde(default = "default_brand_selector")]
    pub brand: String,

    /// Image lookups, tried in order
    #[serde(default = "default_image_selectors")]
    pub images: Vec<ImageSelector>,

    /// Decorative text removed from the start of the brand byline
    #[serde(default = "default_brand_prefixes")]
    pub brand_prefixes: Vec<String>,

    /// Decorative text removed from the end of the brand byline
    #[serde(default = "default_brand_suffixes")]
    pub brand_suffixes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_marker() -> String {
    "amazon".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_system_proxy() -> bool {
    true
}

fn default_image_attribute() -> String {
    "src".to_string()
}

fn default_title_selector() -> String {
    "#productTitle".to_string()
}

fn default_brand_selector() -> String {
    "#bylineInfo".to_string()
}

fn default_image_selectors() -> Vec<ImageSelector> {
    vec![
        ImageSelector::new("#landingImage", "src"),
        ImageSelector::new("#imgBlkFront", "src"),
    ]
}

fn default_brand_prefixes() -> Vec<String> {
    vec!["Visit the ".to_string(), "Brand: ".to_string()]
}

fn default_brand_suffixes() -> Vec<String> {
    vec![" Store".to_string()]
}

fn default_bind() -> String {
    "127.0.0.1:8787".to_string()
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            url_patterns: Vec::new(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            system_proxy: default_system_proxy(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: default_title_selector(),
            brand: default_brand_selector(),
            images: default_image_selectors(),
            brand_prefixes: default_brand_prefixes(),
            brand_suffixes: default_brand_suffixes(),
        }
    }
}

impl SelectorConfig {
    /// Check every selector parses as CSS
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [self.title.as_str(), self.brand.as_str()]
            .into_iter()
            .chain(self.images.iter().map(|i| i.selector.as_str()));

        for selector in all {
            if let Err(e) = Selector::parse(selector) {
                return Err(ConfigError::Selector {
                    selector: selector.to_string(),
                    reason: e.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would fail or accept everything at extraction time
    pub fn validate(&self) -> Result<(), ConfigError> {
        // An empty marker matches every URL
        if self.marketplace.marker.trim().is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        for pattern in &self.marketplace.url_patterns {
            regex::Regex::new(pattern)?;
        }
        self.selectors.validate()
    }
}
