use serde::{Deserialize, Serialize};

/// Body of an extraction call: the pasted product link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Product page URL
    #[serde(default)]
    pub url: String,
}

impl ExtractionRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Best-effort product metadata pulled from a product page
///
/// Every field is independent. Absent fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Product title
    pub name: Option<String>,

    /// Brand, with storefront decorations removed
    pub brand: Option<String>,

    /// Primary product image
    pub image_url: Option<String>,
}

impl ExtractionResult {
    /// Create a new result
    pub fn new(name: Option<String>, brand: Option<String>, image_url: Option<String>) -> Self {
        Self {
            name,
            brand,
            image_url,
        }
    }

    /// True when nothing could be extracted from the page
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.brand.is_none() && self.image_url.is_none()
    }

    /// Names of the fields that were found, for logging
    pub fn found_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::with_capacity(3);
        if self.name.is_some() {
            fields.push("name");
        }
        if self.brand.is_some() {
            fields.push("brand");
        }
        if self.image_url.is_some() {
            fields.push("image_url");
        }
        fields
    }
}

/// JSON body returned when an extraction fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A product record being edited in a form, before it is submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub affiliate_link: Option<String>,
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Start a draft from a pasted affiliate link
    pub fn from_link(link: impl Into<String>) -> Self {
        Self {
            affiliate_link: Some(link.into()),
            ..Self::default()
        }
    }

    /// Fill the draft from an extraction result
    ///
    /// Only fields the extractor found overwrite the draft; anything the user
    /// already typed survives a miss.
    pub fn merge(&mut self, result: &ExtractionResult) {
        if let Some(name) = &result.name {
            self.name = Some(name.clone());
        }
        if let Some(brand) = &result.brand {
            self.brand = Some(brand.clone());
        }
        if let Some(image_url) = &result.image_url {
            self.image_url = Some(image_url.clone());
        }
    }

    /// A draft can be submitted once it has a non-blank name
    pub fn is_submittable(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}
