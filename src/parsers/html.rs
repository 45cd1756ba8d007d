use crate::parsers::PageParser;
use scraper::{Html, Selector};

/// A product page parsed into a DOM
pub struct HtmlPage {
    doc: Html,
}

impl HtmlPage {
    /// Parses a full HTML document; malformed markup is tolerated
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    fn selector(selector_str: &str) -> Option<Selector> {
        match Selector::parse(selector_str) {
            Ok(s) => Some(s),
            Err(e) => {
                ::log::warn!("Invalid selector {:?}: {}", selector_str, e);
                None
            }
        }
    }
}

impl PageParser for HtmlPage {
    fn query_text(&self, selector_str: &str) -> Option<String> {
        let selector = Self::selector(selector_str)?;

        self.doc
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    fn query_attribute(&self, selector_str: &str, attr: &str) -> Option<String> {
        let selector = Self::selector(selector_str)?;

        self.doc
            .select(&selector)
            .filter_map(|el| el.value().attr(attr))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(|v| v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_text() {
        let page = HtmlPage::parse(
            r#"<html><body>
                <span id="productTitle">  Desk Lamp  </span>
                <span class="price">$19.99</span>
                <span class="price">$29.99</span>
            </body></html>"#,
        );

        assert_eq!(
            page.query_text("#productTitle").as_deref(),
            Some("  Desk Lamp  ")
        );
        assert_eq!(page.query_text(".price").as_deref(), Some("$19.99"));
        assert_eq!(page.query_text("#missing"), None);
    }

    #[test]
    fn test_query_text_nested() {
        let page = HtmlPage::parse(
            r#"<a id="bylineInfo" href="/stores/x">Visit the <b>Acme</b> Store</a>"#,
        );
        assert_eq!(
            page.query_text("#bylineInfo").as_deref(),
            Some("Visit the Acme Store")
        );
    }

    #[test]
    fn test_query_attribute() {
        let page = HtmlPage::parse(
            r#"<div>
                <img id="landingImage" alt="no src">
                <img class="thumb" src="">
                <img class="thumb" src="https://example.com/b.jpg">
            </div>"#,
        );

        assert_eq!(page.query_attribute("#landingImage", "src"), None);
        assert_eq!(
            page.query_attribute("img.thumb", "src").as_deref(),
            Some("https://example.com/b.jpg")
        );
        assert_eq!(
            page.query_attribute("#landingImage", "alt").as_deref(),
            Some("no src")
        );
    }

    #[test]
    fn test_invalid_selector_is_a_miss() {
        let page = HtmlPage::parse("<p>text</p>");
        assert_eq!(page.query_text("p["), None);
        assert_eq!(page.query_attribute("p[", "class"), None);
    }
}
