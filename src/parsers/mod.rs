pub mod html;
pub mod text;


pub use html::HtmlPage;

/// Structural queries over a parsed page
///
/// Extraction logic only talks to this trait, so a markup change on the
/// marketplace means new selector strings, not new code.
pub trait PageParser {
    /// Text content of the first element matching `selector`
    fn query_text(&self, selector: &str) -> Option<String>;

    /// Value of `attr` on the first element matching `selector` that carries it
    fn query_attribute(&self, selector: &str, attr: &str) -> Option<String>;
}
