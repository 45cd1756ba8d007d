//! Clean-up of text pulled out of product page elements

/// Collapses every whitespace run to a single space and trims the ends
///
/// Product titles are often split across lines in the markup; this turns
/// them back into a single line. Returns `None` when nothing is left.
pub fn clean_text(text: &str) -> Option<String> {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Strips one matching prefix and one matching suffix, then cleans the rest
///
/// `"Visit the Logitech Store"` with prefix `"Visit the "` and suffix
/// `" Store"` becomes `"Logitech"`. Matching is done on the cleaned text so
/// stray whitespace in the markup does not defeat it.
pub fn strip_decorations(text: &str, prefixes: &[String], suffixes: &[String]) -> Option<String> {
    let cleaned = clean_text(text)?;
    let mut rest = cleaned.as_str();

    for prefix in prefixes.iter().filter(|p| !p.is_empty()) {
        if let Some(stripped) = rest.strip_prefix(prefix.as_str()) {
            rest = stripped;
            break;
        }
    }

    for suffix in suffixes.iter().filter(|s| !s.is_empty()) {
        if let Some(stripped) = rest.strip_suffix(suffix.as_str()) {
            rest = stripped;
            break;
        }
    }

    clean_text(rest)
}
