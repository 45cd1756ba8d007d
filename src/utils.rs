use url::Url;

/// Resolve an image `src` against the page it was found on
///
/// Absolute URLs pass through, protocol-relative (`//host/img.jpg`) and
/// path-relative values are joined onto `page_url`. If the page URL does
/// not parse the value is returned untouched.
pub fn resolve_image_url(page_url: &str, src: &str) -> String {
    let src = src.trim();

    match Url::parse(page_url).and_then(|base| base.join(src)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => src.to_string(),
    }
}
