use url::Url;

/// Schemes whose hrefs are never followed
const DROPPED_SCHEMES: &[&str] = &["javascript:", "data:"];

/// Resolves a raw href against the page it was found on
///
/// # Rules
///
/// 1. Trim surrounding whitespace
/// 2. Drop empty and fragment-only (`#...`) hrefs
/// 3. Drop `javascript:` and `data:` hrefs (scheme matched case-insensitively)
/// 4. Resolve against `base`, treating `base` as a directory (a trailing `/`
///    is appended when missing)
/// 5. Strip the fragment from the result
///
/// An href the URL parser rejects is resolved as a bare path instead of being
/// dropped.
///
/// # Returns
///
/// * `Some(String)` - The absolute URL
/// * `None` - The href must be dropped, or `base` itself is not a valid URL
///
/// # Examples
///
/// ```
/// use ripple_search::url::clean_href;
///
/// let base = "http://example.com/base/";
/// assert_eq!(
///     clean_href(base, "c.html#sec").as_deref(),
///     Some("http://example.com/base/c.html")
/// );
/// assert_eq!(clean_href(base, "javascript:alert(1)"), None);
/// ```
pub fn clean_href(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_lowercase();
    if DROPPED_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return None;
    }

    let base = if base.ends_with('/') {
        Url::parse(base)
    } else {
        Url::parse(&format!("{}/", base))
    }
    .ok()?;

    let mut resolved = match base.join(href) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Resolving unparseable href {:?} as a path: {}", href, e);
            resolve_as_path(&base, href)
        }
    };

    resolved.set_fragment(None);
    Some(resolved.to_string())
}

/// Fallback for hrefs the parser rejects: splice them in as a path
fn resolve_as_path(base: &Url, href: &str) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    if href.starts_with('/') {
        url.set_path(href);
    } else {
        url.set_path(&format!("{}{}", base.path(), href));
    }
    url
}
