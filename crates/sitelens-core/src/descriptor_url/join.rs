//! Link resolution of item paths against a site base URL.

use url::Url;

/// Resolves `path` against `base`, treating `base` as a directory.
///
/// Absolute URLs pass through. When `base` is not an absolute URL the two
/// parts are joined with a single `/`. Never fails.
pub fn resolve_link(base: &str, path: &str) -> String {
    let path = path.trim();
    if let Ok(absolute) = Url::parse(path) {
        return absolute.to_string();
    }

    let base = base.trim();
    let dir = format!("{}/", base.trim_end_matches('/'));
    if let Ok(joined) = Url::parse(&dir).and_then(|b| b.join(path)) {
        return joined.to_string();
    }

    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
