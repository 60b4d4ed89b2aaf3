//! Descriptor URL modeling.
//!
//! Normalizes user input into the URL of a site's `site.json` and derives the
//! base URL that item slugs are resolved against.

mod join;

pub use join::resolve_link;

use crate::error::LoaderError;

/// File name every site descriptor is published under.
pub const DESCRIPTOR_FILE: &str = "site.json";

/// Normalizes user input into a descriptor URL.
///
/// Input already ending in `site.json` is returned (trimmed) unchanged;
/// anything else gets exactly one `/site.json` appended. A run of trailing
/// slashes collapses into that one separator, so a scheme-only input such as
/// `"https://"` becomes `"https:/site.json"`. The result is a fixed point of
/// this function.
///
/// # Examples
///
/// - `resolve_descriptor_url("https://haxtheweb.org/")` → `"https://haxtheweb.org/site.json"`
/// - `resolve_descriptor_url("https://haxtheweb.org/site.json")` → unchanged
pub fn resolve_descriptor_url(input: &str) -> Result<String, LoaderError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LoaderError::InvalidInput);
    }
    if trimmed.ends_with(DESCRIPTOR_FILE) {
        return Ok(trimmed.to_string());
    }
    let stem = trimmed.trim_end_matches('/');
    Ok(format!("{}/{}", stem, DESCRIPTOR_FILE))
}

/// Strips the trailing `/site.json` from a descriptor URL.
pub fn base_url(descriptor_url: &str) -> String {
    let url = descriptor_url.trim();
    let stem = url
        .strip_suffix(DESCRIPTOR_FILE)
        .map(|s| s.trim_end_matches('/'))
        .unwrap_or(url);
    stem.to_string()
}
