//! Presentation-ready projections of a site descriptor.
//!
//! Every function here is total: missing fields become placeholder text and
//! unresolvable links fall back to plain string joining.

mod date;
mod overview;

pub use date::{date_label, DEFAULT_DATE_FORMAT};
pub use overview::{to_overview, to_overview_with, SiteOverview};

use serde::{Deserialize, Serialize};

use crate::descriptor::SiteItem;
use crate::descriptor_url::resolve_link;

pub const UNTITLED: &str = "Untitled";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NOT_AVAILABLE: &str = "N/A";
/// Appended to an item's slug when it has no `location`.
pub const DEFAULT_SOURCE_SUFFIX: &str = "index.html";

/// Formatting knobs for display projections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// chrono `strftime` pattern for epoch timestamps (rendered in UTC).
    pub date_format: String,
    pub source_suffix: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
        }
    }
}

/// One card: a [`SiteItem`] with every optional field defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub updated_label: String,
    pub page_link: String,
    pub source_link: String,
}

/// Maps `item` for display with the default [`DisplayOptions`].
///
/// `base_url` is the site base, i.e. the descriptor URL without `/site.json`.
pub fn to_display_item(item: &SiteItem, base_url: &str) -> DisplayItem {
    to_display_item_with(item, base_url, &DisplayOptions::default())
}

pub fn to_display_item_with(
    item: &SiteItem,
    base_url: &str,
    options: &DisplayOptions,
) -> DisplayItem {
    let slug = item.slug.as_deref().unwrap_or("");
    let page_link = resolve_link(base_url, slug);
    let source_link = match item.location.as_deref() {
        Some(location) => resolve_link(base_url, location),
        None => resolve_link(base_url, &source_path(slug, &options.source_suffix)),
    };

    DisplayItem {
        title: or_placeholder(item.title.as_deref(), UNTITLED),
        description: or_placeholder(item.description.as_deref(), NO_DESCRIPTION),
        thumbnail: item.thumbnail().map(str::to_string),
        updated_label: item
            .updated()
            .map(|t| date_label(t, &options.date_format))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        page_link,
        source_link,
    }
}

/// `slug/suffix` without doubled slashes.
fn source_path(slug: &str, suffix: &str) -> String {
    let slug = slug.trim_end_matches('/');
    let suffix = suffix.trim_start_matches('/');
    if slug.is_empty() {
        suffix.to_string()
    } else {
        format!("{}/{}", slug, suffix)
    }
}

/// Empty strings count as missing, as the rendered cards always did.
pub(crate) fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}
