//! Site-level summary shown above the item cards.

use serde::{Deserialize, Serialize};

use super::{date_label, or_placeholder, DisplayOptions, NOT_AVAILABLE};
use crate::descriptor::{SiteDescriptor, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOverview {
    pub name: String,
    pub description: String,
    /// Top-level `logo`, else `metadata.site.logo`.
    pub logo: Option<String>,
    pub theme: String,
    pub created: String,
    pub updated: String,
    pub hex_code: String,
    pub icon: String,
}

pub fn to_overview(descriptor: &SiteDescriptor) -> SiteOverview {
    to_overview_with(descriptor, &DisplayOptions::default())
}

pub fn to_overview_with(descriptor: &SiteDescriptor, options: &DisplayOptions) -> SiteOverview {
    let theme = descriptor.theme();
    let site = descriptor.site_info();
    let label = |t: Option<&Timestamp>| {
        t.map(|t| date_label(t, &options.date_format))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    SiteOverview {
        name: or_placeholder(descriptor.title.as_deref(), NOT_AVAILABLE),
        description: or_placeholder(descriptor.description.as_deref(), NOT_AVAILABLE),
        logo: descriptor
            .logo
            .as_deref()
            .or_else(|| site.and_then(|s| s.logo.as_deref()))
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string),
        theme: or_placeholder(theme.and_then(|t| t.name.as_deref()), NOT_AVAILABLE),
        created: label(site.and_then(|s| s.created.as_ref())),
        updated: label(site.and_then(|s| s.updated.as_ref())),
        hex_code: or_placeholder(theme.and_then(|t| t.hex_code.as_deref()), NOT_AVAILABLE),
        icon: or_placeholder(theme.and_then(|t| t.icon.as_deref()), NOT_AVAILABLE),
    }
}
