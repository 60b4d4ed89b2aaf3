//! Site descriptor (`site.json`) structures.
//!
//! Only `items` is required. Every other field stays `None` when absent or
//! of an unexpected type; placeholder text is a display concern (see
//! [`crate::display`]).

mod lenient;
mod parse;

pub use parse::parse_descriptor;

use serde::{Deserialize, Serialize};

/// Root object of a `site.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDescriptor {
    #[serde(default, deserialize_with = "lenient::field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub metadata: Option<SiteMetadata>,
    /// Display order is insertion order.
    #[serde(deserialize_with = "lenient::items")]
    pub items: Vec<SiteItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteMetadata {
    #[serde(default, deserialize_with = "lenient::theme")]
    pub theme: Option<ThemeMetadata>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub site: Option<SiteInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeMetadata {
    #[serde(default, deserialize_with = "lenient::field")]
    pub name: Option<String>,
    #[serde(default, rename = "hexCode", deserialize_with = "lenient::field")]
    pub hex_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default, deserialize_with = "lenient::field")]
    pub created: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub updated: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub logo: Option<String>,
}

/// One page of the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteItem {
    #[serde(default, deserialize_with = "lenient::field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub description: Option<String>,
    /// Path of the item's page relative to the site base URL.
    #[serde(default, deserialize_with = "lenient::field")]
    pub slug: Option<String>,
    /// Path or URL of the item's source document.
    #[serde(default, deserialize_with = "lenient::field")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub metadata: Option<ItemMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMetadata {
    #[serde(default, deserialize_with = "lenient::images")]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub updated: Option<Timestamp>,
}

/// Timestamp as published by the site: epoch seconds or a preformatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Seconds(i64),
    FractionalSeconds(f64),
    Text(String),
}

impl Timestamp {
    /// Whole seconds since the Unix epoch, if numeric.
    pub fn as_epoch_secs(&self) -> Option<i64> {
        match self {
            Timestamp::Seconds(s) => Some(*s),
            Timestamp::FractionalSeconds(f) if f.is_finite() => Some(f.trunc() as i64),
            Timestamp::FractionalSeconds(_) | Timestamp::Text(_) => None,
        }
    }
}

impl SiteItem {
    /// First image URL, used as the card thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.images.as_ref())
            .and_then(|images| images.first())
            .map(String::as_str)
    }

    pub fn updated(&self) -> Option<&Timestamp> {
        self.metadata.as_ref().and_then(|m| m.updated.as_ref())
    }
}

impl SiteDescriptor {
    pub fn theme(&self) -> Option<&ThemeMetadata> {
        self.metadata.as_ref().and_then(|m| m.theme.as_ref())
    }

    pub fn site_info(&self) -> Option<&SiteInfo> {
        self.metadata.as_ref().and_then(|m| m.site.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_accepts_numbers_and_strings() {
        let t: Timestamp = serde_json::from_str("1700000000").unwrap();
        assert_eq!(t, Timestamp::Seconds(1_700_000_000));
        assert_eq!(t.as_epoch_secs(), Some(1_700_000_000));

        let t: Timestamp = serde_json::from_str("1700000000.75").unwrap();
        assert_eq!(t.as_epoch_secs(), Some(1_700_000_000));

        let t: Timestamp = serde_json::from_str("\"Nov 14, 2023\"").unwrap();
        assert_eq!(t, Timestamp::Text("Nov 14, 2023".into()));
        assert_eq!(t.as_epoch_secs(), None);
    }

    #[test]
    fn item_accessors_handle_missing_metadata() {
        let item = SiteItem::default();
        assert!(item.thumbnail().is_none());
        assert!(item.updated().is_none());

        let item: SiteItem = serde_json::from_str(
            r#"{"metadata":{"images":["a.png","b.png"],"updated":5}}"#,
        )
        .unwrap();
        assert_eq!(item.thumbnail(), Some("a.png"));
        assert_eq!(item.updated(), Some(&Timestamp::Seconds(5)));
    }

    #[test]
    fn empty_images_has_no_thumbnail() {
        let item: SiteItem = serde_json::from_str(r#"{"metadata":{"images":[]}}"#).unwrap();
        assert!(item.thumbnail().is_none());
    }

    #[test]
    fn theme_uses_camel_case_hex_code() {
        let d: SiteDescriptor = serde_json::from_str(
            r##"{"items":[],"metadata":{"theme":{"name":"clean-one","hexCode":"#1e407c","icon":"hax:site"}}}"##,
        )
        .unwrap();
        let theme = d.theme().unwrap();
        assert_eq!(theme.name.as_deref(), Some("clean-one"));
        assert_eq!(theme.hex_code.as_deref(), Some("#1e407c"));
        assert_eq!(theme.icon.as_deref(), Some("hax:site"));
    }
}
