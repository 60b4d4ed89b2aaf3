//! Parse and validate a fetched `site.json` body.

use serde_json::Value;

use super::SiteDescriptor;
use crate::error::LoaderError;

/// Parses `body` as JSON and checks the minimal descriptor shape: a non-null
/// object with an `items` array. An empty `items` array is valid; a missing
/// one is not. Other fields of an unexpected type read as absent.
pub fn parse_descriptor(body: &[u8]) -> Result<SiteDescriptor, LoaderError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| LoaderError::Parse(e.to_string()))?;

    match &value {
        Value::Object(root) => match root.get("items") {
            Some(Value::Array(_)) => {}
            Some(_) => return Err(LoaderError::Schema("`items` is not an array".into())),
            None => return Err(LoaderError::Schema("missing `items`".into())),
        },
        Value::Null => return Err(LoaderError::Schema("document is null".into())),
        _ => return Err(LoaderError::Schema("document is not an object".into())),
    }

    serde_json::from_value(value).map_err(|e| LoaderError::Schema(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Timestamp;
    use crate::display::{to_display_item, to_overview};

    #[test]
    fn empty_items_is_valid() {
        let d = parse_descriptor(br#"{"title":"Demo","items":[]}"#).unwrap();
        assert_eq!(d.title.as_deref(), Some("Demo"));
        assert!(d.items.is_empty());
        assert!(d.metadata.is_none());
    }

    #[test]
    fn missing_items_is_schema_error() {
        let err = parse_descriptor(br#"{"title":"Demo"}"#).unwrap_err();
        assert!(matches!(err, LoaderError::Schema(_)), "{err:?}");
    }

    #[test]
    fn items_must_be_array() {
        let err = parse_descriptor(br#"{"items":{}}"#).unwrap_err();
        assert!(matches!(err, LoaderError::Schema(_)));
        let err = parse_descriptor(br#"{"items":null}"#).unwrap_err();
        assert!(matches!(err, LoaderError::Schema(_)));
    }

    #[test]
    fn non_object_documents_are_schema_errors() {
        for body in [&b"null"[..], &b"[]"[..], &b"42"[..], &b"\"site\""[..]] {
            let err = parse_descriptor(body).unwrap_err();
            assert!(matches!(err, LoaderError::Schema(_)), "{err:?}");
        }
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_descriptor(b"<html>not json</html>").unwrap_err();
        assert!(matches!(err, LoaderError::Parse(_)));
        let err = parse_descriptor(b"").unwrap_err();
        assert!(matches!(err, LoaderError::Parse(_)));
    }

    #[test]
    fn mistyped_optional_fields_load_with_placeholders() {
        let d = parse_descriptor(br#"{"items":[{"title":7}]}"#).unwrap();
        let card = to_display_item(&d.items[0], "https://example.com");
        assert_eq!(card.title, "Untitled");
        assert_eq!(card.description, "No description available.");

        let d = parse_descriptor(br#"{"metadata":{"theme":"clean-one"},"items":[]}"#).unwrap();
        let overview = to_overview(&d);
        assert_eq!(overview.theme, "clean-one");
        assert_eq!(overview.hex_code, "N/A");
        assert_eq!(overview.icon, "N/A");

        let d = parse_descriptor(
            br#"{"items":[{"slug":"a","metadata":{"images":[{"src":"a.png"}]}}]}"#,
        )
        .unwrap();
        let card = to_display_item(&d.items[0], "https://example.com");
        assert_eq!(card.thumbnail, None);
        assert_eq!(card.updated_label, "N/A");
        assert_eq!(card.page_link, "https://example.com/a");
    }

    #[test]
    fn non_object_item_is_an_empty_card() {
        let d = parse_descriptor(br#"{"items":["not-an-item"]}"#).unwrap();
        assert_eq!(d.items.len(), 1);
        assert_eq!(to_display_item(&d.items[0], "https://example.com").title, "Untitled");
    }

    #[test]
    fn full_descriptor_keeps_item_order() {
        let body = br##"{
            "title": "HAX",
            "description": "Site",
            "logo": "files/logo.png",
            "metadata": {
                "theme": { "name": "polaris", "hexCode": "#000", "icon": "icons:home" },
                "site": { "created": 1600000000, "updated": "2024-01-02", "logo": "x.png" }
            },
            "items": [
                { "title": "One", "slug": "one", "unknown": true },
                { "title": "Two", "slug": "two", "location": "pages/two/index.html",
                  "metadata": { "images": ["two.png"], "updated": 1700000000 } }
            ]
        }"##;
        let d = parse_descriptor(body).unwrap();
        let titles: Vec<_> = d.items.iter().map(|i| i.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("One"), Some("Two")]);
        assert_eq!(d.items[1].location.as_deref(), Some("pages/two/index.html"));
        let site = d.site_info().unwrap();
        assert_eq!(site.created, Some(Timestamp::Seconds(1_600_000_000)));
        assert_eq!(
            site.updated,
            Some(Timestamp::Text("2024-01-02".into()))
        );
    }
}
