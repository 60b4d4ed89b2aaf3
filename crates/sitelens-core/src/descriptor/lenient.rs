//! Field deserializers that never fail on an unexpected JSON type.
//!
//! Published `site.json` files drift: a field that is a string in one site is
//! a number or an object in another. Only the shape of `items` is validated
//! (see [`super::parse_descriptor`]); a mistyped optional field reads as absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{SiteItem, ThemeMetadata};

/// `Some` when the value has the expected type, `None` otherwise.
pub(super) fn field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Image list; entries that are not strings are skipped.
pub(super) fn images<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(entries) => Ok(Some(
            entries
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Theme object, or a bare theme name.
pub(super) fn theme<'de, D>(deserializer: D) -> Result<Option<ThemeMetadata>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(name) => Ok(Some(ThemeMetadata {
            name: Some(name),
            ..ThemeMetadata::default()
        })),
        value => Ok(serde_json::from_value(value).ok()),
    }
}

/// Item list; an entry that is not an object becomes an empty item so the
/// display order is kept.
pub(super) fn items<'de, D>(deserializer: D) -> Result<Vec<SiteItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap_or_default())
        .collect())
}
