//! Date labels for descriptor timestamps.

use chrono::DateTime;

use super::NOT_AVAILABLE;
use crate::descriptor::Timestamp;

/// US-style short date, as the cards have always shown it.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Renders `timestamp` for display.
///
/// Numeric timestamps are whole seconds since the Unix epoch and are rendered
/// in UTC with `format`. Text timestamps are already labels and pass through.
/// Out-of-range values and invalid patterns yield `N/A`.
pub fn date_label(timestamp: &Timestamp, format: &str) -> String {
    if let Timestamp::Text(text) = timestamp {
        return super::or_placeholder(Some(text.as_str()), NOT_AVAILABLE);
    }
    let Some(secs) = timestamp.as_epoch_secs() else {
        return NOT_AVAILABLE.to_string();
    };
    let Some(millis) = secs.checked_mul(1000) else {
        return NOT_AVAILABLE.to_string();
    };
    let Some(at) = DateTime::from_timestamp_millis(millis) else {
        return NOT_AVAILABLE.to_string();
    };

    let mut label = String::new();
    if std::fmt::write(&mut label, format_args!("{}", at.format(format))).is_err() {
        return NOT_AVAILABLE.to_string();
    }
    label
}
