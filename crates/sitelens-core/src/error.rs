//! Error taxonomy for resolving, fetching and validating a site descriptor.

use thiserror::Error;

/// Failure of one load step. Every variant is terminal for the trigger that
/// produced it; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
    /// The user-supplied input was empty or whitespace-only.
    #[error("please enter a site URL")]
    InvalidInput,

    /// Transport failure or a non-2xx HTTP status.
    #[error("{url}: {reason}")]
    Fetch {
        url: String,
        /// HTTP status code when the server answered; `None` for transport errors.
        status: Option<u32>,
        reason: String,
    },

    /// The response body was not valid JSON.
    #[error("malformed JSON: {0}")]
    Parse(String),

    /// Well-formed JSON that does not have the shape of a site descriptor.
    #[error("invalid site.json structure: {0}")]
    Schema(String),
}

impl LoaderError {
    /// Name of the step that failed, for user-facing messages.
    pub fn step(&self) -> &'static str {
        match self {
            LoaderError::InvalidInput => "resolution",
            LoaderError::Fetch { .. } => "network",
            LoaderError::Parse(_) => "parse",
            LoaderError::Schema(_) => "schema",
        }
    }

    pub(crate) fn transport(url: &str, cause: impl std::fmt::Display) -> Self {
        LoaderError::Fetch {
            url: url.to_string(),
            status: None,
            reason: cause.to_string(),
        }
    }

    pub(crate) fn http(url: &str, code: u32, status_text: Option<&str>) -> Self {
        let reason = match status_text {
            Some(text) if !text.is_empty() => format!("HTTP {} {}", code, text),
            _ => format!("HTTP {}", code),
        };
        LoaderError::Fetch {
            url: url.to_string(),
            status: Some(code),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_names_each_variant() {
        assert_eq!(LoaderError::InvalidInput.step(), "resolution");
        assert_eq!(LoaderError::http("u", 404, None).step(), "network");
        assert_eq!(LoaderError::Parse("x".into()).step(), "parse");
        assert_eq!(LoaderError::Schema("x".into()).step(), "schema");
    }

    #[test]
    fn http_error_carries_status_text() {
        let e = LoaderError::http("https://example.com/site.json", 404, Some("Not Found"));
        assert_eq!(
            e.to_string(),
            "https://example.com/site.json: HTTP 404 Not Found"
        );
        match e {
            LoaderError::Fetch { status, .. } => assert_eq!(status, Some(404)),
            _ => panic!("expected Fetch"),
        }
    }

    #[test]
    fn http_error_without_status_text() {
        let e = LoaderError::http("u", 500, Some(""));
        assert_eq!(e.to_string(), "u: HTTP 500");
    }

    #[test]
    fn transport_error_has_no_status() {
        let e = LoaderError::transport("u", "connection refused");
        assert_eq!(
            e,
            LoaderError::Fetch {
                url: "u".into(),
                status: None,
                reason: "connection refused".into()
            }
        );
    }
}
