//! Status text from collected response header lines.

/// Reason phrase of the last status line (the final response after
/// redirects), e.g. `Not Found` from `HTTP/1.1 404 Not Found`.
/// HTTP/2 status lines carry no reason phrase and yield `None`.
pub(crate) fn status_text(lines: &[String]) -> Option<String> {
    let line = lines
        .iter()
        .rev()
        .map(|l| l.trim())
        .find(|l| l.starts_with("HTTP/"))?;
    let mut parts = line.splitn(3, ' ');
    parts.next()?;
    parts.next()?;
    let text = parts.next()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_phrase_of_status_line() {
        let lines = [
            "HTTP/1.1 404 Not Found".to_string(),
            "Content-Length: 0".to_string(),
        ];
        assert_eq!(status_text(&lines).as_deref(), Some("Not Found"));
    }

    #[test]
    fn last_status_line_wins_after_redirect() {
        let lines = [
            "HTTP/1.1 301 Moved Permanently".to_string(),
            "Location: /site.json".to_string(),
            "".to_string(),
            "HTTP/1.1 503 Service Unavailable".to_string(),
        ];
        assert_eq!(status_text(&lines).as_deref(), Some("Service Unavailable"));
    }

    #[test]
    fn http2_has_no_reason_phrase() {
        let lines = ["HTTP/2 404".to_string()];
        assert_eq!(status_text(&lines), None);
    }

    #[test]
    fn no_status_line() {
        let lines = ["Content-Type: application/json".to_string()];
        assert_eq!(status_text(&lines), None);
    }
}
