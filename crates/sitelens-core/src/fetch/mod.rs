//! HTTP GET of a site descriptor.
//!
//! Uses the curl crate (libcurl) for one GET per load: redirects are followed,
//! nothing is retried. The transfer is blocking and runs on tokio's blocking
//! pool; an optional abort token cancels it mid-flight.

mod status;

use std::str;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::descriptor::{parse_descriptor, SiteDescriptor};
use crate::error::LoaderError;

/// Transfer settings for a descriptor GET.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    /// Upper bound for the whole transfer.
    pub timeout: Duration,
    pub max_redirections: u32,
    pub user_agent: Option<String>,
    /// Set to true to cancel the transfer.
    pub abort: Option<Arc<AtomicBool>>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            max_redirections: 10,
            user_agent: None,
            abort: None,
        }
    }
}

impl FetchOptions {
    /// Same options with `abort` as the cancellation token.
    pub fn with_abort(&self, abort: Arc<AtomicBool>) -> Self {
        Self {
            abort: Some(abort),
            ..self.clone()
        }
    }
}

/// Fetches `url` and returns the validated descriptor.
///
/// Transport failures and non-2xx statuses are [`LoaderError::Fetch`];
/// bodies that are not JSON are [`LoaderError::Parse`]; JSON without an
/// `items` array is [`LoaderError::Schema`].
pub async fn fetch_descriptor(
    url: &str,
    options: &FetchOptions,
) -> Result<SiteDescriptor, LoaderError> {
    let owned_url = url.to_string();
    let opts = options.clone();
    let body = tokio::task::spawn_blocking(move || get_body(&owned_url, &opts))
        .await
        .map_err(|e| LoaderError::transport(url, e))??;

    let descriptor = parse_descriptor(&body)?;
    tracing::debug!(
        url,
        items = descriptor.items.len(),
        title = ?descriptor.title,
        "fetched site descriptor"
    );
    Ok(descriptor)
}

/// Performs the GET and returns the raw body of a 2xx response.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn get_body(url: &str, options: &FetchOptions) -> Result<Vec<u8>, LoaderError> {
    let fail = |e: curl::Error| LoaderError::transport(url, e);
    let mut headers: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    tracing::debug!(url, "GET site descriptor");

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(fail)?;
    easy.get(true).map_err(fail)?;
    easy.follow_location(true).map_err(fail)?;
    easy.max_redirections(options.max_redirections).map_err(fail)?;
    easy.connect_timeout(options.connect_timeout).map_err(fail)?;
    easy.timeout(options.timeout).map_err(fail)?;
    if let Some(agent) = &options.user_agent {
        easy.useragent(agent).map_err(fail)?;
    }
    if options.abort.is_some() {
        easy.progress(true).map_err(fail)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })
            .map_err(fail)?;
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(fail)?;
        if let Some(abort) = &options.abort {
            let abort = Arc::clone(abort);
            transfer
                .progress_function(move |_, _, _, _| !abort.load(Ordering::Relaxed))
                .map_err(fail)?;
        }
        transfer.perform().map_err(|e| {
            if e.is_aborted_by_callback() {
                LoaderError::transport(url, "request cancelled")
            } else {
                fail(e)
            }
        })?;
    }

    let code = easy.response_code().map_err(fail)?;
    if !(200..300).contains(&code) {
        let text = status::status_text(&headers);
        return Err(LoaderError::http(url, code, text.as_deref()));
    }

    Ok(body)
}
