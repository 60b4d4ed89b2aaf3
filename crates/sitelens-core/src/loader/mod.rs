//! The site descriptor loader.
//!
//! Owns the load state machine (`Idle -> Loading -> {Ready, Failed}`) for one
//! site-analysis surface. Triggers may overlap: the latest trigger wins, the
//! transfer of the one it replaces is cancelled and any result that still
//! arrives for it is discarded.

mod guard;
mod state;

pub use state::{LoadOutcome, LoadedSite, LoaderPhase, LoaderSnapshot};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::SiteLensConfig;
use crate::descriptor::SiteDescriptor;
use crate::descriptor_url::resolve_descriptor_url;
use crate::display::DisplayOptions;
use crate::error::LoaderError;
use crate::fetch::{fetch_descriptor, FetchOptions};

use guard::LoadingGuard;

#[derive(Default)]
struct Inner {
    /// Bumped by every trigger; results of older generations are stale.
    generation: u64,
    loading: bool,
    /// Abort token of the transfer started by the current generation.
    in_flight: Option<Arc<AtomicBool>>,
    site: Option<Arc<LoadedSite>>,
    last_error: Option<LoaderError>,
}

impl Inner {
    fn phase(&self) -> LoaderPhase {
        if self.loading {
            LoaderPhase::Loading
        } else if self.last_error.is_some() {
            LoaderPhase::Failed
        } else if self.site.is_some() {
            LoaderPhase::Ready
        } else {
            LoaderPhase::Idle
        }
    }

    /// Starts a new generation and cancels the transfer of the previous one.
    fn next_generation(&mut self) -> u64 {
        if let Some(abort) = self.in_flight.take() {
            abort.store(true, Ordering::Relaxed);
        }
        self.generation += 1;
        self.generation
    }
}

/// Resolves, fetches and validates site descriptors, keeping the latest
/// outcome for a presentation layer to read.
#[derive(Default)]
pub struct SiteDescriptorLoader {
    fetch: FetchOptions,
    display: DisplayOptions,
    inner: Mutex<Inner>,
}

impl SiteDescriptorLoader {
    pub fn new(fetch: FetchOptions, display: DisplayOptions) -> Self {
        Self {
            fetch,
            display,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn from_config(cfg: &SiteLensConfig) -> Self {
        Self::new(cfg.fetch_options(), cfg.display_options())
    }

    /// Loads the site named by `input` (a base URL or a descriptor URL).
    ///
    /// Empty input fails with [`LoaderError::InvalidInput`] without entering
    /// `Loading`. Otherwise the loader is `Loading` until the fetch resolves,
    /// then `Ready` or `Failed`; the previous result stays visible until then.
    /// Returns [`LoadOutcome::Superseded`] when a newer trigger was issued in
    /// the meantime.
    pub async fn load(&self, input: &str) -> Result<LoadOutcome, LoaderError> {
        let descriptor_url = match resolve_descriptor_url(input) {
            Ok(url) => url,
            Err(e) => {
                let mut inner = self.lock();
                inner.next_generation();
                inner.loading = false;
                inner.site = None;
                inner.last_error = Some(e.clone());
                tracing::warn!("site load rejected: {}", e);
                return Err(e);
            }
        };

        let abort = Arc::new(AtomicBool::new(false));
        let generation = {
            let mut inner = self.lock();
            let generation = inner.next_generation();
            inner.loading = true;
            inner.in_flight = Some(Arc::clone(&abort));
            generation
        };
        let _guard = LoadingGuard {
            loader: self,
            generation,
        };

        tracing::debug!(url = %descriptor_url, generation, "loading site descriptor");
        let options = self.fetch.with_abort(abort);
        let result = fetch_descriptor(&descriptor_url, &options).await;
        self.settle(generation, descriptor_url, result)
    }

    /// Cancels the in-flight transfer, if any. The pending trigger then
    /// settles as `Failed` with a cancellation error.
    pub fn cancel(&self) {
        if let Some(abort) = self.lock().in_flight.as_ref() {
            abort.store(true, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> LoaderSnapshot {
        let inner = self.lock();
        LoaderSnapshot {
            phase: inner.phase(),
            loading: inner.loading,
            site: inner.site.clone(),
            last_error: inner.last_error.clone(),
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.lock().phase()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn site(&self) -> Option<Arc<LoadedSite>> {
        self.lock().site.clone()
    }

    pub fn last_error(&self) -> Option<LoaderError> {
        self.lock().last_error.clone()
    }

    fn settle(
        &self,
        generation: u64,
        descriptor_url: String,
        result: Result<SiteDescriptor, LoaderError>,
    ) -> Result<LoadOutcome, LoaderError> {
        let mut inner = self.lock();
        if inner.generation != generation {
            tracing::debug!(url = %descriptor_url, generation, "discarding superseded site descriptor");
            return Ok(LoadOutcome::Superseded);
        }
        inner.loading = false;
        inner.in_flight = None;

        match result {
            Ok(descriptor) => {
                let site = Arc::new(LoadedSite::new(descriptor_url, descriptor, &self.display));
                tracing::info!(
                    url = %site.descriptor_url,
                    items = site.items.len(),
                    "site descriptor loaded"
                );
                inner.site = Some(Arc::clone(&site));
                inner.last_error = None;
                Ok(LoadOutcome::Applied(site))
            }
            Err(e) => {
                tracing::warn!(url = %descriptor_url, step = e.step(), "site load failed: {}", e);
                inner.site = None;
                inner.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Called by [`LoadingGuard`]: clears `loading` if `generation` is still
    /// current and cancels its transfer if it was never settled.
    fn finish_generation(&self, generation: u64) {
        let mut inner = self.lock();
        if inner.generation != generation || !inner.loading {
            return;
        }
        inner.loading = false;
        if let Some(abort) = inner.in_flight.take() {
            abort.store(true, Ordering::Relaxed);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
