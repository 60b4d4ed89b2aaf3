//! Loader phases and the views handed to the presentation layer.

use std::sync::Arc;

use serde::Serialize;

use crate::descriptor::SiteDescriptor;
use crate::descriptor_url::base_url;
use crate::display::{to_display_item_with, to_overview_with, DisplayItem, DisplayOptions, SiteOverview};
use crate::error::LoaderError;

/// Where the loader is in `Idle -> Loading -> {Ready, Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

impl LoaderPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            LoaderPhase::Idle => "idle",
            LoaderPhase::Loading => "loading",
            LoaderPhase::Ready => "ready",
            LoaderPhase::Failed => "failed",
        }
    }
}

/// A validated descriptor with its display projections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedSite {
    pub descriptor_url: String,
    pub base_url: String,
    pub descriptor: SiteDescriptor,
    pub overview: SiteOverview,
    /// Same order as `descriptor.items`.
    pub items: Vec<DisplayItem>,
}

impl LoadedSite {
    pub fn new(descriptor_url: String, descriptor: SiteDescriptor, options: &DisplayOptions) -> Self {
        let base = base_url(&descriptor_url);
        let items = descriptor
            .items
            .iter()
            .map(|item| to_display_item_with(item, &base, options))
            .collect();
        let overview = to_overview_with(&descriptor, options);
        Self {
            descriptor_url,
            base_url: base,
            descriptor,
            overview,
            items,
        }
    }
}

/// Result of a trigger that did not fail.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The fetched site is now the loader's current result.
    Applied(Arc<LoadedSite>),
    /// A newer trigger was issued while this one was in flight; its result
    /// was discarded.
    Superseded,
}

/// Point-in-time copy of the loader state.
#[derive(Debug, Clone)]
pub struct LoaderSnapshot {
    pub phase: LoaderPhase,
    pub loading: bool,
    pub site: Option<Arc<LoadedSite>>,
    pub last_error: Option<LoaderError>,
}
