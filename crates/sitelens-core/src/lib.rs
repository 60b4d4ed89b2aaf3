pub mod config;
pub mod logging;

pub mod descriptor;
pub mod descriptor_url;
pub mod display;
pub mod error;
pub mod fetch;
pub mod loader;

pub use descriptor::{SiteDescriptor, SiteItem};
pub use descriptor_url::resolve_descriptor_url;
pub use display::{to_display_item, DisplayItem};
pub use error::LoaderError;
pub use fetch::fetch_descriptor;
pub use loader::{LoadOutcome, LoadedSite, LoaderPhase, LoaderSnapshot, SiteDescriptorLoader};
