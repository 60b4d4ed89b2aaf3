//! CLI command handlers, one per file.

mod analyze;
mod config;
mod resolve;

pub use analyze::run_analyze;
pub use config::run_config;
pub use resolve::run_resolve;

use sitelens_core::LoaderError;

/// Wraps a loader error so the message names the step that failed.
pub(crate) fn step_error(e: LoaderError) -> anyhow::Error {
    let step = e.step();
    anyhow::Error::new(e).context(step)
}
