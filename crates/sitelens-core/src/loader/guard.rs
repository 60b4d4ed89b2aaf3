//! RAII guard that clears the loading flag when a trigger ends.

use super::SiteDescriptorLoader;

/// Clears `loading` when dropped, whether the trigger finished, failed or its
/// future was dropped. Only the latest generation may clear it; a dropped
/// latest trigger also cancels its transfer.
pub(super) struct LoadingGuard<'a> {
    pub(super) loader: &'a SiteDescriptorLoader,
    pub(super) generation: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.loader.finish_generation(self.generation);
    }
}
