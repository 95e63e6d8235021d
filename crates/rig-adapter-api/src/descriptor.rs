//! Link-time collection of version-pinned adapter candidates

use crate::adapter::HostAdapter;
use std::sync::Arc;

// Re-export inventory for the macro.
pub use inventory;

/// Describes one version-pinned adapter to the registry.
///
/// This struct is created by the [`rig_adapter!`](crate::rig_adapter) macro
/// and collected at link time by the `inventory` crate. Which candidates are
/// present is decided entirely by which version crates the deployment links
/// in; the registry only ever narrows the compiled-in set down to one.
pub struct AdapterDescriptor {
    /// Canonical host revision tag, e.g. `v1_21_R3`. Matched exactly.
    pub version: &'static str,
    /// Marketing releases covered by this revision, for diagnostics only.
    pub release: &'static str,
    pub factory: fn() -> Arc<dyn HostAdapter>,
}

// Collect all adapter descriptors into a static collection.
inventory::collect!(AdapterDescriptor);

/// Returns an iterator over all compiled-in adapter candidates.
pub fn iter_adapters() -> impl Iterator<Item = &'static AdapterDescriptor> {
    inventory::iter::<AdapterDescriptor>.into_iter()
}

/// A macro for version crates to register their adapter.
///
/// Creates and submits an [`AdapterDescriptor`] to the `inventory` system,
/// making the adapter a resolution candidate in any artifact that links the
/// crate.
#[macro_export]
macro_rules! rig_adapter {
    (
        version: $version:expr,
        release: $release:expr,
        factory: $factory:expr
    ) => {
        $crate::descriptor::inventory::submit! {
            $crate::AdapterDescriptor {
                version: $version,
                release: $release,
                factory: $factory,
            }
        }
    };
}
