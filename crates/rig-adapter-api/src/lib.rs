//! Capability surface and version adapter registry for Marionette.
//!
//! Every supported host API revision ships one [`HostAdapter`] in its own
//! crate under `versions/`, compiled against that revision's pinned internal
//! types and self-registered at link time with the [`rig_adapter!`] macro.
//! At plugin startup the [`AdapterRegistry`] matches the detected
//! [`HostVersion`](rig_foundation::HostVersion) against the compiled-in
//! candidate set and freezes exactly one live adapter for the lifetime of
//! the process. The rest of the plugin only ever sees the traits defined
//! here, never a concrete revision.

pub mod adapter;
pub mod descriptor;
pub mod registry;

pub use adapter::{AdapterMetadata, HostAdapter, ProfileAdapter, ProfileComposer, ProfileProperty};
pub use descriptor::{iter_adapters, AdapterDescriptor};
pub use registry::{AdapterRegistry, ResolvedAdapter};
// Note: rig_adapter! macro is automatically exported at crate root due to #[macro_export]
