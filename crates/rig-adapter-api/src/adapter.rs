//! Capability traits implemented by version-pinned host adapters
//!
//! `HostAdapter` is the bundle a version crate exports: one required
//! capability (profile adaptation) plus optional capabilities exposed
//! through discovery accessors that default to `None`. Callers check for an
//! optional capability instead of downcasting to a concrete adapter type,
//! so adding a revision never changes shared code.

use rig_foundation::{NativeProfile, SkinProfile};
use serde::{Deserialize, Serialize};

/// Static metadata a version-pinned adapter reports about itself.
///
/// Mirrors the fields of the link-time
/// [`AdapterDescriptor`](crate::AdapterDescriptor) the crate registered
/// with; kept separate so the adapter can be used without the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterMetadata {
    /// Canonical host revision tag, e.g. `v1_21_R3`.
    pub version: &'static str,
    /// Marketing releases covered by this revision, for diagnostics only.
    pub release: &'static str,
}

/// Required capability: extract a normalized [`SkinProfile`] from a
/// host-native profile.
///
/// Implementations must be pure, total and side-effect free: no I/O, no
/// caching, no mutation of the input, and no failure path. A native profile
/// lacking a textures property yields `texture: None`. All revisions must be
/// output-equivalent for equivalent inputs; the conformance suite in the
/// umbrella crate holds them to that.
pub trait ProfileAdapter: Send + Sync {
    fn adapt(&self, profile: &dyn NativeProfile) -> SkinProfile;
}

/// A property record in the version-independent shape used at the composer
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    pub signature: Option<String>,
}

/// Optional capability: produce the property records a host-native profile
/// needs to carry a given skin.
///
/// Used when Marionette spawns its own display entities. Revisions before
/// v1_21 exposed no writable property surface, so their adapters do not
/// provide a composer.
pub trait ProfileComposer: Send + Sync {
    fn compose(&self, skin: &SkinProfile) -> Vec<ProfileProperty>;
}

/// One version-pinned adapter bundle; exactly one is live per process.
pub trait HostAdapter: Send + Sync {
    /// Get static adapter metadata.
    fn metadata(&self) -> &AdapterMetadata;

    /// Profile adaptation, supported by every revision.
    fn profile_adapter(&self) -> &dyn ProfileAdapter;

    /// Profile composition, if this revision's host API supports it.
    fn profile_composer(&self) -> Option<&dyn ProfileComposer> {
        None
    }
}
