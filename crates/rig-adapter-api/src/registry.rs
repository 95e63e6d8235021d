//! Version adapter registry: one frozen binding per process
//!
//! Resolution is a load-time disjoint-set selection, not ordinary strategy
//! dispatch: each candidate is compiled against one pinned snapshot of the
//! host's internal types, and crate boundaries keep those snapshots from
//! ever colliding. `initialize` turns "N bundled candidates" into "exactly
//! one live instance" by exact revision tag, and the binding never changes
//! for the remainder of the process.

use crate::adapter::HostAdapter;
use crate::descriptor::{iter_adapters, AdapterDescriptor};
use once_cell::sync::OnceCell;
use rig_foundation::{HostVersion, RigError, RigResult};
use std::sync::Arc;
use tracing::{debug, info};

/// The frozen pairing of a descriptor with its live adapter instance.
pub struct ResolvedAdapter {
    descriptor: &'static AdapterDescriptor,
    adapter: Arc<dyn HostAdapter>,
}

impl std::fmt::Debug for ResolvedAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedAdapter")
            .field("version", &self.descriptor.version)
            .field("release", &self.descriptor.release)
            .finish()
    }
}

impl ResolvedAdapter {
    pub fn descriptor(&self) -> &'static AdapterDescriptor {
        self.descriptor
    }

    /// The live adapter. Same identity on every call for the process
    /// lifetime.
    pub fn adapter(&self) -> &Arc<dyn HostAdapter> {
        &self.adapter
    }
}

/// Owns the version-to-adapter binding for the lifetime of the process.
///
/// `initialize` exactly once, `resolve` many times. The binding is immutable
/// after `initialize` returns and may be read from any thread without
/// synchronization. There is no hot-swap and no re-detection: the host
/// version cannot change within a process lifetime.
pub struct AdapterRegistry {
    binding: OnceCell<ResolvedAdapter>,
}

impl AdapterRegistry {
    pub const fn new() -> Self {
        Self {
            binding: OnceCell::new(),
        }
    }

    /// The process-wide registry used by plugin bootstrap.
    pub fn global() -> &'static AdapterRegistry {
        static GLOBAL: AdapterRegistry = AdapterRegistry::new();
        &GLOBAL
    }

    /// Match `version` against the compiled-in candidate set and freeze the
    /// binding.
    ///
    /// Idempotent: once a binding exists, later calls return it unchanged
    /// and ignore their argument. An unknown tag fails with
    /// [`RigError::UnsupportedHostVersion`] rather than falling back to the
    /// nearest known revision, and leaves the registry uninitialized.
    pub fn initialize(&self, version: &HostVersion) -> RigResult<&ResolvedAdapter> {
        if let Some(binding) = self.binding.get() {
            debug!(
                version = binding.descriptor.version,
                "Adapter registry already initialized"
            );
            return Ok(binding);
        }

        let descriptor = iter_adapters()
            .find(|candidate| candidate.version == version.as_str())
            .ok_or_else(|| {
                RigError::unsupported_host_version(version.as_str(), Self::supported_versions())
            })?;

        info!(
            version = descriptor.version,
            release = descriptor.release,
            "Binding host adapter"
        );
        let adapter = (descriptor.factory)();
        Ok(self.binding.get_or_init(|| ResolvedAdapter {
            descriptor,
            adapter,
        }))
    }

    /// Return the frozen binding.
    pub fn resolve(&self) -> RigResult<&ResolvedAdapter> {
        self.binding.get().ok_or(RigError::RegistryUninitialized)
    }

    /// Revision tags of every compiled-in candidate, sorted for stable
    /// diagnostics.
    pub fn supported_versions() -> Vec<String> {
        let mut versions: Vec<String> = iter_adapters()
            .map(|candidate| candidate.version.to_string())
            .collect();
        versions.sort_unstable();
        versions
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
