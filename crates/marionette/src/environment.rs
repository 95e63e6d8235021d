//! Boundary over what the host runtime exposes to plugin bootstrap

use rig_compat::NpcExtensionServices;
use rig_foundation::HostVersion;
use std::sync::Arc;

/// Everything bootstrap reads from the host process.
///
/// Both calls consult state already resident in memory (the server's
/// revision string, its loaded-plugin table); neither blocks on I/O. The
/// real implementation lives in the thin platform shim that owns the
/// plugin entry point; tests substitute fakes.
pub trait HostEnvironment: Send + Sync {
    /// The host's internal API revision tag, canonicalized.
    fn revision(&self) -> HostVersion;

    /// Resolve the NPC extension's services, if that extension is loaded.
    fn npc_services(&self) -> Option<Arc<dyn NpcExtensionServices>>;
}
