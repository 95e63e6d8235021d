//! One-shot plugin startup sequence
//!
//! Everything here runs synchronously on the host's plugin-initialization
//! thread, before any rendering work. After `bootstrap` returns, the
//! adapter binding is immutable and may be read from any thread.

use crate::environment::HostEnvironment;
use rig_adapter_api::{AdapterRegistry, ResolvedAdapter};
use rig_compat::{ActivationReport, ActivationSequencer, NpcExtensionBridge, NPC_EXTENSION};
use rig_config::AppConfig;
use rig_foundation::{HostVersion, RigResult};
use tracing::{error, info};

/// Handle the rendering core keeps for the lifetime of the process.
#[derive(Debug)]
pub struct Plugin {
    adapter: &'static ResolvedAdapter,
    activation: ActivationReport,
}

impl Plugin {
    /// The frozen host adapter binding.
    pub fn adapter(&self) -> &'static ResolvedAdapter {
        self.adapter
    }

    /// What the compatibility activation pass did at startup.
    pub fn activation_report(&self) -> &ActivationReport {
        &self.activation
    }
}

/// Run plugin startup: logging, version resolution, extension activation.
///
/// Fails only on the fatal conditions: an unsupported host version or a
/// broken configuration. Optional extension trouble degrades features and
/// is reported in the [`ActivationReport`], never here.
pub fn bootstrap(config: AppConfig, host: &dyn HostEnvironment) -> RigResult<Plugin> {
    rig_config::logging::initialize(&config);

    let version = match &config.host.version_override {
        Some(tag) => {
            info!(version = %tag, "Using configured host version override");
            HostVersion::new(tag)
        }
        None => host.revision(),
    };

    let adapter = AdapterRegistry::global()
        .initialize(&version)
        .map_err(|err| {
            error!(%err, "Host version resolution failed, aborting startup");
            err
        })?;
    info!(
        version = adapter.descriptor().version,
        release = adapter.descriptor().release,
        "Host adapter bound"
    );

    let mut sequencer = ActivationSequencer::new();
    if config.is_extension_enabled(NPC_EXTENSION) {
        sequencer.register(NpcExtensionBridge::boxed(host.npc_services()));
    } else {
        info!(extension = NPC_EXTENSION, "Bridge disabled by config");
    }
    let activation = sequencer.activate_all();
    info!(
        activated = ?activation.activated,
        skipped = ?activation.skipped,
        failed = ?activation.failed,
        "Compatibility activation complete"
    );

    Ok(Plugin {
        adapter,
        activation,
    })
}
