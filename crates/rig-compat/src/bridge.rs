//! Extension bridges and the startup activation pass

use rig_foundation::RigResult;
use tracing::{debug, info, warn};

/// One self-contained integration with an optional third-party extension.
///
/// `start` must only be called after a truthful `probe`: touching an absent
/// extension's API is undefined behavior on the host, so presence gating is
/// the sequencer's job, not the bridge's.
pub trait ExtensionBridge: Send + Sync {
    /// Stable name of the extension this bridge integrates with.
    fn extension_name(&self) -> &'static str;

    /// Whether the extension's services are reachable in this process.
    fn probe(&self) -> bool;

    /// Register this bridge's units into the extension's registries.
    fn start(&self) -> RigResult<()>;
}

/// Outcome of one activation pass, for the startup log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationReport {
    pub activated: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

/// Probes each known optional extension once and starts its bridge when
/// present.
///
/// Runs once, synchronously, during plugin startup. `activate_all` consumes
/// the sequencer: a second pass would double-register with the extensions,
/// which is not a supported scenario. Order across bridges is insertion
/// order and carries no semantic weight; there are no cross-extension
/// dependencies.
#[derive(Default)]
pub struct ActivationSequencer {
    bridges: Vec<Box<dyn ExtensionBridge>>,
}

impl ActivationSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, bridge: Box<dyn ExtensionBridge>) {
        debug!(extension = bridge.extension_name(), "Registered bridge");
        self.bridges.push(bridge);
    }

    /// Probe and start every registered bridge.
    ///
    /// An absent extension is skipped silently (debug log only). A bridge
    /// whose `start` fails is warn-logged and recorded; it never aborts the
    /// pass or plugin startup.
    pub fn activate_all(self) -> ActivationReport {
        let mut report = ActivationReport::default();
        for bridge in self.bridges {
            let extension = bridge.extension_name();
            if !bridge.probe() {
                debug!(extension, "Extension not present, skipping bridge");
                report.skipped.push(extension);
                continue;
            }
            match bridge.start() {
                Ok(()) => {
                    info!(extension, "Extension bridge activated");
                    report.activated.push(extension);
                }
                Err(error) => {
                    warn!(
                        extension,
                        error = %error,
                        "Extension bridge failed to start, continuing without it"
                    );
                    report.failed.push(extension);
                }
            }
        }
        report
    }
}
