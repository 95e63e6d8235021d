//! Bridge into the NPC scripting extension
//!
//! When the extension is loaded, Marionette contributes a behavior type
//! that carries a model rig on an NPC, and a `/rig` command group wired
//! into the extension's own command framework. Both registrations use the
//! extension's public API and are additive.

use crate::bridge::ExtensionBridge;
use crate::services::{CommandSpec, NpcBehavior, NpcExtensionServices};
use rig_foundation::{RigError, RigResult};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Name the NPC extension is published under.
pub const NPC_EXTENSION: &str = "npckit";

/// Registry name of Marionette's mounted-rig behavior type.
pub const MOUNTED_RIG_BEHAVIOR: &str = "marionette_mounted_rig";

/// The `/rig` command group contributed to the extension.
pub const RIG_COMMAND: CommandSpec = CommandSpec {
    name: "rig",
    aliases: &["model"],
    permission: "marionette.command.rig",
    usage: "/rig <model> [npc]",
};

/// Marks an NPC as carrying a model rig.
///
/// The extension attaches one instance per NPC; the rendering core reads
/// the attachment state when it builds the NPC's display entity.
#[derive(Debug, Default)]
pub struct MountedRigBehavior {
    npc: Option<Uuid>,
}

impl MountedRigBehavior {
    pub fn mounted_on(&self) -> Option<Uuid> {
        self.npc
    }
}

impl NpcBehavior for MountedRigBehavior {
    fn attach(&mut self, npc_id: Uuid) {
        debug!(npc = %npc_id, "Mounted rig behavior attached");
        self.npc = Some(npc_id);
    }

    fn detach(&mut self) {
        if let Some(npc_id) = self.npc.take() {
            debug!(npc = %npc_id, "Mounted rig behavior detached");
        }
    }
}

/// Presence-gated bridge into the NPC extension.
///
/// Holds the extension's services if they resolved at construction time;
/// the probe simply reports whether they did.
pub struct NpcExtensionBridge {
    services: Option<Arc<dyn NpcExtensionServices>>,
}

impl NpcExtensionBridge {
    pub fn new(services: Option<Arc<dyn NpcExtensionServices>>) -> Self {
        Self { services }
    }

    pub fn boxed(services: Option<Arc<dyn NpcExtensionServices>>) -> Box<dyn ExtensionBridge> {
        Box::new(Self::new(services))
    }
}

impl ExtensionBridge for NpcExtensionBridge {
    fn extension_name(&self) -> &'static str {
        NPC_EXTENSION
    }

    fn probe(&self) -> bool {
        self.services.is_some()
    }

    fn start(&self) -> RigResult<()> {
        let services = self
            .services
            .as_ref()
            .ok_or_else(|| RigError::internal("NPC bridge started without a truthful probe"))?;

        services
            .behavior_registry()
            .register_behavior(MOUNTED_RIG_BEHAVIOR, || {
                Box::new(MountedRigBehavior::default())
            })
            .map_err(|error| RigError::registration(NPC_EXTENSION, error))?;

        services
            .command_registry()
            .register_command(RIG_COMMAND)
            .map_err(|error| RigError::registration(NPC_EXTENSION, error))?;

        Ok(())
    }
}
