//! Narrow interfaces over third-party extension registration APIs
//!
//! Only the registration slice Marionette actually calls is modeled here;
//! everything else the extension does stays opaque. Implementations of
//! these traits wrap the live extension's services and exist only when the
//! extension is loaded, which is exactly what the presence probe checks.

use thiserror::Error;
use uuid::Uuid;

/// Why an extension refused a registration.
///
/// Recovered locally: the sequencer logs it and core startup continues.
#[derive(Error, Debug, Clone)]
pub enum RegistrationError {
    #[error("'{name}' is already registered")]
    Duplicate { name: String },

    #[error("extension rejected '{name}': {reason}")]
    Rejected { name: String, reason: String },
}

impl RegistrationError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate { name: name.into() }
    }

    pub fn rejected(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// A behavior unit the NPC extension attaches to individual NPCs.
///
/// The extension owns the lifecycle; Marionette only supplies the type and
/// reacts to attach/detach.
pub trait NpcBehavior: Send + Sync {
    /// Called when the extension attaches this behavior to an NPC.
    fn attach(&mut self, npc_id: Uuid);

    /// Called when the NPC despawns or the behavior is removed.
    fn detach(&mut self);
}

/// Constructor the extension calls for every NPC the behavior is added to.
pub type BehaviorFactory = fn() -> Box<dyn NpcBehavior>;

/// The extension's behavior-type registry. Additive, exactly-once.
pub trait BehaviorRegistry: Send + Sync {
    fn register_behavior(
        &self,
        name: &str,
        factory: BehaviorFactory,
    ) -> Result<(), RegistrationError>;
}

/// Declarative description of a command group handed to the extension's
/// command registry; dispatch stays inside the extension's own framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub permission: &'static str,
    pub usage: &'static str,
}

/// The extension's command registry. Additive, exactly-once.
pub trait CommandRegistry: Send + Sync {
    fn register_command(&self, spec: CommandSpec) -> Result<(), RegistrationError>;
}

/// Service surface of the NPC extension, resolvable only while the
/// extension is loaded.
pub trait NpcExtensionServices: Send + Sync {
    fn behavior_registry(&self) -> &dyn BehaviorRegistry;

    fn command_registry(&self) -> &dyn CommandRegistry;
}
