//! Presence-gated integration with optional third-party server extensions.
//!
//! Marionette never hard-depends on another plugin. For each extension it
//! can enrich, this crate defines the narrow slice of that extension's
//! registration API as traits ([`services`]), an [`ExtensionBridge`] that
//! registers Marionette behaviors and commands through those traits, and
//! the [`ActivationSequencer`] that probes for each extension once at
//! startup and starts the bridge only when the probe succeeds. An absent
//! extension is a normal outcome, not an error; a bridge that fails to
//! start is logged and never aborts core plugin startup.

pub mod bridge;
pub mod npc;
pub mod services;

pub use bridge::{ActivationReport, ActivationSequencer, ExtensionBridge};
pub use npc::{MountedRigBehavior, NpcExtensionBridge, MOUNTED_RIG_BEHAVIOR, NPC_EXTENSION};
pub use services::{
    BehaviorFactory, BehaviorRegistry, CommandRegistry, CommandSpec, NpcBehavior,
    NpcExtensionServices, RegistrationError,
};
