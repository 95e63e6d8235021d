//! Plugin bootstrap against a fake host environment
//!
//! Every test here initializes the process-global registry with v1_21_R3,
//! so the tests compose regardless of execution order. The
//! unsupported-version path has its own test binary because it must observe
//! a registry that never binds.

use marionette::{bootstrap, AppConfig, HostEnvironment, HostVersion};
use rig_compat::{
    BehaviorFactory, BehaviorRegistry, CommandRegistry, CommandSpec, NpcExtensionServices,
    RegistrationError, MOUNTED_RIG_BEHAVIOR, NPC_EXTENSION,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingServices {
    behaviors: Mutex<Vec<String>>,
    commands: Mutex<Vec<CommandSpec>>,
}

impl BehaviorRegistry for RecordingServices {
    fn register_behavior(
        &self,
        name: &str,
        _factory: BehaviorFactory,
    ) -> Result<(), RegistrationError> {
        self.behaviors.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

impl CommandRegistry for RecordingServices {
    fn register_command(&self, spec: CommandSpec) -> Result<(), RegistrationError> {
        self.commands.lock().unwrap().push(spec);
        Ok(())
    }
}

impl NpcExtensionServices for RecordingServices {
    fn behavior_registry(&self) -> &dyn BehaviorRegistry {
        self
    }

    fn command_registry(&self) -> &dyn CommandRegistry {
        self
    }
}

struct FakeHost {
    revision: &'static str,
    services: Option<Arc<RecordingServices>>,
    service_lookups: AtomicUsize,
}

impl FakeHost {
    fn new(revision: &'static str, services: Option<Arc<RecordingServices>>) -> Self {
        Self {
            revision,
            services,
            service_lookups: AtomicUsize::new(0),
        }
    }
}

impl HostEnvironment for FakeHost {
    fn revision(&self) -> HostVersion {
        HostVersion::new(self.revision)
    }

    fn npc_services(&self) -> Option<Arc<dyn NpcExtensionServices>> {
        self.service_lookups.fetch_add(1, Ordering::SeqCst);
        self.services
            .clone()
            .map(|services| services as Arc<dyn NpcExtensionServices>)
    }
}

#[test]
fn binds_adapter_and_activates_npc_bridge() {
    let services = Arc::new(RecordingServices::default());
    let host = FakeHost::new("v1_21_R3", Some(services.clone()));

    let plugin = bootstrap(AppConfig::default(), &host).unwrap();

    assert_eq!(plugin.adapter().descriptor().version, "v1_21_R3");
    assert_eq!(plugin.activation_report().activated, vec![NPC_EXTENSION]);

    // The extension's registries now hold Marionette's units.
    assert_eq!(
        *services.behaviors.lock().unwrap(),
        vec![MOUNTED_RIG_BEHAVIOR.to_string()]
    );
    let commands = services.commands.lock().unwrap();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].name, "rig");
}

#[test]
fn absent_extension_is_skipped_without_error() {
    let host = FakeHost::new("v1_21_R3", None);
    let plugin = bootstrap(AppConfig::default(), &host).unwrap();

    assert_eq!(plugin.activation_report().skipped, vec![NPC_EXTENSION]);
    assert!(plugin.activation_report().activated.is_empty());
    assert!(plugin.activation_report().failed.is_empty());
}

#[test]
fn disabled_extension_is_never_probed() {
    let host = FakeHost::new("v1_21_R3", Some(Arc::new(RecordingServices::default())));
    let config = AppConfig {
        compat: rig_config::CompatConfig {
            disabled: vec![NPC_EXTENSION.to_string()],
        },
        ..AppConfig::default()
    };

    let plugin = bootstrap(config, &host).unwrap();

    // Not probed, not even resolved from the environment.
    assert_eq!(host.service_lookups.load(Ordering::SeqCst), 0);
    assert_eq!(
        plugin.activation_report(),
        &marionette::ActivationReport::default()
    );
}

#[test]
fn configured_version_override_wins_over_detection() {
    // The fake host reports a tag no adapter supports; the override keeps
    // bootstrap on the known revision.
    let host = FakeHost::new("v9_99_R9", None);
    let config = AppConfig {
        host: rig_config::HostConfig {
            version_override: Some("v1_21_R3".to_string()),
        },
        ..AppConfig::default()
    };

    let plugin = bootstrap(config, &host).unwrap();
    assert_eq!(plugin.adapter().descriptor().version, "v1_21_R3");
}

#[test]
fn repeated_bootstrap_reuses_the_frozen_binding() {
    let first = bootstrap(AppConfig::default(), &FakeHost::new("v1_21_R3", None)).unwrap();
    let second = bootstrap(AppConfig::default(), &FakeHost::new("v1_21_R3", None)).unwrap();
    assert!(Arc::ptr_eq(
        first.adapter().adapter(),
        second.adapter().adapter()
    ));
}
