//! Host integration layer for the Marionette model-rigging plugin.
//!
//! The rendering/animation core never talks to a host API revision
//! directly. It calls [`bootstrap`] once on the host's plugin-init thread
//! and works against the returned [`Plugin`] handle: one frozen
//! [`HostAdapter`](rig_adapter_api::HostAdapter) matching the detected host
//! version, plus whichever optional extension bridges the activation pass
//! managed to start.
//!
//! Which revisions are resolution candidates is a build-time decision via
//! the `host-*` features on this crate; see the workspace README.

pub mod bootstrap;
pub mod environment;

pub use bootstrap::{bootstrap, Plugin};
pub use environment::HostEnvironment;

pub use rig_adapter_api::{
    iter_adapters, AdapterMetadata, AdapterRegistry, HostAdapter, ProfileAdapter, ProfileComposer,
    ResolvedAdapter,
};
pub use rig_compat::ActivationReport;
pub use rig_config::AppConfig;
pub use rig_foundation::{HostVersion, RigError, RigResult, SkinProfile, SkinTexture};

// Referencing each enabled version crate here guarantees its adapter
// registration is linked into the final artifact.
#[cfg(feature = "host-v1-20-r4")]
pub use rig_host_v1_20_r4::HostAdapterV1_20R4;
#[cfg(feature = "host-v1-21-r1")]
pub use rig_host_v1_21_r1::HostAdapterV1_21R1;
#[cfg(feature = "host-v1-21-r3")]
pub use rig_host_v1_21_r3::HostAdapterV1_21R3;
