//! Host adapter pinned to server revision v1_21_R1 (releases 1.21–1.21.1)
//!
//! First revision with a writable property surface, so this adapter also
//! provides the optional composition capability.

pub mod host;

use rig_adapter_api::rig_adapter;
use rig_adapter_api::{
    AdapterMetadata, HostAdapter, ProfileAdapter, ProfileComposer, ProfileProperty,
};
use rig_foundation::{NativeProfile, SkinProfile, SkinTexture, TEXTURES_PROPERTY};
use std::sync::Arc;
use tracing::trace;

// Self-register as a resolution candidate.
rig_adapter! {
    version: "v1_21_R1",
    release: "1.21-1.21.1",
    factory: HostAdapterV1_21R1::arc
}

/// Adapter for the v1_21_R1 revision.
#[derive(Default)]
pub struct HostAdapterV1_21R1;

impl HostAdapterV1_21R1 {
    /// Static metadata for this revision.
    pub const METADATA: AdapterMetadata = AdapterMetadata {
        version: "v1_21_R1",
        release: "1.21-1.21.1",
    };

    /// Create an instance for the adapter registry.
    pub fn arc() -> Arc<dyn HostAdapter> {
        Arc::new(Self)
    }
}

impl HostAdapter for HostAdapterV1_21R1 {
    fn metadata(&self) -> &AdapterMetadata {
        &Self::METADATA
    }

    fn profile_adapter(&self) -> &dyn ProfileAdapter {
        self
    }

    fn profile_composer(&self) -> Option<&dyn ProfileComposer> {
        Some(self)
    }
}

impl ProfileAdapter for HostAdapterV1_21R1 {
    fn adapt(&self, profile: &dyn NativeProfile) -> SkinProfile {
        let texture = profile
            .property_values(TEXTURES_PROPERTY)
            .next()
            .map(SkinTexture::new);
        trace!(
            name = profile.name(),
            textured = texture.is_some(),
            "Adapted v1_21_R1 profile"
        );
        SkinProfile::new(profile.id(), profile.name(), texture)
    }
}

impl ProfileComposer for HostAdapterV1_21R1 {
    fn compose(&self, skin: &SkinProfile) -> Vec<ProfileProperty> {
        skin.texture
            .iter()
            .map(|texture| ProfileProperty {
                name: TEXTURES_PROPERTY.to_string(),
                value: texture.as_str().to_string(),
                signature: None,
            })
            .collect()
    }
}
