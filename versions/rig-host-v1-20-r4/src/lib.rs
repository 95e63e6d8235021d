//! Host adapter pinned to server revision v1_20_R4 (releases 1.20.5–1.20.6)
//!
//! Quirk handled here: this revision writes an *empty* `textures` property
//! onto profiles that have no skin set, so an empty value is normalized to
//! an absent texture.

pub mod host;

use rig_adapter_api::rig_adapter;
use rig_adapter_api::{AdapterMetadata, HostAdapter, ProfileAdapter};
use rig_foundation::{NativeProfile, SkinProfile, SkinTexture, TEXTURES_PROPERTY};
use std::sync::Arc;
use tracing::trace;

// Self-register as a resolution candidate.
rig_adapter! {
    version: "v1_20_R4",
    release: "1.20.5-1.20.6",
    factory: HostAdapterV1_20R4::arc
}

/// Adapter for the v1_20_R4 revision.
///
/// No composer: this revision exposes no writable property surface, so the
/// optional composition capability is absent.
#[derive(Default)]
pub struct HostAdapterV1_20R4;

impl HostAdapterV1_20R4 {
    /// Static metadata for this revision.
    pub const METADATA: AdapterMetadata = AdapterMetadata {
        version: "v1_20_R4",
        release: "1.20.5-1.20.6",
    };

    /// Create an instance for the adapter registry.
    pub fn arc() -> Arc<dyn HostAdapter> {
        Arc::new(Self)
    }
}

impl HostAdapter for HostAdapterV1_20R4 {
    fn metadata(&self) -> &AdapterMetadata {
        &Self::METADATA
    }

    fn profile_adapter(&self) -> &dyn ProfileAdapter {
        self
    }
}

impl ProfileAdapter for HostAdapterV1_20R4 {
    fn adapt(&self, profile: &dyn NativeProfile) -> SkinProfile {
        // First observed value wins; the empty-value quirk maps to "no skin".
        let texture = profile
            .property_values(TEXTURES_PROPERTY)
            .next()
            .filter(|value| !value.is_empty())
            .map(SkinTexture::new);
        trace!(
            name = profile.name(),
            textured = texture.is_some(),
            "Adapted v1_20_R4 profile"
        );
        SkinProfile::new(profile.id(), profile.name(), texture)
    }
}
