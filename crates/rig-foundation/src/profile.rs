//! Normalized identity records and the boundary over host-native profiles

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The only property key ever read from a host-native profile.
///
/// Host profiles carry a keyed property multimap; every revision stores the
/// encoded skin blob under this key. When a profile holds more than one
/// value for it, the first observed value wins.
pub const TEXTURES_PROPERTY: &str = "textures";

/// Opaque encoded skin blob, exactly as the host serves it.
///
/// The payload is base64-encoded by the host; this layer never decodes or
/// validates it, it only hands it through to the rendering core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkinTexture(String);

impl SkinTexture {
    pub fn new(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for SkinTexture {
    fn from(payload: &str) -> Self {
        Self::new(payload)
    }
}

/// Normalized identity/appearance record, independent of host revision.
///
/// Produced on demand by the bound profile adapter and consumed immediately
/// by the rendering core; never persisted by this layer. Construction is
/// infallible: a native profile without a textures property yields
/// `texture: None`, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinProfile {
    pub id: Uuid,
    pub name: String,
    pub texture: Option<SkinTexture>,
}

impl SkinProfile {
    pub fn new(id: Uuid, name: impl Into<String>, texture: Option<SkinTexture>) -> Self {
        Self {
            id,
            name: name.into(),
            texture,
        }
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }
}

/// Read-only view over a profile object owned by the host runtime.
///
/// Each version-pinned crate implements this for its own pinned native
/// profile type; the plugin never mutates or takes ownership of the
/// underlying host object. `property_values` yields the values stored under
/// one key of the host's property multimap, in the host's observed order.
pub trait NativeProfile {
    fn id(&self) -> Uuid;

    fn name(&self) -> &str;

    fn property_values<'a>(&'a self, key: &str) -> Box<dyn Iterator<Item = &'a str> + 'a>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_payload_is_opaque() {
        let texture = SkinTexture::new("abc123base64");
        assert_eq!(texture.as_str(), "abc123base64");
        assert_eq!(texture.into_inner(), "abc123base64");
    }

    #[test]
    fn profile_without_texture() {
        let id = Uuid::new_v4();
        let profile = SkinProfile::new(id, "Steve", None);
        assert_eq!(profile.id, id);
        assert_eq!(profile.name, "Steve");
        assert!(!profile.has_texture());
    }

    #[test]
    fn serializes_texture_transparently() {
        let profile = SkinProfile::new(
            Uuid::nil(),
            "Alex",
            Some(SkinTexture::new("payload")),
        );
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["texture"], "payload");
        assert_eq!(json["name"], "Alex");
    }
}
