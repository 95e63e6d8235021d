//! Pinned snapshot of the v1_21_R1 host profile types
//!
//! This revision replaced the flat property list with a keyed multimap:
//! values are grouped per key, insertion order preserved within a key. The
//! signature moved into a dedicated record type. Not source-compatible with
//! v1_20_R4 or v1_21_R3.

use rig_foundation::NativeProfile;
use std::collections::HashMap;
use uuid::Uuid;

/// Value half of a property entry; the key lives in the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedProperty {
    pub value: String,
    pub signature: Option<String>,
}

/// Keyed property multimap, insertion order preserved per key.
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    entries: HashMap<String, Vec<SignedProperty>>,
}

impl PropertyMap {
    pub fn put(&mut self, key: impl Into<String>, property: SignedProperty) {
        self.entries.entry(key.into()).or_default().push(property);
    }

    pub fn get(&self, key: &str) -> &[SignedProperty] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Host-native identity record as of v1_21_R1. Owned by the host runtime;
/// the plugin only ever reads from it.
#[derive(Debug, Clone)]
pub struct GameProfile {
    uuid: Uuid,
    display_name: String,
    property_map: PropertyMap,
}

impl GameProfile {
    pub fn new(uuid: Uuid, display_name: impl Into<String>) -> Self {
        Self {
            uuid,
            display_name: display_name.into(),
            property_map: PropertyMap::default(),
        }
    }

    pub fn put_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        signature: Option<String>,
    ) -> Self {
        self.property_map.put(
            key,
            SignedProperty {
                value: value.into(),
                signature,
            },
        );
        self
    }

    pub fn property_map(&self) -> &PropertyMap {
        &self.property_map
    }
}

impl NativeProfile for GameProfile {
    fn id(&self) -> Uuid {
        self.uuid
    }

    fn name(&self) -> &str {
        &self.display_name
    }

    fn property_values<'a>(&'a self, key: &str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(
            self.property_map
                .get(key)
                .iter()
                .map(|property| property.value.as_str()),
        )
    }
}
