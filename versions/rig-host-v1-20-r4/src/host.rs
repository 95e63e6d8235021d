//! Pinned snapshot of the v1_20_R4 host profile types
//!
//! Mirrors the internal binary layout this crate is compiled against. In
//! this revision a profile's properties are a flat, insertion-ordered list;
//! duplicate names are legal and the server keeps them in write order. The
//! layout is not source-compatible with later revisions and must never be
//! linked next to them outside this crate.

use rig_foundation::NativeProfile;
use uuid::Uuid;

/// Signed key/value property entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
    pub signature: Option<String>,
}

/// Host-native identity record as of v1_20_R4. Owned by the host runtime;
/// the plugin only ever reads from it.
#[derive(Debug, Clone)]
pub struct GameProfile {
    id: Uuid,
    name: String,
    properties: Vec<Property>,
}

impl GameProfile {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        signature: Option<String>,
    ) -> Self {
        self.properties.push(Property {
            name: name.into(),
            value: value.into(),
            signature,
        });
        self
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

impl NativeProfile for GameProfile {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn property_values<'a>(&'a self, key: &str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        let key = key.to_string();
        Box::new(
            self.properties
                .iter()
                .filter(move |property| property.name == key)
                .map(|property| property.value.as_str()),
        )
    }
}
