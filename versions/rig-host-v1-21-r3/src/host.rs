//! Pinned snapshot of the v1_21_R3 host profile types
//!
//! This revision flattened profiles into record structs: the id is stored
//! as raw 64-bit halves instead of a UUID object, and properties went back
//! to a flat record list (profile merges can leave duplicate keys in it).
//! Not source-compatible with earlier revisions.

use rig_foundation::NativeProfile;
use uuid::Uuid;

/// Raw profile id as the server stores it: most/least significant halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileId {
    pub most: u64,
    pub least: u64,
}

impl ProfileId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        let (most, least) = uuid.as_u64_pair();
        Self { most, least }
    }

    pub fn to_uuid(self) -> Uuid {
        Uuid::from_u64_pair(self.most, self.least)
    }
}

/// Property record; duplicate keys are possible after profile merges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub key: String,
    pub value: String,
    pub signature: Option<String>,
}

/// Host-native identity record as of v1_21_R3. Owned by the host runtime;
/// the plugin only ever reads from it.
#[derive(Debug, Clone)]
pub struct GameProfile {
    id: ProfileId,
    name: String,
    records: Vec<ProfileRecord>,
}

impl GameProfile {
    pub fn new(id: ProfileId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub fn with_record(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        signature: Option<String>,
    ) -> Self {
        self.records.push(ProfileRecord {
            key: key.into(),
            value: value.into(),
            signature,
        });
        self
    }

    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }
}

impl NativeProfile for GameProfile {
    fn id(&self) -> Uuid {
        self.id.to_uuid()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn property_values<'a>(&'a self, key: &str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        let key = key.to_string();
        Box::new(
            self.records
                .iter()
                .filter(move |record| record.key == key)
                .map(|record| record.value.as_str()),
        )
    }
}
