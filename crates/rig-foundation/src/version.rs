//! Opaque host revision tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonicalized internal API revision tag reported by the host runtime,
/// e.g. `v1_21_R3`.
///
/// The format is host-defined and treated as an opaque comparison key:
/// matching is by exact tag, never by range or nearest-neighbour, so an
/// unknown future revision fails resolution instead of silently binding an
/// adapter compiled against a different binary layout. Detected once per
/// process lifetime; the host version cannot change while the plugin runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostVersion(String);

impl HostVersion {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HostVersion {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_on_construction() {
        assert_eq!(HostVersion::new(" v1_21_R3\n").as_str(), "v1_21_R3");
    }

    #[test]
    fn compares_exactly() {
        assert_eq!(HostVersion::new("v1_21_R3"), HostVersion::from("v1_21_R3"));
        assert_ne!(HostVersion::new("v1_21_R3"), HostVersion::new("v1_21_R1"));
    }
}
