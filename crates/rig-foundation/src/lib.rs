//! Foundation layer for the Marionette host integration layer.
//!
//! This crate holds the version-independent vocabulary shared by every other
//! crate in the workspace: the normalized [`SkinProfile`] record, the
//! read-only [`NativeProfile`] boundary over host-owned profile objects, the
//! opaque [`HostVersion`] tag, and the [`RigError`] taxonomy.
//!
//! Nothing in here touches a specific host API revision. Version-pinned code
//! lives in the `versions/` crates and only meets the rest of the plugin
//! through the types defined here.

pub mod error;
pub mod profile;
pub mod version;

pub use error::{RigError, RigResult};
pub use profile::{NativeProfile, SkinProfile, SkinTexture, TEXTURES_PROPERTY};
pub use version::HostVersion;
