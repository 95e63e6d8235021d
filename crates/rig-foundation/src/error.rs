//! Error handling for the Marionette host integration layer

use thiserror::Error;

/// Result type alias for convenience
pub type RigResult<T> = Result<T, RigError>;

/// Core error type used throughout the host integration layer
///
/// Only [`RigError::UnsupportedHostVersion`] and [`RigError::Config`] are
/// startup-blocking. A failed optional extension registration is logged by
/// the activation sequencer and never aborts plugin startup.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum RigError {
    /// The detected host revision matches no compiled-in adapter. Fatal:
    /// no capability can operate without a binding, so startup must abort.
    #[error("unsupported host version '{version}'; compiled-in adapters: {}", .supported.join(", "))]
    UnsupportedHostVersion {
        version: String,
        supported: Vec<String>,
    },

    /// `resolve` was called before `initialize` froze a binding.
    #[error("adapter registry has not been initialized")]
    RegistryUninitialized,

    /// An optional extension bridge failed to register one of its units.
    #[error("registration with extension '{extension}' failed: {message}")]
    Registration { extension: String, message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl RigError {
    /// Create a new unsupported host version error
    pub fn unsupported_host_version(
        version: impl Into<String>,
        supported: Vec<String>,
    ) -> Self {
        Self::UnsupportedHostVersion {
            version: version.into(),
            supported,
        }
    }

    /// Create a new registration error
    pub fn registration(extension: impl Into<String>, message: impl ToString) -> Self {
        Self::Registration {
            extension: extension.into(),
            message: message.to_string(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error must abort plugin startup
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedHostVersion { .. } | Self::Config { .. }
        )
    }
}
