//! Centralized logging initialization with environment variable support

use crate::{AppConfig, LogFormat};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Environment variables (in priority order):
/// - `RUST_LOG`: standard filter directives, wins over the config level
/// - `LOG_FORMAT`: override format (json, pretty)
///
/// Always writes to stderr: the host runtime owns stdout. Safe to call
/// more than once; only the first call installs a subscriber (later calls
/// are no-ops, which keeps test binaries from panicking).
pub fn initialize(config: &AppConfig) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::INFO);
    let env_filter = EnvFilter::from_default_env().add_directive(log_level.into());

    let format = std::env::var("LOG_FORMAT")
        .ok()
        .and_then(|f| match f.to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" | "human" => Some(LogFormat::Pretty),
            _ => None,
        })
        .unwrap_or_else(|| config.logging.format.clone());

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized, keeping existing subscriber");
    }
}
