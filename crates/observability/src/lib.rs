//! Tracing and logging setup shared by binaries and tests.

/// Environment-driven configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
/// An invalid `LOG_FORMAT` falls back to the default format; the rejection is
/// logged as a warning through the subscriber that replaces it.
pub fn init() {
    let (config, rejected) = resolve(ObservabilityConfig::from_env());
    tracing::init_with(&config);

    if let Some(err) = rejected {
        ::tracing::warn!(error = %err, format = ?config.format, "invalid logging configuration, using default format");
    }
}

/// Pick the config to install, keeping the error that forced a fallback.
fn resolve(
    loaded: Result<ObservabilityConfig, ConfigError>,
) -> (ObservabilityConfig, Option<ConfigError>) {
    match loaded {
        Ok(config) => (config, None),
        Err(err) => (ObservabilityConfig::from_env_lenient(), Some(err)),
    }
}
