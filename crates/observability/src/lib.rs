//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging) from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&LogConfig::from_env());
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Logging configuration.
pub mod config;

pub use config::{LogConfig, LogFormat};
