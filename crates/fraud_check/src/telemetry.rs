// Rust guideline compliant 2026-10-16

//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr so stdout carries only results.
///
/// `RUST_LOG` wins when set; otherwise `fallback` is used as the filter.
///
/// # Errors
///
/// Returns an error when `fallback` is not a valid filter or a subscriber is
/// already installed.
pub fn init(fallback: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
