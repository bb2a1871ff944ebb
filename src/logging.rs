//! Structured logging setup with `tracing-subscriber`.

use {
    anyhow::{Result, anyhow},
    tracing_subscriber::{EnvFilter, fmt},
};

/// Filter used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "showreel=info";

/// Builds the log filter.
///
/// An explicit filter wins, then `RUST_LOG`, then [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns an error if the explicit filter directive is malformed.
pub fn build_filter(explicit: Option<&str>) -> Result<EnvFilter> {
    match explicit {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| anyhow!("Invalid log filter {directives:?}: {e}")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Installs the global compact stderr subscriber.
///
/// # Errors
///
/// Returns an error if the filter is malformed or a subscriber is already set.
pub fn init_logging(explicit: Option<&str>) -> Result<()> {
    let filter = build_filter(explicit)?;

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
