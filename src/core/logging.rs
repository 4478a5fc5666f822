//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured level so a single run can
//! be made more verbose without touching the config file.

use tracing_subscriber::EnvFilter;

use crate::core::config::LoggingConfig;
use crate::core::error::{Error, Result};

/// Install the global tracing subscriber. Call once, from the binary.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(&config.level)))
        .map_err(|e| Error::config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };

    installed.map_err(|e| Error::config(format!("Failed to install tracing subscriber: {}", e)))
}

/// Directives for `level`, keeping the HTTP trace layer at the same verbosity.
fn default_directives(level: &str) -> String {
    format!("{level},tower_http={level}")
}
