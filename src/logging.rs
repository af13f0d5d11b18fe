//! Tracing subscriber setup for the binary
//!
//! The library itself only emits events; installing a subscriber is left to
//! whoever embeds it.

use std::io;

use anyhow::anyhow;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LOG_ENV_VAR, LogConfig};

/// Build the filter: `SEMVERX_LOG` wins over the configured level.
pub fn env_filter(config: &LogConfig) -> anyhow::Result<EnvFilter> {
    filter_from(std::env::var(LOG_ENV_VAR).ok(), config)
}

fn filter_from(env: Option<String>, config: &LogConfig) -> anyhow::Result<EnvFilter> {
    let directive = env
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| config.level.clone());
    EnvFilter::try_new(&directive).map_err(|e| anyhow!("invalid log filter '{directive}': {e}"))
}

/// Install a global subscriber writing to stderr.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .try_init()
    };
    result.map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
