use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

// =============================================================================
// Sorting
// =============================================================================

/// Collections shorter than this are sorted with the comparator alone
pub const DEFAULT_BUCKET_THRESHOLD: usize = 1024;

/// Collections at least this long have their buckets sorted in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 65_536;

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding a tracing filter directive, overriding the config
pub const LOG_ENV_VAR: &str = "SEMVERX_LOG";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub sort: SortConfig,
    pub log: LogConfig,
}

/// Tuning for [`crate::version::sort`]
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SortConfig {
    pub bucket_threshold: usize,
    pub parallel_threshold: usize,
}

impl Config {
    /// Read a JSON configuration file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            bucket_threshold: DEFAULT_BUCKET_THRESHOLD,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Logging configuration for the binary
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `SEMVERX_LOG` is unset, e.g. `"debug"` or `"semverx=trace"`
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}
