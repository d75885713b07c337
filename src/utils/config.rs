//! Configuration and constants for the cost tree.

use super::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Separator between segments of a flat cost key
pub const PATH_SEPARATOR: char = '/';

// Fractional digits kept before a display value is cut to an integer.
// The global per-instance average gets more headroom than per-node figures.
pub const DEFAULT_PRECISION: u32 = 3;
pub const AVERAGE_PRECISION: u32 = 6;

// Severity buckets, lower bound inclusive
pub const MEDIUM_SEVERITY_PERCENT: f64 = 1.0;
pub const HIGH_SEVERITY_PERCENT: f64 = 10.0;

// Raw costs are stored in deciseconds
pub const MILLISECONDS_PER_DECISECOND: f64 = 100.0;
pub const DECISECONDS_PER_SECOND: f64 = 10.0;
pub const MICROSECONDS_PER_DECISECOND: f64 = 100_000.0;

/// View defaults read from a TOML file
///
/// Every field is optional; command line flags win over file values.
///
/// ```toml
/// mode = "late"
/// sort = "avg"
/// time_unit = "ms"
/// raw_numbers = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ViewConfig {
    pub mode: Option<String>,
    pub sort: Option<String>,
    pub time_unit: Option<String>,
    pub raw_numbers: Option<bool>,
}

/// Load view defaults from a TOML file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::InvalidToml` - If TOML is invalid
pub fn load_view_config(path: impl AsRef<Path>) -> Result<ViewConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading view config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let config: ViewConfig = toml::from_str(&contents)?;
    Ok(config)
}
