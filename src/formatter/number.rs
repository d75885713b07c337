//! Numeric display rules.
//!
//! By default a display value is truncated to a number of fractional
//! digits and then cut to an integer. The `raw_numbers` switch in
//! `FormatConfig` turns that off and passes values through untouched,
//! which is useful when inspecting the exact figures.

use crate::utils::config::DEFAULT_PRECISION;
use serde::{Deserialize, Serialize};

/// Display formatting switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Skip truncation and show raw floating values
    pub raw_numbers: bool,
}

impl FormatConfig {
    pub fn new(raw_numbers: bool) -> Self {
        Self { raw_numbers }
    }
}

/// Produce the display value for a number
///
/// Truncates (never rounds) to `decimals` fractional digits, then drops
/// the fraction. Returns `value` unchanged when `raw_numbers` is set.
pub fn format_number(value: f64, decimals: u32, config: &FormatConfig) -> f64 {
    if config.raw_numbers || !value.is_finite() {
        return value;
    }

    let scale = 10f64.powi(decimals as i32);
    let truncated = (value * scale).trunc() / scale;
    let display = if truncated.is_finite() {
        truncated.trunc()
    } else {
        value.trunc()
    };

    // Normalizes -0.0
    display + 0.0
}

/// Cost per instance, with the instance count floored at 1
pub fn average(cost: f64, count: u64) -> f64 {
    cost / count.max(1) as f64
}

/// Share of the total, formatted like any other display value
///
/// Both arguments must already be in the same display unit. A
/// non-positive total yields 0.
pub fn percentage(converted_cost: f64, converted_total: f64, config: &FormatConfig) -> f64 {
    if converted_total > 0.0 {
        format_number(100.0 * converted_cost / converted_total, DEFAULT_PRECISION, config)
    } else {
        0.0
    }
}
