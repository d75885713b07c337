//! Unit conversion and display formatting for cost figures.
//!
//! This module covers:
//! - Converting raw deciseconds into the selected time unit
//! - Truncating display values (or passing them through raw)
//! - Percentages of the total and their severity buckets

pub mod number;
pub mod severity;
pub mod units;

// Re-export main types and functions
pub use number::{average, format_number, percentage, FormatConfig};
pub use severity::Severity;
pub use units::{convert_time, TimeUnit};
