//! Output writers for presentation data.
//!
//! This module handles the CLI's render surfaces:
//! - JSON reports
//! - Text trees for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, validate_path, write_report, Report};
pub use text::{render_summary, render_text, TextOptions};
