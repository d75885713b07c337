//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod render;
pub mod utils;

// Re-export main command functions
pub use render::{build_settings, execute_render, validate_args, OutputFormat, RenderArgs};
pub use utils::{display_schema, display_version, validate_data_file};
