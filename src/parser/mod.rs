//! Input parsing and schema definitions.
//!
//! This module handles:
//! - Defining the flat cost map schema
//! - Lenient decoding of cost entries
//! - Loading documents supplied by the external data loader

pub mod cost_data;
pub mod schema;

// Re-export main types
pub use cost_data::{from_value, parse_cost_data, read_cost_data, validate_data_format};
pub use schema::{CostData, CostEntry, FlatCostMap, Mode};
