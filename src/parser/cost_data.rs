//! Loading of cost data documents.
//!
//! This is the seam where the external data loader hands over its
//! document. A `null` document means "no data yet" and is not an error.

use super::schema::CostData;
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a cost data document from a JSON string
///
/// **Public** - main entry point for in-memory documents
///
/// # Returns
/// `Ok(None)` for a `null` document, `Ok(Some(data))` otherwise
///
/// # Errors
/// * `ParseError::JsonError` - text is not JSON
/// * `ParseError::InvalidFormat` - top level is neither an object nor null
pub fn parse_cost_data(raw: &str) -> Result<Option<CostData>, ParseError> {
    let value: Value = serde_json::from_str(raw)?;
    from_value(value)
}

/// Convert an already decoded JSON value into cost data
///
/// **Public** - used when the document arrives as a `serde_json::Value`
pub fn from_value(value: Value) -> Result<Option<CostData>, ParseError> {
    if value.is_null() {
        debug!("Cost data document is null, nothing to aggregate");
        return Ok(None);
    }

    validate_data_format(&value)?;

    let data: CostData = serde_json::from_value(value)?;

    debug!(
        "Parsed cost data: {} init keys, {} late keys",
        data.init.len(),
        data.late.len()
    );

    Ok(Some(data))
}

/// Read a cost data document from disk
///
/// **Public** - used by the CLI commands
pub fn read_cost_data(input_path: impl AsRef<Path>) -> Result<Option<CostData>, ParseError> {
    let input_path = input_path.as_ref();

    info!("Reading cost data from: {}", input_path.display());

    let raw = fs::read_to_string(input_path)?;
    parse_cost_data(&raw)
}

/// Check the top-level shape of a document
///
/// **Public** - lets callers reject a document before building anything
pub fn validate_data_format(value: &Value) -> Result<(), ParseError> {
    let obj = value.as_object().ok_or_else(|| {
        ParseError::InvalidFormat("cost data must be a JSON object or null".to_string())
    })?;

    for mode in ["init", "late"] {
        match obj.get(mode) {
            None => warn!("Cost data has no '{}' map, treating it as empty", mode),
            Some(Value::Object(_)) | Some(Value::Null) => {}
            Some(_) => {
                return Err(ParseError::InvalidFormat(format!(
                    "'{}' must be an object mapping paths to {{cost, count}}",
                    mode
                )))
            }
        }
    }

    Ok(())
}
