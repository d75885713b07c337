//! Error types for the entire application.
//!
//! The aggregation core never fails: malformed input degrades to a
//! well-defined tree. Only the I/O edges (loading documents, reading the
//! view defaults file, writing reports) produce errors.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a cost data document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid cost data format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while loading the view defaults file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("Invalid value for `{key}`: {value}")]
    InvalidValue { key: String, value: String },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
