//! Error types for the cs2ts-core crate.
//!
//! This module provides the [`ConfigError`] type for failures while reading
//! generator configuration, either from the inline strings or a JSON file.

/// Errors that can occur while building a [`GeneratorConfig`](crate::GeneratorConfig).
///
/// Any of these is fatal to a generation call: no partial output is
/// produced when the configuration cannot be read.
///
/// # Examples
///
/// ```
/// use cs2ts_core::ConfigError;
///
/// let error = ConfigError::MalformedTypeMapping("Money".to_owned());
/// assert!(error.to_string().contains("Money"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A type-map entry is not of the form `Name=path`.
    #[error("malformed type mapping '{0}': expected Name=path")]
    MalformedTypeMapping(String),

    /// An enum entry has an empty name.
    #[error("malformed enum entry '{0}': expected Name[:mode]")]
    MalformedEnumEntry(String),

    /// Failed to parse a JSON configuration file.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
