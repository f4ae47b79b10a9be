//! Error types for the cs2ts-emitter crate.
//!
//! Unrecognized syntax is never an error here: it is reported as a warning
//! and replaced by a placeholder (see [`crate::diagnostics`]). Only failures
//! that leave nothing to translate end a generation call.

use cs2ts_core::ConfigError;
use cs2ts_parser::ParseError;

/// Errors that abort a generation call.
///
/// No partial output is produced when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A configuration string was malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The parser could not produce a syntax tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
