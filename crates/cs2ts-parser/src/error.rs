//! Error types for the cs2ts-parser crate.
//!
//! This module provides the [`ParseError`] type for errors that can occur
//! while setting up tree-sitter or parsing C# source.

/// Errors that can occur during C# parsing.
///
/// Syntax errors inside the source are *not* reported here: tree-sitter
/// recovers from them and the affected nodes are lowered to `Unsupported`
/// declarations, types, or expressions. Only failures that leave no tree at
/// all are errors.
///
/// # Examples
///
/// ```
/// use cs2ts_parser::ParseError;
///
/// fn handle_error(err: ParseError) {
///     match err {
///         ParseError::LanguageInit => eprintln!("Failed to set C# language"),
///         ParseError::Parse => eprintln!("Failed to parse source code"),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Failed to set the C# language on the parser.
    ///
    /// Happens when the grammar was generated for an incompatible
    /// tree-sitter ABI version.
    #[error("failed to set C# language")]
    LanguageInit,

    /// Failed to parse the source code.
    ///
    /// This typically indicates the parser ran out of memory or was cancelled.
    #[error("failed to parse source code")]
    Parse,
}
