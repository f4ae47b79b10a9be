//! Source positions attached to syntax the emitter may need to report.

use serde::{Deserialize, Serialize};

/// A position within a C# source file.
///
/// # Field Conventions
///
/// - `line` is 0-indexed (first line is line 0)
/// - `column` is 0-indexed (characters, not bytes, from the start of the line)
/// - `byte_offset` is the absolute byte position from the start of the file
///
/// Warnings print `line:column` exactly as stored, so both stay 0-based.
///
/// # Examples
///
/// ```
/// use cs2ts_core::SourceLocation;
///
/// let loc = SourceLocation::new(3, 14, 97);
/// assert_eq!(loc.to_string(), "3:14");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Line number (0-indexed).
    pub line: u32,

    /// Column number (0-indexed).
    pub column: u32,

    /// Absolute byte offset from the start of the file.
    pub byte_offset: u32,
}

impl SourceLocation {
    /// Creates a new source location.
    #[inline]
    #[must_use]
    pub const fn new(line: u32, column: u32, byte_offset: u32) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The source text of a node the emitter has no rule for, with its position.
///
/// Carried by the `Unsupported` variants of the declaration model so the
/// diagnostics collector can point back at the original input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snippet {
    /// Verbatim source text of the node.
    pub text: String,

    /// Where the node starts.
    pub location: SourceLocation,
}

impl Snippet {
    /// Creates a new snippet.
    #[must_use]
    pub fn new(text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            text: text.into(),
            location,
        }
    }
}
