//! C# parser using tree-sitter, producing the cs2ts declaration model.
//!
//! This crate is the front half of the translator. It parses C# source with
//! `tree-sitter-c-sharp` and lowers the concrete syntax tree into
//! [`cs2ts_core::Declaration`] values:
//!
//! | C# syntax | Lowered to |
//! |-----------|------------|
//! | `namespace X { }` / `namespace X;` | `Declaration::Namespace` |
//! | `class` / `interface` / `struct` | `Declaration::Type` |
//! | `enum` | `Declaration::Enum` |
//! | properties | `Property` on the enclosing type |
//! | records, delegates, syntax errors | `Declaration::Unsupported` |
//!
//! # Examples
//!
//! ```
//! use cs2ts_core::Declaration;
//! use cs2ts_parser::CsParser;
//!
//! let mut parser = CsParser::new()?;
//! let unit = parser.parse("namespace Shop { public enum Status { Open, Closed } }")?;
//!
//! assert!(matches!(unit.declarations[0], Declaration::Namespace(_)));
//! # Ok::<(), cs2ts_parser::ParseError>(())
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
mod lower;
mod node_kinds;
mod parser;

pub use error::ParseError;
pub use parser::{CsParser, ParsedUnit, parse_declarations};
