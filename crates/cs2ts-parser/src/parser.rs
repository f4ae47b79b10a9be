//! C# parser management using tree-sitter.
//!
//! This module provides the [`CsParser`] struct for parsing C# files and
//! lowering them into [`Declaration`]s.

use cs2ts_core::Declaration;
use tracing::debug;
use tree_sitter::{Language, Parser, Tree};

use crate::error::ParseError;
use crate::lower::Lowerer;

/// Result of parsing a C# file.
#[derive(Debug)]
pub struct ParsedUnit {
    /// Top-level declarations in source order.
    pub declarations: Vec<Declaration>,

    /// Whether tree-sitter had to recover from syntax errors.
    ///
    /// Recovered regions surface as `Unsupported` nodes in
    /// [`declarations`](Self::declarations).
    pub has_errors: bool,

    /// The syntax tree from parsing.
    pub tree: Tree,
}

/// C# parser producing the cs2ts declaration model.
///
/// Wraps a tree-sitter parser configured for C#. The parser can be reused
/// for multiple files to avoid repeated initialization.
///
/// # Thread Safety
///
/// `CsParser` is `Send` but not `Sync`. For parallel conversion with rayon,
/// create one parser per worker (e.g. with `map_init`).
///
/// # Examples
///
/// ```
/// use cs2ts_parser::CsParser;
///
/// let mut parser = CsParser::new()?;
/// let unit = parser.parse("public class Order { public int Id { get; set; } }")?;
/// assert_eq!(unit.declarations.len(), 1);
/// # Ok::<(), cs2ts_parser::ParseError>(())
/// ```
pub struct CsParser {
    /// The underlying tree-sitter parser.
    parser: Parser,
}

impl CsParser {
    /// Creates a new C# parser.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::LanguageInit`] if the C# language cannot be set
    /// on the parser.
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_c_sharp::LANGUAGE.into();

        parser
            .set_language(&language)
            .map_err(|_| ParseError::LanguageInit)?;

        Ok(Self { parser })
    }

    /// Parses C# source code and lowers its declarations.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Parse`] if tree-sitter produces no tree.
    pub fn parse(&mut self, source: &str) -> Result<ParsedUnit, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or(ParseError::Parse)?;

        let root = tree.root_node();
        let has_errors = root.has_error();
        let declarations = Lowerer::new(source).lower_unit(root);

        debug!(
            declarations = declarations.len(),
            has_errors, "parsed C# source"
        );

        Ok(ParsedUnit {
            declarations,
            has_errors,
            tree,
        })
    }
}

impl std::fmt::Debug for CsParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsParser")
            .field("language", &"C#")
            .finish_non_exhaustive()
    }
}

/// Parses `source` with a fresh parser and returns its declarations.
///
/// # Errors
///
/// Returns a [`ParseError`] if the parser cannot be created or produces no tree.
pub fn parse_declarations(source: &str) -> Result<Vec<Declaration>, ParseError> {
    Ok(CsParser::new()?.parse(source)?.declarations)
}
