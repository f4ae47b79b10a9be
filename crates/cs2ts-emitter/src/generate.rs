//! The translation entry points.

use cs2ts_core::{Declaration, GeneratorConfig};
use cs2ts_parser::CsParser;
use serde::Serialize;
use tracing::debug;

use crate::error::GenerateError;
use crate::resolver::{assemble, resolve_imports};
use crate::session::Session;
use crate::walker::emit_declarations;

/// The result of translating one C# source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Generated {
    /// TypeScript text: import lines, a blank line, then the declarations.
    pub output: String,

    /// One entry per unrecognized node, in source traversal order.
    pub warnings: Vec<String>,
}

impl Generated {
    /// Returns `true` if translation raised no warnings.
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Translates C# `source` to TypeScript.
///
/// `type_map` is a comma-separated list of `Name=path` import overrides and
/// `enums` a comma-separated list of `Name[:mode]` known enums.
///
/// # Errors
///
/// Returns [`GenerateError::Config`] for a malformed configuration string
/// and [`GenerateError::Parse`] if the source cannot be parsed at all.
///
/// # Examples
///
/// ```
/// use cs2ts_emitter::generate;
///
/// let generated = generate(
///     "public class Order { public Customer Buyer { get; set; } }",
///     "Customer=@crm/customer",
///     "",
/// )?;
///
/// assert_eq!(
///     generated.output,
///     "import { Customer } from '@crm/customer';\n\n\
///      export type Order = {\n  buyer: Customer;\n};\n"
/// );
/// assert!(generated.warnings.is_empty());
/// # Ok::<(), cs2ts_emitter::GenerateError>(())
/// ```
pub fn generate(source: &str, type_map: &str, enums: &str) -> Result<Generated, GenerateError> {
    let config = GeneratorConfig::parse(type_map, enums)?;
    generate_with_config(source, &config)
}

/// Translates `source` with an already-parsed configuration.
///
/// # Errors
///
/// Returns [`GenerateError::Parse`] if the source cannot be parsed.
pub fn generate_with_config(
    source: &str,
    config: &GeneratorConfig,
) -> Result<Generated, GenerateError> {
    if source.trim().is_empty() {
        return Ok(Generated::default());
    }
    let mut parser = CsParser::new()?;
    generate_with_parser(&mut parser, source, config)
}

/// Translates `source` with a caller-owned parser.
///
/// Batch callers keep one parser per worker thread; each call still gets a
/// fresh [`Session`].
///
/// # Errors
///
/// Returns [`GenerateError::Parse`] if the source cannot be parsed.
pub fn generate_with_parser(
    parser: &mut CsParser,
    source: &str,
    config: &GeneratorConfig,
) -> Result<Generated, GenerateError> {
    if source.trim().is_empty() {
        return Ok(Generated::default());
    }
    let unit = parser.parse(source)?;
    if unit.has_errors {
        debug!("source contains syntax errors; affected nodes will be reported");
    }
    Ok(generate_declarations(&unit.declarations, config))
}

/// Translates an already-lowered declaration list.
pub fn generate_declarations(declarations: &[Declaration], config: &GeneratorConfig) -> Generated {
    let mut session = Session::new(config);
    let body = emit_declarations(declarations, &mut session);
    let imports = resolve_imports(&session);

    debug!(
        imports = imports.len(),
        exports = session.exports().len(),
        warnings = session.warnings().len(),
        "generation finished"
    );

    Generated {
        output: assemble(&imports, &body),
        warnings: session.into_warnings(),
    }
}

/// Renders warnings as a single header value: each quoted, comma-joined.
///
/// Embedded quotes are not escaped.
///
/// # Examples
///
/// ```
/// use cs2ts_emitter::format_warnings_header;
///
/// let warnings = vec!["a".to_owned(), "b".to_owned()];
/// assert_eq!(format_warnings_header(&warnings), r#""a","b""#);
/// assert_eq!(format_warnings_header(&[]), "");
/// ```
#[must_use]
pub fn format_warnings_header(warnings: &[String]) -> String {
    warnings
        .iter()
        .map(|warning| format!("\"{warning}\""))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs2ts_core::{TypeDecl, TypeKind, TypeRef};

    #[test]
    fn test_generate_empty_source() {
        let generated = generate("", "", "").expect("generation failed");
        assert_eq!(generated, Generated::default());

        let generated = generate("  \n\t\n", "", "").expect("generation failed");
        assert!(generated.output.is_empty());
        assert!(generated.is_clean());
    }

    #[test]
    fn test_generate_malformed_type_map() {
        let err = generate("public class A { }", "Money", "").expect_err("should fail");
        assert!(matches!(err, GenerateError::Config(_)));
    }

    #[test]
    fn test_generate_declarations_skips_local_imports() {
        let order = TypeDecl::new(TypeKind::Class, "Order")
            .with_property(cs2ts_core::Property::new("Line", TypeRef::ident("OrderLine")));
        let line = TypeDecl::new(TypeKind::Class, "OrderLine");

        let generated = generate_declarations(
            &[Declaration::Type(order), Declaration::Type(line)],
            &GeneratorConfig::default(),
        );
        assert_eq!(
            generated.output,
            "export type Order = {\n  line: OrderLine;\n};\n\nexport type OrderLine = {\n};\n"
        );
    }

    #[test]
    fn test_generate_with_parser_reuses_parser() {
        let mut parser = CsParser::new().expect("Parser creation failed");
        let config = GeneratorConfig::default();

        let first = generate_with_parser(&mut parser, "public enum A { X }", &config)
            .expect("generation failed");
        let second = generate_with_parser(&mut parser, "public enum B { Y }", &config)
            .expect("generation failed");

        assert_eq!(first.output, "export enum A {\n  X,\n}\n");
        assert_eq!(second.output, "export enum B {\n  Y,\n}\n");
    }

    #[test]
    fn test_generated_serializes() {
        let generated = Generated {
            output: "x".to_owned(),
            warnings: vec!["w".to_owned()],
        };
        let json = serde_json::to_string(&generated).expect("serialization failed");
        assert_eq!(json, r#"{"output":"x","warnings":["w"]}"#);
    }

    #[test]
    fn test_format_warnings_header_does_not_escape() {
        let warnings = vec![r#"Could not recognize "x""#.to_owned()];
        assert_eq!(
            format_warnings_header(&warnings),
            r#""Could not recognize "x"""#
        );
    }
}
