//! Declarations to TypeScript `export type` / `export enum` blocks.
//!
//! Namespaces are transparent. Each class, interface, or struct becomes an
//! object type alias, each enum an `export enum`, and nested declarations
//! follow their enclosing declaration as blocks of their own. Nested types
//! see the generic parameters of every enclosing type.

use cs2ts_core::{
    Declaration, EnumDecl, EnumMode, Member, Property, TypeDecl, TypeKind, TypeRef,
};
use tracing::{debug, trace};

use crate::doc::{extract_doc, indent_block};
use crate::expression::eval_expr;
use crate::session::{GenericScope, Session};
use crate::type_mapper::map_type;

const PROPERTY_INDENT: &str = "  ";

/// The base class marking a custom attribute.
const ATTRIBUTE_BASE: &str = "Attribute";

/// Emits `declarations` depth-first, recording exports and imports in
/// `session`.
///
/// Every block ends with a newline and blocks are separated by one blank
/// line. Returns an empty string if nothing was emitted.
pub fn emit_declarations(declarations: &[Declaration], session: &mut Session<'_>) -> String {
    let mut blocks = Vec::new();
    for declaration in declarations {
        emit_declaration(declaration, GenericScope::EMPTY, session, &mut blocks);
    }
    blocks.join("\n")
}

/// `outer` holds the generic parameters of the enclosing types, which stay
/// in scope inside nested declarations.
fn emit_declaration(
    declaration: &Declaration,
    outer: GenericScope<'_>,
    session: &mut Session<'_>,
    blocks: &mut Vec<String>,
) {
    match declaration {
        Declaration::Namespace(namespace) => {
            trace!(name = %namespace.name, "entering namespace");
            for member in &namespace.members {
                emit_declaration(member, outer, session, blocks);
            }
        }
        Declaration::Type(decl) => emit_type(decl, outer, session, blocks),
        Declaration::Enum(decl) => blocks.push(emit_enum(decl, session)),
        Declaration::Unsupported(node) => {
            let mut block = session.diagnostics_mut().report(node);
            block.push('\n');
            blocks.push(block);
        }
    }
}

fn emit_type(
    decl: &TypeDecl,
    outer: GenericScope<'_>,
    session: &mut Session<'_>,
    blocks: &mut Vec<String>,
) {
    if is_suppressed(decl) {
        debug!(name = %decl.name, "suppressed declaration");
        return;
    }

    let params: Vec<String> = outer
        .params()
        .iter()
        .chain(&decl.type_params)
        .cloned()
        .collect();
    let scope = GenericScope::new(&params);
    let mut block = extract_doc(&decl.trivia.comments);

    block.push_str("export type ");
    block.push_str(&decl.name);
    if !decl.type_params.is_empty() {
        block.push('<');
        block.push_str(&decl.type_params.join(", "));
        block.push('>');
    }
    block.push_str(" = {\n");

    for member in &decl.members {
        match member {
            Member::Property(property) if is_eligible(property, decl.kind) => {
                block.push_str(&emit_property(property, scope, session));
            }
            Member::Property(_) => {}
            Member::Unsupported(node) => {
                block.push_str(PROPERTY_INDENT);
                block.push_str(&session.diagnostics_mut().report(node));
                block.push('\n');
            }
        }
    }

    block.push('}');
    for base in &decl.bases {
        block.push_str(" & ");
        block.push_str(&map_type(base, scope, session));
    }
    block.push_str(";\n");

    debug!(name = %decl.name, kind = ?decl.kind, "emitted type");
    session.add_export(decl.name.as_str());
    blocks.push(block);

    for nested in &decl.nested {
        emit_declaration(nested, scope, session, blocks);
    }
}

fn emit_property(
    property: &Property,
    scope: GenericScope<'_>,
    session: &mut Session<'_>,
) -> String {
    let doc = extract_doc(&property.trivia.comments);
    let mut line = indent_block(&doc, PROPERTY_INDENT);

    let optional = if property.ty.is_nullable() { "?" } else { "" };
    let ty = map_type(&property.ty, scope, session);
    line.push_str(&format!(
        "{PROPERTY_INDENT}{}{optional}: {ty};\n",
        camel_case(&property.name)
    ));
    line
}

fn emit_enum(decl: &EnumDecl, session: &mut Session<'_>) -> String {
    let keyof = session.config().enum_mode(&decl.name).is_some_and(EnumMode::is_keyof);
    let emitted_name = if keyof {
        format!("{}Enum", decl.name)
    } else {
        decl.name.clone()
    };

    let mut block = extract_doc(&decl.trivia.comments);
    block.push_str(&format!("export enum {emitted_name} {{\n"));
    for member in &decl.members {
        block.push_str(PROPERTY_INDENT);
        block.push_str(&member.name);
        if let Some(value) = &member.value {
            block.push_str(" = ");
            block.push_str(&eval_expr(value, session.diagnostics_mut()));
        }
        block.push_str(",\n");
    }
    block.push_str("}\n");

    if keyof {
        block.push_str(&format!(
            "export type {} = Uncapitalize<keyof typeof {emitted_name}>;\n",
            decl.name
        ));
    }

    debug!(name = %decl.name, keyof, "emitted enum");
    session.add_export(decl.name.as_str());
    block
}

/// Static classes and custom attribute classes have no data shape.
fn is_suppressed(decl: &TypeDecl) -> bool {
    if decl.modifiers.is_static {
        return true;
    }
    decl.kind == TypeKind::Class
        && decl.name.ends_with(ATTRIBUTE_BASE)
        && decl
            .bases
            .iter()
            .any(|base| matches!(base, TypeRef::Identifier(name) if name == ATTRIBUTE_BASE))
}

/// Interface members are implicitly public.
fn is_eligible(property: &Property, kind: TypeKind) -> bool {
    let modifiers = property.modifiers;
    !modifiers.is_override
        && !modifiers.is_static
        && (kind == TypeKind::Interface || modifiers.is_public)
}

/// Lower-cases the first character, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use cs2ts_emitter::camel_case;
///
/// assert_eq!(camel_case("OrderId"), "orderId");
/// assert_eq!(camel_case("URL"), "uRL");
/// ```
#[must_use]
pub fn camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs2ts_core::{
        EnumMember, Expr, GeneratorConfig, Modifiers, NamespaceDecl, PredefinedType, Snippet,
        SourceLocation, Trivia,
    };

    fn emit_with(config: &GeneratorConfig, declarations: &[Declaration]) -> (String, Vec<String>) {
        let mut session = Session::new(config);
        let body = emit_declarations(declarations, &mut session);
        let mut exports: Vec<String> = session.exports().iter().cloned().collect();
        exports.sort();
        (body, exports)
    }

    fn emit(declarations: &[Declaration]) -> (String, Vec<String>) {
        emit_with(&GeneratorConfig::default(), declarations)
    }

    fn int() -> TypeRef {
        TypeRef::Predefined(PredefinedType::Int)
    }

    fn prop(name: &str, ty: TypeRef) -> Property {
        Property::new(name, ty)
    }

    #[test]
    fn test_emit_class() {
        let decl = TypeDecl::new(TypeKind::Class, "Order")
            .with_property(prop("Id", int()))
            .with_property(prop("Note", TypeRef::nullable(TypeRef::ident("String"))));

        let (body, exports) = emit(&[Declaration::Type(decl)]);
        assert_eq!(
            body,
            "export type Order = {\n  id: number;\n  note?: string;\n};\n"
        );
        assert_eq!(exports, ["Order"]);
    }

    #[test]
    fn test_emit_generic_type_with_bases() {
        let decl = TypeDecl::new(TypeKind::Class, "Page")
            .with_type_params(["T", "TKey"])
            .with_property(prop("Items", TypeRef::generic("List", vec![TypeRef::ident("T")])))
            .with_base(TypeRef::generic("PageBase", vec![TypeRef::ident("TKey")]))
            .with_base(TypeRef::ident("IPaged"));

        let config = GeneratorConfig::default();
        let mut session = Session::new(&config);
        let body = emit_declarations(&[Declaration::Type(decl)], &mut session);

        assert_eq!(
            body,
            "export type Page<T, TKey> = {\n  items: T[];\n} & PageBase<TKey> & IPaged;\n"
        );
        assert_eq!(session.imports(), ["PageBase", "IPaged"]);
    }

    #[test]
    fn test_generic_scope_ends_with_declaration() {
        let first = TypeDecl::new(TypeKind::Class, "Box").with_type_params(["T"]);
        let second = TypeDecl::new(TypeKind::Class, "Holder").with_property(prop("Value", TypeRef::ident("T")));

        let config = GeneratorConfig::default();
        let mut session = Session::new(&config);
        emit_declarations(
            &[Declaration::Type(first), Declaration::Type(second)],
            &mut session,
        );
        assert_eq!(session.imports(), ["T"]);
    }

    #[test]
    fn test_property_eligibility() {
        let private = Modifiers::default();
        let decl = TypeDecl::new(TypeKind::Class, "A")
            .with_property(prop("Shown", int()))
            .with_property(prop("Hidden", int()).with_modifiers(private))
            .with_property(prop("Shared", int()).with_modifiers(Modifiers {
                is_static: true,
                ..Modifiers::PUBLIC
            }))
            .with_property(prop("Overridden", int()).with_modifiers(Modifiers {
                is_override: true,
                ..Modifiers::PUBLIC
            }));

        let (body, _) = emit(&[Declaration::Type(decl)]);
        assert_eq!(body, "export type A = {\n  shown: number;\n};\n");
    }

    #[test]
    fn test_interface_members_are_implicitly_public() {
        let decl = TypeDecl::new(TypeKind::Interface, "IShape")
            .with_property(prop("Area", int()).with_modifiers(Modifiers::default()));

        let (body, _) = emit(&[Declaration::Type(decl)]);
        assert_eq!(body, "export type IShape = {\n  area: number;\n};\n");
    }

    #[test]
    fn test_suppressed_declarations() {
        let attribute = TypeDecl::new(TypeKind::Class, "FooAttribute").with_base(TypeRef::ident("Attribute"));
        let helpers = TypeDecl::new(TypeKind::Class, "Helpers").with_modifiers(Modifiers {
            is_static: true,
            ..Modifiers::PUBLIC
        });

        let (body, exports) = emit(&[Declaration::Type(attribute), Declaration::Type(helpers)]);
        assert_eq!(body, "");
        assert!(exports.is_empty());
    }

    #[test]
    fn test_attribute_suppression_needs_name_suffix_and_direct_base() {
        let not_suffixed = TypeDecl::new(TypeKind::Class, "Marker").with_base(TypeRef::ident("Attribute"));
        let indirect = TypeDecl::new(TypeKind::Class, "MyAttribute").with_base(TypeRef::ident("BaseAttribute"));

        let (_, exports) = emit(&[Declaration::Type(not_suffixed), Declaration::Type(indirect)]);
        assert_eq!(exports, ["Marker", "MyAttribute"]);
    }

    #[test]
    fn test_emit_docs() {
        let mut decl = TypeDecl::new(TypeKind::Class, "A").with_property(
            prop("Id", int()).with_trivia(Trivia::new(vec!["/// <summary>The id.</summary>".to_owned()])),
        );
        decl.trivia = Trivia::new(vec!["/// <summary>An A.</summary>".to_owned()]);

        let (body, _) = emit(&[Declaration::Type(decl)]);
        assert_eq!(
            body,
            "/**\n * An A.\n */\nexport type A = {\n  /**\n   * The id.\n   */\n  id: number;\n};\n"
        );
    }

    #[test]
    fn test_emit_enum() {
        let decl = EnumDecl::new(
            "Status",
            vec![
                EnumMember::new("Open", None),
                EnumMember::new("Closed", Some(Expr::number("5"))),
            ],
        );

        let (body, exports) = emit(&[Declaration::Enum(decl)]);
        assert_eq!(body, "export enum Status {\n  Open,\n  Closed = 5,\n}\n");
        assert_eq!(exports, ["Status"]);
    }

    #[test]
    fn test_emit_keyof_enum() {
        let config = GeneratorConfig::parse("", "Color:keyof").expect("valid config");
        let decl = EnumDecl::new("Color", vec![EnumMember::new("Red", None)]);

        let (body, exports) = emit_with(&config, &[Declaration::Enum(decl)]);
        assert_eq!(
            body,
            "export enum ColorEnum {\n  Red,\n}\nexport type Color = Uncapitalize<keyof typeof ColorEnum>;\n"
        );
        assert_eq!(exports, ["Color"]);
    }

    #[test]
    fn test_other_enum_modes_are_no_ops() {
        let config = GeneratorConfig::parse("", "Color:flags").expect("valid config");
        let decl = EnumDecl::new("Color", vec![EnumMember::new("Red", None)]);

        let (body, _) = emit_with(&config, &[Declaration::Enum(decl)]);
        assert_eq!(body, "export enum Color {\n  Red,\n}\n");
    }

    #[test]
    fn test_namespaces_are_transparent_and_blocks_separated() {
        let namespace = NamespaceDecl {
            name: "App".to_owned(),
            members: vec![
                Declaration::Type(TypeDecl::new(TypeKind::Struct, "A")),
                Declaration::Type(TypeDecl::new(TypeKind::Struct, "B")),
            ],
        };

        let (body, exports) = emit(&[Declaration::Namespace(namespace)]);
        assert_eq!(body, "export type A = {\n};\n\nexport type B = {\n};\n");
        assert_eq!(exports, ["A", "B"]);
    }

    #[test]
    fn test_nested_declarations_follow_enclosing() {
        let mut outer = TypeDecl::new(TypeKind::Class, "Outer");
        outer.nested.push(Declaration::Enum(EnumDecl::new("Kind", vec![EnumMember::new("A", None)])));

        let (body, exports) = emit(&[Declaration::Type(outer)]);
        assert_eq!(body, "export type Outer = {\n};\n\nexport enum Kind {\n  A,\n}\n");
        assert_eq!(exports, ["Kind", "Outer"]);
    }

    #[test]
    fn test_nested_types_see_enclosing_generic_parameters() {
        let inner = TypeDecl::new(TypeKind::Class, "Inner")
            .with_type_params(["U"])
            .with_property(prop("Value", TypeRef::ident("T")))
            .with_property(prop("Other", TypeRef::ident("U")));
        let mut outer = TypeDecl::new(TypeKind::Class, "Outer").with_type_params(["T"]);
        outer.nested.push(Declaration::Type(inner));

        let config = GeneratorConfig::default();
        let mut session = Session::new(&config);
        let body = emit_declarations(&[Declaration::Type(outer)], &mut session);

        assert_eq!(
            body,
            "export type Outer<T> = {\n};\n\nexport type Inner<U> = {\n  value: T;\n  other: U;\n};\n"
        );
        assert!(session.imports().is_empty());
    }

    #[test]
    fn test_unsupported_member_stays_in_place() {
        let mut decl = TypeDecl::new(TypeKind::Class, "A").with_property(prop("First", int()));
        decl.members.push(Member::Unsupported(Snippet::new(
            "public int",
            SourceLocation::new(2, 4, 0),
        )));
        decl.members.push(Member::Property(prop("Last", int())));

        let config = GeneratorConfig::default();
        let mut session = Session::new(&config);
        let body = emit_declarations(&[Declaration::Type(decl)], &mut session);

        assert_eq!(
            body,
            "export type A = {\n  first: number;\n  <???> /* @2:4 public int */\n  last: number;\n};\n"
        );
        assert_eq!(
            session.warnings(),
            ["(Line: 2:4): Could not recognize public int"]
        );
    }

    #[test]
    fn test_unsupported_declaration_reports() {
        let node = Snippet::new("public record R(int X);", SourceLocation::new(0, 0, 0));

        let config = GeneratorConfig::default();
        let mut session = Session::new(&config);
        let body = emit_declarations(&[Declaration::Unsupported(node)], &mut session);

        assert_eq!(body, "<???> /* @0:0 public record R(int X); */\n");
        assert_eq!(session.warnings().len(), 1);
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("Name"), "name");
        assert_eq!(camel_case("name"), "name");
        assert_eq!(camel_case("ID"), "iD");
        assert_eq!(camel_case("Ärger"), "ärger");
        assert_eq!(camel_case(""), "");
    }
}
