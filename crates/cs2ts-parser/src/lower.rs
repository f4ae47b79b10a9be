//! Lowering of tree-sitter C# syntax trees into the declaration model.
//!
//! The emitter never sees tree-sitter nodes. Everything it needs (names,
//! modifiers, type shapes, enum values, leading comments) is copied out here,
//! and any node without a counterpart in the model becomes an `Unsupported`
//! value carrying its source text and position.
//!
//! # Skipped silently
//!
//! - `using` / `extern alias` directives, global attributes, comments
//! - preprocessor directives (the bodies of `#if` / `#elif` / `#else` are
//!   still visited)
//! - fields, methods, constructors, events, indexers, and operators

use cs2ts_core::{
    BinaryOp, Declaration, EnumDecl, EnumMember, Expr, LiteralKind, Member, Modifiers,
    NamespaceDecl, Property, Snippet, SourceLocation, Trivia, TypeDecl, TypeKind, TypeRef, UnaryOp,
};
use smallvec::SmallVec;
use tracing::trace;
use tree_sitter::Node;

use crate::node_kinds::{
    ALIAS_QUALIFIED_NAME, ARGUMENT_LIST, ARRAY_TYPE, ATTRIBUTE_LIST, BASE_LIST, BINARY_EXPRESSION,
    BOOLEAN_LITERAL, CHARACTER_LITERAL, CLASS_DECLARATION, COMMENT, CONSTRUCTOR_DECLARATION,
    CONVERSION_OPERATOR_DECLARATION, DECLARATION_LIST, DEFAULT_EXPRESSION, DESTRUCTOR_DECLARATION,
    DYNAMIC, ENUM_DECLARATION, ENUM_MEMBER_DECLARATION, ENUM_MEMBER_DECLARATION_LIST,
    EVENT_DECLARATION, EVENT_FIELD_DECLARATION, EXTERN_ALIAS_DIRECTIVE, FIELD_DECLARATION,
    FILE_SCOPED_NAMESPACE_DECLARATION, GENERIC_NAME, GLOBAL_ATTRIBUTE, IDENTIFIER,
    INDEXER_DECLARATION, INTEGER_LITERAL, INTERFACE_DECLARATION, LITERAL, METHOD_DECLARATION,
    MODIFIER, NAMESPACE_DECLARATION, NULL_LITERAL, NULLABLE_TYPE, OPERATOR_DECLARATION,
    PARENTHESIZED_EXPRESSION, PREDEFINED_TYPE, PREFIX_UNARY_EXPRESSION, PREPROC_ELIF,
    PREPROC_ELSE, PREPROC_IF, PREPROC_PREFIX, PRIMARY_CONSTRUCTOR_BASE_TYPE, PROPERTY_DECLARATION,
    QUALIFIED_NAME, RAW_STRING_LITERAL, REAL_LITERAL, SHEBANG_DIRECTIVE, STRING_LITERAL,
    STRUCT_DECLARATION, TYPE_ARGUMENT_LIST, TYPE_PARAMETER, TYPE_PARAMETER_LIST,
    USING_DIRECTIVE, VERBATIM_STRING_LITERAL,
};

/// Copies declarations out of a syntax tree over `source`.
pub(crate) struct Lowerer<'src> {
    source: &'src str,
}

impl<'src> Lowerer<'src> {
    pub(crate) const fn new(source: &'src str) -> Self {
        Self { source }
    }

    /// Lowers every declaration in a `compilation_unit`.
    pub(crate) fn lower_unit(&self, root: Node<'_>) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        self.for_each_item(root, &mut |item| {
            declarations.push(self.lower_declaration(item));
        });
        declarations
    }

    // =========================================================================
    // DECLARATIONS
    // =========================================================================

    fn lower_declaration(&self, node: Node<'_>) -> Declaration {
        match node.kind() {
            NAMESPACE_DECLARATION | FILE_SCOPED_NAMESPACE_DECLARATION => {
                Declaration::Namespace(self.lower_namespace(node))
            }
            CLASS_DECLARATION => self.lower_type(node, TypeKind::Class),
            INTERFACE_DECLARATION => self.lower_type(node, TypeKind::Interface),
            STRUCT_DECLARATION => self.lower_type(node, TypeKind::Struct),
            ENUM_DECLARATION => self.lower_enum(node),
            kind => {
                trace!(kind, "no lowering for declaration");
                Declaration::Unsupported(self.snippet(node))
            }
        }
    }

    fn lower_namespace(&self, node: Node<'_>) -> NamespaceDecl {
        let name_node = node.child_by_field_name("name");
        let mut members = Vec::new();

        // A block namespace keeps its members in a declaration_list; depending
        // on the grammar version a file-scoped one may own them directly.
        self.for_each_item(node, &mut |child| {
            if name_node.is_some_and(|name| name.id() == child.id()) {
                return;
            }
            if child.kind() == DECLARATION_LIST {
                self.for_each_item(child, &mut |item| {
                    members.push(self.lower_declaration(item));
                });
            } else {
                members.push(self.lower_declaration(child));
            }
        });

        NamespaceDecl {
            name: name_node.map(|n| self.text(n).to_owned()).unwrap_or_default(),
            members,
        }
    }

    fn lower_type(&self, node: Node<'_>, kind: TypeKind) -> Declaration {
        let Some(name_node) = node.child_by_field_name("name") else {
            return Declaration::Unsupported(self.snippet(node));
        };

        let mut decl = TypeDecl::new(kind, self.text(name_node))
            .with_modifiers(self.modifiers(node));
        decl.trivia = self.leading_trivia(node);

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                TYPE_PARAMETER_LIST => decl.type_params = self.type_params(child),
                BASE_LIST => decl.bases = self.bases(child),
                DECLARATION_LIST => self.lower_members(child, &mut decl),
                _ => {}
            }
        }

        Declaration::Type(decl)
    }

    fn lower_members(&self, body: Node<'_>, decl: &mut TypeDecl) {
        self.for_each_item(body, &mut |member| match member.kind() {
            PROPERTY_DECLARATION => decl.members.push(match self.lower_property(member) {
                Some(property) => Member::Property(property),
                None => Member::Unsupported(self.snippet(member)),
            }),
            FIELD_DECLARATION
            | EVENT_FIELD_DECLARATION
            | EVENT_DECLARATION
            | METHOD_DECLARATION
            | CONSTRUCTOR_DECLARATION
            | DESTRUCTOR_DECLARATION
            | INDEXER_DECLARATION
            | OPERATOR_DECLARATION
            | CONVERSION_OPERATOR_DECLARATION => {}
            _ => decl.nested.push(self.lower_declaration(member)),
        });
    }

    fn lower_property(&self, node: Node<'_>) -> Option<Property> {
        let name = node.child_by_field_name("name")?;
        let ty = node.child_by_field_name("type")?;

        Some(Property {
            name: self.text(name).to_owned(),
            ty: self.lower_type_ref(ty),
            modifiers: self.modifiers(node),
            trivia: self.leading_trivia(node),
        })
    }

    fn lower_enum(&self, node: Node<'_>) -> Declaration {
        let Some(name_node) = node.child_by_field_name("name") else {
            return Declaration::Unsupported(self.snippet(node));
        };

        let mut members = Vec::new();
        let body = node
            .child_by_field_name("body")
            .or_else(|| named_child_of_kind(node, ENUM_MEMBER_DECLARATION_LIST));
        if let Some(body) = body {
            self.for_each_item(body, &mut |item| {
                if item.kind() != ENUM_MEMBER_DECLARATION {
                    return;
                }
                if let Some(name) = item.child_by_field_name("name") {
                    let value = enum_member_value(item, name).map(|v| self.lower_expr(v));
                    members.push(EnumMember::new(self.text(name), value));
                }
            });
        }

        let mut decl = EnumDecl::new(self.text(name_node), members);
        decl.trivia = self.leading_trivia(node);
        Declaration::Enum(decl)
    }

    fn modifiers(&self, node: Node<'_>) -> Modifiers {
        let mut cursor = node.walk();
        let keywords: SmallVec<[&str; 4]> = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() == MODIFIER)
            .map(|child| self.text(child).trim())
            .collect();
        Modifiers::from_keywords(keywords)
    }

    fn type_params(&self, list: Node<'_>) -> SmallVec<[String; 2]> {
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .filter(|child| child.kind() == TYPE_PARAMETER)
            .filter_map(|param| {
                param
                    .child_by_field_name("name")
                    .or_else(|| named_child_of_kind(param, IDENTIFIER))
            })
            .map(|name| self.text(name).to_owned())
            .collect()
    }

    fn bases(&self, list: Node<'_>) -> Vec<TypeRef> {
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .filter_map(|child| match child.kind() {
                COMMENT | ARGUMENT_LIST => None,
                PRIMARY_CONSTRUCTOR_BASE_TYPE => {
                    type_operand(child).map(|ty| self.lower_type_ref(ty))
                }
                _ => Some(self.lower_type_ref(child)),
            })
            .collect()
    }

    /// Visits the named children of a container, skipping directives and
    /// comments and flattening the branches of `#if` blocks.
    fn for_each_item<'tree>(&self, parent: Node<'tree>, f: &mut impl FnMut(Node<'tree>)) {
        let condition = parent.child_by_field_name("condition");
        let mut cursor = parent.walk();
        for child in parent.named_children(&mut cursor) {
            if condition.is_some_and(|c| c.id() == child.id()) {
                continue;
            }
            match child.kind() {
                COMMENT | USING_DIRECTIVE | EXTERN_ALIAS_DIRECTIVE | GLOBAL_ATTRIBUTE
                | SHEBANG_DIRECTIVE => {}
                PREPROC_IF | PREPROC_ELIF | PREPROC_ELSE => self.for_each_item(child, f),
                kind if kind.starts_with(PREPROC_PREFIX) => {}
                _ => f(child),
            }
        }
    }

    // =========================================================================
    // TYPES
    // =========================================================================

    pub(crate) fn lower_type_ref(&self, node: Node<'_>) -> TypeRef {
        match node.kind() {
            IDENTIFIER => TypeRef::ident(self.text(node)),
            GENERIC_NAME => self.lower_generic(node),
            QUALIFIED_NAME => self.lower_qualified(node, "qualifier"),
            ALIAS_QUALIFIED_NAME => self.lower_qualified(node, "alias"),
            PREDEFINED_TYPE => {
                let keyword = self.text(node).trim();
                match TypeRef::predefined(keyword) {
                    Some(ty) => ty,
                    // Contextual keyword in some grammar versions.
                    None if keyword == DYNAMIC => TypeRef::ident(keyword),
                    None => TypeRef::Unsupported(self.snippet(node)),
                }
            }
            NULLABLE_TYPE => match type_operand(node) {
                Some(inner) => TypeRef::nullable(self.lower_type_ref(inner)),
                None => TypeRef::Unsupported(self.snippet(node)),
            },
            ARRAY_TYPE => match type_operand(node) {
                Some(element) => TypeRef::array(self.lower_type_ref(element)),
                None => TypeRef::Unsupported(self.snippet(node)),
            },
            _ => TypeRef::Unsupported(self.snippet(node)),
        }
    }

    fn lower_generic(&self, node: Node<'_>) -> TypeRef {
        let name = node
            .child_by_field_name("name")
            .or_else(|| named_child_of_kind(node, IDENTIFIER));
        let args = named_child_of_kind(node, TYPE_ARGUMENT_LIST);

        let (Some(name), Some(args)) = (name, args) else {
            return TypeRef::Unsupported(self.snippet(node));
        };

        let mut cursor = args.walk();
        let args: Vec<TypeRef> = args
            .named_children(&mut cursor)
            .filter(|arg| arg.kind() != COMMENT)
            .map(|arg| self.lower_type_ref(arg))
            .collect();

        // `List<>` in typeof(...) style positions has no arguments to map.
        if args.is_empty() {
            return TypeRef::Unsupported(self.snippet(node));
        }

        TypeRef::generic(self.text(name), args)
    }

    fn lower_qualified(&self, node: Node<'_>, qualifier_field: &str) -> TypeRef {
        let qualifier = node.child_by_field_name(qualifier_field);
        let Some(name) = node.child_by_field_name("name") else {
            return TypeRef::Unsupported(self.snippet(node));
        };

        let namespace = qualifier
            .map(|q| {
                self.text(q)
                    .split('.')
                    .map(|segment| segment.trim().to_owned())
                    .collect()
            })
            .unwrap_or_default();

        TypeRef::Qualified {
            namespace,
            name: Box::new(self.lower_type_ref(name)),
        }
    }

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    pub(crate) fn lower_expr(&self, node: Node<'_>) -> Expr {
        let literal = |kind| Expr::literal(kind, self.text(node));

        match node.kind() {
            LITERAL => match first_named_child(node) {
                Some(inner) => self.lower_expr(inner),
                None => Expr::Unsupported(self.snippet(node)),
            },
            INTEGER_LITERAL | REAL_LITERAL => literal(LiteralKind::Numeric),
            CHARACTER_LITERAL => literal(LiteralKind::Char),
            STRING_LITERAL | VERBATIM_STRING_LITERAL | RAW_STRING_LITERAL => {
                literal(LiteralKind::String)
            }
            BOOLEAN_LITERAL => literal(LiteralKind::Boolean),
            NULL_LITERAL => literal(LiteralKind::Null),
            DEFAULT_EXPRESSION if first_named_child(node).is_none() => {
                literal(LiteralKind::Default)
            }
            PREFIX_UNARY_EXPRESSION => self.lower_prefix_unary(node),
            BINARY_EXPRESSION => self.lower_binary(node),
            PARENTHESIZED_EXPRESSION => match first_named_child(node) {
                Some(inner) => Expr::Parenthesized(Box::new(self.lower_expr(inner))),
                None => Expr::Unsupported(self.snippet(node)),
            },
            _ => Expr::Unsupported(self.snippet(node)),
        }
    }

    fn lower_prefix_unary(&self, node: Node<'_>) -> Expr {
        let op = node
            .child_by_field_name("operator")
            .or_else(|| node.child(0))
            .and_then(|token| UnaryOp::from_token(self.text(token).trim()));
        let operand = node
            .child_by_field_name("operand")
            .or_else(|| last_named_child(node));

        match (op, operand) {
            (Some(op), Some(operand)) => Expr::PrefixUnary {
                op,
                operand: Box::new(self.lower_expr(operand)),
                source: self.snippet(node),
            },
            _ => Expr::Unsupported(self.snippet(node)),
        }
    }

    fn lower_binary(&self, node: Node<'_>) -> Expr {
        let op = node
            .child_by_field_name("operator")
            .and_then(|token| BinaryOp::from_token(self.text(token).trim()));
        let left = node.child_by_field_name("left");
        let right = node.child_by_field_name("right");

        match (op, left, right) {
            (Some(op), Some(left), Some(right)) => Expr::Binary {
                op,
                left: Box::new(self.lower_expr(left)),
                right: Box::new(self.lower_expr(right)),
                source: self.snippet(node),
            },
            _ => Expr::Unsupported(self.snippet(node)),
        }
    }

    // =========================================================================
    // TRIVIA & SOURCE TEXT
    // =========================================================================

    /// Collects the comments directly preceding `node`.
    ///
    /// A comment that starts on the line where the previous sibling ends
    /// trails that sibling and is not included.
    fn leading_trivia(&self, node: Node<'_>) -> Trivia {
        let mut preceding = Vec::new();
        let mut prev = node.prev_sibling();
        while let Some(sibling) = prev.filter(|s| s.kind() == COMMENT) {
            preceding.push(sibling);
            prev = sibling.prev_sibling();
        }
        if let Some(before) = prev {
            let end_row = before.end_position().row;
            preceding.retain(|comment| comment.start_position().row != end_row);
        }

        let mut comments: Vec<String> = preceding
            .iter()
            .rev()
            .map(|comment| self.text(*comment).to_owned())
            .collect();

        // Comments the grammar attached inside the node, ahead of its first token.
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() != COMMENT {
                break;
            }
            comments.push(self.text(child).to_owned());
        }

        Trivia::new(comments)
    }

    fn text(&self, node: Node<'_>) -> &'src str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    fn snippet(&self, node: Node<'_>) -> Snippet {
        let start = node.start_position();
        Snippet::new(
            self.text(node),
            SourceLocation::new(
                to_u32(start.row),
                to_u32(self.char_column(node.start_byte(), start.column)),
                to_u32(node.start_byte()),
            ),
        )
    }

    /// Converts tree-sitter's byte column into a character column.
    fn char_column(&self, byte: usize, byte_column: usize) -> usize {
        let line_start = byte.saturating_sub(byte_column);
        self.source
            .get(line_start..byte)
            .map_or(byte_column, |prefix| prefix.chars().count())
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn named_child_of_kind<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == kind);
    found
}

fn first_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != COMMENT);
    found
}

fn last_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != COMMENT)
        .last();
    found
}

/// The wrapped type of `T?` / `T[]` / a primary-constructor base.
fn type_operand(node: Node<'_>) -> Option<Node<'_>> {
    node.child_by_field_name("type")
        .or_else(|| first_named_child(node))
}

/// The initializer of an enum member: the `value` field, or failing that the
/// first named child that is neither the name nor an attribute.
fn enum_member_value<'tree>(member: Node<'tree>, name: Node<'tree>) -> Option<Node<'tree>> {
    if let Some(value) = member.child_by_field_name("value") {
        return Some(value);
    }
    let mut cursor = member.walk();
    let found = member.named_children(&mut cursor).find(|child| {
        child.id() != name.id() && !matches!(child.kind(), ATTRIBUTE_LIST | COMMENT)
    });
    found
}
