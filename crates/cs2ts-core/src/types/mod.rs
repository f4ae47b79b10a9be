//! The declaration model shared by the parser and the emitter.
//!
//! The parser lowers a C# syntax tree into these types; the emitter only
//! ever sees this model, never tree-sitter nodes.
//!
//! - [`Declaration`] - namespaces, type declarations, enums
//! - [`TypeRef`] - type usages
//! - [`Expr`] - constant expressions (enum values)
//! - [`SourceLocation`] / [`Snippet`] - positions for diagnostics

mod decl;
mod expr;
mod location;
mod type_ref;

pub use decl::{
    Declaration, EnumDecl, EnumMember, Member, Modifiers, NamespaceDecl, Property, Trivia,
    TypeDecl, TypeKind,
};
pub use expr::{BinaryOp, Expr, LiteralKind, UnaryOp};
pub use location::{Snippet, SourceLocation};
pub use type_ref::{PredefinedType, TypeRef};
