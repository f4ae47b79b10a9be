//! Core types, configuration, and errors for the cs2ts translator.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - The declaration model handed from the parser to the emitter
//!   ([`Declaration`], [`TypeRef`], [`Expr`])
//! - Generator configuration parsed from the `Name=path` / `Name[:mode]`
//!   strings ([`GeneratorConfig`])
//! - Error types for configuration failures ([`ConfigError`])
//! - Type aliases for `FxHashMap`/`FxHashSet` (faster than std)

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{EnumMode, GeneratorConfig};
pub use error::ConfigError;
pub use types::{
    BinaryOp, Declaration, EnumDecl, EnumMember, Expr, LiteralKind, Member, Modifiers,
    NamespaceDecl, PredefinedType, Property, Snippet, SourceLocation, Trivia, TypeDecl, TypeKind,
    TypeRef, UnaryOp,
};

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;
