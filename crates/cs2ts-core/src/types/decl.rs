//! Declarations: namespaces, classes/interfaces/structs, and enums.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::expr::Expr;
use super::location::Snippet;
use super::type_ref::TypeRef;

/// Comments that precede a node in the source, in order, verbatim
/// (including their `//`, `///`, or `/* */` markers).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trivia {
    /// Raw comment texts.
    pub comments: Vec<String>,
}

impl Trivia {
    /// Creates trivia from raw comment texts.
    #[must_use]
    pub fn new(comments: Vec<String>) -> Self {
        Self { comments }
    }

    /// Returns `true` if no comments precede the node.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

/// The modifier keywords the emitter cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    /// `public`
    pub is_public: bool,
    /// `static`
    pub is_static: bool,
    /// `override`
    pub is_override: bool,
}

impl Modifiers {
    /// Only `public`.
    pub const PUBLIC: Self = Self {
        is_public: true,
        is_static: false,
        is_override: false,
    };

    /// Collects modifiers from keyword tokens; unknown keywords are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs2ts_core::Modifiers;
    ///
    /// let m = Modifiers::from_keywords(["public", "virtual", "override"]);
    /// assert!(m.is_public && m.is_override && !m.is_static);
    /// ```
    #[must_use]
    pub fn from_keywords<'a>(keywords: impl IntoIterator<Item = &'a str>) -> Self {
        let mut modifiers = Self::default();
        for keyword in keywords {
            match keyword {
                "public" => modifiers.is_public = true,
                "static" => modifiers.is_static = true,
                "override" => modifiers.is_override = true,
                _ => {}
            }
        }
        modifiers
    }
}

/// A top-level or namespace-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Declaration {
    /// `namespace X { ... }` or `namespace X;`
    Namespace(NamespaceDecl),
    /// `class`, `interface`, or `struct`.
    Type(TypeDecl),
    /// `enum`
    Enum(EnumDecl),
    /// Records, delegates, and anything else without a translation rule.
    Unsupported(Snippet),
}

/// A namespace and its members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDecl {
    /// Dotted namespace name.
    pub name: String,
    /// Member declarations in source order.
    pub members: Vec<Declaration>,
}

/// Which keyword introduced a [`TypeDecl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `struct`
    Struct,
}

/// A class, interface, or struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Declaring keyword.
    pub kind: TypeKind,
    /// Type name without type parameters.
    pub name: String,
    /// Generic parameter names, e.g. `T`, `TKey`.
    pub type_params: SmallVec<[String; 2]>,
    /// Property members, and members that could not be lowered, in source order.
    pub members: Vec<Member>,
    /// Base class and implemented interfaces in source order.
    pub bases: Vec<TypeRef>,
    /// Declaration modifiers.
    pub modifiers: Modifiers,
    /// Comments preceding the declaration.
    pub trivia: Trivia,
    /// Types and enums declared inside this one.
    pub nested: Vec<Declaration>,
}

impl TypeDecl {
    /// Creates an empty declaration with the given kind and name.
    #[must_use]
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            type_params: SmallVec::new(),
            members: Vec::new(),
            bases: Vec::new(),
            modifiers: Modifiers::PUBLIC,
            trivia: Trivia::default(),
            nested: Vec::new(),
        }
    }

    /// Adds generic parameter names.
    #[must_use]
    pub fn with_type_params<'a>(mut self, params: impl IntoIterator<Item = &'a str>) -> Self {
        self.type_params
            .extend(params.into_iter().map(ToOwned::to_owned));
        self
    }

    /// Adds a property.
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.members.push(Member::Property(property));
        self
    }

    /// The property members, in source order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.members.iter().filter_map(|member| match member {
            Member::Property(property) => Some(property),
            Member::Unsupported(_) => None,
        })
    }

    /// Adds a base type.
    #[must_use]
    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.bases.push(base);
        self
    }

    /// Replaces the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns `true` for interfaces, whose members are implicitly public.
    #[inline]
    #[must_use]
    pub const fn is_interface(&self) -> bool {
        matches!(self.kind, TypeKind::Interface)
    }
}

/// A member of a class, interface, or struct that carries data shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Member {
    /// A property.
    Property(Property),
    /// A property-like member the parser could not read, kept in place.
    Unsupported(Snippet),
}

/// A property member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name as declared (PascalCase in idiomatic C#).
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Member modifiers.
    pub modifiers: Modifiers,
    /// Comments preceding the member.
    pub trivia: Trivia,
}

impl Property {
    /// Creates a `public` property without comments.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::PUBLIC,
            trivia: Trivia::default(),
        }
    }

    /// Replaces the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Replaces the leading comments.
    #[must_use]
    pub fn with_trivia(mut self, trivia: Trivia) -> Self {
        self.trivia = trivia;
        self
    }
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDecl {
    /// Enum name.
    pub name: String,
    /// Members in source order.
    pub members: Vec<EnumMember>,
    /// Comments preceding the declaration.
    pub trivia: Trivia,
}

impl EnumDecl {
    /// Creates an enum from its members.
    #[must_use]
    pub fn new(name: impl Into<String>, members: Vec<EnumMember>) -> Self {
        Self {
            name: name.into(),
            members,
            trivia: Trivia::default(),
        }
    }
}

/// One enum member with its optional initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// `= value`, if present.
    pub value: Option<Expr>,
}

impl EnumMember {
    /// Creates a member.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<Expr>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
