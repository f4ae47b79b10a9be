//! Type references: the usage of a type at a property, base list, or type argument.

use serde::{Deserialize, Serialize};

use super::location::Snippet;

/// A C# type usage as handed over by the parser.
///
/// # Examples
///
/// ```
/// use cs2ts_core::TypeRef;
///
/// // Dictionary<string, List<Order>>?
/// let ty = TypeRef::nullable(TypeRef::generic(
///     "Dictionary",
///     vec![
///         TypeRef::predefined("string").unwrap(),
///         TypeRef::generic("List", vec![TypeRef::ident("Order")]),
///     ],
/// ));
/// assert!(ty.is_nullable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    /// A simple name such as `Order` or `T`.
    Identifier(String),

    /// A constructed generic such as `List<Order>`.
    Generic {
        /// The generic type's name without arguments.
        name: String,
        /// Type arguments in source order.
        args: Vec<TypeRef>,
    },

    /// A namespace-qualified name such as `System.Collections.Generic.List<int>`.
    Qualified {
        /// Namespace segments left of the rightmost name.
        namespace: Vec<String>,
        /// The rightmost name (an identifier or a generic).
        name: Box<TypeRef>,
    },

    /// A keyword type such as `int` or `string`.
    Predefined(PredefinedType),

    /// `T?`
    Nullable(Box<TypeRef>),

    /// `T[]`
    Array(Box<TypeRef>),

    /// Any other type syntax (pointers, tuples, function pointers, ...).
    Unsupported(Snippet),
}

impl TypeRef {
    /// Creates an identifier reference.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Creates a generic reference.
    #[must_use]
    pub fn generic(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Generic {
            name: name.into(),
            args,
        }
    }

    /// Creates a predefined reference from its keyword, or `None` for a
    /// keyword that is not a value type (`void`) or not a keyword at all.
    #[must_use]
    pub fn predefined(keyword: &str) -> Option<Self> {
        PredefinedType::from_keyword(keyword).map(Self::Predefined)
    }

    /// Wraps a reference as nullable.
    #[must_use]
    pub fn nullable(inner: Self) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Wraps a reference as an array element type.
    #[must_use]
    pub fn array(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    /// Returns `true` if the outermost shape is `T?`.
    #[inline]
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Returns the simple name a reference points at, ignoring namespaces
    /// and type arguments. Keyword and unsupported types have none.
    #[must_use]
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) | Self::Generic { name, .. } => Some(name),
            Self::Qualified { name, .. } => name.simple_name(),
            Self::Predefined(_) | Self::Nullable(_) | Self::Array(_) | Self::Unsupported(_) => {
                None
            }
        }
    }
}

/// C# keyword types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredefinedType {
    /// `bool`
    Bool,
    /// `byte`
    Byte,
    /// `sbyte`
    SByte,
    /// `char`
    Char,
    /// `decimal`
    Decimal,
    /// `double`
    Double,
    /// `float`
    Float,
    /// `int`
    Int,
    /// `uint`
    UInt,
    /// `long`
    Long,
    /// `ulong`
    ULong,
    /// `short`
    Short,
    /// `ushort`
    UShort,
    /// `nint`
    NInt,
    /// `nuint`
    NUInt,
    /// `object`
    Object,
    /// `string`
    String,
}

impl PredefinedType {
    /// Looks up a keyword. `void` is deliberately absent.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let ty = match keyword {
            "bool" => Self::Bool,
            "byte" => Self::Byte,
            "sbyte" => Self::SByte,
            "char" => Self::Char,
            "decimal" => Self::Decimal,
            "double" => Self::Double,
            "float" => Self::Float,
            "int" => Self::Int,
            "uint" => Self::UInt,
            "long" => Self::Long,
            "ulong" => Self::ULong,
            "short" => Self::Short,
            "ushort" => Self::UShort,
            "nint" => Self::NInt,
            "nuint" => Self::NUInt,
            "object" => Self::Object,
            "string" => Self::String,
            _ => return None,
        };
        Some(ty)
    }

    /// Returns the C# keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::SByte => "sbyte",
            Self::Char => "char",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::NInt => "nint",
            Self::NUInt => "nuint",
            Self::Object => "object",
            Self::String => "string",
        }
    }
}
