//! Constant expressions, as they appear in enum member initializers.

use serde::{Deserialize, Serialize};

use super::location::Snippet;

/// Kind of a literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    /// The `default` literal.
    Default,
    /// `null`
    Null,
    /// `'c'`, with escapes left as written.
    Char,
    /// Integer or real literal, including suffixes and hex/binary prefixes.
    Numeric,
    /// Regular, verbatim, or raw string literal.
    String,
    /// `true` or `false`.
    Boolean,
}

/// Prefix unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Not,
    /// `~`
    Complement,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `^` (index from end)
    Hat,
    /// `&`
    AddressOf,
    /// `*`
    Dereference,
}

impl UnaryOp {
    /// Looks up an operator token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let op = match token {
            "+" => Self::Plus,
            "-" => Self::Minus,
            "!" => Self::Not,
            "~" => Self::Complement,
            "++" => Self::Increment,
            "--" => Self::Decrement,
            "^" => Self::Hat,
            "&" => Self::AddressOf,
            "*" => Self::Dereference,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the operator token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "!",
            Self::Complement => "~",
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::Hat => "^",
            Self::AddressOf => "&",
            Self::Dereference => "*",
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Remainder,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `>>>`
    UnsignedShiftRight,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `??`
    Coalesce,
}

impl BinaryOp {
    /// Looks up an operator token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let op = match token {
            "+" => Self::Add,
            "-" => Self::Subtract,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "%" => Self::Remainder,
            "<<" => Self::ShiftLeft,
            ">>" => Self::ShiftRight,
            ">>>" => Self::UnsignedShiftRight,
            "&" => Self::BitAnd,
            "|" => Self::BitOr,
            "^" => Self::BitXor,
            "&&" => Self::LogicalAnd,
            "||" => Self::LogicalOr,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            "<" => Self::Less,
            "<=" => Self::LessEqual,
            ">" => Self::Greater,
            ">=" => Self::GreaterEqual,
            "??" => Self::Coalesce,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the operator token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::UnsignedShiftRight => ">>>",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Coalesce => "??",
        }
    }
}

/// A constant expression.
///
/// Operator nodes keep their own [`Snippet`] so an operator the emitter
/// cannot render can still be reported at the right position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// A literal token with its verbatim source text.
    Literal(LiteralKind, String),

    /// `op operand`
    PrefixUnary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expr>,
        /// The whole expression.
        source: Snippet,
    },

    /// `left op right`
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
        /// The whole expression.
        source: Snippet,
    },

    /// `(inner)`
    Parenthesized(Box<Expr>),

    /// Any other expression syntax (member access, casts, invocations, ...).
    Unsupported(Snippet),
}

impl Expr {
    /// Creates a literal.
    #[must_use]
    pub fn literal(kind: LiteralKind, raw: impl Into<String>) -> Self {
        Self::Literal(kind, raw.into())
    }

    /// Creates a numeric literal.
    #[must_use]
    pub fn number(raw: impl Into<String>) -> Self {
        Self::Literal(LiteralKind::Numeric, raw.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_tokens_round_trip() {
        for token in ["+", "-", "*", "/", "%", "<<", ">>", ">>>", "&", "|", "^", "??"] {
            let op = BinaryOp::from_token(token).unwrap();
            assert_eq!(op.as_str(), token);
        }
        assert!(BinaryOp::from_token("=").is_none());
    }

    #[test]
    fn test_unary_tokens_round_trip() {
        for token in ["+", "-", "!", "~", "++", "--"] {
            let op = UnaryOp::from_token(token).unwrap();
            assert_eq!(op.as_str(), token);
        }
        assert!(UnaryOp::from_token("sizeof").is_none());
    }

    #[test]
    fn test_expr_serialization() {
        let expr = Expr::Parenthesized(Box::new(Expr::number("0x10")));
        let json = serde_json::to_string(&expr).unwrap();
        let parsed: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(expr, parsed);
    }
}
