//! Enum member initializers to TypeScript constant expressions.
//!
//! Only the constant forms an enum value can sensibly use are rendered:
//! literals, unary `+`/`-`, arithmetic and shift operators, and parentheses.
//! Everything else is reported and replaced by a placeholder.

use cs2ts_core::{BinaryOp, Expr, LiteralKind, Snippet, SourceLocation, UnaryOp};

use crate::diagnostics::Diagnostics;

/// Renders a constant expression.
///
/// # Examples
///
/// ```
/// use cs2ts_core::{BinaryOp, Expr, Snippet};
/// use cs2ts_emitter::{Diagnostics, eval_expr};
///
/// let expr = Expr::Binary {
///     op: BinaryOp::ShiftLeft,
///     left: Box::new(Expr::number("1")),
///     right: Box::new(Expr::number("4")),
///     source: Snippet::default(),
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// assert_eq!(eval_expr(&expr, &mut diagnostics), "1 << 4");
/// ```
pub fn eval_expr(expr: &Expr, diagnostics: &mut Diagnostics) -> String {
    match expr {
        // Literals carry no position; a malformed one is reported at 0:0.
        Expr::Literal(kind, raw) => eval_literal(*kind, raw).unwrap_or_else(|| {
            diagnostics.report(&Snippet::new(raw.as_str(), SourceLocation::default()))
        }),
        Expr::PrefixUnary {
            op: op @ (UnaryOp::Plus | UnaryOp::Minus),
            operand,
            ..
        } => format!("{}{}", op.as_str(), eval_expr(operand, diagnostics)),
        Expr::Binary {
            op,
            left,
            right,
            source,
        } => {
            if !is_supported_binary(*op) {
                return diagnostics.report(source);
            }
            let left = eval_expr(left, diagnostics);
            let right = eval_expr(right, diagnostics);
            format!("{left} {} {right}", op.as_str())
        }
        Expr::Parenthesized(inner) => format!("({})", eval_expr(inner, diagnostics)),
        Expr::PrefixUnary { source, .. } | Expr::Unsupported(source) => {
            diagnostics.report(source)
        }
    }
}

const fn is_supported_binary(op: BinaryOp) -> bool {
    matches!(
        op,
        BinaryOp::Add
            | BinaryOp::Subtract
            | BinaryOp::Multiply
            | BinaryOp::Divide
            | BinaryOp::Remainder
            | BinaryOp::ShiftLeft
            | BinaryOp::ShiftRight
    )
}

fn eval_literal(kind: LiteralKind, raw: &str) -> Option<String> {
    match kind {
        LiteralKind::Default => Some("undefined".to_owned()),
        LiteralKind::Null => Some("null".to_owned()),
        LiteralKind::Boolean => Some(raw.trim().to_owned()),
        LiteralKind::Numeric | LiteralKind::String => Some(raw.to_owned()),
        LiteralKind::Char => eval_char(raw),
    }
}

/// Renders `'c'` as `<code point> /* c */`.
///
/// The comment keeps the character as written between the quotes, so an
/// escape such as `'\n'` reads `10 /* \n */`.
fn eval_char(raw: &str) -> Option<String> {
    let body = raw.trim().strip_prefix('\'')?.strip_suffix('\'')?;
    let value = decode_char(body)?;
    Some(format!("{} /* {body} */", u32::from(value)))
}

/// Decodes the body of a character literal, escapes included.
fn decode_char(body: &str) -> Option<char> {
    let mut chars = body.chars();
    let first = chars.next()?;
    if first != '\\' {
        return chars.next().is_none().then_some(first);
    }

    let escape = chars.next()?;
    let rest = chars.as_str();
    let simple = match escape {
        '\'' => '\'',
        '"' => '"',
        '\\' => '\\',
        '0' => '\0',
        'a' => '\u{7}',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{b}',
        'e' => '\u{1b}',
        'x' if (1..=4).contains(&rest.len()) => return decode_hex(rest),
        'u' if rest.len() == 4 => return decode_hex(rest),
        'U' if rest.len() == 8 => return decode_hex(rest),
        _ => return None,
    };
    rest.is_empty().then_some(simple)
}

fn decode_hex(digits: &str) -> Option<char> {
    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(expr: &Expr) -> (String, usize) {
        let mut diagnostics = Diagnostics::new();
        let text = eval_expr(expr, &mut diagnostics);
        (text, diagnostics.len())
    }

    fn snippet(text: &str) -> Snippet {
        Snippet::new(text, SourceLocation::new(2, 8, 0))
    }

    fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            source: snippet("a op b"),
        }
    }

    #[test]
    fn test_eval_literals() {
        assert_eq!(eval(&Expr::literal(LiteralKind::Default, "default")).0, "undefined");
        assert_eq!(eval(&Expr::literal(LiteralKind::Null, "null")).0, "null");
        assert_eq!(eval(&Expr::literal(LiteralKind::Boolean, "true")).0, "true");
        assert_eq!(eval(&Expr::literal(LiteralKind::Boolean, "false")).0, "false");
        assert_eq!(eval(&Expr::number("0x1F")).0, "0x1F");
        assert_eq!(eval(&Expr::number("2.5m")).0, "2.5m");
        assert_eq!(eval(&Expr::literal(LiteralKind::String, "\"hi\"")).0, "\"hi\"");
    }

    #[test]
    fn test_eval_char_literals() {
        assert_eq!(eval(&Expr::literal(LiteralKind::Char, "'A'")).0, "65 /* A */");
        assert_eq!(eval(&Expr::literal(LiteralKind::Char, "'\\n'")).0, "10 /* \\n */");
        assert_eq!(eval(&Expr::literal(LiteralKind::Char, "'\\''")).0, "39 /* \\' */");
        assert_eq!(
            eval(&Expr::literal(LiteralKind::Char, "'\\u0041'")).0,
            "65 /* \\u0041 */"
        );
        assert_eq!(eval(&Expr::literal(LiteralKind::Char, "'\\x7'")).0, "7 /* \\x7 */");
        assert_eq!(eval(&Expr::literal(LiteralKind::Char, "'é'")).0, "233 /* é */");
    }

    #[test]
    fn test_eval_malformed_char_reports() {
        let (text, warnings) = eval(&Expr::literal(LiteralKind::Char, "'ab'"));
        assert!(text.starts_with("<???>"));
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_eval_unary() {
        let minus = Expr::PrefixUnary {
            op: UnaryOp::Minus,
            operand: Box::new(Expr::number("1")),
            source: snippet("-1"),
        };
        assert_eq!(eval(&minus), ("-1".to_owned(), 0));

        let not = Expr::PrefixUnary {
            op: UnaryOp::Complement,
            operand: Box::new(Expr::number("1")),
            source: snippet("~1"),
        };
        assert_eq!(eval(&not), ("<???> /* @2:8 ~1 */".to_owned(), 1));
    }

    #[test]
    fn test_eval_binary() {
        for (op, text) in [
            (BinaryOp::Add, "1 + 2"),
            (BinaryOp::Subtract, "1 - 2"),
            (BinaryOp::Multiply, "1 * 2"),
            (BinaryOp::Divide, "1 / 2"),
            (BinaryOp::Remainder, "1 % 2"),
            (BinaryOp::ShiftLeft, "1 << 2"),
            (BinaryOp::ShiftRight, "1 >> 2"),
        ] {
            assert_eq!(eval(&binary(op, Expr::number("1"), Expr::number("2"))).0, text);
        }
    }

    #[test]
    fn test_eval_unsupported_binary_reports() {
        let expr = binary(BinaryOp::BitOr, Expr::number("1"), Expr::number("2"));
        assert_eq!(eval(&expr), ("<???> /* @2:8 a op b */".to_owned(), 1));
    }

    #[test]
    fn test_eval_parenthesized() {
        let expr = Expr::Parenthesized(Box::new(binary(
            BinaryOp::Add,
            Expr::number("1"),
            Expr::Parenthesized(Box::new(Expr::number("2"))),
        )));
        assert_eq!(eval(&expr).0, "(1 + (2))");
    }

    #[test]
    fn test_eval_unsupported() {
        let expr = Expr::Unsupported(snippet("Other.Value"));
        assert_eq!(eval(&expr), ("<???> /* @2:8 Other.Value */".to_owned(), 1));
    }
}
