//! Type references to TypeScript type text.
//!
//! | C# | TypeScript |
//! |----|------------|
//! | generic parameter in scope | verbatim, never imported |
//! | `String`, `DateTime`, `Guid` | `string` |
//! | `dynamic` | `any` |
//! | other identifiers | verbatim, imported |
//! | `List<T>`, `IList<T>`, `ICollection<T>`, `IEnumerable<T>` | `T[]` |
//! | `Dictionary<K, V>` | `{ [ key: K ]: V }`, or `{ [ key in K ]: V }` for known enums |
//! | other generics | `Name<A, B>`, imported |
//! | `A.B.C` | mapping of `C` |
//! | `bool` | `boolean` |
//! | numeric keywords, `char` | `number` |
//! | `object` | `any` |
//! | `string` | `string` |
//! | `T?` | mapping of `T` (the `?` goes on the property) |
//! | `T[]` | `T[]` |

use cs2ts_core::{PredefinedType, TypeRef};
use smallvec::SmallVec;

use crate::session::{GenericScope, Session};

/// Identifiers rendered as `string`.
const STRING_LIKE: &[&str] = &["String", "DateTime", "Guid"];

/// Generic collections rendered as arrays of their single argument.
const ARRAY_LIKE: &[&str] = &["List", "IList", "ICollection", "IEnumerable"];

const DICTIONARY: &str = "Dictionary";

/// Maps a type reference to TypeScript, recording imports in `session`.
///
/// # Examples
///
/// ```
/// use cs2ts_core::{GeneratorConfig, TypeRef};
/// use cs2ts_emitter::{GenericScope, Session, map_type};
///
/// let config = GeneratorConfig::default();
/// let mut session = Session::new(&config);
///
/// let ty = TypeRef::generic("List", vec![TypeRef::ident("Order")]);
/// assert_eq!(map_type(&ty, GenericScope::EMPTY, &mut session), "Order[]");
/// assert_eq!(session.imports(), ["Order"]);
/// ```
pub fn map_type(ty: &TypeRef, scope: GenericScope<'_>, session: &mut Session<'_>) -> String {
    match ty {
        TypeRef::Identifier(name) => map_identifier(name, scope, session),
        TypeRef::Generic { name, args } => map_generic(name, args, scope, session),
        TypeRef::Qualified { name, .. } => map_type(name, scope, session),
        TypeRef::Predefined(predefined) => map_predefined(*predefined).to_owned(),
        TypeRef::Nullable(inner) => map_type(inner, scope, session),
        TypeRef::Array(element) => format!("{}[]", map_type(element, scope, session)),
        TypeRef::Unsupported(node) => session.diagnostics_mut().report(node),
    }
}

fn map_identifier(name: &str, scope: GenericScope<'_>, session: &mut Session<'_>) -> String {
    if scope.contains(name) {
        return name.to_owned();
    }
    if STRING_LIKE.contains(&name) {
        return "string".to_owned();
    }
    if name == "dynamic" {
        return "any".to_owned();
    }

    session.add_import(name);
    name.to_owned()
}

fn map_generic(
    name: &str,
    args: &[TypeRef],
    scope: GenericScope<'_>,
    session: &mut Session<'_>,
) -> String {
    match args {
        [element] if ARRAY_LIKE.contains(&name) => {
            format!("{}[]", map_type(element, scope, session))
        }
        [key, value] if name == DICTIONARY => {
            let key = map_type(key, scope, session);
            let value = map_type(value, scope, session);
            let separator = if session.config().is_known_enum(&key) {
                " in "
            } else {
                ": "
            };
            format!("{{ [ key{separator}{key} ]: {value} }}")
        }
        _ => {
            session.add_import(name);
            let args: SmallVec<[String; 2]> = args
                .iter()
                .map(|arg| map_type(arg, scope, session))
                .collect();
            format!("{name}<{}>", args.join(", "))
        }
    }
}

/// Maps a keyword type.
#[must_use]
pub const fn map_predefined(ty: PredefinedType) -> &'static str {
    match ty {
        PredefinedType::Bool => "boolean",
        PredefinedType::Byte
        | PredefinedType::SByte
        | PredefinedType::Char
        | PredefinedType::Decimal
        | PredefinedType::Double
        | PredefinedType::Float
        | PredefinedType::Int
        | PredefinedType::UInt
        | PredefinedType::Long
        | PredefinedType::ULong
        | PredefinedType::Short
        | PredefinedType::UShort
        | PredefinedType::NInt
        | PredefinedType::NUInt => "number",
        PredefinedType::Object => "any",
        PredefinedType::String => "string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs2ts_core::{EnumMode, GeneratorConfig, Snippet, SourceLocation};

    fn map(ty: &TypeRef) -> (String, Vec<String>) {
        let config = GeneratorConfig::default();
        let mut session = Session::new(&config);
        let text = map_type(ty, GenericScope::EMPTY, &mut session);
        (text, session.imports().to_vec())
    }

    fn int() -> TypeRef {
        TypeRef::Predefined(PredefinedType::Int)
    }

    #[test]
    fn test_map_identifier_imports() {
        assert_eq!(map(&TypeRef::ident("Order")), ("Order".to_owned(), vec!["Order".to_owned()]));
    }

    #[test]
    fn test_map_string_like_identifiers() {
        for name in ["String", "DateTime", "Guid"] {
            assert_eq!(map(&TypeRef::ident(name)), ("string".to_owned(), Vec::new()));
        }
        assert_eq!(map(&TypeRef::ident("dynamic")), ("any".to_owned(), Vec::new()));
    }

    #[test]
    fn test_map_generic_parameter_not_imported() {
        let config = GeneratorConfig::default();
        let mut session = Session::new(&config);
        let params = vec!["T".to_owned()];
        let scope = GenericScope::new(&params);

        let ty = TypeRef::generic("Page", vec![TypeRef::ident("T")]);
        assert_eq!(map_type(&ty, scope, &mut session), "Page<T>");
        assert_eq!(session.imports(), ["Page"]);
    }

    #[test]
    fn test_map_array_like_generics() {
        for name in ["List", "IList", "ICollection", "IEnumerable"] {
            let ty = TypeRef::generic(name, vec![int()]);
            assert_eq!(map(&ty), ("number[]".to_owned(), Vec::new()));
        }
    }

    #[test]
    fn test_map_dictionary() {
        let ty = TypeRef::generic("Dictionary", vec![TypeRef::ident("Color"), int()]);
        assert_eq!(map(&ty).0, "{ [ key: Color ]: number }");

        let config = GeneratorConfig {
            known_enums: [("Color".to_owned(), EnumMode::Default)].into_iter().collect(),
            ..GeneratorConfig::default()
        };
        let mut session = Session::new(&config);
        assert_eq!(
            map_type(&ty, GenericScope::EMPTY, &mut session),
            "{ [ key in Color ]: number }"
        );
        assert_eq!(session.imports(), ["Color"]);
    }

    #[test]
    fn test_map_dictionary_with_string_key() {
        let ty = TypeRef::generic(
            "Dictionary",
            vec![TypeRef::Predefined(PredefinedType::String), TypeRef::ident("Order")],
        );
        assert_eq!(map(&ty).0, "{ [ key: string ]: Order }");
    }

    #[test]
    fn test_map_other_generic() {
        let ty = TypeRef::generic("KeyValuePair", vec![TypeRef::ident("String"), int()]);
        assert_eq!(
            map(&ty),
            ("KeyValuePair<string, number>".to_owned(), vec!["KeyValuePair".to_owned()])
        );
    }

    #[test]
    fn test_map_special_forms_require_matching_arity() {
        let ty = TypeRef::generic("List", vec![int(), int()]);
        assert_eq!(map(&ty), ("List<number, number>".to_owned(), vec!["List".to_owned()]));
    }

    #[test]
    fn test_map_qualified_uses_rightmost() {
        let ty = TypeRef::Qualified {
            namespace: vec!["System".to_owned(), "Collections".to_owned(), "Generic".to_owned()],
            name: Box::new(TypeRef::generic("List", vec![TypeRef::ident("Order")])),
        };
        assert_eq!(map(&ty), ("Order[]".to_owned(), vec!["Order".to_owned()]));
    }

    #[test]
    fn test_map_predefined() {
        assert_eq!(map_predefined(PredefinedType::Bool), "boolean");
        assert_eq!(map_predefined(PredefinedType::Decimal), "number");
        assert_eq!(map_predefined(PredefinedType::Char), "number");
        assert_eq!(map_predefined(PredefinedType::Object), "any");
        assert_eq!(map_predefined(PredefinedType::String), "string");
    }

    #[test]
    fn test_map_nullable_and_array() {
        assert_eq!(map(&TypeRef::nullable(int())).0, "number");
        assert_eq!(map(&TypeRef::array(TypeRef::ident("Tag"))).0, "Tag[]");
        assert_eq!(
            map(&TypeRef::array(TypeRef::array(int()))).0,
            "number[][]"
        );
    }

    #[test]
    fn test_map_unsupported_reports() {
        let config = GeneratorConfig::default();
        let mut session = Session::new(&config);
        let ty = TypeRef::Unsupported(Snippet::new("(int, int)", SourceLocation::new(4, 11, 0)));

        assert_eq!(
            map_type(&ty, GenericScope::EMPTY, &mut session),
            "<???> /* @4:11 (int, int) */"
        );
        assert_eq!(session.warnings().len(), 1);
    }
}
