//! Import statements for the external types a session referenced.

use crate::session::Session;

/// Builds the sorted, deduplicated import lines for `session`.
///
/// Names the session declared itself are never imported. A configured
/// import path overrides the default `./<Name>` module.
///
/// # Examples
///
/// ```
/// use cs2ts_core::GeneratorConfig;
/// use cs2ts_emitter::{Session, resolve_imports};
///
/// let config = GeneratorConfig::parse("Money=@shared/money", "")?;
/// let mut session = Session::new(&config);
/// session.add_import("Order");
/// session.add_import("Money");
/// session.add_import("Order");
///
/// assert_eq!(
///     resolve_imports(&session),
///     [
///         "import { Money } from '@shared/money';",
///         "import { Order } from './Order';",
///     ]
/// );
/// # Ok::<(), cs2ts_core::ConfigError>(())
/// ```
pub fn resolve_imports(session: &Session<'_>) -> Vec<String> {
    let mut names: Vec<&str> = session
        .imports()
        .iter()
        .map(String::as_str)
        .filter(|name| !session.is_exported(name))
        .collect();
    names.sort_unstable();
    names.dedup();

    let config = session.config();
    names
        .into_iter()
        .map(|name| match config.import_path(name) {
            Some(path) => format!("import {{ {name} }} from '{path}';"),
            None => format!("import {{ {name} }} from './{name}';"),
        })
        .collect()
}

/// Joins import lines and the declaration body into the final file text.
#[must_use]
pub fn assemble(imports: &[String], body: &str) -> String {
    if imports.is_empty() {
        return body.to_owned();
    }
    format!("{}\n\n{body}", imports.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs2ts_core::GeneratorConfig;

    #[test]
    fn test_resolve_filters_exports() {
        let config = GeneratorConfig::default();
        let mut session = Session::new(&config);
        session.add_import("Customer");
        session.add_import("Address");
        session.add_export("Customer");

        assert_eq!(
            resolve_imports(&session),
            ["import { Address } from './Address';"]
        );
    }

    #[test]
    fn test_resolve_sorts_and_dedups() {
        let config = GeneratorConfig::default();
        let mut session = Session::new(&config);
        for name in ["Zeta", "alpha", "Beta", "Zeta", "Beta"] {
            session.add_import(name);
        }

        let imports = resolve_imports(&session);
        assert_eq!(
            imports,
            [
                "import { Beta } from './Beta';",
                "import { Zeta } from './Zeta';",
                "import { alpha } from './alpha';",
            ]
        );
    }

    #[test]
    fn test_resolve_empty() {
        let config = GeneratorConfig::default();
        assert!(resolve_imports(&Session::new(&config)).is_empty());
    }

    #[test]
    fn test_assemble() {
        assert_eq!(assemble(&[], "body\n"), "body\n");
        assert_eq!(
            assemble(&["import a;".to_owned(), "import b;".to_owned()], "body\n"),
            "import a;\nimport b;\n\nbody\n"
        );
    }
}
