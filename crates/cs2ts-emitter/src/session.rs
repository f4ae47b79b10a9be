//! Per-call generation state.
//!
//! A [`Session`] is created for one `generate` call and dropped when it
//! returns. Nothing in it is shared: concurrent callers each build their own.
//!
//! The generic parameters in scope are not part of the session. They are a
//! [`GenericScope`] value passed alongside every type-mapping call, so a
//! declaration's parameters cannot leak into the next one.

use cs2ts_core::{FxHashSet, GeneratorConfig};

use crate::diagnostics::Diagnostics;

/// The generic parameter names of the declaration being emitted.
///
/// # Examples
///
/// ```
/// use cs2ts_emitter::GenericScope;
///
/// let params = ["TKey".to_owned(), "TValue".to_owned()];
/// let scope = GenericScope::new(&params);
///
/// assert!(scope.contains("TKey"));
/// assert!(!GenericScope::EMPTY.contains("TKey"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericScope<'a> {
    params: &'a [String],
}

impl<'a> GenericScope<'a> {
    /// A scope with no generic parameters.
    pub const EMPTY: GenericScope<'static> = GenericScope { params: &[] };

    /// Creates a scope over a declaration's type parameters.
    #[inline]
    #[must_use]
    pub const fn new(params: &'a [String]) -> Self {
        Self { params }
    }

    /// Returns `true` if `name` is a generic parameter in this scope.
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|param| param == name)
    }

    /// The parameter names, in declaration order.
    #[inline]
    #[must_use]
    pub const fn params(&self) -> &'a [String] {
        self.params
    }
}

/// Accumulated state for one generation call.
///
/// Holds the configuration, the external type names referenced so far, the
/// names declared so far, and the warnings raised so far.
#[derive(Debug)]
pub struct Session<'cfg> {
    config: &'cfg GeneratorConfig,
    imports: Vec<String>,
    exports: FxHashSet<String>,
    diagnostics: Diagnostics,
}

impl<'cfg> Session<'cfg> {
    /// Creates an empty session over `config`.
    #[must_use]
    pub fn new(config: &'cfg GeneratorConfig) -> Self {
        Self {
            config,
            imports: Vec::new(),
            exports: FxHashSet::default(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// The configuration this session was created with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &'cfg GeneratorConfig {
        self.config
    }

    /// Records a reference to an external type name.
    ///
    /// Duplicates are kept here and removed when imports are resolved.
    pub fn add_import(&mut self, name: impl Into<String>) {
        self.imports.push(name.into());
    }

    /// Records a name declared by the generated output.
    pub fn add_export(&mut self, name: impl Into<String>) {
        self.exports.insert(name.into());
    }

    /// Referenced external names, in reference order.
    #[inline]
    #[must_use]
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Names declared so far.
    #[inline]
    #[must_use]
    pub const fn exports(&self) -> &FxHashSet<String> {
        &self.exports
    }

    /// Returns `true` if `name` has been declared.
    #[inline]
    #[must_use]
    pub fn is_exported(&self, name: &str) -> bool {
        self.exports.contains(name)
    }

    /// The diagnostics collector.
    #[inline]
    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Warnings raised so far.
    #[inline]
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        self.diagnostics.warnings()
    }

    /// Consumes the session, returning its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.diagnostics.into_warnings()
    }
}
