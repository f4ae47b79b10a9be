//! Warnings for syntax the emitter cannot translate.
//!
//! Every unrecognized declaration, type, or expression is routed through
//! [`Diagnostics::report`], which records a warning and hands back a
//! placeholder to splice into the output in place of the node. Generation
//! always completes; the warning list tells the caller where to look.

use cs2ts_core::Snippet;
use tracing::debug;

/// Placeholder marker left in the output for unrecognized nodes.
pub const PLACEHOLDER_MARKER: &str = "<???>";

/// Ordered warnings collected during one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: Vec<String>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Records a warning for `node` and returns its placeholder text.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs2ts_core::{Snippet, SourceLocation};
    /// use cs2ts_emitter::Diagnostics;
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// let node = Snippet::new(" (int, int) ", SourceLocation::new(3, 11, 80));
    ///
    /// let placeholder = diagnostics.report(&node);
    /// assert_eq!(placeholder, "<???> /* @3:11 (int, int) */");
    /// assert_eq!(
    ///     diagnostics.warnings(),
    ///     ["(Line: 3:11): Could not recognize (int, int)"]
    /// );
    /// ```
    pub fn report(&mut self, node: &Snippet) -> String {
        let text = node.text.trim();
        let location = node.location;

        debug!(%location, text, "unrecognized node");
        self.warnings
            .push(format!("(Line: {location}): Could not recognize {text}"));

        format!("{PLACEHOLDER_MARKER} /* @{location} {text} */")
    }

    /// Warnings recorded so far, in report order.
    #[inline]
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Number of warnings recorded so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Returns `true` if nothing has been reported.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Consumes the collector, returning its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs2ts_core::SourceLocation;

    fn snippet(text: &str, line: u32, column: u32) -> Snippet {
        Snippet::new(text, SourceLocation::new(line, column, 0))
    }

    #[test]
    fn test_report_formats_warning_and_placeholder() {
        let mut diagnostics = Diagnostics::new();
        let placeholder = diagnostics.report(&snippet("delegate void D();", 0, 0));

        assert_eq!(placeholder, "<???> /* @0:0 delegate void D(); */");
        assert_eq!(
            diagnostics.warnings(),
            ["(Line: 0:0): Could not recognize delegate void D();"]
        );
    }

    #[test]
    fn test_report_trims_text() {
        let mut diagnostics = Diagnostics::new();
        let placeholder = diagnostics.report(&snippet("\n  a.b  \n", 2, 4));
        assert_eq!(placeholder, "<???> /* @2:4 a.b */");
    }

    #[test]
    fn test_report_preserves_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.report(&snippet("first", 1, 0));
        diagnostics.report(&snippet("second", 5, 2));

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.warnings()[0].contains("first"));
        assert!(diagnostics.warnings()[1].contains("second"));
        assert_eq!(diagnostics.into_warnings().len(), 2);
    }

    #[test]
    fn test_new_is_empty() {
        assert!(Diagnostics::new().is_empty());
        assert_eq!(Diagnostics::default(), Diagnostics::new());
    }
}
