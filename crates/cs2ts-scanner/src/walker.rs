//! Directory traversal for C# source files.
//!
//! This module provides [`FileWalker`], which uses the `ignore` crate to
//! walk a project while respecting `.gitignore` patterns.
//!
//! # Features
//!
//! - Respects `.gitignore` and `.ignore` patterns
//! - Filters for C# files (`.cs`)
//! - Skips build output (`bin`, `obj`), package caches, and hidden entries
//! - Returns UTF-8 [`Utf8PathBuf`](camino::Utf8PathBuf)s in a stable order

use camino::{Utf8Path, Utf8PathBuf};
use ignore::WalkBuilder;

use crate::error::ScanError;

/// Directories that never hold hand-written model sources.
const SKIP_DIRECTORIES: &[&str] = &["bin", "obj", ".git", ".vs", "node_modules", "packages"];

/// C# file extension.
const CSHARP_EXTENSION: &str = "cs";

/// A file walker that discovers C# files in a directory tree.
///
/// Paths are collected up front (single-threaded, I/O bound) and then
/// converted in parallel by [`BatchConverter`](crate::BatchConverter).
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use cs2ts_scanner::FileWalker;
///
/// let walker = FileWalker::new(Utf8Path::new("./Models"))?;
/// for path in walker.collect_paths()? {
///     println!("Found: {path}");
/// }
/// # Ok::<(), cs2ts_scanner::ScanError>(())
/// ```
#[derive(Debug)]
pub struct FileWalker {
    /// The root directory to walk.
    root: Utf8PathBuf,
    /// Additional directories to skip (beyond the defaults).
    skip_dirs: Vec<String>,
    /// Whether to follow symbolic links.
    follow_links: bool,
}

impl FileWalker {
    /// Creates a new file walker for the given root directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] if the root path doesn't exist or
    /// isn't a directory.
    pub fn new(root: &Utf8Path) -> Result<Self, ScanError> {
        if !root.exists() {
            return Err(ScanError::config(format!(
                "root path does not exist: {root}"
            )));
        }
        if !root.is_dir() {
            return Err(ScanError::config(format!(
                "root path is not a directory: {root}"
            )));
        }

        Ok(Self {
            root: root.to_owned(),
            skip_dirs: Vec::new(),
            follow_links: false,
        })
    }

    /// Adds directory names to skip, in addition to the defaults.
    #[must_use]
    pub fn with_skip_dirs(mut self, dirs: &[&str]) -> Self {
        self.skip_dirs.extend(dirs.iter().map(ToString::to_string));
        self
    }

    /// Configures whether to follow symbolic links (off by default).
    #[must_use]
    pub const fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Collects all C# file paths under the root, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] if directory traversal fails and
    /// [`ScanError::NonUtf8Path`] if a non-UTF-8 path is encountered.
    pub fn collect_paths(&self) -> Result<Vec<Utf8PathBuf>, ScanError> {
        let mut paths = Vec::new();

        for result in self.build_walker() {
            let entry = result?;

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let utf8_path =
                Utf8Path::from_path(path).ok_or_else(|| ScanError::NonUtf8Path(path.to_owned()))?;

            if !is_csharp_file(utf8_path) || self.should_skip_path(utf8_path) {
                continue;
            }

            paths.push(utf8_path.to_owned());
        }

        paths.sort();
        Ok(paths)
    }

    /// Builds the ignore walker with configured settings.
    fn build_walker(&self) -> ignore::Walk {
        WalkBuilder::new(&self.root)
            .standard_filters(true)
            .follow_links(self.follow_links)
            .threads(1)
            .require_git(false)
            .build()
    }

    /// Checks the path below the root against the skip lists.
    fn should_skip_path(&self, path: &Utf8Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative.components().any(|component| {
            let name = component.as_str();
            SKIP_DIRECTORIES.contains(&name) || self.skip_dirs.iter().any(|d| d == name)
        })
    }

    /// Returns the root directory being walked.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

fn is_csharp_file(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSHARP_EXTENSION))
}
