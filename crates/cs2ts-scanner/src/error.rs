//! Error types for the cs2ts-scanner crate.
//!
//! This module provides the [`ScanError`] type for errors that can occur
//! during directory traversal, conversion, and writing output.

use camino::Utf8PathBuf;
use cs2ts_emitter::GenerateError;

/// Errors that can occur during batch conversion.
///
/// # Error Recovery Strategy
///
/// - **Walker errors** ([`ScanError::Walk`]): Fatal - propagate immediately
/// - **File read errors** ([`ScanError::Read`]): Log warning, skip file, continue batch
/// - **Generate errors** ([`ScanError::Generate`]): Log warning, skip file, continue batch
/// - **Write errors** ([`ScanError::Write`]): Fatal - the output tree is incomplete
///
/// # Examples
///
/// ```
/// use cs2ts_scanner::ScanError;
///
/// fn handle_error(err: ScanError) {
///     match err {
///         ScanError::Walk(e) => eprintln!("Walk error: {e}"),
///         ScanError::Read { path, .. } => eprintln!("Read error: {path}"),
///         ScanError::Generate { path, .. } => eprintln!("Generate error: {path}"),
///         ScanError::Write { path, .. } => eprintln!("Write error: {path}"),
///         ScanError::Config(msg) => eprintln!("Config error: {msg}"),
///         ScanError::NonUtf8Path(p) => eprintln!("Invalid path: {}", p.display()),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Failed to walk a directory.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Failed to read a source file.
    #[error("failed to read file {path}: {source}")]
    Read {
        /// The path of the file that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to translate a source file.
    #[error("failed to convert file {path}: {source}")]
    Generate {
        /// The path of the file that couldn't be converted.
        path: Utf8PathBuf,
        /// The underlying generation error.
        #[source]
        source: GenerateError,
    },

    /// Failed to write a generated file.
    #[error("failed to write file {path}: {source}")]
    Write {
        /// The output path that couldn't be written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid converter configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),
}

impl ScanError {
    /// Creates a new [`ScanError::Read`] error.
    #[inline]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ScanError::Generate`] error.
    #[inline]
    pub fn generate(path: impl Into<Utf8PathBuf>, source: impl Into<GenerateError>) -> Self {
        Self::Generate {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Creates a new [`ScanError::Write`] error.
    #[inline]
    pub fn write(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ScanError::Config`] error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if this error is recoverable (the batch can continue).
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Generate { .. })
    }

    /// Returns `true` if this error is fatal (the batch should stop).
    #[inline]
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::Read { path, .. } | Self::Generate { path, .. } | Self::Write { path, .. } => {
                Some(path)
            }
            Self::Walk(_) | Self::Config(_) | Self::NonUtf8Path(_) => None,
        }
    }
}
