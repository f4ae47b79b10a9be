//! Parallel conversion of C# files using rayon.
//!
//! Uses the "collect-then-parallelize" pattern:
//!
//! 1. Paths are collected first by [`FileWalker`](crate::FileWalker)
//! 2. [`BatchConverter`] converts them in parallel with `rayon::par_iter()`
//! 3. Each worker thread owns one [`CsParser`], created via `map_init()`
//! 4. Each file gets a fresh generation session; nothing is shared between files

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use cs2ts_core::GeneratorConfig;
use cs2ts_emitter::{GenerateError, Generated, generate_with_parser};
use cs2ts_parser::CsParser;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::ScanError;
use crate::stats::{ConvertStats, StatsSnapshot};
use crate::walker::FileWalker;

/// Extension of generated files.
const TYPESCRIPT_EXTENSION: &str = "ts";

/// One converted source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutput {
    /// The C# file that was converted.
    pub path: Utf8PathBuf,
    /// Its TypeScript output and warnings.
    pub generated: Generated,
}

/// Result of converting a directory.
#[derive(Debug)]
pub struct BatchResult {
    /// Successfully converted files, in path order.
    pub outputs: Vec<FileOutput>,
    /// Files that failed to read or convert.
    pub errors: Vec<(Utf8PathBuf, ScanError)>,
    /// Statistics for the batch.
    pub stats: StatsSnapshot,
}

/// Converts many C# files with one configuration.
///
/// # Thread Safety
///
/// `BatchConverter` is `Send + Sync`. Parsers are created per worker thread
/// and generation state per file, so no mutable state is shared.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use cs2ts_core::GeneratorConfig;
/// use cs2ts_scanner::BatchConverter;
///
/// let converter = BatchConverter::new(GeneratorConfig::default());
/// let result = converter.convert_dir(Utf8Path::new("./Models"))?;
/// converter.write_outputs(&result.outputs, Utf8Path::new("./Models"), Utf8Path::new("./ts"))?;
/// # Ok::<(), cs2ts_scanner::ScanError>(())
/// ```
#[derive(Debug, Default)]
pub struct BatchConverter {
    config: GeneratorConfig,
    stats: ConvertStats,
}

impl BatchConverter {
    /// Creates a converter for `config`.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            stats: ConvertStats::new(),
        }
    }

    /// The configuration every file is converted with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Current statistics.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Walks `root` and converts every C# file found.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] or [`ScanError::Walk`] if the directory
    /// cannot be walked. Per-file failures are collected in
    /// [`BatchResult::errors`] instead.
    pub fn convert_dir(&self, root: &Utf8Path) -> Result<BatchResult, ScanError> {
        info!(root = %root, "starting batch conversion");
        self.stats.reset();

        let paths = FileWalker::new(root)?.collect_paths()?;
        info!(count = paths.len(), "collected C# files");

        let mut outputs = Vec::new();
        let mut errors = Vec::new();
        for (path, result) in self.convert_files(&paths) {
            match result {
                Ok(output) => outputs.push(output),
                Err(e) => errors.push((path, e)),
            }
        }

        let stats = self.stats.snapshot();
        info!(
            total = stats.total,
            converted = stats.converted,
            warnings = stats.warnings,
            errors = stats.errors,
            "batch conversion completed"
        );

        Ok(BatchResult {
            outputs,
            errors,
            stats,
        })
    }

    /// Converts `paths` in parallel.
    ///
    /// Returns one `(path, result)` pair per input, in input order. A failing
    /// file does not affect the others.
    #[must_use]
    pub fn convert_files(
        &self,
        paths: &[Utf8PathBuf],
    ) -> Vec<(Utf8PathBuf, Result<FileOutput, ScanError>)> {
        paths
            .par_iter()
            .map_init(
                || CsParser::new().ok(),
                |parser, path| {
                    let result = self.convert_file(parser.as_mut(), path);
                    match &result {
                        Ok(output) => {
                            self.stats.record_converted(output.generated.warnings.len());
                            debug!(
                                path = %path,
                                warnings = output.generated.warnings.len(),
                                "converted file"
                            );
                        }
                        Err(e) => {
                            self.stats.record_error();
                            warn!(path = %path, error = %e, "failed to convert file");
                        }
                    }
                    (path.clone(), result)
                },
            )
            .collect()
    }

    /// Converts a single file with the given parser.
    fn convert_file(
        &self,
        parser: Option<&mut CsParser>,
        path: &Utf8Path,
    ) -> Result<FileOutput, ScanError> {
        let parser = parser.ok_or_else(|| {
            ScanError::generate(path, cs2ts_parser::ParseError::LanguageInit)
        })?;
        let source = fs::read_to_string(path).map_err(|e| ScanError::read(path, e))?;
        let generated = generate_with_parser(parser, &source, &self.config)
            .map_err(|e: GenerateError| ScanError::generate(path, e))?;

        Ok(FileOutput {
            path: path.to_owned(),
            generated,
        })
    }

    /// Writes each output below `out_root`, mirroring its location below
    /// `src_root` with a `.ts` extension.
    ///
    /// Files with empty output are skipped. Returns the paths written.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Write`] if a directory or file cannot be written.
    pub fn write_outputs(
        &self,
        outputs: &[FileOutput],
        src_root: &Utf8Path,
        out_root: &Utf8Path,
    ) -> Result<Vec<Utf8PathBuf>, ScanError> {
        let mut written = Vec::with_capacity(outputs.len());

        for output in outputs {
            if output.generated.output.is_empty() {
                debug!(path = %output.path, "nothing to write");
                continue;
            }

            let target = output_path(&output.path, src_root, out_root);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| ScanError::write(parent, e))?;
            }
            fs::write(&target, &output.generated.output)
                .map_err(|e| ScanError::write(&target, e))?;
            written.push(target);
        }

        info!(count = written.len(), out = %out_root, "wrote TypeScript files");
        Ok(written)
    }
}

/// Maps `src_root/a/B.cs` to `out_root/a/B.ts`.
///
/// A source outside `src_root` lands directly in `out_root`.
#[must_use]
pub fn output_path(source: &Utf8Path, src_root: &Utf8Path, out_root: &Utf8Path) -> Utf8PathBuf {
    let relative = source
        .strip_prefix(src_root)
        .map_or_else(|_| Utf8Path::new(source.file_name().unwrap_or_default()), |p| p);
    out_root.join(relative).with_extension(TYPESCRIPT_EXTENSION)
}
