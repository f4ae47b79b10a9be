//! Batch conversion of C# source trees to TypeScript.
//!
//! # Overview
//!
//! - [`FileWalker`]: Directory traversal respecting `.gitignore` patterns
//! - [`BatchConverter`]: Parallel conversion with rayon, one parser per
//!   worker thread and one generation session per file
//! - [`ConvertStats`]: Atomic statistics for progress reporting
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use cs2ts_core::GeneratorConfig;
//! use cs2ts_scanner::BatchConverter;
//!
//! let config = GeneratorConfig::parse("Money=@shared/money", "Status:keyof")?;
//! let converter = BatchConverter::new(config);
//!
//! let src = Utf8Path::new("./Models");
//! let result = converter.convert_dir(src)?;
//! converter.write_outputs(&result.outputs, src, Utf8Path::new("./generated"))?;
//!
//! println!(
//!     "{} converted, {} warnings, {} errors",
//!     result.stats.converted, result.stats.warnings, result.stats.errors
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! BatchConverter
//!     │
//!     ├── FileWalker (collect paths)
//!     │       └── WalkBuilder (ignore crate)
//!     │
//!     ├── par_iter().map_init (rayon)
//!     │       ├── CsParser (per thread)
//!     │       └── generate_with_parser (per file)
//!     │
//!     └── ConvertStats (atomic counters)
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod converter;
mod error;
mod stats;
mod walker;

pub use converter::{BatchConverter, BatchResult, FileOutput, output_path};
pub use error::ScanError;
pub use stats::{ConvertStats, StatsSnapshot};
pub use walker::FileWalker;
