//! CLI entry point for the cs2ts translator.
//!
//! Translates C# classes, interfaces, structs, and enums into TypeScript
//! declarations.
//!
//! # Usage
//!
//! ```bash
//! cs2ts [OPTIONS] <COMMAND>
//!
//! # Convert one file, warnings on stderr
//! cs2ts convert Models/Order.cs --type-map "Money=@shared/money"
//!
//! # Convert stdin and print { output, warnings } as JSON
//! cat Order.cs | cs2ts convert --format json
//!
//! # Convert a whole project into a mirrored .ts tree
//! cs2ts batch ./Models --out ./generated --enums "Status:keyof"
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::{Read, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{WrapErr, eyre};
use cs2ts_core::GeneratorConfig;
use cs2ts_emitter::{Generated, format_warnings_header, generate_with_config};
use cs2ts_scanner::{BatchConverter, StatsSnapshot};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Translate C# data types into TypeScript declarations.
#[derive(Parser)]
#[command(name = "cs2ts", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Import path overrides, as `Name=path,Name=path`.
    #[arg(long, global = true, env = "CS2TS_TYPE_MAP", default_value = "")]
    type_map: String,

    /// Known enums, as `Name[:mode],Name[:mode]` (mode `keyof` is recognized).
    #[arg(long, global = true, env = "CS2TS_ENUMS", default_value = "")]
    enums: String,

    /// JSON configuration file; inline `--type-map`/`--enums` entries win.
    #[arg(long, global = true, env = "CS2TS_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert a single C# file (or stdin).
    Convert {
        /// Source file; reads stdin if omitted.
        file: Option<Utf8PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file (defaults to stdout).
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },

    /// Convert every C# file under a directory.
    Batch {
        /// Source directory.
        dir: Utf8PathBuf,

        /// Directory to write `.ts` files to, mirroring the source layout.
        #[arg(long)]
        out: Utf8PathBuf,

        /// Summary format.
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },
}

/// Output format for `convert`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// TypeScript only; warnings on stderr.
    Text,
    /// `{ "output": ..., "warnings": [...] }`.
    Json,
    /// An `X-Warnings` header line, a blank line, then the TypeScript.
    Raw,
}

/// Summary format for `batch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    /// Human-readable summary.
    Text,
    /// Statistics as JSON.
    Json,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects `RUST_LOG` if set. Otherwise uses `debug` with `--verbose`, or
/// `warn` by default. Logs go to stderr so stdout stays clean for output.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(level)
    });

    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Builds the generator configuration from the config file and flags.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any entry is malformed.
fn load_config(
    config_file: Option<&Utf8Path>,
    type_map: &str,
    enums: &str,
) -> color_eyre::Result<GeneratorConfig> {
    let base = match config_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read config file {path}"))?;
            GeneratorConfig::from_json_str(&json)
                .wrap_err_with(|| format!("Invalid config file {path}"))?
        }
        None => GeneratorConfig::default(),
    };

    let inline = GeneratorConfig::parse(type_map, enums)?;
    Ok(base.merge(inline))
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Converts one file or stdin.
///
/// # Errors
///
/// Returns an error if reading, parsing, or writing fails.
fn run_convert(
    config: &GeneratorConfig,
    file: Option<&Utf8Path>,
    format: OutputFormat,
    output: Option<&Utf8Path>,
) -> color_eyre::Result<()> {
    let source = match file {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {path}"))?,
        None => {
            let mut source = String::new();
            std::io::stdin().lock().read_to_string(&mut source)?;
            source
        }
    };

    let generated = generate_with_config(&source, config)?;
    info!(warnings = generated.warnings.len(), "converted source");

    if format == OutputFormat::Text && !generated.warnings.is_empty() {
        print_warnings(&generated.warnings);
    }

    let content = render(&generated, format)?;
    write_content(&content, output)
}

/// Converts a directory tree.
///
/// # Errors
///
/// Returns an error if the directory cannot be walked, output cannot be
/// written, or any file failed to convert.
fn run_batch(
    config: GeneratorConfig,
    dir: &Utf8Path,
    out: &Utf8Path,
    format: SummaryFormat,
) -> color_eyre::Result<()> {
    info!(dir = %dir, out = %out, "starting batch");

    let converter = BatchConverter::new(config);
    let result = converter.convert_dir(dir)?;
    converter.write_outputs(&result.outputs, dir, out)?;

    match format {
        SummaryFormat::Text => {
            print_stats_summary(&result.stats);
            let mut warnings: Vec<String> = Vec::new();
            for output in &result.outputs {
                warnings.extend(
                    output
                        .generated
                        .warnings
                        .iter()
                        .map(|w| format!("{}: {w}", output.path)),
                );
            }
            print_warnings(&warnings);
        }
        SummaryFormat::Json => {
            let json = serde_json::to_string_pretty(&result.stats)
                .map_err(|e| eyre!("Failed to serialize JSON: {}", e))?;
            write_content(&format!("{json}\n"), None)?;
        }
    }

    if !result.errors.is_empty() {
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        writeln!(handle)?;
        writeln!(handle, "Errors ({}):", result.errors.len())?;
        for (path, error) in &result.errors {
            writeln!(handle, "  {path} - {error}")?;
        }
        return Err(eyre!("{} file(s) failed to convert", result.errors.len()));
    }

    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Renders a conversion result in the requested format.
fn render(generated: &Generated, format: OutputFormat) -> color_eyre::Result<String> {
    match format {
        OutputFormat::Text => Ok(generated.output.clone()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(generated)
                .map_err(|e| eyre!("Failed to serialize JSON: {}", e))?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Raw => Ok(format!(
            "X-Warnings: {}\n\n{}",
            format_warnings_header(&generated.warnings),
            generated.output
        )),
    }
}

/// Writes `content` to `output`, or stdout.
fn write_content(content: &str, output: Option<&Utf8Path>) -> color_eyre::Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content).wrap_err_with(|| format!("Failed to write {path}"))?;
        info!(path = %path, "output written");
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{content}")?;
    }
    Ok(())
}

/// Prints warnings to stderr, one per line.
fn print_warnings(warnings: &[String]) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    for warning in warnings {
        let _ = writeln!(handle, "warning: {warning}");
    }
}

/// Prints a summary of batch statistics.
fn print_stats_summary(stats: &StatsSnapshot) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let _ = writeln!(handle, "Conversion Summary");
    let _ = writeln!(handle, "==================");
    let _ = writeln!(handle);
    let _ = writeln!(handle, "Files processed:  {}", stats.total);
    let _ = writeln!(handle, "  Clean:          {}", stats.clean());
    let _ = writeln!(handle, "  With warnings:  {}", stats.with_warnings);
    let _ = writeln!(handle, "  Errors:         {}", stats.errors);
    let _ = writeln!(handle, "Warnings:         {}", stats.warnings);
    let _ = writeln!(handle, "Success rate:     {:.1}%", stats.success_rate());
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    let config = load_config(cli.config.as_deref(), &cli.type_map, &cli.enums)?;

    match cli.command {
        Commands::Convert {
            file,
            format,
            output,
        } => run_convert(&config, file.as_deref(), format, output.as_deref()),
        Commands::Batch { dir, out, format } => run_batch(config, &dir, &out, format),
    }
}
