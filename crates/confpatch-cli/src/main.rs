//! `confpatch` CLI — update, reformat, and validate JSON configuration files.
//!
//! ## Usage
//!
//! ```sh
//! # Set a value (stdin → stdout)
//! echo '{"server":{"port":80}}' | confpatch set server.port 8080
//!
//! # Edit a file in place, keeping a timestamped backup beside it
//! confpatch set -i appsettings.json --in-place --backup Logging.LogLevel.Default Debug
//!
//! # Preview an edit without writing anything
//! confpatch set -i appsettings.json --in-place --dry-run servers[1].enabled false
//!
//! # Rewrite a file in canonical form
//! confpatch fmt -i appsettings.json -o appsettings.pretty.json
//!
//! # Check syntax
//! confpatch validate -i appsettings.json
//! ```
//!
//! Logging goes to stderr and is controlled by `CONFPATCH_LOG` (an
//! `EnvFilter` directive, default `warn`) or `--verbose`.

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use confpatch_core::{ErrorKind, PatchError};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CONFPATCH_LOG";

#[derive(Parser)]
#[command(
    name = "confpatch",
    version,
    about = "Update values in JSON configuration files by path"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every step to stderr (overrides CONFPATCH_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// How errors are reported on stderr
    #[arg(long, value_enum, default_value_t = ErrorFormat::Text, global = true)]
    error_format: ErrorFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ErrorFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the value at a path, e.g. `servers[0].port`
    Set {
        /// Dotted path; use `name[N]` for array elements
        path: String,
        /// New value; JSON text is used as-is, otherwise the type is inferred
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<String>,
        /// Write the result back to the input file
        #[arg(long, requires = "input")]
        in_place: bool,
        /// Copy the input file to `<name>.backup.<timestamp><ext>` before writing
        #[arg(long, requires = "in_place")]
        backup: bool,
        /// Print the result to stdout and write nothing
        #[arg(long)]
        dry_run: bool,
    },
    /// Rewrite a JSON document in canonical pretty-printed form
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check that a document is well-formed JSON
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// Machine-readable error for `--error-format json`.
#[derive(Serialize)]
struct ErrorReport<'a> {
    kind: Option<ErrorKind>,
    path: Option<&'a str>,
    segment: Option<usize>,
    message: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, cli.error_format);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Set {
            path,
            value,
            input,
            output,
            in_place,
            backup,
            dry_run,
        } => {
            let document = read_input(input.as_deref())?;
            let updated = confpatch_core::mutate_document(&document, &path, &value)
                .with_context(|| format!("Failed to update '{}'", path))?;

            if dry_run {
                info!(path = %path, "dry run, nothing written");
                print!("{}", updated);
                return Ok(());
            }

            let target = if in_place {
                input.as_deref()
            } else {
                output.as_deref()
            };

            if backup {
                // clap guarantees --backup implies --in-place, which implies --input.
                if let Some(file) = input.as_deref() {
                    let backup_path = backup_file(Path::new(file))?;
                    eprintln!("Backup created: {}", backup_path.display());
                }
            }

            write_output(target, &updated)?;
            if let Some(file) = target {
                eprintln!("Updated '{}' in {}", path, file);
            }
        }
        Commands::Fmt { input, output } => {
            let document = read_input(input.as_deref())?;
            let pretty = confpatch_core::canonicalize(&document)
                .context("Failed to reformat JSON document")?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Validate { input } => {
            let name = input.as_deref().unwrap_or("<stdin>");
            let document = read_input(input.as_deref())?;
            confpatch_core::validate(&document)
                .with_context(|| format!("✗ {} has JSON syntax errors", name))?;
            println!("✓ {} is valid JSON", name);
        }
    }

    Ok(())
}

fn report_error(err: &anyhow::Error, format: ErrorFormat) {
    match format {
        ErrorFormat::Text => eprintln!("Error: {:#}", err),
        ErrorFormat::Json => {
            let patch = err.downcast_ref::<PatchError>();
            let report = ErrorReport {
                kind: patch.map(PatchError::kind),
                path: patch.and_then(PatchError::path),
                segment: patch.and_then(PatchError::segment),
                message: format!("{:#}", err),
            };
            match serde_json::to_string(&report) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("Error: {:#}", err),
            }
        }
    }
}

/// Copy `file` to `<stem>.backup.<YYYYmmdd_HHMMSS><.ext>` in the same directory.
fn backup_file(file: &Path) -> Result<PathBuf> {
    let stem = file
        .file_stem()
        .with_context(|| format!("Cannot back up {}: no file name", file.display()))?
        .to_string_lossy();
    let extension = file
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_path =
        file.with_file_name(format!("{}.backup.{}{}", stem, timestamp, extension));

    if backup_path.exists() {
        bail!("Backup already exists: {}", backup_path.display());
    }
    std::fs::copy(file, &backup_path).with_context(|| {
        format!(
            "Failed to back up {} to {}",
            file.display(),
            backup_path.display()
        )
    })?;
    debug!(backup = %backup_path.display(), "backup written");
    Ok(backup_path)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            if !Path::new(path).is_file() {
                bail!("Config file not found: {}", path);
            }
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path))?;
            debug!(file = path, bytes = text.len(), "read document");
            Ok(text)
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            debug!(bytes = buf.len(), "read document from stdin");
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
            debug!(file = path, bytes = content.len(), "wrote document");
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
