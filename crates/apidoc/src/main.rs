//! apidoc - Build API documentation models from reflection snapshots
//!
//! apidoc reads the JSON snapshots emitted by a source-reflection engine,
//! builds the normalized documentation model and reports what it found,
//! including elements that have no doc-comment.

mod config;
mod output;

use apidoc_core::{ApiModel, ReflectionSnapshot, extract_first_sentence};
use config::{Config, DEFAULT_CONFIG_PATH};
use eyre::{Result, WrapErr};
use figue as args;
use output::{OutputFormat, render_model, render_warnings};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Debug, facet::Facet)]
struct Args {
    /// Subcommand to run
    #[facet(args::subcommand)]
    command: Command,

    /// Path to config file (default: .config/apidoc/config.yaml)
    #[facet(args::named, args::short = 'c', default)]
    config: Option<PathBuf>,

    /// Output format: text, json
    #[facet(args::named, args::short = 'f', default)]
    format: Option<String>,

    /// Exit with an error if any warning was recorded
    #[facet(args::named, default)]
    strict: bool,

    /// Show verbose output including every member
    #[facet(args::named, args::short = 'v', default)]
    verbose: bool,
}

/// Subcommands
#[derive(Debug, facet::Facet)]
#[repr(u8)]
enum Command {
    /// Build the documentation model from reflection snapshots
    Build {
        /// Snapshot JSON files to load
        #[facet(args::positional)]
        snapshots: Vec<PathBuf>,
    },
    /// Print the first sentence of a text
    Summary {
        /// Text to summarize
        #[facet(args::positional)]
        text: String,
    },
}

fn main() -> Result<()> {
    let args: Args = figue::from_std_args().wrap_err("Failed to parse command line arguments")?;

    init_tracing(args.verbose);

    match args.command {
        Command::Build { ref snapshots } => {
            run_build_command(snapshots, args.config, args.format, args.strict, args.verbose)
        }
        Command::Summary { ref text } => {
            println!("{}", extract_first_sentence(text));
            Ok(())
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "apidoc=debug,apidoc_core=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_build_command(
    snapshots: &[PathBuf],
    config_path: Option<PathBuf>,
    format: Option<String>,
    strict: bool,
    verbose: bool,
) -> Result<()> {
    if snapshots.is_empty() {
        eyre::bail!("No snapshot files specified. Usage: apidoc build <snapshot.json>...");
    }

    let config_path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = Config::load(&config_path)?;
    debug!(?config, "loaded config");

    let format_name = format.or_else(|| config.format.clone());
    let format = match format_name.as_deref() {
        Some(name) => OutputFormat::from_str(name)
            .ok_or_else(|| eyre::eyre!("Unknown output format: {}", name))?,
        None => OutputFormat::default(),
    };
    let strict = strict || config.strict;

    let mut snapshot = ReflectionSnapshot::default();
    for path in snapshots {
        info!(path = %path.display(), "loading snapshot");
        snapshot.extend(ReflectionSnapshot::load(path)?);
    }

    let mut model = ApiModel::build(&snapshot.classes)
        .wrap_err("Failed to build documentation model")?;
    model.update_references();

    println!("{}", render_model(&model, format, verbose));

    let warnings = &model.diagnostics().warnings;
    if format == OutputFormat::Text && config.report_warnings() && !warnings.is_empty() {
        eprint!("{}", render_warnings(warnings));
    }

    if strict && !warnings.is_empty() {
        eyre::bail!(
            "{} warning(s) recorded in strict mode",
            warnings.len().to_string().red()
        );
    }

    Ok(())
}
