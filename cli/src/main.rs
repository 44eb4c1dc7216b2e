//! # Ngen Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ngen CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Choosing the entry mode and turning its outcome into an exit code
//!
//! ## Examples
//!
//! ```bash
//! # Generate one component from arguments
//! ngen doc viewer
//!
//! # Read names from stdin until a blank line
//! ngen
//!
//! # Preview the kebab-case form of names without writing anything
//! printf 'DocViewer\nHTTPServer\n' | ngen --convert-only
//! ```
//!
//! Exit codes: `0` success, `1` stdin ended without a blank line, `2` a
//! component could not be generated, `3` any other argument-mode failure.
//!
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod common;
mod core;

use crate::commands::{entry, generate::Scaffolder};
use crate::core::config::GeneratorConfig;
use crate::core::error::ExitStatus;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "ngen",
    about = "Scaffold Angular-style component boilerplate",
    long_about = "Derives the class name, selector and file names for a component from a\n\
                  human-typed name, then writes the component files and updates index.ts.\n\
                  Without NAME, names are read from stdin until a blank line.",
    version
)]
struct Cli {
    /// Component name, e.g. `DocViewer` or `doc viewer`. All words are joined with spaces.
    #[arg(value_name = "NAME")]
    name: Vec<String>,

    /// Directory to create components in (defaults to the current directory).
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Compile the case-conversion patterns once and reuse them.
    #[arg(long, env = "NGEN_PRECOMPILE")]
    precompile: bool,

    /// Only print the kebab-case form of each stdin line; write nothing to disk.
    #[arg(long, conflicts_with = "name")]
    convert_only: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config = match GeneratorConfig::resolve(cli.output.as_deref(), cli.precompile) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            return ExitCode::from(ExitStatus::GenerationFailed.code());
        }
    };
    let scaffolder = Scaffolder::new(config.converter(), config.root);
    tracing::info!(
        "Generating components in '{}' ({:?} patterns)",
        scaffolder.root().display(),
        scaffolder.converter().mode()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = if cli.convert_only {
        entry::run_convert_only(scaffolder.converter(), io::stdin().lock(), &mut out)
    } else if cli.name.is_empty() {
        entry::run_interactive(&scaffolder, io::stdin().lock(), &mut out)
    } else {
        entry::run_with_arguments(&scaffolder, &cli.name, &mut out)
    };

    ExitCode::from(status.code())
}
