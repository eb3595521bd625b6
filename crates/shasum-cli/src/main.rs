//! sha256sum CLI
//!
//! Computes SHA-256 digests of files and checks files against a sums file.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use shasum_core::VerifyOptions;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.check {
        Some(sums_file) => {
            let options = VerifyOptions {
                quiet: cli.quiet,
                status_only: cli.status,
                warn: cli.warn,
            };
            commands::run_check(&sums_file, &options, &mut out)
        }
        None if cli.files.is_empty() => Err(CliError::usage(
            "missing parameter: name at least one file or pass -c <sums-file>",
        )),
        None => commands::run_digest(&cli.files, cli.binary, &mut out),
    }
}
