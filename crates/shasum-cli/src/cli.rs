//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Compute and check SHA-256 message digests
#[derive(Parser, Debug)]
#[command(name = "sha256sum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files to digest
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Read SHA-256 sums from FILE and check them
    #[arg(short = 'c', long = "check", value_name = "FILE")]
    pub check: Option<PathBuf>,

    /// Don't print OK for each successfully verified file
    #[arg(long, requires = "check")]
    pub quiet: bool,

    /// Don't output anything; the exit code shows success
    #[arg(long, requires = "check")]
    pub status: bool,

    /// Warn about improperly formatted checksum lines instead of failing
    #[arg(short = 'w', long, requires = "check")]
    pub warn: bool,

    /// Read files in binary mode and mark printed paths with '*'
    #[arg(short = 'b', long, conflicts_with = "check")]
    pub binary: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}
