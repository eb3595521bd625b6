//! Command implementations for digest and check modes

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use shasum_core::{VerifyOptions, compute_digest, present_path, verify_manifest_file};

use crate::error::{Result, exit};

/// Compute and print the digest of each named file as `<digest> <path>`
/// lines, the format the check mode reads back.
///
/// An unreadable file is reported on stderr and fatal only to that file; the
/// run continues and the exit code reflects the failure.
pub fn run_digest(files: &[String], binary: bool, out: &mut impl Write) -> Result<i32> {
    let mut failed = 0usize;

    for arg in files {
        match compute_digest(arg) {
            Ok(digest) => {
                let shown = present_path(arg, file_name_of(arg));
                if binary {
                    writeln!(out, "{digest} *{shown}")?;
                } else {
                    writeln!(out, "{digest} {shown}")?;
                }
            }
            Err(e) => {
                tracing::debug!(file = %arg, error = %e, "hashing failed");
                eprintln!("{}: {}", "error".red().bold(), e);
                failed += 1;
            }
        }
    }

    Ok(if failed > 0 { exit::HASH_FAILURE } else { exit::OK })
}

/// Verify every entry of the sums file, writing report lines to `out`.
pub fn run_check(sums_file: &Path, options: &VerifyOptions, out: &mut impl Write) -> Result<i32> {
    let report = verify_manifest_file(sums_file, options, out)?;
    tracing::debug!(
        checked = report.checked,
        mismatched = report.mismatched,
        "verification finished"
    );
    Ok(if report.success() { exit::OK } else { exit::MISMATCH })
}

/// Final path component of `arg`, tolerating either separator flavor.
fn file_name_of(arg: &str) -> &str {
    arg.rsplit(['/', '\\']).next().unwrap_or(arg)
}
