//! Manifest verification: digest recomputation and result aggregation.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{ManifestError, Result};
use crate::hash;
use crate::manifest;

/// Output gating for a verification run. These flags never change the
/// comparison logic, only which lines are written.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    /// Suppress per-file `OK` lines.
    pub quiet: bool,
    /// Suppress all textual output; only the result speaks.
    pub status_only: bool,
    /// Downgrade malformed manifest lines to numbered warnings instead of
    /// aborting the run.
    pub warn: bool,
}

/// Aggregate result of one verification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Entries whose digest was recomputed and compared.
    pub checked: usize,
    /// Entries whose recomputed digest differed from the recorded one.
    pub mismatched: usize,
}

impl VerifyReport {
    pub fn success(&self) -> bool {
        self.mismatched == 0
    }
}

/// Verify every entry of the sums file at `path`, writing report lines to
/// `out`. See [`verify_manifest`].
pub fn verify_manifest_file(
    path: &Path,
    options: &VerifyOptions,
    out: &mut impl Write,
) -> Result<VerifyReport> {
    let file = File::open(path).map_err(|e| ManifestError::open(path, e))?;
    verify_manifest(file, options, out)
}

/// Verify every entry of a sums-file byte stream.
///
/// The manifest is read in full first; any read or parse error aborts before
/// any file is hashed. Entries are then verified in manifest order. A digest
/// mismatch is recorded and the run continues, so every failing file is
/// reported; a hash error (an unreadable referenced file) aborts the whole
/// run immediately.
///
/// # Errors
///
/// [`crate::VerifyError::Manifest`] for sums-file read or parse failures,
/// [`crate::VerifyError::Hash`] when a referenced file cannot be opened or
/// read, [`crate::VerifyError::Report`] when writing to `out` fails.
pub fn verify_manifest(
    input: impl Read,
    options: &VerifyOptions,
    out: &mut impl Write,
) -> Result<VerifyReport> {
    let manifest = manifest::read_manifest(input, options.warn)?;

    if !options.status_only {
        for skip in &manifest.skipped {
            writeln!(out, "{}", skip.reason)?;
        }
    }

    let mut report = VerifyReport::default();
    for entry in &manifest.entries {
        let computed = hash::compute_digest(&entry.path)?;
        report.checked += 1;

        if computed == entry.digest {
            tracing::debug!(path = %entry.path, "checksum match");
            if !options.quiet && !options.status_only {
                writeln!(out, "{}: OK", entry.path)?;
            }
        } else {
            tracing::debug!(
                path = %entry.path,
                expected = %entry.digest,
                actual = %computed,
                "checksum mismatch"
            );
            report.mismatched += 1;
            if !options.status_only {
                writeln!(out, "{}: FAILED", entry.path)?;
            }
        }
    }

    if report.mismatched > 0 && !options.status_only {
        writeln!(out, "checksum failed")?;
    }

    Ok(report)
}
