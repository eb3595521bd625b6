//! Error types for shasum-core

use std::path::PathBuf;

/// Result type for verification runs
pub type Result<T> = std::result::Result<T, VerifyError>;

/// Errors from streaming digest computation.
///
/// Open and read failures stay distinct because the caller's exit code and
/// message depend on which one occurred.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HashError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

/// Per-line manifest parse failures. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseLineError {
    #[error("line {line}: missing checksum token")]
    MissingHashToken { line: u64 },

    #[error("line {line}: invalid checksum length, expected 64, got {len}")]
    InvalidHashLength { line: u64, len: usize },

    #[error("line {line}: missing file name after checksum")]
    MissingFileToken { line: u64 },
}

impl ParseLineError {
    /// The 1-based manifest line the failure occurred on.
    pub fn line(&self) -> u64 {
        match self {
            Self::MissingHashToken { line }
            | Self::InvalidHashLength { line, .. }
            | Self::MissingFileToken { line } => *line,
        }
    }
}

/// Errors reading a sums file into manifest entries
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to open sums file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sums file is UTF-16 encoded; only 8-bit encodings are supported")]
    UnsupportedEncoding,

    #[error("line {line}: exceeds the {limit}-byte line limit")]
    LineTooLong { line: u64, limit: usize },

    #[error("line {line}: not valid UTF-8")]
    InvalidUtf8 { line: u64 },

    #[error("failed to read sums file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseLineError),
}

impl ManifestError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

/// Errors that abort a verification run.
///
/// Digest mismatches are not errors; they are aggregated in
/// [`crate::verify::VerifyReport`] and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}
