//! Error types and exit codes for the sha256sum CLI

use shasum_core::{ManifestError, VerifyError};

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Process exit codes, each distinct so callers can tell failure modes apart.
pub mod exit {
    pub const OK: i32 = 0;
    /// Miscellaneous I/O failure (e.g. writing to stdout).
    pub const FAILURE: i32 = 1;
    /// Argument errors; matches clap's own exit code for parse failures.
    pub const USAGE: i32 = 2;
    /// The sums file named by `-c` could not be opened.
    pub const MISSING_SUMS_FILE: i32 = 3;
    /// One or more recorded checksums did not match.
    pub const MISMATCH: i32 = 4;
    /// The sums file is malformed or uses an unsupported encoding.
    pub const MANIFEST_FORMAT: i32 = 5;
    /// A file could not be opened or read while hashing.
    pub const HASH_FAILURE: i32 = 6;
}

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from a verification run
    #[error(transparent)]
    Verify(#[from] VerifyError),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing usage error with a message
    #[error("{message}")]
    Usage { message: String },
}

impl CliError {
    /// Create a new usage error with the given message
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// The process exit code this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Verify(VerifyError::Manifest(ManifestError::Open { .. })) => {
                exit::MISSING_SUMS_FILE
            }
            Self::Verify(VerifyError::Manifest(_)) => exit::MANIFEST_FORMAT,
            Self::Verify(VerifyError::Hash(_)) => exit::HASH_FAILURE,
            Self::Verify(VerifyError::Report(_)) | Self::Io(_) => exit::FAILURE,
            Self::Usage { .. } => exit::USAGE,
        }
    }
}
