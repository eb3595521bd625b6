//! Streaming SHA-256 digest computation for named files.
//!
//! Files are fed through the hasher in fixed-size chunks so memory use stays
//! bounded regardless of file size.

use std::fs::File;
use std::io::Read;

use sha2::{Digest, Sha256};

use crate::error::HashError;

/// Read buffer size; digesting uses O(this), never O(file size).
pub const READ_BUF_LEN: usize = 1024;

/// Hex length of a SHA-256 digest (two characters per byte)
pub const DIGEST_HEX_LEN: usize = 64;

/// Manifest binary-mode marker, stripped from paths before opening
pub const BINARY_MARKER: char = '*';

/// Compute the lowercase hex SHA-256 digest of the file at `path`.
///
/// A leading `*` marks binary-mode hashing in sums files and is not part of
/// the filename; it is stripped before the open.
///
/// # Errors
///
/// [`HashError::Open`] if the file cannot be opened, [`HashError::Read`] if
/// a read fails mid-stream.
pub fn compute_digest(path: &str) -> Result<String, HashError> {
    let name = path.strip_prefix(BINARY_MARKER).unwrap_or(path);
    let mut file = File::open(name).map_err(|e| HashError::open(name, e))?;

    let mut hasher = Sha256::new();
    let mut buf = [0u8; READ_BUF_LEN];
    loop {
        let n = file.read(&mut buf).map_err(|e| HashError::read(name, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
