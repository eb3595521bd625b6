//! Checksum manifest parsing and verification for sha256sum
//!
//! Provides streaming SHA-256 digest computation, sums-file reading, and
//! the verification engine that compares recorded digests against files.

pub mod display;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod verify;

pub use display::present_path;
pub use error::{HashError, ManifestError, ParseLineError, Result, VerifyError};
pub use hash::{DIGEST_HEX_LEN, compute_digest};
pub use manifest::{Manifest, ManifestEntry, read_manifest};
pub use verify::{VerifyOptions, VerifyReport, verify_manifest, verify_manifest_file};
