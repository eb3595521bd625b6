//! Sums-file reading: byte-stream line splitting and entry parsing.
//!
//! A sums file is 8-bit line-oriented text, `\n` or `\r\n` terminated, one
//! `<digest> <path>` pairing per line. The reader is a single-pass state
//! machine over a bounded buffer, so lines reassemble correctly no matter
//! where read-chunk boundaries fall.

use std::io::Read;

use crate::error::{ManifestError, ParseLineError};
use crate::hash::{BINARY_MARKER, DIGEST_HEX_LEN, READ_BUF_LEN};

/// Hard upper bound on one manifest line. Exceeding it is an error, never a
/// truncation; a truncated line would silently hash the wrong path.
pub const MAX_LINE_LEN: usize = 1024;

/// One recorded checksum pairing from a sums file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Exactly 64 lowercase hex characters.
    pub digest: String,
    /// Path exactly as recorded, including any leading `*` marker; the
    /// marker is stripped at file-open time, not here.
    pub path: String,
    /// Whether the path carries the binary-mode marker.
    pub binary: bool,
}

/// A malformed line skipped in lenient mode, kept for warning output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: u64,
    pub reason: ParseLineError,
}

/// Parsed sums file. Entry order is file order and is significant for the
/// verification report.
#[derive(Debug, Default)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
    pub skipped: Vec<SkippedLine>,
}

/// Split one manifest line into a digest token and a path token.
///
/// The digest is everything before the first run of spaces; the remainder is
/// the path (paths may contain spaces). Uppercase hex is accepted and
/// normalized to lowercase.
///
/// # Errors
///
/// [`ParseLineError::MissingHashToken`] when the line starts with a space,
/// [`ParseLineError::InvalidHashLength`] when the digest token is not exactly
/// 64 characters, [`ParseLineError::MissingFileToken`] when nothing follows
/// the digest.
pub fn parse_line(line: u64, text: &str) -> Result<ManifestEntry, ParseLineError> {
    let (digest, path) = match text.find(' ') {
        Some(i) => (&text[..i], text[i..].trim_start_matches(' ')),
        None => (text, ""),
    };

    if digest.is_empty() {
        return Err(ParseLineError::MissingHashToken { line });
    }
    let len = digest.chars().count();
    if len != DIGEST_HEX_LEN {
        return Err(ParseLineError::InvalidHashLength { line, len });
    }
    if path.is_empty() {
        return Err(ParseLineError::MissingFileToken { line });
    }

    Ok(ManifestEntry {
        digest: digest.to_ascii_lowercase(),
        binary: path.starts_with(BINARY_MARKER),
        path: path.to_string(),
    })
}

/// Read a sums file byte stream into an ordered [`Manifest`].
///
/// Handles `\n` and `\r\n` line endings, a final line without a terminator,
/// and lines straddling read-buffer boundaries. Empty lines are skipped.
/// With `lenient`, malformed lines are collected in [`Manifest::skipped`]
/// instead of aborting the read.
///
/// # Errors
///
/// [`ManifestError::UnsupportedEncoding`] for a UTF-16 byte-order mark at
/// stream start, [`ManifestError::LineTooLong`] when a line overruns
/// [`MAX_LINE_LEN`], [`ManifestError::InvalidUtf8`] for undecodable lines,
/// and [`ManifestError::Parse`] for malformed lines in strict mode.
pub fn read_manifest<R: Read>(mut input: R, lenient: bool) -> Result<Manifest, ManifestError> {
    let mut scanner = LineScanner::new(lenient);
    // The first two bytes are held back until the encoding probe can run,
    // so BOM detection does not depend on how the reader chunks its data.
    let mut head: Vec<u8> = Vec::with_capacity(2);
    let mut buf = [0u8; READ_BUF_LEN];

    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for &byte in &buf[..n] {
            if head.len() < 2 {
                head.push(byte);
                if head.len() == 2 {
                    if matches!(head[..], [0xFF, 0xFE] | [0xFE, 0xFF]) {
                        return Err(ManifestError::UnsupportedEncoding);
                    }
                    scanner.push(head[0])?;
                    scanner.push(head[1])?;
                }
                continue;
            }
            scanner.push(byte)?;
        }
    }

    // Streams shorter than the encoding probe flush here.
    if head.len() < 2 {
        for &byte in &head {
            scanner.push(byte)?;
        }
    }

    scanner.finish()
}

/// Per-byte line accumulator with a hard length bound.
struct LineScanner {
    lenient: bool,
    line_buf: Vec<u8>,
    completed: u64,
    manifest: Manifest,
}

impl LineScanner {
    fn new(lenient: bool) -> Self {
        Self {
            lenient,
            line_buf: Vec::with_capacity(MAX_LINE_LEN),
            completed: 0,
            manifest: Manifest::default(),
        }
    }

    fn push(&mut self, byte: u8) -> Result<(), ManifestError> {
        if byte == b'\n' {
            self.completed += 1;
            self.flush_line()
        } else if self.line_buf.len() == MAX_LINE_LEN {
            Err(ManifestError::LineTooLong {
                line: self.completed + 1,
                limit: MAX_LINE_LEN,
            })
        } else {
            self.line_buf.push(byte);
            Ok(())
        }
    }

    /// The final line does not need a trailing newline to count.
    fn finish(mut self) -> Result<Manifest, ManifestError> {
        if !self.line_buf.is_empty() {
            self.completed += 1;
            self.flush_line()?;
        }
        Ok(self.manifest)
    }

    fn flush_line(&mut self) -> Result<(), ManifestError> {
        let line = self.completed;
        if self.line_buf.last() == Some(&b'\r') {
            self.line_buf.pop();
        }

        let text = std::str::from_utf8(&self.line_buf)
            .map_err(|_| ManifestError::InvalidUtf8 { line })?;

        if text.is_empty() {
            tracing::debug!(line, "skipping empty manifest line");
        } else {
            match parse_line(line, text) {
                Ok(entry) => self.manifest.entries.push(entry),
                Err(reason) if self.lenient => {
                    tracing::debug!(line, %reason, "skipping malformed manifest line");
                    self.manifest.skipped.push(SkippedLine { line, reason });
                }
                Err(reason) => return Err(reason.into()),
            }
        }

        self.line_buf.clear();
        Ok(())
    }
}
