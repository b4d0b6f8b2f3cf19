//! Source text acquisition.
//!
//! Reads source files into line sequences with `readlines` semantics and
//! provides the binary sniff used when expanding directories.

use crate::error::{Error, Result};
use memchr::memchr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::trace;

/// Splits text into lines, keeping each line's trailing newline.
///
/// Matches `readlines` semantics: every element ends with `\n` except
/// possibly the last, a `\r` before a `\n` stays inside its line, and empty
/// input yields no lines at all.
///
/// # Examples
///
/// ```
/// use snipgen::split_lines;
///
/// assert_eq!(split_lines("a\nb\n"), vec!["a\n", "b\n"]);
/// assert_eq!(split_lines("a\nb"), vec!["a\n", "b"]);
/// assert!(split_lines("").is_empty());
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}

/// Reads the file at `path` as UTF-8 text and splits it into lines.
///
/// Line terminators are preserved as found in the source. Errors are
/// classified by kind (`NotFound`, `PermissionDenied`, `InvalidUtf8`, `Io`).
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>> {
    trace!("Reading source file: {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(split_lines(&text))
}

/// Determines if a file is likely binary by checking a bounded prefix for
/// null bytes.
///
/// Used during directory expansion to skip files that would only fail the
/// UTF-8 read later. An empty file is not binary.
pub(crate) fn is_likely_binary(path: &Path) -> Result<bool> {
    const SNIFF_SIZE: usize = 8192;

    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::with_capacity(SNIFF_SIZE, file);
    let mut buffer = [0u8; SNIFF_SIZE];

    let bytes_read = reader.read(&mut buffer).map_err(|e| Error::io(path, e))?;
    if bytes_read == 0 {
        return Ok(false);
    }

    Ok(memchr(0, &buffer[..bytes_read]).is_some())
}
