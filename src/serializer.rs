//! Fixed JSON encoding for snippet files.
//!
//! The artifact contract: top-level mapping in insertion order, field order
//! `prefix`, `body`, `description` per record, 4-space indentation, trailing
//! newline. Output must parse back into an equal [`SnippetFile`].

use crate::error::{Error, Result};
use crate::snippet::SnippetFile;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Four spaces, matching the artifact contract.
const INDENT: &[u8] = b"    ";

impl SnippetFile {
    /// Serializes this snippet file to its JSON artifact text.
    ///
    /// Entries appear in insertion order, never alphabetically re-sorted.
    /// A trailing newline terminates the text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if encoding fails.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::with_capacity(256);
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');

        String::from_utf8(buf).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Parses snippet file text back into a [`SnippetFile`].
    ///
    /// Inverse of [`SnippetFile::to_json_string`]; entry order in the text
    /// is preserved. Accepts text without the trailing newline, so
    /// hand-edited collections remain readable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the text is not a valid snippet
    /// file.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::from)
    }

    /// Serializes this snippet file and writes it to `dest`.
    ///
    /// Truncates an existing file, creates a missing one. The handle is
    /// scoped to this call and released on every exit path; content is
    /// flushed before success is reported.
    ///
    /// # Errors
    ///
    /// Returns a kind-classified error carrying `dest` when the destination
    /// cannot be created or written.
    pub fn write_to(&self, dest: &Path) -> Result<()> {
        let text = self.to_json_string()?;

        let mut file = File::create(dest).map_err(|e| Error::io(dest, e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| Error::io(dest, e))?;
        file.flush().map_err(|e| Error::io(dest, e))?;

        Ok(())
    }
}
