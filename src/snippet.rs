//! Snippet data model and record builder.
//!
//! A [`SnippetRecord`] is the four-field value written for one snippet; a
//! [`SnippetFile`] is the insertion-ordered key→record mapping that becomes
//! the destination artifact. The conversion operations only ever write a
//! single entry, but the type supports multiple entries so hand-merged
//! snippet collections stay representable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Placeholder description written into every generated record.
///
/// The description is a slot for the user to fill in by hand afterwards; it
/// is never computed from the source.
pub const DESCRIPTION_PLACEHOLDER: &str = "short description";

/// Derives a snippet key from a file or destination base name.
///
/// The final extension segment (text after the last `.`) is stripped, then
/// spaces are replaced with underscores. A name without an extension yields
/// an empty key; callers that need a usable key validate the name first.
///
/// The same direction applies to file-derived and destination-derived names,
/// so a given base name always maps to the same key.
///
/// # Examples
///
/// ```
/// use snipgen::key_from_name;
///
/// assert_eq!(key_from_name("hello.py"), "hello");
/// assert_eq!(key_from_name("my snippet.py"), "my_snippet");
/// assert_eq!(key_from_name("archive.tar.py"), "archive.tar");
/// ```
#[must_use]
pub fn key_from_name(name: &str) -> String {
    let stem = match name.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => "",
    };
    stem.replace(' ', "_")
}

/// Derives the human-readable trigger prefix from a key.
///
/// Underscores become spaces; this is the text a user types in their editor
/// to invoke the snippet.
#[must_use]
pub fn prefix_from_key(key: &str) -> String {
    key.replace('_', " ")
}

/// A single snippet record: trigger prefix, body lines and description.
///
/// The field declaration order fixes the serialized field order
/// (`prefix`, `body`, `description`). The record's key lives one level up,
/// as the map key in [`SnippetFile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    /// Trigger text a user types to invoke the snippet
    pub prefix: String,

    /// Source lines, verbatim and in order; may be empty
    pub body: Vec<String>,

    /// Placeholder description, never computed
    pub description: String,
}

impl SnippetRecord {
    /// Creates a record with the given prefix and body.
    ///
    /// The description is always [`DESCRIPTION_PLACEHOLDER`].
    #[must_use]
    pub fn new(prefix: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            body,
            description: DESCRIPTION_PLACEHOLDER.to_string(),
        }
    }

    /// Returns the number of body lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.body.len()
    }
}

/// An insertion-ordered mapping from snippet key to [`SnippetRecord`].
///
/// This is the top-level structure of the destination artifact. Iteration,
/// serialization and parsing all preserve insertion order; keys are never
/// re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetFile {
    entries: IndexMap<String, SnippetRecord>,
}

impl SnippetFile {
    /// Creates an empty snippet file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the single-entry snippet file for a source or destination name.
    ///
    /// This is the record builder: the key derives from `source_name` via
    /// [`key_from_name`], the prefix from the key via [`prefix_from_key`],
    /// the body is `lines` verbatim (no trimming, no reordering) and the
    /// description is the placeholder constant.
    ///
    /// Total over its inputs: empty `lines` and a name that is empty after
    /// stripping are accepted and produce an empty key and prefix.
    #[must_use]
    pub fn build(source_name: &str, lines: Vec<String>) -> Self {
        let key = key_from_name(source_name);
        let prefix = prefix_from_key(&key);

        let mut entries = IndexMap::with_capacity(1);
        entries.insert(key, SnippetRecord::new(prefix, lines));
        Self { entries }
    }

    /// Inserts a record under `key`, appending to the insertion order.
    ///
    /// Replaces (in place, keeping the original position) any existing
    /// record under the same key.
    pub fn insert(&mut self, key: impl Into<String>, record: SnippetRecord) {
        self.entries.insert(key.into(), record);
    }

    /// Returns the record stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SnippetRecord> {
        self.entries.get(key)
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SnippetRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the file holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
