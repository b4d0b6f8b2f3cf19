//! The two conversion operations: source file → snippet and buffer → snippet.
//!
//! Both funnel into the record builder ([`SnippetFile::build`]) and the
//! serializer; they differ only in where the lines and the record name come
//! from. Each invocation is synchronous, does one unit of work and reports
//! success or failure for that unit.

use crate::error::{Error, Result};
use crate::snippet::SnippetFile;
use crate::source;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validates that `path` ends in a usable base name with an extension to
/// strip, returning the base name.
fn checked_base_name(path: &Path) -> Result<&str> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::invalid_path(path, "missing or non-UTF-8 file name"))?;

    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => Ok(name),
        Some(_) => Err(Error::invalid_path(
            path,
            "empty base name after stripping the extension",
        )),
        None => Err(Error::invalid_path(path, "no extension to strip")),
    }
}

/// Converts the source file at `source` into a snippet file at `dest`.
///
/// The source is read as UTF-8 text and split into lines that keep their
/// terminators; the snippet key derives from the source base name. The
/// destination is overwritten (truncate-if-exists, create-if-absent) and its
/// previous entries, if any, are not merged.
///
/// The source is read completely before the destination is opened, so a
/// failed read leaves the destination untouched.
///
/// Returns the destination path on success.
///
/// # Errors
///
/// - [`Error::NotFound`] if the source does not exist
/// - [`Error::PermissionDenied`] if the source is unreadable or the
///   destination unwritable
/// - [`Error::InvalidPath`] if either path lacks a usable base name, or the
///   source has no extension to strip
/// - [`Error::InvalidUtf8`] if the source is not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// # fn main() -> snipgen::Result<()> {
/// snipgen::convert_file("hello.py", "hello.json")?;
/// # Ok(())
/// # }
/// ```
pub fn convert_file(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<PathBuf> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    let source_name = checked_base_name(source)?;
    if dest.file_name().is_none() {
        return Err(Error::invalid_path(dest, "destination has no file name"));
    }

    let lines = source::read_lines(source)?;

    debug!(
        "converting {} ({} lines) -> {}",
        source.display(),
        lines.len(),
        dest.display()
    );

    let snippet = SnippetFile::build(source_name, lines);
    snippet.write_to(dest)?;

    Ok(dest.to_path_buf())
}

/// Converts an in-memory sequence of lines into a snippet file at `dest`.
///
/// The buffer stands in for a host editor's text: an ordered sequence of
/// lines produced on demand and consumed exactly once, carried into the
/// record verbatim. The snippet key derives from the destination base name,
/// which must therefore have an extension to strip.
///
/// Same overwrite and error semantics as [`convert_file`].
///
/// # Errors
///
/// - [`Error::InvalidPath`] if the destination lacks a usable base name or
///   an extension to strip
/// - [`Error::PermissionDenied`] / [`Error::NotFound`] if the destination
///   cannot be written
///
/// # Examples
///
/// ```no_run
/// # fn main() -> snipgen::Result<()> {
/// let lines = vec!["print(1)".to_string(), "print(2)".to_string()];
/// snipgen::convert_buffer(lines, "hello.json")?;
/// # Ok(())
/// # }
/// ```
pub fn convert_buffer<I, S>(lines: I, dest: impl AsRef<Path>) -> Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let dest = dest.as_ref();

    let dest_name = checked_base_name(dest)?;
    let body: Vec<String> = lines.into_iter().map(Into::into).collect();

    debug!("converting buffer ({} lines) -> {}", body.len(), dest.display());

    let snippet = SnippetFile::build(dest_name, body);
    snippet.write_to(dest)?;

    Ok(dest.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use std::fs;

    #[test]
    fn test_convert_file_scenario() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("hello.py");
        source.write_str("print(1)\nprint(2)\n").unwrap();
        let dest = temp.child("hello.json");

        let written = convert_file(source.path(), dest.path()).unwrap();
        assert_eq!(written, dest.path());

        let text = fs::read_to_string(dest.path()).unwrap();
        let parsed = SnippetFile::from_json_str(&text).unwrap();
        let record = parsed.get("hello").unwrap();
        assert_eq!(record.prefix, "hello");
        assert_eq!(record.body, vec!["print(1)\n", "print(2)\n"]);
        assert_eq!(record.description, "short description");
    }

    #[test]
    fn test_convert_file_exact_artifact_bytes() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("hello.py");
        source.write_str("print(1)\nprint(2)\n").unwrap();
        let dest = temp.child("hello.json");

        convert_file(source.path(), dest.path()).unwrap();

        let expected = r#"{
    "hello": {
        "prefix": "hello",
        "body": [
            "print(1)\n",
            "print(2)\n"
        ],
        "description": "short description"
    }
}
"#;
        assert_eq!(fs::read_to_string(dest.path()).unwrap(), expected);
    }

    #[test]
    fn test_convert_file_keeps_final_line_without_newline() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("partial.py");
        source.write_str("a = 1\nb = 2").unwrap();
        let dest = temp.child("partial.json");

        convert_file(source.path(), dest.path()).unwrap();

        let text = fs::read_to_string(dest.path()).unwrap();
        let parsed = SnippetFile::from_json_str(&text).unwrap();
        assert_eq!(parsed.get("partial").unwrap().body, vec!["a = 1\n", "b = 2"]);
    }

    #[test]
    fn test_convert_file_missing_source_leaves_dest_untouched() {
        let temp = assert_fs::TempDir::new().unwrap();
        let dest = temp.child("out.json");
        dest.write_str("previous content").unwrap();

        let err = convert_file(temp.path().join("gone.py"), dest.path()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(fs::read_to_string(dest.path()).unwrap(), "previous content");
    }

    #[test]
    fn test_convert_file_missing_source_creates_nothing() {
        let temp = assert_fs::TempDir::new().unwrap();
        let dest = temp.child("out.json");

        let err = convert_file(temp.path().join("gone.py"), dest.path()).unwrap_err();
        assert!(err.is_not_found());
        assert!(!dest.path().exists());
    }

    #[test]
    fn test_convert_file_overwrites_destination() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("hello.py");
        source.write_str("print(1)\n").unwrap();
        let dest = temp.child("hello.json");
        dest.write_str("stale, much longer than the snippet output will ever be, stale")
            .unwrap();

        convert_file(source.path(), dest.path()).unwrap();

        let text = fs::read_to_string(dest.path()).unwrap();
        assert!(!text.contains("stale"));
        assert!(text.contains("\"hello\""));
    }

    #[test]
    fn test_convert_file_is_idempotent() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("hello.py");
        source.write_str("print(1)\n").unwrap();
        let dest = temp.child("hello.json");

        convert_file(source.path(), dest.path()).unwrap();
        let first = fs::read(dest.path()).unwrap();

        convert_file(source.path(), dest.path()).unwrap();
        let second = fs::read(dest.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_convert_file_rejects_source_without_extension() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("noext");
        source.write_str("content\n").unwrap();
        let dest = temp.child("out.json");

        let err = convert_file(source.path(), dest.path()).unwrap_err();
        assert!(err.is_invalid_path());
        assert!(!dest.path().exists());
    }

    #[test]
    fn test_convert_file_rejects_invalid_utf8_source() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("blob.py");
        source.write_binary(&[0xff, 0xfe, 0x41]).unwrap();
        let dest = temp.child("blob.json");

        let err = convert_file(source.path(), dest.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidUtf8 { .. }));
        assert!(!dest.path().exists());
    }

    #[test]
    fn test_convert_file_missing_destination_directory() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("hello.py");
        source.write_str("print(1)\n").unwrap();

        let err = convert_file(source.path(), temp.path().join("missing-dir/out.json"))
            .unwrap_err();
        assert!(err.path().is_some());
    }

    #[test]
    fn test_convert_buffer_empty_lines() {
        let temp = assert_fs::TempDir::new().unwrap();
        let dest = temp.child("empty.json");

        convert_buffer(Vec::<String>::new(), dest.path()).unwrap();

        let text = fs::read_to_string(dest.path()).unwrap();
        let parsed = SnippetFile::from_json_str(&text).unwrap();
        let record = parsed.get("empty").unwrap();
        assert!(record.body.is_empty());
        assert_eq!(record.prefix, "empty");
    }

    #[test]
    fn test_convert_buffer_takes_str_lines() {
        let temp = assert_fs::TempDir::new().unwrap();
        let dest = temp.child("sample.json");

        convert_buffer(["first line", "second line"], dest.path()).unwrap();

        let text = fs::read_to_string(dest.path()).unwrap();
        let parsed = SnippetFile::from_json_str(&text).unwrap();
        assert_eq!(
            parsed.get("sample").unwrap().body,
            vec!["first line", "second line"]
        );
    }

    #[test]
    fn test_convert_buffer_key_from_destination_name() {
        let temp = assert_fs::TempDir::new().unwrap();
        let dest = temp.child("my snippet.json");

        convert_buffer(["x = 1"], dest.path()).unwrap();

        let text = fs::read_to_string(dest.path()).unwrap();
        let parsed = SnippetFile::from_json_str(&text).unwrap();
        let record = parsed.get("my_snippet").unwrap();
        assert_eq!(record.prefix, "my snippet");
    }

    #[test]
    fn test_convert_buffer_rejects_destination_without_extension() {
        let temp = assert_fs::TempDir::new().unwrap();

        let err = convert_buffer(["line"], temp.path().join("noext")).unwrap_err();
        assert!(err.is_invalid_path());
    }

    #[test]
    fn test_checked_base_name_edge_cases() {
        assert!(checked_base_name(Path::new("hello.py")).is_ok());
        assert!(checked_base_name(Path::new("dir/hello.py")).is_ok());
        assert!(checked_base_name(Path::new("noext")).is_err());
        assert!(checked_base_name(Path::new(".hidden")).is_err());
        assert!(checked_base_name(Path::new("")).is_err());
    }
}
