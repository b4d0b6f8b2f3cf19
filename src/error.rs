use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for snippet conversion operations.
///
/// Every I/O failure carries the offending path so callers can report
/// "kind + path" in a single human-readable line.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// A path that was expected to exist does not.
    #[error("Path '{}' does not exist", path.display())]
    NotFound {
        /// Path that could not be found
        path: PathBuf,
    },

    /// The source is unreadable or the destination is unwritable.
    #[error("Permission denied accessing '{}'", path.display())]
    PermissionDenied {
        /// Path that could not be accessed
        path: PathBuf,
    },

    /// Empty or malformed path or filename.
    #[error("Invalid path '{}': {reason}", path.display())]
    InvalidPath {
        /// The offending path
        path: PathBuf,
        /// Why the path was rejected
        reason: String,
    },

    /// Invalid UTF-8 encountered in a source file.
    #[error("Invalid UTF-8 encoding in file '{}'. File may be binary or use unsupported encoding.", path.display())]
    InvalidUtf8 {
        /// Path to the file with encoding issues
        path: PathBuf,
    },

    /// Any other I/O failure, with path context.
    #[error("IO error accessing '{}': {message}", path.display())]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// JSON serialization or parsing error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
    },

    /// Configuration validation error.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },
}

impl Error {
    /// Creates an error from an I/O failure, classified by its kind.
    ///
    /// `NotFound`, `PermissionDenied` and `InvalidData` (bad UTF-8) map to
    /// their dedicated variants; everything else becomes [`Error::Io`] with
    /// the message preserved.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let path = path.into();
        match source.kind() {
            ErrorKind::NotFound => Self::NotFound { path },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            ErrorKind::InvalidData => Self::InvalidUtf8 { path },
            _ => Self::Io {
                path,
                message: source.to_string(),
            },
        }
    }

    /// Creates an invalid path error.
    #[must_use]
    pub fn invalid_path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid UTF-8 error.
    #[must_use]
    pub fn invalid_utf8(path: impl Into<PathBuf>) -> Self {
        Self::InvalidUtf8 { path: path.into() }
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns the offending path, when the error carries one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::InvalidPath { path, .. }
            | Self::InvalidUtf8 { path }
            | Self::Io { path, .. } => Some(path),
            Self::Serialization { .. } | Self::Config { .. } => None,
        }
    }

    /// Returns true if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a permission error.
    #[must_use]
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Returns true if this is an invalid path error.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_io_error_classification() {
        let not_found = std::io::Error::new(ErrorKind::NotFound, "missing");
        let err = Error::io("/tmp/gone.py", not_found);
        assert!(err.is_not_found());

        let denied = std::io::Error::new(ErrorKind::PermissionDenied, "denied");
        let err = Error::io("/tmp/locked.py", denied);
        assert!(err.is_permission_denied());

        let bad_data = std::io::Error::new(ErrorKind::InvalidData, "not utf-8");
        let err = Error::io("/tmp/blob.py", bad_data);
        assert!(matches!(err, Error::InvalidUtf8 { .. }));

        let other = std::io::Error::new(ErrorKind::UnexpectedEof, "eof");
        let err = Error::io("/tmp/short.py", other);
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_error_display_contains_path() {
        let err = Error::io(
            "/tmp/test.py",
            std::io::Error::new(ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("/tmp/test.py"));
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::invalid_path("noext", "no extension to strip");
        assert!(err.is_invalid_path());
        assert!(err.to_string().contains("no extension to strip"));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("allow-list must not be empty");
        assert!(err.is_config());
        assert!(err.to_string().contains("allow-list"));
    }

    #[test]
    fn test_offending_path_accessor() {
        let err = Error::invalid_utf8("/tmp/bin.py");
        assert_eq!(err.path(), Some(Path::new("/tmp/bin.py")));

        let err = Error::config("bad");
        assert_eq!(err.path(), None);
    }

    #[test]
    fn test_serialization_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_clone() {
        let err = Error::invalid_path("x", "empty");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
