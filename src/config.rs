use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Source extensions converted by default, dot included.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".py", ".osl"];

const DEFAULT_SNIPPET_EXTENSION: &str = "json";

/// Configuration for a batch run.
///
/// Use [`Config::builder()`] to construct a new configuration, or
/// [`Config::default()`] for the stock allow-list and `.json` output.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Source extensions eligible for conversion, each with a leading dot.
    pub extensions: Vec<String>,
    /// Extension given to produced snippet files, without a dot.
    pub snippet_extension: String,
    /// Directory snippet files are written to instead of alongside their
    /// sources. Created on demand.
    pub out_dir: Option<PathBuf>,
}

impl Config {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Returns `true` if `path` carries one of the allowed source
    /// extensions.
    ///
    /// The comparison is case-sensitive and looks at the final extension
    /// only, so `archive.tar.py` is allowed while `script.PY` is not.
    #[must_use]
    pub fn allows(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|allowed| allowed.strip_prefix('.') == Some(ext))
    }

    fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(Error::config("extension allow-list is empty"));
        }
        for ext in &self.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(Error::config(format!(
                    "invalid source extension '{ext}': expected a leading dot and a name, like '.py'"
                )));
            }
            if ext[1..].contains('.') {
                return Err(Error::config(format!(
                    "invalid source extension '{ext}': only a single segment is supported"
                )));
            }
        }
        if self.snippet_extension.is_empty() || self.snippet_extension.contains('.') {
            return Err(Error::config(format!(
                "invalid snippet extension '{}': expected a bare name, like 'json'",
                self.snippet_extension
            )));
        }
        let produced = format!(".{}", self.snippet_extension);
        if self.extensions.iter().any(|ext| *ext == produced) {
            return Err(Error::config(format!(
                "snippet extension '{produced}' conflicts with the source allow-list"
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            snippet_extension: DEFAULT_SNIPPET_EXTENSION.to_string(),
            out_dir: None,
        }
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    extensions: Option<Vec<String>>,
    snippet_extension: Option<String>,
    out_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the source extension allow-list.
    ///
    /// Entries missing their leading dot get one added, so `py` and `.py`
    /// are interchangeable here.
    #[must_use]
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(normalize_extension).collect());
        self
    }

    /// Adds a single extension to the allow-list, keeping what is already
    /// there.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extensions
            .get_or_insert_with(|| {
                DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
            })
            .push(normalize_extension(extension));
        self
    }

    /// Sets the extension given to produced snippet files.
    #[must_use]
    pub fn snippet_extension(mut self, extension: impl Into<String>) -> Self {
        self.snippet_extension = Some(extension.into());
        self
    }

    /// Redirects produced snippet files into `dir` instead of writing them
    /// alongside their sources.
    #[must_use]
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    /// Builds the configuration, validating the extension lists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the allow-list is empty, an entry is
    /// malformed, or the snippet extension collides with the allow-list.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            extensions: self
                .extensions
                .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()),
            snippet_extension: self
                .snippet_extension
                .unwrap_or_else(|| DEFAULT_SNIPPET_EXTENSION.to_string()),
            out_dir: self.out_dir,
        };
        config.validate()?;
        Ok(config)
    }
}

fn normalize_extension(ext: impl Into<String>) -> String {
    let ext = ext.into();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}
