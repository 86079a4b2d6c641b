use crate::error::{LoadError, Result};
use portal_core::{Format, FormatError, PathMapping};
use std::fs;
use std::path::PathBuf;

/// One layer of mappings to load.
#[derive(Debug, Clone)]
pub enum Source {
    /// A literal, already-decoded collection.
    Mappings {
        name: String,
        entries: Vec<PathMapping>,
    },
    /// Serialized text held in memory.
    Inline {
        name: String,
        format: Format,
        text: String,
    },
    /// A file, read whole and then decoded.
    File { path: PathBuf, format: Format },
}

impl Source {
    /// Creates a literal source from any key to value collection.
    pub fn mappings<I, K, V>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Source::Mappings {
            name: name.into(),
            entries: PathMapping::from_pairs(pairs),
        }
    }

    pub fn inline(name: impl Into<String>, format: Format, text: impl Into<String>) -> Self {
        Source::Inline {
            name: name.into(),
            format,
            text: text.into(),
        }
    }

    /// Creates a file source, choosing the format from the extension.
    pub fn file(path: impl Into<PathBuf>) -> std::result::Result<Self, FormatError> {
        let path = path.into();
        let format = Format::from_path(&path)?;
        Ok(Source::File { path, format })
    }

    pub fn file_with_format(path: impl Into<PathBuf>, format: Format) -> Self {
        Source::File {
            path: path.into(),
            format,
        }
    }

    /// A human-readable label used in logs and errors.
    pub fn name(&self) -> String {
        match self {
            Source::Mappings { name, .. } | Source::Inline { name, .. } => name.clone(),
            Source::File { path, .. } => path.display().to_string(),
        }
    }

    /// Produces the decoded, not yet validated, mappings of this source.
    ///
    /// Blocks on file I/O for file sources.
    pub(crate) fn read(self) -> Result<Vec<PathMapping>> {
        match self {
            Source::Mappings { entries, .. } => Ok(entries),
            Source::Inline { name, format, text } => {
                format
                    .decode(text.as_bytes())
                    .map_err(|error| LoadError::Format {
                        source_name: name,
                        error,
                    })
            }
            Source::File { path, format } => {
                let raw = match fs::read(&path) {
                    Ok(raw) => raw,
                    Err(error) => return Err(LoadError::Io { path, error }),
                };
                format.decode(&raw).map_err(|error| LoadError::Format {
                    source_name: path.display().to_string(),
                    error,
                })
            }
        }
    }
}
