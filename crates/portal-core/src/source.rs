use crate::error::FormatError;
use crate::mapping::PathMapping;
use std::fmt::Display;
use std::io::Read;
use std::path::Path;

/// A textual notation that mapping sources are written in.
///
/// Both notations describe the same thing: an ordered sequence of
/// `{path, url}` records.
///
/// YAML:
///
/// ```yaml
/// - path: /path
///   url: https://example.com
/// ```
///
/// JSON:
///
/// ```json
/// [{"path": "/path", "url": "https://example.com"}]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Picks the format from a file extension (`yaml`, `yml` or `json`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let path = path.as_ref();
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(FormatError::UnknownExtension(path.display().to_string())),
        }
    }

    /// Decodes an in-memory buffer into mappings, preserving order.
    ///
    /// Blank input decodes to an empty sequence.
    pub fn decode(&self, raw: &[u8]) -> Result<Vec<PathMapping>, FormatError> {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let decoded = match self {
            Format::Yaml => serde_yaml::from_slice::<Option<Vec<PathMapping>>>(raw)
                .map_err(|e| self.malformed(e)),
            Format::Json => serde_json::from_slice::<Option<Vec<PathMapping>>>(raw)
                .map_err(|e| self.malformed(e)),
        }?;

        Ok(decoded.unwrap_or_default())
    }

    /// Drains `reader` and decodes the bytes. Yields exactly what
    /// [`Format::decode`] yields for the same bytes.
    ///
    /// A failing reader is reported as [`FormatError::Read`], never as
    /// malformed input.
    pub fn decode_reader<R: Read>(&self, mut reader: R) -> Result<Vec<PathMapping>, FormatError> {
        let mut raw = Vec::new();
        reader
            .read_to_end(&mut raw)
            .map_err(|e| FormatError::Read {
                format: *self,
                message: e.to_string(),
            })?;
        self.decode(&raw)
    }

    /// Serializes mappings in this notation. Empty fields are omitted.
    pub fn encode(&self, mappings: &[PathMapping]) -> Result<String, FormatError> {
        let encoded = match self {
            Format::Yaml => serde_yaml::to_string(mappings).map_err(|e| e.to_string()),
            Format::Json => serde_json::to_string_pretty(mappings).map_err(|e| e.to_string()),
        };

        encoded.map_err(|message| FormatError::Encode {
            format: *self,
            message,
        })
    }

    fn malformed(&self, error: impl Display) -> FormatError {
        FormatError::Malformed {
            format: *self,
            message: error.to_string(),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Yaml => f.write_str("yaml"),
            Format::Json => f.write_str("json"),
        }
    }
}
