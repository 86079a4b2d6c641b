use serde::{Deserialize, Deserializer, Serialize};

/// A single short path and the destination it redirects to.
///
/// Both fields are optional when deserialized and default to the empty
/// string; decoders never reject an incomplete record. Deciding whether an
/// empty `path` or `destination` is usable is left to the loader.
///
/// In serialized form the destination is called `url`:
///
/// ```yaml
/// - path: /some-path
///   url: https://www.some-url.com/demo
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PathMapping {
    /// The lookup key, unique within a namespace.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub path: String,
    /// Redirect target. Not validated.
    #[serde(
        rename = "url",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub destination: String,
}

/// An explicit `null` reads the same as an omitted field.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl PathMapping {
    pub fn new(path: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            destination: destination.into(),
        }
    }

    /// Converts an in-memory key to value collection into mappings.
    ///
    /// The order of the produced sequence follows the iteration order of
    /// `pairs`, so pass an ordered collection when order matters.
    pub fn from_pairs<I, K, V>(pairs: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(path, destination)| Self::new(path, destination))
            .collect()
    }

    /// Returns `true` when both fields are non-empty.
    pub fn is_usable(&self) -> bool {
        !self.path.is_empty() && !self.destination.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for PathMapping {
    fn from((path, destination): (K, V)) -> Self {
        Self::new(path, destination)
    }
}
