use crate::error::CoreError;
use std::fmt::Display;
use std::str::FromStr;

/// Name of the namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "DB";

/// A named partition of the mapping store.
///
/// Every lookup and insert names its namespace explicitly. The name must be
/// non-empty; nothing else is enforced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Namespace(String);

impl Namespace {
    /// Creates a new `Namespace` after validating the input.
    pub fn new(name: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::InvalidNamespace(
                "namespace name cannot be empty".to_string(),
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self(DEFAULT_NAMESPACE.to_string())
    }
}

impl FromStr for Namespace {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
