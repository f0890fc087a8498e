use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::RegistryLoadError;

/// Airline code to display name, iterated in code order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Registry {
    entries: BTreeMap<String, String>,
}

impl Registry {
    /// Reads a JSON object of `code -> name` from `path`.
    pub fn load(path: &Path) -> Result<Self, RegistryLoadError> {
        let raw = fs::read_to_string(path).map_err(|source| RegistryLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &raw)
    }

    fn parse(path: &Path, raw: &str) -> Result<Self, RegistryLoadError> {
        let entries = serde_json::from_str(raw).map_err(|source| RegistryLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
