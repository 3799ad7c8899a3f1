//! Storage configuration handle
//!
//! Writer configs carry a storage handle of any type without looking at it.
//! `StorageOptions` is a plain key/value handle (endpoint, credentials,
//! warehouse location, ...) for hosts that have nothing richer to pass.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Key/value storage settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageOptions {
    options: BTreeMap<String, String>,
}

impl StorageOptions {
    /// Create an empty set of options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Get an option by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over options in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse options from a flat YAML or JSON mapping of strings
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load options from a YAML or JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
