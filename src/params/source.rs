//! Parameter source trait and in-memory implementation

use super::types::ParameterValue;
use crate::error::{Error, Result};
use crate::types::PartitionTransform;
use std::collections::HashMap;

/// Lookup-with-default access to host parameters
///
/// A missing key always yields the caller's default; absence is never an
/// error. A present value that cannot be read as the requested type is.
pub trait ParameterSource {
    /// Get an integer, or `default` if the key is absent
    fn get_int(&self, key: &str, default: i64) -> Result<i64>;

    /// Get a string, or `default` if the key is absent
    fn get_string(&self, key: &str, default: &str) -> Result<String>;

    /// Get a partition transform, or `default` if the key is absent
    ///
    /// The source must already hold a typed transform for `key`. Raw text is
    /// rejected; bind host input through `ParameterRegistry` first.
    fn get_transform(&self, key: &str, default: PartitionTransform)
        -> Result<PartitionTransform>;
}

/// Typed parameter map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    values: HashMap<String, ParameterValue>,
}

impl Parameters {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Insert a value, returning the previous one
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Option<ParameterValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Get a raw value by key
    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.values.get(key)
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all key-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParameterValue)> {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<ParameterValue>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ParameterSource for Parameters {
    fn get_int(&self, key: &str, default: i64) -> Result<i64> {
        match self.values.get(key) {
            None => Ok(default),
            Some(ParameterValue::Int(v)) => Ok(*v),
            Some(ParameterValue::Text(s)) => s.trim().parse::<i64>().map_err(|e| {
                Error::invalid_value(key, format!("'{s}' is not an integer: {e}"))
            }),
            Some(other) => Err(Error::type_mismatch(key, "int", other.kind().to_string())),
        }
    }

    fn get_string(&self, key: &str, default: &str) -> Result<String> {
        match self.values.get(key) {
            None => Ok(default.to_string()),
            Some(ParameterValue::Text(s)) => Ok(s.clone()),
            Some(other) => Err(Error::type_mismatch(key, "text", other.kind().to_string())),
        }
    }

    fn get_transform(
        &self,
        key: &str,
        default: PartitionTransform,
    ) -> Result<PartitionTransform> {
        match self.values.get(key) {
            None => Ok(default),
            Some(ParameterValue::Transform(t)) => Ok(*t),
            Some(ParameterValue::Text(s)) => Err(Error::type_mismatch(
                key,
                "transform",
                format!("raw text '{s}' (bind it through ParameterRegistry first)"),
            )),
            Some(other) => Err(Error::type_mismatch(
                key,
                "transform",
                other.kind().to_string(),
            )),
        }
    }
}

impl<T: ParameterSource + ?Sized> ParameterSource for &T {
    fn get_int(&self, key: &str, default: i64) -> Result<i64> {
        (**self).get_int(key, default)
    }

    fn get_string(&self, key: &str, default: &str) -> Result<String> {
        (**self).get_string(key, default)
    }

    fn get_transform(
        &self,
        key: &str,
        default: PartitionTransform,
    ) -> Result<PartitionTransform> {
        (**self).get_transform(key, default)
    }
}
