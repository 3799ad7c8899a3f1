//! Partition key interpretation
//!
//! The writer config keeps the partition key as the raw string it was given.
//! Writers that need more pick a `PartitionKeyResolver` and apply it on their
//! side, so the strategy can change without touching config resolution.

use crate::error::{Error, Result};
use crate::types::PartitionTransform;

/// Strategy for interpreting a raw partition key
pub trait PartitionKeyResolver {
    /// Interpreted form of the key
    type Output;

    /// Interpret `raw` under `transform`
    fn resolve(&self, raw: &str, transform: PartitionTransform) -> Result<Self::Output>;
}

/// Returns the raw key unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct RawPartitionKey;

impl PartitionKeyResolver for RawPartitionKey {
    type Output = String;

    fn resolve(&self, raw: &str, _transform: PartitionTransform) -> Result<String> {
        Ok(raw.to_string())
    }
}

/// Splits a comma-delimited key into column names
///
/// Names are trimmed and empty entries dropped, so an unpartitioned
/// (empty) key yields no columns.
#[derive(Debug, Clone, Copy)]
pub struct PartitionColumns {
    delimiter: char,
}

impl Default for PartitionColumns {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl PartitionColumns {
    /// Create a splitter using commas
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl PartitionKeyResolver for PartitionColumns {
    type Output = Vec<String>;

    fn resolve(&self, raw: &str, transform: PartitionTransform) -> Result<Vec<String>> {
        let columns: Vec<String> = raw
            .split(self.delimiter)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        if columns.is_empty() && transform != PartitionTransform::Identity {
            return Err(Error::invalid_value(
                super::properties::PARTITION_KEY,
                format!("transform '{transform}' set without a partition key"),
            ));
        }

        Ok(columns)
    }
}
