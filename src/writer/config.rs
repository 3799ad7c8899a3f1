//! Writer configuration
//!
//! Resolves the writer's settings from host parameters once, at writer
//! initialization, into an immutable value.

use super::partition::PartitionKeyResolver;
use super::properties::{
    FILE_FORMAT, FILE_FORMAT_DEFAULT, FLUSH_FREQUENCY_BYTES, FLUSH_FREQUENCY_BYTES_DEFAULT,
    PARTITION_KEY, PARTITION_KEY_DEFAULT, PARTITION_KEY_TRANSFORM,
    PARTITION_KEY_TRANSFORM_DEFAULT, ROW_GROUP_SIZE, ROW_GROUP_SIZE_DEFAULT,
};
use crate::error::{Error, Result};
use crate::params::ParameterSource;
use crate::types::{FileFormat, PartitionTransform};
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use serde::Serialize;
use std::sync::Arc;

/// Immutable writer settings plus the storage handle they were resolved with
///
/// `S` is the storage configuration. It is carried as-is and never inspected.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct WriterConfig<S> {
    row_group_size: u32,
    flush_frequency_bytes: u64,
    file_format: String,
    partition_key: String,
    partition_key_transform: PartitionTransform,
    #[serde(skip)]
    storage: Arc<S>,
}

impl<S> WriterConfig<S> {
    /// Resolve a config from parameters, taking ownership of the storage handle
    pub fn new<P>(parameters: &P, storage: S) -> Result<Self>
    where
        P: ParameterSource + ?Sized,
    {
        Self::resolve(parameters, Arc::new(storage))
    }

    /// Resolve a config from parameters and a shared storage handle
    ///
    /// Each absent key takes its default. Any value that cannot be coerced
    /// fails the whole resolution.
    pub fn resolve<P>(parameters: &P, storage: Arc<S>) -> Result<Self>
    where
        P: ParameterSource + ?Sized,
    {
        let row_group_size = parameters.get_int(ROW_GROUP_SIZE, ROW_GROUP_SIZE_DEFAULT)?;
        let row_group_size = positive_u32(ROW_GROUP_SIZE, row_group_size)?;

        let flush_text =
            parameters.get_string(FLUSH_FREQUENCY_BYTES, FLUSH_FREQUENCY_BYTES_DEFAULT)?;
        let flush_frequency_bytes = parse_flush_bytes(&flush_text)?;

        let file_format = parameters.get_string(FILE_FORMAT, FILE_FORMAT_DEFAULT)?;
        let partition_key = parameters.get_string(PARTITION_KEY, PARTITION_KEY_DEFAULT)?;
        let partition_key_transform =
            parameters.get_transform(PARTITION_KEY_TRANSFORM, PARTITION_KEY_TRANSFORM_DEFAULT)?;

        tracing::debug!(
            row_group_size,
            flush_frequency_bytes,
            file_format = %file_format,
            partition_key = %partition_key,
            partition_key_transform = %partition_key_transform,
            "Resolved writer config"
        );

        Ok(Self {
            row_group_size,
            flush_frequency_bytes,
            file_format,
            partition_key,
            partition_key_transform,
            storage,
        })
    }

    /// Maximum number of rows in a file before rotation
    pub fn row_group_size(&self) -> u32 {
        self.row_group_size
    }

    /// Flush threshold in bytes
    pub fn flush_frequency_bytes(&self) -> u64 {
        self.flush_frequency_bytes
    }

    /// File format name, as supplied
    pub fn file_format(&self) -> &str {
        &self.file_format
    }

    /// Raw partition key, possibly comma-delimited
    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    /// Transform to apply to the partition key
    pub fn partition_key_transform(&self) -> PartitionTransform {
        self.partition_key_transform
    }

    /// Storage configuration
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Shared handle to the storage configuration
    pub fn storage_arc(&self) -> &Arc<S> {
        &self.storage
    }

    /// Whether a partition key is set
    pub fn is_partitioned(&self) -> bool {
        !self.partition_key.trim().is_empty()
    }

    /// Interpret the raw partition key with the given strategy
    pub fn resolve_partition_key<R>(&self, resolver: &R) -> Result<R::Output>
    where
        R: PartitionKeyResolver + ?Sized,
    {
        resolver.resolve(&self.partition_key, self.partition_key_transform)
    }

    /// Validate the file format name against the known formats
    pub fn file_format_kind(&self) -> Result<FileFormat> {
        self.file_format
            .parse()
            .map_err(|e: Error| Error::invalid_value(FILE_FORMAT, e.to_string()))
    }

    /// Build Parquet writer properties from this config
    ///
    /// Uses Snappy compression. Fails if the configured format is not Parquet.
    pub fn parquet_properties(&self) -> Result<WriterProperties> {
        let format = self.file_format_kind()?;
        if format != FileFormat::Parquet {
            return Err(Error::config(format!(
                "Parquet writer properties requested, but file format is {format}"
            )));
        }

        Ok(WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .set_max_row_group_size(self.row_group_size as usize)
            .build())
    }
}

impl<S> Clone for WriterConfig<S> {
    fn clone(&self) -> Self {
        Self {
            row_group_size: self.row_group_size,
            flush_frequency_bytes: self.flush_frequency_bytes,
            file_format: self.file_format.clone(),
            partition_key: self.partition_key.clone(),
            partition_key_transform: self.partition_key_transform,
            storage: Arc::clone(&self.storage),
        }
    }
}

fn positive_u32(field: &str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(Error::invalid_value(
            field,
            format!("must be positive, got {value}"),
        ));
    }
    u32::try_from(value)
        .map_err(|_| Error::invalid_value(field, format!("{value} exceeds {}", u32::MAX)))
}

fn parse_flush_bytes(text: &str) -> Result<u64> {
    let value = text.trim().parse::<i64>().map_err(|e| {
        Error::invalid_value(
            FLUSH_FREQUENCY_BYTES,
            format!("'{text}' is not a 64-bit integer: {e}"),
        )
    })?;
    if value <= 0 {
        return Err(Error::invalid_value(
            FLUSH_FREQUENCY_BYTES,
            format!("must be positive, got {value}"),
        ));
    }
    Ok(value as u64)
}
