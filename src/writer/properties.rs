//! Writer parameter keys and their defaults

use crate::types::PartitionTransform;

/// Maximum rows per file before rotation
pub const ROW_GROUP_SIZE: &str = "row-group-size";
pub const ROW_GROUP_SIZE_DEFAULT: i64 = 200_000;

/// Byte threshold that triggers a flush, supplied as text
pub const FLUSH_FREQUENCY_BYTES: &str = "flush-frequency-bytes";
pub const FLUSH_FREQUENCY_BYTES_DEFAULT: &str = "134217728"; // 128 MiB

/// Output file format name
pub const FILE_FORMAT: &str = "file-format";
pub const FILE_FORMAT_DEFAULT: &str = "parquet";

/// Raw, possibly comma-delimited partition key
pub const PARTITION_KEY: &str = "partition-key";
pub const PARTITION_KEY_DEFAULT: &str = "";

/// Transform applied to the partition key
pub const PARTITION_KEY_TRANSFORM: &str = "partition-key-transform";
pub const PARTITION_KEY_TRANSFORM_DEFAULT: PartitionTransform = PartitionTransform::Identity;
