//! Common types used throughout the sink configuration
//!
//! Enumerated values shared by the parameter layer and the writer config.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Partition Transform
// ============================================================================

/// Transform applied to a partition column value to derive its partition
///
/// The text form follows Iceberg naming: `identity`, `bucket[16]`,
/// `truncate[10]`, `year`, `month`, `day`, `hour`, `void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartitionTransform {
    /// Partition by the source value unchanged
    #[default]
    Identity,
    /// Hash the value into N buckets
    Bucket(u32),
    /// Truncate the value to width W
    Truncate(u32),
    /// Year of a date or timestamp
    Year,
    /// Month of a date or timestamp
    Month,
    /// Day of a date or timestamp
    Day,
    /// Hour of a timestamp
    Hour,
    /// Always null
    Void,
}

impl PartitionTransform {
    /// Whether this transform buckets values by time
    pub fn is_time_based(&self) -> bool {
        matches!(self, Self::Year | Self::Month | Self::Day | Self::Hour)
    }

    /// Width parameter for `bucket` and `truncate`
    pub fn width(&self) -> Option<u32> {
        match self {
            Self::Bucket(n) | Self::Truncate(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for PartitionTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("identity"),
            Self::Bucket(n) => write!(f, "bucket[{n}]"),
            Self::Truncate(w) => write!(f, "truncate[{w}]"),
            Self::Year => f.write_str("year"),
            Self::Month => f.write_str("month"),
            Self::Day => f.write_str("day"),
            Self::Hour => f.write_str("hour"),
            Self::Void => f.write_str("void"),
        }
    }
}

impl FromStr for PartitionTransform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();

        if let Some((name, rest)) = normalized.split_once('[') {
            let width = rest
                .strip_suffix(']')
                .ok_or_else(|| Error::config(format!("Unclosed width in transform '{s}'")))?;
            let width: u32 = width.trim().parse().map_err(|_| {
                Error::config(format!("Invalid width '{width}' in transform '{s}'"))
            })?;
            if width == 0 {
                return Err(Error::config(format!(
                    "Transform '{s}' requires a positive width"
                )));
            }
            return match name.trim() {
                "bucket" => Ok(Self::Bucket(width)),
                "truncate" => Ok(Self::Truncate(width)),
                other => Err(Error::config(format!(
                    "Transform '{other}' does not take a width"
                ))),
            };
        }

        match normalized.as_str() {
            "identity" => Ok(Self::Identity),
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            "day" => Ok(Self::Day),
            "hour" => Ok(Self::Hour),
            "void" => Ok(Self::Void),
            "bucket" | "truncate" => Err(Error::config(format!(
                "Transform '{normalized}' requires a width, e.g. {normalized}[16]"
            ))),
            _ => Err(Error::config(format!("Unknown partition transform '{s}'"))),
        }
    }
}

impl Serialize for PartitionTransform {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PartitionTransform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// File Format
// ============================================================================

/// Output file encoding
///
/// The writer config keeps the format as a plain string so that writers
/// registered elsewhere can claim their own names. Consumers that pick a
/// concrete writer validate against this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    #[default]
    Parquet,
    Orc,
    Avro,
}

impl FileFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Parquet => "parquet",
            Self::Orc => "orc",
            Self::Avro => "avro",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Parquet => "PARQUET",
            Self::Orc => "ORC",
            Self::Avro => "AVRO",
        })
    }
}

impl FromStr for FileFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parquet" => Ok(Self::Parquet),
            "orc" => Ok(Self::Orc),
            "avro" => Ok(Self::Avro),
            _ => Err(Error::config(format!("Unsupported file format '{s}'"))),
        }
    }
}
