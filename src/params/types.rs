//! Parameter value types

use crate::types::PartitionTransform;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Int,
    Text,
    Transform,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::Text => "text",
            Self::Transform => "transform",
        })
    }
}

/// A typed parameter value held by a `Parameters` map
///
/// Serializes untagged. Raw host input goes through `ParameterRegistry::bind`
/// instead of deserializing into this type, since `"day"` is both valid text
/// and a valid transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Int(i64),
    Text(String),
    Transform(PartitionTransform),
}

impl ParameterValue {
    /// Kind of this value
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Int(_) => ParameterKind::Int,
            Self::Text(_) => ParameterKind::Text,
            Self::Transform(_) => ParameterKind::Transform,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Transform(t) => write!(f, "{t}"),
        }
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<PartitionTransform> for ParameterValue {
    fn from(value: PartitionTransform) -> Self {
        Self::Transform(value)
    }
}
