//! Parameter registration and binding
//!
//! Hosts hand over loosely typed values (YAML, JSON, command-line strings).
//! The registry declares what each parameter should be and coerces raw
//! values into a typed `Parameters` map before any config is resolved.

use super::source::Parameters;
use super::types::{ParameterKind, ParameterValue};
use crate::error::{Error, Result};
use crate::types::PartitionTransform;
use crate::writer::properties;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Raw host parameters, keyed by name
pub type RawParameters = HashMap<String, Value>;

/// Declaration of a single parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDefinition {
    /// Parameter key
    pub name: String,
    /// Declared type
    pub kind: ParameterKind,
    /// Value used when the key is absent
    pub default: ParameterValue,
    /// Human-readable description
    pub description: String,
}

impl ParameterDefinition {
    /// Create a new definition
    pub fn new(
        name: impl Into<String>,
        kind: ParameterKind,
        default: impl Into<ParameterValue>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            default: default.into(),
            description: description.into(),
        }
    }

    /// Coerce a raw value to this parameter's declared kind
    ///
    /// Returns `Ok(None)` for JSON null, which is treated as absent.
    pub fn coerce(&self, raw: &Value) -> Result<Option<ParameterValue>> {
        let key = self.name.as_str();
        let value = match (self.kind, raw) {
            (_, Value::Null) => return Ok(None),

            (ParameterKind::Int, Value::Number(n)) => n
                .as_i64()
                .map(ParameterValue::Int)
                .ok_or_else(|| Error::invalid_value(key, format!("{n} is not an integer")))?,
            (ParameterKind::Int, Value::String(s)) => {
                let v = s.trim().parse::<i64>().map_err(|e| {
                    Error::invalid_value(key, format!("'{s}' is not an integer: {e}"))
                })?;
                ParameterValue::Int(v)
            }

            (ParameterKind::Text, Value::String(s)) => ParameterValue::Text(s.clone()),
            (ParameterKind::Text, Value::Number(n)) => ParameterValue::Text(n.to_string()),
            (ParameterKind::Text, Value::Bool(b)) => ParameterValue::Text(b.to_string()),

            (ParameterKind::Transform, Value::String(s)) => {
                let t: PartitionTransform = s
                    .parse()
                    .map_err(|e: Error| Error::invalid_value(key, e.to_string()))?;
                ParameterValue::Transform(t)
            }

            (kind, other) => {
                return Err(Error::type_mismatch(
                    key,
                    kind.to_string(),
                    json_type_name(other),
                ))
            }
        };
        Ok(Some(value))
    }
}

/// Set of declared parameters
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    definitions: Vec<ParameterDefinition>,
}

impl ParameterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the writer parameters
    pub fn writer() -> Self {
        Self::new()
            .register(ParameterDefinition::new(
                properties::ROW_GROUP_SIZE,
                ParameterKind::Int,
                properties::ROW_GROUP_SIZE_DEFAULT,
                "Maximum number of rows in a file before it is rotated",
            ))
            .register(ParameterDefinition::new(
                properties::FLUSH_FREQUENCY_BYTES,
                ParameterKind::Text,
                properties::FLUSH_FREQUENCY_BYTES_DEFAULT,
                "Buffered byte count that triggers a flush",
            ))
            .register(ParameterDefinition::new(
                properties::FILE_FORMAT,
                ParameterKind::Text,
                properties::FILE_FORMAT_DEFAULT,
                "Output file format (parquet, orc, avro)",
            ))
            .register(ParameterDefinition::new(
                properties::PARTITION_KEY,
                ParameterKind::Text,
                properties::PARTITION_KEY_DEFAULT,
                "Comma-delimited partition column(s); empty means unpartitioned",
            ))
            .register(ParameterDefinition::new(
                properties::PARTITION_KEY_TRANSFORM,
                ParameterKind::Transform,
                properties::PARTITION_KEY_TRANSFORM_DEFAULT,
                "Transform applied to the partition key (identity, bucket[N], truncate[W], year, month, day, hour, void)",
            ))
    }

    /// Add a definition, replacing any with the same name
    #[must_use]
    pub fn register(mut self, definition: ParameterDefinition) -> Self {
        self.definitions.retain(|d| d.name != definition.name);
        self.definitions.push(definition);
        self
    }

    /// Look up a definition by name
    pub fn get(&self, name: &str) -> Option<&ParameterDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// All definitions in registration order
    pub fn definitions(&self) -> &[ParameterDefinition] {
        &self.definitions
    }

    /// Bind raw host values into typed parameters
    ///
    /// Unknown keys are skipped with a warning. Nulls are treated as absent.
    /// Fails on the first value that cannot be coerced.
    pub fn bind(&self, raw: &RawParameters) -> Result<Parameters> {
        let mut params = Parameters::new();

        for (key, value) in raw {
            let Some(definition) = self.get(key) else {
                tracing::warn!("Ignoring unknown parameter '{}'", key);
                continue;
            };
            if let Some(typed) = definition.coerce(value)? {
                params.insert(key.clone(), typed);
            }
        }

        tracing::debug!("Bound {} of {} raw parameters", params.len(), raw.len());
        Ok(params)
    }
}

/// Parse raw parameters from a flat YAML or JSON mapping
pub fn raw_parameters_from_str(content: &str) -> Result<RawParameters> {
    if content.trim().is_empty() {
        return Ok(RawParameters::new());
    }
    let raw: Option<RawParameters> = serde_yaml::from_str(content)?;
    Ok(raw.unwrap_or_default())
}

/// Load raw parameters from a YAML or JSON file
pub fn load_raw_parameters(path: impl AsRef<Path>) -> Result<RawParameters> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    raw_parameters_from_str(&content)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
