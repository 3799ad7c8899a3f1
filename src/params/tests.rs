//! Tests for params module

use super::*;
use crate::error::Error;
use crate::types::PartitionTransform;
use crate::writer::properties::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn raw(value: serde_json::Value) -> RawParameters {
    serde_json::from_value(value).unwrap()
}

// ============================================================================
// Parameters Lookup Tests
// ============================================================================

#[test]
fn test_absent_keys_return_defaults() {
    let params = Parameters::new();

    assert_eq!(params.get_int("missing", 7).unwrap(), 7);
    assert_eq!(params.get_string("missing", "fallback").unwrap(), "fallback");
    assert_eq!(
        params
            .get_transform("missing", PartitionTransform::Month)
            .unwrap(),
        PartitionTransform::Month
    );
}

#[test]
fn test_get_int_from_text() {
    let params = Parameters::new().with("n", "123");
    assert_eq!(params.get_int("n", 0).unwrap(), 123);
}

#[test]
fn test_integer_text_trimmed_in_both_layers() {
    let params = Parameters::new().with("n", " 42 ");
    assert_eq!(params.get_int("n", 0).unwrap(), 42);

    let bound = ParameterRegistry::writer()
        .bind(&raw(json!({ "row-group-size": " 42 " })))
        .unwrap();
    assert_eq!(bound.get(ROW_GROUP_SIZE), Some(&ParameterValue::Int(42)));
}

#[test]
fn test_get_int_rejects_bad_text() {
    let params = Parameters::new().with("n", "12x");
    let err = params.get_int("n", 0).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { .. }));
}

#[test]
fn test_get_int_rejects_transform() {
    let params = Parameters::new().with("n", PartitionTransform::Day);
    assert!(matches!(
        params.get_int("n", 0).unwrap_err(),
        Error::TypeMismatch { .. }
    ));
}

#[test]
fn test_get_string_rejects_int() {
    let params = Parameters::new().with("s", 5);
    let err = params.get_string("s", "").unwrap_err();
    assert_eq!(err.to_string(), "Parameter 's' expected text, found int");
}

#[test]
fn test_get_transform_requires_typed_value() {
    let params = Parameters::new()
        .with("typed", PartitionTransform::Truncate(3))
        .with("text", "truncate[3]");

    assert_eq!(
        params
            .get_transform("typed", PartitionTransform::Identity)
            .unwrap(),
        PartitionTransform::Truncate(3)
    );
    assert!(params
        .get_transform("text", PartitionTransform::Identity)
        .is_err());
}

#[test]
fn test_parameters_collection() {
    let mut params: Parameters = vec![("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(params.len(), 2);
    assert!(params.contains_key("a"));

    let previous = params.insert("a", "one");
    assert_eq!(previous, Some(ParameterValue::Int(1)));
    assert_eq!(params.get("a"), Some(&ParameterValue::Text("one".to_string())));
    assert_eq!(params.iter().count(), 2);
    assert!(!params.is_empty());
}

#[test]
fn test_source_through_trait_object() {
    let params = Parameters::new().with("n", 9);
    let source: &dyn ParameterSource = &params;
    assert_eq!(source.get_int("n", 0).unwrap(), 9);
}

// ============================================================================
// Registry Binding Tests
// ============================================================================

#[test]
fn test_writer_registry_definitions() {
    let registry = ParameterRegistry::writer();
    let names: Vec<&str> = registry
        .definitions()
        .iter()
        .map(|d| d.name.as_str())
        .collect();

    assert_eq!(
        names,
        vec![
            ROW_GROUP_SIZE,
            FLUSH_FREQUENCY_BYTES,
            FILE_FORMAT,
            PARTITION_KEY,
            PARTITION_KEY_TRANSFORM
        ]
    );
    assert_eq!(
        registry.get(PARTITION_KEY_TRANSFORM).unwrap().default,
        ParameterValue::Transform(PartitionTransform::Identity)
    );
}

#[test]
fn test_bind_coerces_each_kind() {
    let registry = ParameterRegistry::writer();
    let params = registry
        .bind(&raw(json!({
            "row-group-size": "250000",
            "flush-frequency-bytes": 2048,
            "file-format": "avro",
            "partition-key": "region",
            "partition-key-transform": "bucket[16]"
        })))
        .unwrap();

    assert_eq!(params.get(ROW_GROUP_SIZE), Some(&ParameterValue::Int(250_000)));
    assert_eq!(
        params.get(FLUSH_FREQUENCY_BYTES),
        Some(&ParameterValue::Text("2048".to_string()))
    );
    assert_eq!(
        params.get(PARTITION_KEY_TRANSFORM),
        Some(&ParameterValue::Transform(PartitionTransform::Bucket(16)))
    );
}

#[test]
fn test_bind_skips_unknown_and_null() {
    let registry = ParameterRegistry::writer();
    let params = registry
        .bind(&raw(json!({
            "not-a-writer-key": 1,
            "partition-key": null
        })))
        .unwrap();

    assert!(params.is_empty());
}

#[test]
fn test_bind_rejects_bad_transform() {
    let registry = ParameterRegistry::writer();
    let err = registry
        .bind(&raw(json!({ "partition-key-transform": "bucket[0]" })))
        .unwrap_err();

    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == PARTITION_KEY_TRANSFORM));
}

#[test]
fn test_bind_rejects_wrong_shape() {
    let registry = ParameterRegistry::writer();

    let err = registry
        .bind(&raw(json!({ "partition-key": ["a", "b"] })))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parameter 'partition-key' expected text, found array"
    );

    let err = registry
        .bind(&raw(json!({ "row-group-size": 1.5 })))
        .unwrap_err();
    assert!(err.is_coercion());

    let err = registry
        .bind(&raw(json!({ "partition-key-transform": 3 })))
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}

#[test]
fn test_register_replaces_existing() {
    let registry = ParameterRegistry::writer().register(ParameterDefinition::new(
        FILE_FORMAT,
        ParameterKind::Text,
        "orc",
        "Output file format",
    ));

    assert_eq!(registry.definitions().len(), 5);
    assert_eq!(
        registry.get(FILE_FORMAT).unwrap().default,
        ParameterValue::Text("orc".to_string())
    );
}

// ============================================================================
// Loader Tests
// ============================================================================

#[test]
fn test_raw_parameters_from_yaml() {
    let raw = raw_parameters_from_str(
        r"
row-group-size: 1000
partition-key: region
partition-key-transform: day
",
    )
    .unwrap();

    assert_eq!(raw.len(), 3);
    assert_eq!(raw["row-group-size"], json!(1000));
    assert_eq!(raw["partition-key-transform"], json!("day"));
}

#[test]
fn test_raw_parameters_from_json() {
    let raw = raw_parameters_from_str(r#"{"file-format": "orc"}"#).unwrap();
    assert_eq!(raw["file-format"], json!("orc"));
}

#[test]
fn test_raw_parameters_empty() {
    assert!(raw_parameters_from_str("").unwrap().is_empty());
    assert!(raw_parameters_from_str("   \n").unwrap().is_empty());
}

#[test]
fn test_raw_parameters_invalid() {
    assert!(raw_parameters_from_str("- just\n- a list\n").is_err());
}

#[test]
fn test_load_raw_parameters_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "flush-frequency-bytes: \"65536\"").unwrap();

    let raw = load_raw_parameters(file.path()).unwrap();
    assert_eq!(raw["flush-frequency-bytes"], json!("65536"));
}

#[test]
fn test_load_raw_parameters_missing_file() {
    let err = load_raw_parameters("/nonexistent/params.yaml").unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}
