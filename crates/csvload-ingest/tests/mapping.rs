//! Integration tests for the mapping reader.

use std::io::Write;

use csvload_ingest::{MappingError, read_mapping, read_mapping_str};
use csvload_model::ModelError;

#[test]
fn test_valid_mapping() {
    let mapping =
        read_mapping_str(r#"{"table": "user", "columns": {"userid": "columns:userid"}}"#)
            .expect("parse mapping");
    assert_eq!(mapping.table(), "user");
    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.destination_for("userid"), Some("columns:userid"));
}

#[test]
fn test_multiple_columns() {
    let mapping = read_mapping_str(
        r#"{"table": "user", "columns": {"userid": "columns:userid", "nickname": "columns:nick"}}"#,
    )
    .expect("parse mapping");
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.destination_for("nickname"), Some("columns:nick"));
}

#[test]
fn test_empty_column_value_names_the_key() {
    let error = read_mapping_str(r#"{"table": "user", "columns": {"userid": ""}}"#)
        .expect_err("empty value");
    match &error {
        MappingError::Invalid(ModelError::EmptyColumnValue { key }) => assert_eq!(key, "userid"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(error.to_string().contains("userid"));
}

#[test]
fn test_empty_column_key_fails() {
    let error = read_mapping_str(r#"{"table": "user", "columns": {"": "columns:userid"}}"#)
        .expect_err("empty key");
    assert!(matches!(
        error,
        MappingError::Invalid(ModelError::EmptyColumnKey)
    ));
}

#[test]
fn test_empty_table_name_fails() {
    let error = read_mapping_str(r#"{"table": "", "columns": {}}"#).expect_err("empty table");
    assert!(matches!(
        error,
        MappingError::Invalid(ModelError::EmptyTableName)
    ));
}

#[test]
fn test_missing_table_field_fails() {
    let error = read_mapping_str(r#"{"columns": {"userid": "columns:userid"}}"#)
        .expect_err("missing table");
    assert!(matches!(error, MappingError::Json(_)));
    assert!(error.to_string().contains("table"));
}

#[test]
fn test_missing_columns_field_fails() {
    let error = read_mapping_str(r#"{"table": "user"}"#).expect_err("missing columns");
    assert!(matches!(error, MappingError::Json(_)));
    assert!(error.to_string().contains("columns"));
}

#[test]
fn test_non_string_column_value_fails() {
    let error = read_mapping_str(r#"{"table": "user", "columns": {"userid": 7}}"#)
        .expect_err("numeric value");
    assert!(matches!(error, MappingError::Json(_)));
}

#[test]
fn test_malformed_json_fails() {
    let error = read_mapping_str("{table user}").expect_err("bad json");
    assert!(matches!(error, MappingError::Json(_)));
}

#[test]
fn test_extra_top_level_fields_are_tolerated() {
    let mapping = read_mapping_str(
        r#"{"table": "user", "columns": {"userid": "columns:userid"}, "note": "x"}"#,
    )
    .expect("parse mapping");
    assert_eq!(mapping.table(), "user");
}

#[test]
fn test_empty_columns_object_is_valid() {
    let mapping = read_mapping_str(r#"{"table": "user", "columns": {}}"#).expect("parse mapping");
    assert!(mapping.is_empty());
}

#[test]
fn test_read_mapping_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(br#"{"table": "user", "columns": {"userid": "columns:userid"}}"#)
        .expect("write mapping");
    let mapping = read_mapping(file.path()).expect("parse mapping");
    assert_eq!(mapping.table(), "user");
}

#[test]
fn test_read_mapping_missing_file() {
    let error = read_mapping(std::path::Path::new("/nonexistent/mapping.json"))
        .expect_err("missing file");
    assert!(matches!(error, MappingError::Io { .. }));
}
