//! CLI argument handling and exit-code mapping tests.

use std::fs;
use std::path::Path;

use clap::Parser;

use csvload_cli::cli::Cli;
use csvload_cli::commands::run_import;
use csvload_cli::exit;
use csvload_core::{Importer, ImporterError};
use csvload_ingest::{MappingError, SchemaError};
use csvload_model::{ImportOptions, ModelError};

#[test]
fn test_three_positional_arguments_parse() {
    let cli = Cli::try_parse_from(["csvload", "data.csv", "schema.xml", "mapping.json"])
        .expect("parse args");
    assert_eq!(cli.csv_file, Path::new("data.csv"));
    assert_eq!(cli.table_schema, Path::new("schema.xml"));
    assert_eq!(cli.mapping, Path::new("mapping.json"));
    assert!(!cli.strict);
    assert!(cli.output.is_none());
}

#[test]
fn test_wrong_argument_count_fails_with_usage() {
    let error =
        Cli::try_parse_from(["csvload", "data.csv", "schema.xml"]).expect_err("two args");
    assert!(error.to_string().contains("Usage"));

    let error = Cli::try_parse_from(["csvload"]).expect_err("no args");
    assert!(error.to_string().contains("Usage"));
}

#[test]
fn test_flags_parse() {
    let cli = Cli::try_parse_from([
        "csvload",
        "data.csv",
        "schema.xml",
        "mapping.json",
        "--strict",
        "--output",
        "rows.jsonl",
    ])
    .expect("parse args");
    assert!(cli.strict);
    assert_eq!(cli.output.as_deref(), Some(Path::new("rows.jsonl")));
}

#[test]
fn test_exit_codes_for_missing_inputs() {
    let dir = tempfile::tempdir().expect("temp dir");
    let csv = dir.path().join("user.csv");
    let schema = dir.path().join("user.xml");
    let mapping = dir.path().join("user.json");
    fs::write(&csv, "1,alice\n").expect("write csv");
    fs::write(
        &schema,
        r#"<resultset><row><field name="Field">userid</field></row></resultset>"#,
    )
    .expect("write schema");
    fs::write(
        &mapping,
        r#"{"table": "user", "columns": {"userid": "columns:userid"}}"#,
    )
    .expect("write mapping");
    let missing = dir.path().join("absent");

    let error = Importer::open(&missing, &schema, &mapping, ImportOptions::new())
        .expect_err("missing csv");
    assert_eq!(exit::exit_code_for(&error), exit::MISSING_CSV);

    let error = Importer::open(&csv, &missing, &mapping, ImportOptions::new())
        .expect_err("missing schema");
    assert_eq!(exit::exit_code_for(&error), exit::MISSING_SCHEMA);

    let error = Importer::open(&csv, &schema, &missing, ImportOptions::new())
        .expect_err("missing mapping");
    assert_eq!(exit::exit_code_for(&error), exit::MISSING_MAPPING);
}

#[test]
fn test_exit_codes_for_parse_and_validation_failures() {
    let schema_error = ImporterError::Schema(SchemaError::UnnamedField { row: 1 });
    assert_eq!(exit::exit_code_for(&schema_error), exit::INVALID_SCHEMA);

    let mapping_error =
        ImporterError::Mapping(MappingError::Invalid(ModelError::EmptyColumnKey));
    assert_eq!(exit::exit_code_for(&mapping_error), exit::INVALID_MAPPING);

    let strict_error = ImporterError::UnknownSourceColumn {
        column: "email".to_string(),
    };
    assert_eq!(exit::exit_code_for(&strict_error), exit::INVALID_MAPPING);

    let import_error = ImporterError::Import(anyhow::anyhow!("sink failed"));
    assert_eq!(exit::exit_code_for(&import_error), exit::IMPORT_FAILED);
}

#[test]
fn test_run_import_writes_output_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let csv = dir.path().join("user.csv");
    let schema = dir.path().join("user.xml");
    let mapping = dir.path().join("user.json");
    let output = dir.path().join("rows.jsonl");
    fs::write(&csv, "1,alice\n2,bob\n").expect("write csv");
    fs::write(
        &schema,
        r#"<resultset>
          <row><field name="Field">userid</field></row>
          <row><field name="Field">nickname</field></row>
        </resultset>"#,
    )
    .expect("write schema");
    fs::write(
        &mapping,
        r#"{"table": "user", "columns": {"userid": "columns:userid"}}"#,
    )
    .expect("write mapping");

    let cli = Cli::try_parse_from([
        "csvload",
        csv.to_str().unwrap(),
        schema.to_str().unwrap(),
        mapping.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .expect("parse args");
    let outcome = run_import(&cli).expect("run import");
    assert_eq!(outcome.summary.rows, 2);
    assert_eq!(outcome.summary.table, "user");
    assert_eq!(outcome.output.as_deref(), Some(output.as_path()));

    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(written.lines().count(), 2);
}

#[test]
fn test_run_import_validate_only() {
    let dir = tempfile::tempdir().expect("temp dir");
    let csv = dir.path().join("user.csv");
    let schema = dir.path().join("user.xml");
    let mapping = dir.path().join("user.json");
    fs::write(&csv, "1,alice\n").expect("write csv");
    fs::write(
        &schema,
        r#"<resultset><row><field name="Field">userid</field></row></resultset>"#,
    )
    .expect("write schema");
    fs::write(
        &mapping,
        r#"{"table": "user", "columns": {"userid": "columns:userid"}}"#,
    )
    .expect("write mapping");

    let cli = Cli::try_parse_from([
        "csvload",
        csv.to_str().unwrap(),
        schema.to_str().unwrap(),
        mapping.to_str().unwrap(),
    ])
    .expect("parse args");
    let outcome = run_import(&cli).expect("run import");
    assert_eq!(outcome.summary.rows, 1);
    assert!(outcome.output.is_none());
}
