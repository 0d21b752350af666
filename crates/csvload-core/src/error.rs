//! Error types for import construction and execution.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use csvload_ingest::{MappingError, SchemaError};

/// Which of the three input files an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Csv,
    Schema,
    Mapping,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv file"),
            Self::Schema => write!(f, "schema document"),
            Self::Mapping => write!(f, "mapping document"),
        }
    }
}

/// Failures while constructing or running an import.
#[derive(Debug, Error)]
pub enum ImporterError {
    #[error("{kind} does not exist: {}", path.display())]
    MissingInput { kind: InputKind, path: PathBuf },
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Mapping(#[from] MappingError),
    /// Strict-mode cross-check: a mapping key with no schema counterpart.
    #[error("mapping references source column '{column}' not present in the schema")]
    UnknownSourceColumn { column: String },
    #[error(transparent)]
    Import(#[from] anyhow::Error),
}
