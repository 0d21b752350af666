//! Error types for document readers.

use std::path::PathBuf;

use thiserror::Error;

use csvload_model::ModelError;

/// Failures while reading a table-schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read schema document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("schema document is not well-formed: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Attribute or text content that could not be decoded.
    #[error("schema row {row}: {message}")]
    Decode { row: usize, message: String },
    #[error("schema row {row} has a field with no 'name' attribute")]
    UnnamedField { row: usize },
    #[error("schema row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: ModelError,
    },
}

impl SchemaError {
    pub(crate) fn decode(row: usize, error: impl std::fmt::Display) -> Self {
        Self::Decode {
            row,
            message: error.to_string(),
        }
    }
}

/// Failures while reading a mapping document.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("failed to read mapping document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse mapping document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid mapping: {0}")]
    Invalid(#[from] ModelError),
}
