//! Mapping document reader.
//!
//! The mapping is a JSON object naming the destination table and the
//! source-to-destination column renames:
//!
//! ```json
//! {"table": "user", "columns": {"userid": "columns:userid"}}
//! ```
//!
//! Only columns mentioned here make it into the destination table. Extra
//! top-level fields are tolerated.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use csvload_model::ImportMapping;

use crate::error::MappingError;

#[derive(Debug, Deserialize)]
struct MappingDoc {
    table: String,
    columns: BTreeMap<String, String>,
}

/// Read a column mapping from a file.
pub fn read_mapping(path: &Path) -> Result<ImportMapping, MappingError> {
    let content = fs::read_to_string(path).map_err(|source| MappingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_mapping_str(&content)
}

/// Read a column mapping from JSON content.
pub fn read_mapping_str(content: &str) -> Result<ImportMapping, MappingError> {
    let doc: MappingDoc = serde_json::from_str(content)?;
    let mapping = ImportMapping::new(doc.table, doc.columns)?;
    debug!(
        table = mapping.table(),
        columns = mapping.len(),
        "parsed mapping document"
    );
    Ok(mapping)
}
