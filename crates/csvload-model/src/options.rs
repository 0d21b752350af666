//! Configuration options for import construction.

use serde::{Deserialize, Serialize};

/// Whether mapping keys must name columns that exist in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchemaCheckMode {
    /// Reject a mapping that references a column absent from the schema.
    Strict,
    /// Accept unknown mapping keys silently.
    #[default]
    Lenient,
}

/// Options controlling import validation behavior.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Cross-check of mapping keys against schema column names.
    pub schema_check: SchemaCheckMode,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options that reject mappings referencing unknown columns.
    pub fn strict() -> Self {
        Self {
            schema_check: SchemaCheckMode::Strict,
        }
    }
}
