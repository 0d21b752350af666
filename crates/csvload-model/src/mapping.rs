//! Destination table name and column rename table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Where mapped rows go: a destination table plus a source-to-destination
/// column rename table.
///
/// Destination identifiers are opaque strings; a store that addresses
/// columns as `family:qualifier` simply uses that full form as the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMapping {
    table: String,
    columns: BTreeMap<String, String>,
}

impl ImportMapping {
    /// Validate and build a mapping.
    ///
    /// Every key and value must be non-empty; the first violation wins.
    ///
    /// # Errors
    ///
    /// [`ModelError::EmptyTableName`] for an empty table name,
    /// [`ModelError::EmptyColumnKey`] for an empty source column, and
    /// [`ModelError::EmptyColumnValue`] (naming the key) for an empty
    /// destination.
    pub fn new(
        table: impl Into<String>,
        columns: BTreeMap<String, String>,
    ) -> Result<Self, ModelError> {
        let table = table.into();
        if table.is_empty() {
            return Err(ModelError::EmptyTableName);
        }
        for (key, value) in &columns {
            if key.is_empty() {
                return Err(ModelError::EmptyColumnKey);
            }
            if value.is_empty() {
                return Err(ModelError::EmptyColumnValue { key: key.clone() });
            }
        }
        Ok(Self { table, columns })
    }

    /// Destination table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The full rename table.
    pub fn columns(&self) -> &BTreeMap<String, String> {
        &self.columns
    }

    /// Destination column for a source column, if one is mapped.
    pub fn destination_for(&self, source: &str) -> Option<&str> {
        self.columns.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
