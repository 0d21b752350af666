//! Source column descriptors parsed from a table-schema document.
//!
//! A `describe <table>` dump yields one row per column, each row a set of
//! attribute name/value pairs. The attribute named [`COLUMN_NAME_KEY`]
//! carries the column's own name and is the only attribute a descriptor is
//! required to have.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Reserved attribute key whose value is the source column name.
pub const COLUMN_NAME_KEY: &str = "Field";

/// All attributes of one source column, keyed by attribute name.
///
/// Immutable once constructed; construction guarantees the reserved
/// column-name attribute is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    attributes: BTreeMap<String, String>,
}

impl ColumnDescriptor {
    /// Build a descriptor from parsed attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingColumnName`] (carrying the partial
    /// attribute set) when the reserved key is absent.
    pub fn from_attributes(attributes: BTreeMap<String, String>) -> Result<Self, ModelError> {
        if !attributes.contains_key(COLUMN_NAME_KEY) {
            return Err(ModelError::MissingColumnName {
                key: COLUMN_NAME_KEY,
                attributes,
            });
        }
        Ok(Self { attributes })
    }

    /// The source column name (value of the reserved attribute).
    pub fn name(&self) -> &str {
        self.attributes
            .get(COLUMN_NAME_KEY)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Look up an attribute value by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// All attributes, keyed by attribute name.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

/// Ordered column descriptors for one source table.
///
/// Row order in the schema document is preserved; it matters for display
/// and for pairing positional CSV cells with columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    columns: Vec<ColumnDescriptor>,
}

impl TableSchema {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter()
    }

    /// Column names in schema order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(ColumnDescriptor::name)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name() == name)
    }
}
