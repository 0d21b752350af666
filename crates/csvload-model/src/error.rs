use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A schema row was parsed without the reserved column-name attribute.
    #[error("no '{key}' attribute in {attributes:?}")]
    MissingColumnName {
        key: &'static str,
        attributes: BTreeMap<String, String>,
    },
    #[error("mapping table name is empty")]
    EmptyTableName,
    #[error("mapping column key is empty")]
    EmptyColumnKey,
    #[error("mapping column '{key}' value is empty")]
    EmptyColumnValue { key: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
