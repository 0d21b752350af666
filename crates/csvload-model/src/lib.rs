pub mod descriptor;
pub mod error;
pub mod mapping;
pub mod options;

pub use descriptor::{COLUMN_NAME_KEY, ColumnDescriptor, TableSchema};
pub use error::ModelError;
pub use mapping::ImportMapping;
pub use options::{ImportOptions, SchemaCheckMode};
