pub mod csv_table;
pub mod error;
pub mod mapping;
pub mod schema;

pub use csv_table::{CsvTable, read_csv_table};
pub use error::{MappingError, SchemaError};
pub use mapping::{read_mapping, read_mapping_str};
pub use schema::{read_schema, read_schema_str};
