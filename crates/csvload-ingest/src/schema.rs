//! Table-schema document reader.
//!
//! The schema is the XML form of a `describe <table>` statement, e.g.
//! `mysql --xml -e "describe user;"`:
//!
//! ```xml
//! <resultset statement="describe user">
//!   <row>
//!     <field name="Field">userid</field>
//!     <field name="Type">int(10) unsigned</field>
//!     <field name="Default" xsi:nil="true" />
//!   </row>
//! </resultset>
//! ```
//!
//! Each `row` element becomes one [`ColumnDescriptor`] keyed by the `name`
//! attribute of its `field` children. Fields with absent or empty text are
//! omitted from the descriptor rather than stored as empty strings. A row
//! without the reserved column-name attribute fails the whole read.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::Event;
use tracing::debug;

use csvload_model::{ColumnDescriptor, TableSchema};

use crate::error::SchemaError;

/// Read a table schema from a file.
pub fn read_schema(path: &Path) -> Result<TableSchema, SchemaError> {
    let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_schema_str(&content)
}

/// Read a table schema from XML content.
pub fn read_schema_str(content: &str) -> Result<TableSchema, SchemaError> {
    let mut reader = Reader::from_str(content);
    let mut columns = Vec::new();
    let mut row = 0usize;
    let mut in_row = false;
    let mut attributes: BTreeMap<String, String> = BTreeMap::new();

    loop {
        match reader.read_event()? {
            Event::Start(element) => match element.local_name().as_ref() {
                b"row" => {
                    row += 1;
                    in_row = true;
                    attributes.clear();
                }
                b"field" if in_row => {
                    let attribute = element
                        .try_get_attribute("name")
                        .map_err(|error| SchemaError::decode(row, error))?
                        .ok_or(SchemaError::UnnamedField { row })?;
                    let key = attribute
                        .unescape_value()
                        .map_err(|error| SchemaError::decode(row, error))?
                        .into_owned();
                    let raw = reader.read_text(element.name())?;
                    let value = unescape(&raw)
                        .map_err(|error| SchemaError::decode(row, error))?;
                    let value = value.trim();
                    if !value.is_empty() {
                        attributes.insert(key, value.to_string());
                    }
                }
                _ => {}
            },
            Event::Empty(element) => match element.local_name().as_ref() {
                // An empty row has no fields, so it cannot name its column.
                b"row" => {
                    row += 1;
                    finish_row(row, BTreeMap::new(), &mut columns)?;
                }
                // A self-closed field carries no value; the attribute is omitted.
                b"field" => {}
                _ => {}
            },
            Event::End(element) => {
                if element.local_name().as_ref() == b"row" && in_row {
                    in_row = false;
                    finish_row(row, std::mem::take(&mut attributes), &mut columns)?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(columns = columns.len(), "parsed schema document");
    Ok(TableSchema::new(columns))
}

fn finish_row(
    row: usize,
    attributes: BTreeMap<String, String>,
    columns: &mut Vec<ColumnDescriptor>,
) -> Result<(), SchemaError> {
    let descriptor = ColumnDescriptor::from_attributes(attributes)
        .map_err(|source| SchemaError::Row { row, source })?;
    columns.push(descriptor);
    Ok(())
}
