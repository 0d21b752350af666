//! Import construction and the row write loop.

use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span};

use csvload_ingest::{read_csv_table, read_mapping, read_schema};
use csvload_model::{ImportMapping, ImportOptions, SchemaCheckMode, TableSchema};

use crate::error::{ImporterError, InputKind};
use crate::sink::{MappedRow, RowSink};

/// Mapping outcome for one schema column, for reporting.
#[derive(Debug, Clone)]
pub struct ColumnOutcome {
    /// Source column name from the schema.
    pub source: String,
    /// Declared type attribute, when the schema carries one.
    pub data_type: Option<String>,
    /// Destination column, or `None` when the column is dropped.
    pub destination: Option<String>,
}

/// Counts and per-column outcomes of one import run.
#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub table: String,
    pub rows: usize,
    pub cells_written: usize,
    /// Cells beyond the schema width, dropped without a column identity.
    pub dropped_cells: usize,
    pub columns: Vec<ColumnOutcome>,
}

/// A fully validated import: CSV path, schema, and mapping.
///
/// Construction is atomic. Either every input exists and parses and the
/// instance is returned, or an error is raised and no instance exists.
#[derive(Debug, Clone)]
pub struct Importer {
    csv: PathBuf,
    schema: TableSchema,
    mapping: ImportMapping,
}

impl Importer {
    /// Validate all three inputs and build an importer.
    ///
    /// Existence is checked in argument order (CSV, schema, mapping), then
    /// the schema and mapping documents are parsed and validated. Under
    /// [`SchemaCheckMode::Strict`] every mapping key must name a schema
    /// column.
    pub fn open(
        csv: &Path,
        schema: &Path,
        mapping: &Path,
        options: ImportOptions,
    ) -> Result<Self, ImporterError> {
        for (kind, path) in [
            (InputKind::Csv, csv),
            (InputKind::Schema, schema),
            (InputKind::Mapping, mapping),
        ] {
            if !path.exists() {
                return Err(ImporterError::MissingInput {
                    kind,
                    path: path.to_path_buf(),
                });
            }
        }
        let schema = read_schema(schema)?;
        let mapping = read_mapping(mapping)?;
        if options.schema_check == SchemaCheckMode::Strict {
            for column in mapping.columns().keys() {
                if !schema.contains_column(column) {
                    return Err(ImporterError::UnknownSourceColumn {
                        column: column.clone(),
                    });
                }
            }
        }
        Ok(Self {
            csv: csv.to_path_buf(),
            schema,
            mapping,
        })
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn mapping(&self) -> &ImportMapping {
        &self.mapping
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv
    }

    /// Run the sequential iterate-map-write loop.
    ///
    /// Cells pair positionally with schema columns; columns without a
    /// mapping entry are dropped, values are copied unchanged, and each
    /// mapped row goes to the sink under the mapping's table name.
    pub fn run(&self, sink: &mut dyn RowSink) -> Result<ImportSummary, ImporterError> {
        let span = info_span!("import", table = self.mapping.table());
        let _guard = span.enter();

        let table = read_csv_table(&self.csv)?;
        let mut rows = 0usize;
        let mut cells_written = 0usize;
        let mut dropped_cells = 0usize;
        for record in &table.rows {
            let mut cells = Vec::new();
            for (index, value) in record.iter().enumerate() {
                let Some(column) = self.schema.columns().get(index) else {
                    // Cells past the schema width have no column identity.
                    dropped_cells += record.len() - index;
                    break;
                };
                if let Some(destination) = self.mapping.destination_for(column.name()) {
                    cells.push((destination.to_string(), value.clone()));
                }
            }
            let row = MappedRow { cells };
            cells_written += row.cells.len();
            sink.write_row(self.mapping.table(), &row)?;
            rows += 1;
            if rows % 10_000 == 0 {
                debug!(rows, "imported");
            }
        }
        sink.finish()?;
        if dropped_cells > 0 {
            debug!(dropped_cells, "cells beyond the schema width were dropped");
        }
        info!(rows, cells = cells_written, "import complete");

        Ok(ImportSummary {
            table: self.mapping.table().to_string(),
            rows,
            cells_written,
            dropped_cells,
            columns: self.column_outcomes(),
        })
    }

    /// Per-column mapping outcomes in schema order.
    pub fn column_outcomes(&self) -> Vec<ColumnOutcome> {
        self.schema
            .iter()
            .map(|column| ColumnOutcome {
                source: column.name().to_string(),
                data_type: column.get("Type").map(String::from),
                destination: self
                    .mapping
                    .destination_for(column.name())
                    .map(String::from),
            })
            .collect()
    }
}
