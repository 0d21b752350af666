//! Destination sinks for mapped rows.
//!
//! The destination store itself is pluggable: the importer hands every
//! mapped row to a [`RowSink`] and promises nothing about isolation,
//! batching, or retry.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// One row after column mapping, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedRow {
    /// Destination column / value pairs.
    pub cells: Vec<(String, String)>,
}

/// Receives mapped rows destined for a table.
pub trait RowSink {
    fn write_row(&mut self, table: &str, row: &MappedRow) -> Result<()>;

    /// Flush any buffered state once the import loop completes.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Sink that drops every row; used for validate-only runs.
#[derive(Debug, Default)]
pub struct DiscardSink;

impl RowSink for DiscardSink {
    fn write_row(&mut self, _table: &str, _row: &MappedRow) -> Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    table: &'a str,
    cells: BTreeMap<&'a str, &'a str>,
}

/// Sink writing one JSON object per mapped row.
pub struct JsonLinesSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JsonLinesSink {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("create output file: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSink for JsonLinesSink {
    fn write_row(&mut self, table: &str, row: &MappedRow) -> Result<()> {
        let record = JsonRecord {
            table,
            cells: row
                .cells
                .iter()
                .map(|(column, value)| (column.as_str(), value.as_str()))
                .collect(),
        };
        serde_json::to_writer(&mut self.writer, &record)
            .with_context(|| format!("write row to {}", self.path.display()))?;
        self.writer
            .write_all(b"\n")
            .with_context(|| format!("write row to {}", self.path.display()))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("flush output file: {}", self.path.display()))
    }
}
