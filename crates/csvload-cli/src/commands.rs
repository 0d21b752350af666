use std::path::PathBuf;

use tracing::info;

use csvload_core::{DiscardSink, ImportSummary, Importer, ImporterError, JsonLinesSink};
use csvload_model::ImportOptions;

use crate::cli::Cli;

/// Result of a completed import run.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub summary: ImportSummary,
    /// Output path, when rows were written rather than just validated.
    pub output: Option<PathBuf>,
}

pub fn run_import(cli: &Cli) -> Result<ImportOutcome, ImporterError> {
    let options = if cli.strict {
        ImportOptions::strict()
    } else {
        ImportOptions::new()
    };
    let importer = Importer::open(&cli.csv_file, &cli.table_schema, &cli.mapping, options)?;
    info!(
        table = importer.mapping().table(),
        columns = importer.schema().len(),
        mapped = importer.mapping().len(),
        "inputs validated"
    );

    let summary = match &cli.output {
        Some(path) => {
            let mut sink = JsonLinesSink::create(path)?;
            importer.run(&mut sink)?
        }
        None => importer.run(&mut DiscardSink)?,
    };

    Ok(ImportOutcome {
        summary,
        output: cli.output.clone(),
    })
}
