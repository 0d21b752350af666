pub mod error;
pub mod importer;
pub mod sink;

pub use error::{ImporterError, InputKind};
pub use importer::{ColumnOutcome, ImportSummary, Importer};
pub use sink::{DiscardSink, JsonLinesSink, MappedRow, RowSink};
