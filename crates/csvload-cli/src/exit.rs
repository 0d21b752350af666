//! Process exit codes.
//!
//! Codes 1 through 4 keep their historical meaning (usage, then one code
//! per missing input, in argument order); deeper parse and validation
//! failures get their own codes.

use csvload_core::{ImporterError, InputKind};

pub const USAGE: i32 = 1;
pub const MISSING_CSV: i32 = 2;
pub const MISSING_SCHEMA: i32 = 3;
pub const MISSING_MAPPING: i32 = 4;
pub const INVALID_SCHEMA: i32 = 5;
pub const INVALID_MAPPING: i32 = 6;
pub const IMPORT_FAILED: i32 = 7;

/// Map an import failure to its process exit code.
pub fn exit_code_for(error: &ImporterError) -> i32 {
    match error {
        ImporterError::MissingInput {
            kind: InputKind::Csv,
            ..
        } => MISSING_CSV,
        ImporterError::MissingInput {
            kind: InputKind::Schema,
            ..
        } => MISSING_SCHEMA,
        ImporterError::MissingInput {
            kind: InputKind::Mapping,
            ..
        } => MISSING_MAPPING,
        ImporterError::Schema(_) => INVALID_SCHEMA,
        ImporterError::Mapping(_) | ImporterError::UnknownSourceColumn { .. } => INVALID_MAPPING,
        ImporterError::Import(_) => IMPORT_FAILED,
    }
}
