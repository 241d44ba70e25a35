//! # gridbase-csv
//!
//! CSV and JSON interchange for gridbase tables: export a table with its
//! column names as the header, and import files back into rows shaped for
//! an existing table's columns.

mod error;
mod export;
mod import;

pub use error::{CsvError, CsvResult};
pub use export::TableExporter;
pub use import::{ImportOutcome, ParsedCsv, TableImporter};
