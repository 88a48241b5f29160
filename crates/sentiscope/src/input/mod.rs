//! CSV upload ingestion.

mod parser;
mod source;

pub use parser::{CsvIngest, ParserConfig};
pub use source::IngestOutcome;
