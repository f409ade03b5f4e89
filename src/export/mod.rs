//! Presentation and export of enriched records.
//!
//! One row per record, columns {time, place, title, summary, language,
//! priority} in every format. The table renderer targets stdout; CSV and
//! JSON write to any `io::Write`.

mod filename;
mod sheet;
mod table;

use std::io;

use crate::enrich::EnrichedRecord;

pub use filename::default_output_name;
pub use sheet::write_csv;
pub use table::render_table;

/// Errors from export serialization.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the enriched records as a pretty-printed JSON array.
pub fn write_json<W: io::Write>(writer: W, records: &[EnrichedRecord]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}
