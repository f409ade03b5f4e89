//! CSV export, one row per record.

use std::io;

use super::ExportError;
use crate::enrich::EnrichedRecord;

const HEADER: &[&str] = &["time", "place", "title", "summary", "language", "priority"];

/// Writes a header row followed by one row per record.
pub fn write_csv<W: io::Write>(writer: W, records: &[EnrichedRecord]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for r in records {
        csv_writer.write_record([
            r.record.time.as_str(),
            r.record.place.as_str(),
            r.record.title.as_str(),
            r.summary.as_str(),
            r.language_label.as_str(),
            r.priority.label(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
