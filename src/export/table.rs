//! Plain-text table rendering for the terminal.

use std::io;

use crate::enrich::EnrichedRecord;

/// Column cap so one long title doesn't blow up the whole table.
const MAX_CELL_WIDTH: usize = 48;

const COLUMNS: &[&str] = &["#", "priority", "time", "place", "title", "summary", "lang"];

/// Renders an aligned table of all records, one line per record.
pub fn render_table<W: io::Write>(mut writer: W, records: &[EnrichedRecord]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                r.priority.label().to_string(),
                clip(&r.record.time),
                clip(&r.record.place),
                clip(&r.record.title),
                clip(&r.summary),
                clip(&r.language_label),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    write_row(&mut writer, COLUMNS.iter().map(|c| c.to_string()), &widths)?;
    write_separator(&mut writer, &widths)?;
    for row in rows {
        write_row(&mut writer, row.into_iter(), &widths)?;
    }
    Ok(())
}

fn clip(s: &str) -> String {
    let mut out = String::new();
    for (i, c) in s.chars().enumerate() {
        if i == MAX_CELL_WIDTH {
            out.push('…');
            return out;
        }
        out.push(c);
    }
    out
}

fn write_row<W: io::Write>(
    writer: &mut W,
    cells: impl Iterator<Item = String>,
    widths: &[usize],
) -> io::Result<()> {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
        .collect();
    writeln!(writer, "{}", line.join("  ").trim_end())
}

fn write_separator<W: io::Write>(writer: &mut W, widths: &[usize]) -> io::Result<()> {
    let line: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    writeln!(writer, "{}", line.join("  "))
}
