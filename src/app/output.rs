//! Record rendering for the CLI.

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::OutputFormat;
use crate::record::Record;

const TABLE_HEADER: [&str; 5] = ["NAME", "TTL", "CLASS", "TYPE", "DATA"];
const COLUMN_GAP: &str = "  ";

/// Renders records as aligned columns under a header row.
///
/// The data column is left unpadded since it is last and often long.
pub fn render_table(records: &[Record], color: bool) -> String {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.name().to_string(),
                r.ttl().to_string(),
                "IN".to_string(),
                r.record_type().to_string(),
                r.data().to_string(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let header = format_row(&TABLE_HEADER.map(String::from), &widths);
    let mut out = if color {
        header.bold().underline().to_string()
    } else {
        header
    };
    out.push('\n');

    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out
}

fn format_row(row: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::new();
    for (i, cell) in row.iter().enumerate().take(4) {
        line.push_str(&format!("{cell:<width$}", width = widths[i]));
        line.push_str(COLUMN_GAP);
    }
    line.push_str(&row[4]);
    line
}

/// Renders records in tab-separated zone-file column order, one per line.
pub fn render_zone(records: &[Record]) -> String {
    records.iter().map(|r| format!("{r}\n")).collect()
}

/// Renders records as a pretty-printed JSON array.
pub fn render_json(records: &[Record]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records).context("Failed to serialize records")?;
    json.push('\n');
    Ok(json)
}

/// Renders a single record for streaming output.
///
/// Tables can't be aligned before all rows are known, so `Table` streams as
/// zone lines. `Json` streams one compact object per line.
pub fn render_line(record: &Record, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table | OutputFormat::Zone => Ok(format!("{record}\n")),
        OutputFormat::Json => {
            let mut line =
                serde_json::to_string(record).context("Failed to serialize record")?;
            line.push('\n');
            Ok(line)
        }
    }
}

/// Where rendered records go: a file when `path` is given, stdout otherwise.
pub struct RecordWriter {
    out: Box<dyn Write>,
    color: bool,
}

impl RecordWriter {
    /// Opens the destination, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file {}", path.display()))?;
                Ok(Self {
                    out: Box::new(BufWriter::new(file)),
                    color: false,
                })
            }
            None => Ok(Self {
                out: Box::new(io::stdout()),
                color: io::stdout().is_terminal(),
            }),
        }
    }

    /// Writes a complete record list in `format`.
    pub fn write_records(&mut self, records: &[Record], format: OutputFormat) -> Result<()> {
        let rendered = match format {
            OutputFormat::Table => render_table(records, self.color),
            OutputFormat::Zone => render_zone(records),
            OutputFormat::Json => render_json(records)?,
        };
        self.out
            .write_all(rendered.as_bytes())
            .context("Failed to write records")?;
        self.flush()
    }

    /// Writes one record as soon as it arrives.
    pub fn write_record(&mut self, record: &Record, format: OutputFormat) -> Result<()> {
        self.out
            .write_all(render_line(record, format)?.as_bytes())
            .context("Failed to write record")?;
        self.flush()
    }

    /// Flushes buffered output.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("Failed to flush output")
    }
}
