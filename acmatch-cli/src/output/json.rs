//! JSON output formatter

use super::{FileReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Collects every file report and writes one JSON array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<FileReport>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_report(&mut self, report: &FileReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
