//! Plain text output formatter

use super::{FileReport, OutputFormatter, Report, TokenRecord};
use anyhow::Result;
use std::io::Write;

/// Tab-separated lines
///
/// Matches print as `start:end<TAB>keyword[<TAB>payload]`, tokens as
/// `M<TAB>text` or `F<TAB>text` with control characters escaped.
pub struct TextFormatter<W: Write> {
    writer: W,
    with_headers: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, with_headers: bool) -> Self {
        Self {
            writer,
            with_headers,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_report(&mut self, report: &FileReport) -> Result<()> {
        if self.with_headers {
            writeln!(self.writer, "==> {} <==", report.path)?;
        }

        match &report.report {
            Report::Matches(records) => {
                for record in records {
                    write!(self.writer, "{}:{}\t{}", record.start, record.end, record.keyword)?;
                    if let Some(payload) = &record.payload {
                        write!(self.writer, "\t{payload}")?;
                    }
                    writeln!(self.writer)?;
                }
            }
            Report::Tokens(records) => {
                for record in records {
                    let tag = match record {
                        TokenRecord::Match(_) => 'M',
                        TokenRecord::Fragment { .. } => 'F',
                    };
                    writeln!(self.writer, "{tag}\t{}", record.text().escape_debug())?;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
