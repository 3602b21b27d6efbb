//! Markdown output formatter

use super::{FileReport, OutputFormatter, Report, TokenRecord};
use anyhow::Result;
use std::io::Write;

/// One section per file with a numbered list of matches or tokens
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    item_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            item_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn write_report(&mut self, report: &FileReport) -> Result<()> {
        writeln!(self.writer, "## {}", report.path)?;
        writeln!(self.writer)?;

        match &report.report {
            Report::Matches(records) => {
                for (index, record) in records.iter().enumerate() {
                    write!(
                        self.writer,
                        "{}. `{}` at {}:{}",
                        index + 1,
                        record.keyword,
                        record.start,
                        record.end
                    )?;
                    if let Some(payload) = &record.payload {
                        write!(self.writer, " ({payload})")?;
                    }
                    writeln!(self.writer)?;
                }
            }
            Report::Tokens(records) => {
                for (index, record) in records.iter().enumerate() {
                    match record {
                        TokenRecord::Match(matched) => writeln!(
                            self.writer,
                            "{}. **{}**",
                            index + 1,
                            matched.text.escape_debug()
                        )?,
                        TokenRecord::Fragment { text } => {
                            writeln!(self.writer, "{}. {}", index + 1, text.escape_debug())?
                        }
                    }
                }
            }
        }

        writeln!(self.writer)?;
        self.item_count += report.report.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total items: {}*", self.item_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
