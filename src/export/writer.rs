//! Row writer for classification results.
//!
//! Writes the header once, then one row per [`DomainResult`], flushing after
//! every row so output streams as domains are classified.

use std::io::Write;

use anyhow::{anyhow, Context, Result};

use crate::config::{OutputFormat, CSV_HEADER, LOOKUP_ERROR_COLUMNS};
use crate::models::DomainResult;

enum Sink<W: Write> {
    Plain(W),
    Quoted(csv::Writer<W>),
    Jsonl(W),
}

/// Streams results in one of the [`OutputFormat`]s.
pub struct RecordWriter<W: Write> {
    sink: Sink<W>,
    lookup_errors: bool,
    header_written: bool,
}

impl<W: Write> RecordWriter<W> {
    /// Creates a writer. With `lookup_errors`, CSV output gets three extra
    /// columns flagging failed lookups.
    pub fn new(inner: W, format: OutputFormat, lookup_errors: bool) -> Self {
        let sink = match format {
            OutputFormat::Csv => Sink::Plain(inner),
            OutputFormat::QuotedCsv => Sink::Quoted(
                csv::WriterBuilder::new()
                    .terminator(csv::Terminator::Any(b'\n'))
                    .from_writer(inner),
            ),
            OutputFormat::Jsonl => Sink::Jsonl(inner),
        };
        Self {
            sink,
            lookup_errors,
            header_written: false,
        }
    }

    fn header(&self) -> Vec<String> {
        let mut columns: Vec<String> = CSV_HEADER.iter().map(|c| c.to_string()).collect();
        if self.lookup_errors {
            columns.extend(LOOKUP_ERROR_COLUMNS.iter().map(|c| c.to_string()));
        }
        columns
    }

    fn fields(&self, result: &DomainResult) -> Vec<String> {
        let mut fields = vec![
            result.domain.clone(),
            result.has_mx.to_string(),
            result.has_spf.to_string(),
            result.spf_record.clone(),
            result.has_dmarc.to_string(),
            result.dmarc_record.clone(),
        ];
        if self.lookup_errors {
            let failures = result.lookup_failures;
            fields.push(failures.mx.to_string());
            fields.push(failures.spf.to_string());
            fields.push(failures.dmarc.to_string());
        }
        fields
    }

    /// Writes the header row. Does nothing after the first call, and nothing
    /// at all for JSONL.
    pub fn write_header(&mut self) -> Result<()> {
        if self.header_written {
            return Ok(());
        }
        let header = self.header();
        match &mut self.sink {
            Sink::Plain(w) => writeln!(w, "{}", header.join(",")).context("Failed to write header")?,
            Sink::Quoted(w) => w.write_record(&header).context("Failed to write header")?,
            Sink::Jsonl(_) => {}
        }
        self.header_written = true;
        self.flush()
    }

    /// Writes one result row and flushes it.
    ///
    /// In `Csv` format the record text is written as is: a record containing a
    /// comma shifts the columns of that row. Use `QuotedCsv` to avoid that.
    pub fn write_result(&mut self, result: &DomainResult) -> Result<()> {
        self.write_header()?;
        let fields = self.fields(result);
        match &mut self.sink {
            Sink::Plain(w) => writeln!(w, "{}", fields.join(","))
                .with_context(|| format!("Failed to write row for {}", result.domain))?,
            Sink::Quoted(w) => w
                .write_record(&fields)
                .with_context(|| format!("Failed to write row for {}", result.domain))?,
            Sink::Jsonl(w) => {
                serde_json::to_writer(&mut *w, result)
                    .with_context(|| format!("Failed to serialize row for {}", result.domain))?;
                writeln!(w)?;
            }
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        let flushed = match &mut self.sink {
            Sink::Plain(w) | Sink::Jsonl(w) => w.flush(),
            Sink::Quoted(w) => w.flush(),
        };
        flushed.context("Failed to flush output")
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        match self.sink {
            Sink::Plain(w) | Sink::Jsonl(w) => Ok(w),
            Sink::Quoted(w) => w
                .into_inner()
                .map_err(|e| anyhow!("Failed to flush CSV writer: {}", e.error())),
        }
    }
}
