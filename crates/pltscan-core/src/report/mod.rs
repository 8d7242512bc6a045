//! Report Writer — serialises records into a BOM-prefixed UTF-8 CSV file.
//!
//! The BOM lets spreadsheet applications detect the encoding so non-ASCII
//! directory names survive a round trip. Rows use standard minimal quoting
//! and CRLF terminators.

use crate::error::ScanError;
use crate::model::{Layout, Record};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// An open report. Buffered rows are flushed when this is finished or dropped.
pub struct ReportWriter {
    path: PathBuf,
    layout: Layout,
    csv: csv::Writer<BufWriter<File>>,
    rows: u64,
}

impl ReportWriter {
    /// Create (or truncate) the report at `path` and write the header row.
    pub fn create(path: &Path, layout: Layout) -> Result<Self, ScanError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ScanError::CreateOutputDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = File::create(path).map_err(|source| ScanError::OpenReport {
            path: path.to_path_buf(),
            source,
        })?;
        let mut out = BufWriter::new(file);
        out.write_all(UTF8_BOM)?;

        let mut csv = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::CRLF)
            .from_writer(out);
        csv.write_record(layout.header())?;

        Ok(Self {
            path: path.to_path_buf(),
            layout,
            csv,
            rows: 0,
        })
    }

    pub fn write(&mut self, record: &Record) -> Result<(), ScanError> {
        self.csv.write_record(record.row(self.layout))?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush everything to disk and return the final file size in bytes.
    pub fn finish(mut self) -> Result<u64, ScanError> {
        self.csv.flush()?;
        Ok(fs::metadata(&self.path)?.len())
    }
}
