//! Input spreadsheet reading
//!
//! Opens the source CSV, resolves the address column from the header once,
//! and yields each data row as an immutable [`RawRow`]. A sheet without the
//! designated address column is unusable and aborts the run.

use std::fs::File;
use std::path::Path;

use crate::app::models::RawRow;
use crate::{Error, Result};

/// Reader over one input spreadsheet
#[derive(Debug)]
pub struct SheetReader {
    header: Vec<String>,
    address_index: usize,
    reader: csv::Reader<File>,
    file_name: String,
}

impl SheetReader {
    /// Open a CSV file and locate `address_column` in its header.
    ///
    /// Column matching is exact on the trimmed header text, mirroring how the
    /// sheets are produced upstream.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the file cannot be opened.
    /// - [`Error::Csv`] if the header cannot be read.
    /// - [`Error::MissingAddressColumn`] if no column matches.
    pub fn open(path: &Path, address_column: &str) -> Result<Self> {
        let file_name = path.display().to_string();
        let file = File::open(path)
            .map_err(|e| Error::io(format!("cannot open spreadsheet '{}'", file_name), e))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let header: Vec<String> = reader
            .headers()
            .map_err(|e| Error::csv(&file_name, "failed to read header row", Some(e)))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let address_index = header
            .iter()
            .position(|h| h == address_column)
            .ok_or_else(|| Error::missing_address_column(&file_name, address_column))?;

        Ok(Self {
            header,
            address_index,
            reader,
            file_name,
        })
    }

    /// The trimmed header row
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Index of the address column within the header
    pub fn address_index(&self) -> usize {
        self.address_index
    }

    /// Read all remaining data rows.
    ///
    /// Short rows are kept short (the writer pads them); a malformed CSV
    /// record is a batch-fatal error since it means the file itself is
    /// damaged, not just one address.
    pub fn read_rows(&mut self) -> Result<Vec<RawRow>> {
        let mut rows = Vec::new();
        for record in self.reader.records() {
            let record = record
                .map_err(|e| Error::csv(&self.file_name, "malformed CSV record", Some(e)))?;
            rows.push(RawRow::new(record.iter().map(|f| f.to_string()).collect()));
        }
        Ok(rows)
    }
}
