//! Output spreadsheet writing
//!
//! Reproduces the input schema and fills coordinate and status columns.
//! Existing `X`/`Y`/`Status` columns are reused in place so re-running the
//! tool over its own output does not keep appending columns; otherwise they
//! are appended to the header.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::app::models::{AnnotatedRow, RowOutcome};
use crate::config::ProcessingConfig;
use crate::{Error, Result};

/// Status text for successfully resolved rows
const STATUS_OK: &str = "ok";

/// Writer that appends coordinates and status to each annotated row
#[derive(Debug)]
pub struct SheetWriter {
    header: Vec<String>,
    x_index: usize,
    y_index: usize,
    status_index: usize,
}

impl SheetWriter {
    /// Build the output schema from the input header.
    ///
    /// Looks up each output column by its configured name, appending any that
    /// the input does not already carry.
    pub fn new(input_header: &[String], processing: &ProcessingConfig) -> Self {
        let mut header: Vec<String> = input_header.to_vec();
        let x_index = find_or_append(&mut header, &processing.x_column);
        let y_index = find_or_append(&mut header, &processing.y_column);
        let status_index = find_or_append(&mut header, &processing.status_column);
        Self {
            header,
            x_index,
            y_index,
            status_index,
        }
    }

    /// The output header row
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Write the header and all annotated rows to `path`.
    ///
    /// Skipped rows pass their fields through unmodified, with the skip
    /// reason in the status column and the coordinate cells left empty.
    ///
    /// # Errors
    ///
    /// Any I/O or CSV failure here is batch-fatal.
    pub fn write(&self, path: &Path, rows: &[AnnotatedRow]) -> Result<()> {
        let file_name = path.display().to_string();
        let file = File::create(path)
            .map_err(|e| Error::io(format!("cannot create output file '{}'", file_name), e))?;
        let mut writer = csv::Writer::from_writer(file);

        writer
            .write_record(&self.header)
            .map_err(|e| Error::csv(&file_name, "failed to write header", Some(e)))?;

        for annotated in rows {
            let record = self.render_row(annotated);
            writer
                .write_record(&record)
                .map_err(|e| Error::csv(&file_name, "failed to write row", Some(e)))?;
        }

        writer
            .flush()
            .map_err(|e| Error::io(format!("failed to flush output file '{}'", file_name), e))?;
        Ok(())
    }

    /// Pad a row to the output width and fill the annotation cells
    fn render_row(&self, annotated: &AnnotatedRow) -> Vec<String> {
        let mut record = annotated.row.fields.clone();
        record.resize(self.header.len(), String::new());

        match &annotated.outcome {
            RowOutcome::Resolved(point) => {
                record[self.x_index] = format_coordinate(point.x);
                record[self.y_index] = format_coordinate(point.y);
                record[self.status_index] = STATUS_OK.to_string();
            }
            RowOutcome::Skipped(reason) => {
                record[self.status_index] = reason.to_string();
            }
        }
        record
    }
}

/// Derive the output filename: `<stem><suffix>.<ext>` beside the input
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "csv".to_string());
    input.with_file_name(format!("{}{}.{}", stem, suffix, extension))
}

fn find_or_append(header: &mut Vec<String>, column: &str) -> usize {
    match header.iter().position(|h| h == column) {
        Some(index) => index,
        None => {
            header.push(column.to_string());
            header.len() - 1
        }
    }
}

/// Plain decimal output; trailing zeros trimmed the way the operator's
/// downstream tooling expects
fn format_coordinate(value: f64) -> String {
    let text = format!("{:.6}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
