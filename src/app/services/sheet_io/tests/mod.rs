//! Test utilities for spreadsheet IO

use std::io::Write;

use tempfile::NamedTempFile;

// Test modules
mod reader_tests;

/// Write CSV content to a temporary file
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::with_suffix(".csv").unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// A small three-column fixture sheet
pub fn sample_sheet() -> String {
    "Permit,Address,Owner\n\
     P-1,123 Main St,Ada\n\
     P-2,Lot 5 Block 2 Sherwood Forest,Ben\n\
     P-3,PO Box 12,Cal\n"
        .to_string()
}
