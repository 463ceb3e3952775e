//! Tests for input spreadsheet reading

use super::{create_temp_csv, sample_sheet};
use crate::app::services::sheet_io::SheetReader;
use crate::Error;

#[test]
fn resolves_address_column_and_reads_rows() {
    let file = create_temp_csv(&sample_sheet());
    let mut reader = SheetReader::open(file.path(), "Address").unwrap();

    assert_eq!(reader.header(), &["Permit", "Address", "Owner"]);
    assert_eq!(reader.address_index(), 1);

    let rows = reader.read_rows().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].field(1), "123 Main St");
    assert_eq!(rows[1].field(1), "Lot 5 Block 2 Sherwood Forest");
    assert_eq!(rows[2].fields, vec!["P-3", "PO Box 12", "Cal"]);
}

#[test]
fn missing_address_column_is_fatal() {
    let file = create_temp_csv("Permit,Location\nP-1,somewhere\n");
    let err = SheetReader::open(file.path(), "Address").unwrap_err();
    assert!(matches!(err, Error::MissingAddressColumn { ref column, .. } if column == "Address"));
}

#[test]
fn header_whitespace_is_trimmed() {
    let file = create_temp_csv("Permit, Address \nP-1,123 Main St\n");
    let reader = SheetReader::open(file.path(), "Address").unwrap();
    assert_eq!(reader.address_index(), 1);
}

#[test]
fn short_rows_are_kept_short() {
    let file = create_temp_csv("Permit,Address,Owner\nP-1,123 Main St\n");
    let mut reader = SheetReader::open(file.path(), "Address").unwrap();
    let rows = reader.read_rows().unwrap();
    assert_eq!(rows[0].fields.len(), 2);
    // Missing trailing fields read back as empty
    assert_eq!(rows[0].field(2), "");
}

#[test]
fn nonexistent_file_is_io_error() {
    let err = SheetReader::open(std::path::Path::new("/no/such/file.csv"), "Address").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
