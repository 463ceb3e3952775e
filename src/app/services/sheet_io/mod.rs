//! Spreadsheet reading and writing
//!
//! The input is a CSV whose header names one address column; every other
//! column is opaque passthrough data. The output is the same sheet with
//! coordinate and status columns, reusing existing `X`/`Y`/`Status` columns
//! when the operator's sheet already has them.
//!
//! - [`reader`] - header resolution and row iteration
//! - [`writer`] - output schema, row padding, and `_geocoded` file naming

pub mod reader;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use reader::SheetReader;
pub use writer::{derive_output_path, SheetWriter};
