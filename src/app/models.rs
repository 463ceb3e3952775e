//! Core data structures for address classification and row annotation.
//!
//! Defines the address pattern taxonomy, parsed address shapes, the raw and
//! annotated row representations flowing through the pipeline, and run
//! statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::app::services::address_parser::ParseError;

/// A plain coordinate pair in the service's spatial reference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which of the two recognized address patterns a string matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressClass {
    /// `<number> <name...> <suffix>` street address
    Street,
    /// `Lot <n> [Block <m>] <subdivision>` legal description
    LotBlock,
    /// Neither pattern; the row passes through unresolved
    Unrecognized,
}

/// Structured fields of a street address.
///
/// `street_name` keeps directional tokens (N, South, ...) in place exactly as
/// written; `suffix` is the canonical abbreviation from the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetAddress {
    pub house_number: u32,
    pub street_name: String,
    pub suffix: String,
}

impl StreetAddress {
    /// The single-line form sent to the street locator
    pub fn single_line(&self) -> String {
        format!("{} {} {}", self.house_number, self.street_name, self.suffix)
    }
}

/// Structured fields of a lot/block legal description.
///
/// Either number may be absent in the source text, but never both; no default
/// is invented for a missing lot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelDescriptor {
    pub lot: Option<u32>,
    pub block: Option<u32>,
    pub subdivision: String,
}

/// A successfully parsed address of either pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAddress {
    Street(StreetAddress),
    Parcel(ParcelDescriptor),
}

/// One input spreadsheet row, preserved verbatim for passthrough
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at `index`, or the empty string if the row is short
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Why a row was passed through unresolved.
///
/// Every variant is row-local and non-fatal; the `Display` text is what lands
/// in the output status column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Address text matches neither recognized pattern
    UnrecognizedPattern,
    /// Pattern matched but fields were malformed
    Parse(ParseError),
    /// Transport/HTTP/API failure calling the external lookup
    Service(String),
    /// Service returned zero usable candidates or degenerate geometry
    NoResult(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnrecognizedPattern => write!(f, "unrecognized pattern"),
            SkipReason::Parse(e) => write!(f, "{}", e),
            SkipReason::Service(msg) => write!(f, "service error: {}", msg),
            SkipReason::NoResult(msg) => write!(f, "no result: {}", msg),
        }
    }
}

/// Outcome of processing one row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Resolved(Point),
    Skipped(SkipReason),
}

/// An input row plus its resolution, ready for the output sink
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRow {
    pub row: RawRow,
    pub outcome: RowOutcome,
}

impl AnnotatedRow {
    pub fn resolved(row: RawRow, point: Point) -> Self {
        Self {
            row,
            outcome: RowOutcome::Resolved(point),
        }
    }

    pub fn skipped(row: RawRow, reason: SkipReason) -> Self {
        Self {
            row,
            outcome: RowOutcome::Skipped(reason),
        }
    }
}

/// Statistics accumulated over one geocoding run
#[derive(Debug, Clone, Default)]
pub struct GeocodeStats {
    pub rows_total: usize,
    pub rows_resolved: usize,
    pub skipped_unrecognized: usize,
    pub skipped_parse: usize,
    pub skipped_service: usize,
    pub skipped_no_result: usize,
    pub processing_time: std::time::Duration,
}

impl GeocodeStats {
    /// Record one row's outcome
    pub fn record(&mut self, outcome: &RowOutcome) {
        self.rows_total += 1;
        match outcome {
            RowOutcome::Resolved(_) => self.rows_resolved += 1,
            RowOutcome::Skipped(SkipReason::UnrecognizedPattern) => self.skipped_unrecognized += 1,
            RowOutcome::Skipped(SkipReason::Parse(_)) => self.skipped_parse += 1,
            RowOutcome::Skipped(SkipReason::Service(_)) => self.skipped_service += 1,
            RowOutcome::Skipped(SkipReason::NoResult(_)) => self.skipped_no_result += 1,
        }
    }

    /// Total rows passed through unresolved
    pub fn rows_skipped(&self) -> usize {
        self.skipped_unrecognized + self.skipped_parse + self.skipped_service + self.skipped_no_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_reason_display_texts() {
        assert_eq!(SkipReason::UnrecognizedPattern.to_string(), "unrecognized pattern");
        assert_eq!(
            SkipReason::Service("connection reset".to_string()).to_string(),
            "service error: connection reset"
        );
        assert_eq!(
            SkipReason::NoResult("no candidates".to_string()).to_string(),
            "no result: no candidates"
        );
    }

    #[test]
    fn stats_record_buckets_outcomes() {
        let mut stats = GeocodeStats::default();
        stats.record(&RowOutcome::Resolved(Point::new(1.0, 2.0)));
        stats.record(&RowOutcome::Skipped(SkipReason::UnrecognizedPattern));
        stats.record(&RowOutcome::Skipped(SkipReason::Service("x".into())));

        assert_eq!(stats.rows_total, 3);
        assert_eq!(stats.rows_resolved, 1);
        assert_eq!(stats.rows_skipped(), 2);
        assert_eq!(stats.skipped_unrecognized, 1);
        assert_eq!(stats.skipped_service, 1);
    }

    #[test]
    fn street_address_single_line() {
        let addr = StreetAddress {
            house_number: 123,
            street_name: "Main".to_string(),
            suffix: "St".to_string(),
        };
        assert_eq!(addr.single_line(), "123 Main St");
    }
}
