//! Address classification and parsing for the two recognized patterns
//!
//! Flood-hazard review spreadsheets mix two kinds of location text: ordinary
//! street addresses (`"123 Main St"`) and lot/block legal descriptions
//! (`"Lot 5 Block 2 Sherwood Forest"`). This module decides which pattern a
//! string matches and extracts the structured fields each service endpoint
//! needs.
//!
//! ## Architecture
//!
//! - [`classifier`] - Street / LotBlock / Unrecognized decision
//! - [`street`] - house number, street name, and canonical suffix extraction
//! - [`parcel`] - lot number, block number, and subdivision extraction
//!
//! All functions are pure: they never touch the network and a malformed
//! string produces a [`ParseError`], never a panic. The caller maps parse
//! failures to a per-row skip.

pub mod classifier;
pub mod parcel;
pub mod street;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::AddressClassifier;
pub use parcel::parse_parcel;
pub use street::parse_street;

/// Why an address string that matched a pattern could not be parsed.
///
/// The `Display` text is written verbatim into the output status column, so
/// the wording stays short and operator-readable.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Street text does not begin with a positive integer token
    #[error("no leading number")]
    NoLeadingNumber,

    /// Street text does not end with a token from the suffix vocabulary
    #[error("no valid suffix")]
    NoValidSuffix,

    /// Nothing remains between the house number and the suffix
    #[error("empty street name")]
    EmptyStreetName,

    /// A "Lot"/"Block" keyword is not followed by a parsable integer
    #[error("missing lot/block number")]
    MissingLotBlockNumber,

    /// No tokens remain for the subdivision after keyword consumption
    #[error("empty subdivision name")]
    EmptySubdivision,

    /// The same keyword appears twice ("Lot 1 Lot 2 ...")
    #[error("duplicate {keyword} keyword")]
    DuplicateKeyword { keyword: String },
}
