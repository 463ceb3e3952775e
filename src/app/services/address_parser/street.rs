//! Street address parsing
//!
//! Extracts house number, street name, and canonical suffix from text the
//! classifier has already shaped as a street address. The parser re-validates
//! every field so it is safe to call on arbitrary text as well.

use super::classifier::is_short_number;
use super::ParseError;
use crate::app::models::StreetAddress;
use crate::config::AddressVocabulary;

/// Parse a street address string into its structured fields.
///
/// The first whitespace token must be a positive integer (house number) and
/// the last must be a vocabulary suffix, which is normalized to its canonical
/// abbreviation ("Street" becomes "St"). A short numeric final token is kept
/// verbatim to support numbered routes. Everything between the two becomes
/// the street name, joined with single spaces; directional tokens are
/// retained in place without special handling.
pub fn parse_street(text: &str, vocabulary: &AddressVocabulary) -> Result<StreetAddress, ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let house_number = tokens
        .first()
        .and_then(|t| t.parse::<u32>().ok())
        .filter(|n| *n > 0)
        .ok_or(ParseError::NoLeadingNumber)?;

    let last = tokens.last().copied().unwrap_or("");
    let suffix = match vocabulary.canonical_suffix(last) {
        Some(canonical) => canonical.to_string(),
        None if tokens.len() > 1 && is_short_number(last) => last.to_string(),
        None => return Err(ParseError::NoValidSuffix),
    };

    let street_name = tokens[1..tokens.len() - 1].join(" ");
    if street_name.is_empty() {
        return Err(ParseError::EmptyStreetName);
    }

    Ok(StreetAddress {
        house_number,
        street_name,
        suffix,
    })
}
