//! Lot/block legal description parsing
//!
//! Legal descriptions name a parcel by lot and block number within a
//! subdivision. Two token sequences are accepted (keywords are
//! case-insensitive):
//!
//! ```text
//! Lot <n> [Block <m>] <subdivision name...>
//! Block <m> <subdivision name...>
//! ```
//!
//! A missing lot number stays missing; no default is invented for it.

use super::ParseError;
use crate::app::models::ParcelDescriptor;

/// Parse a legal description into lot, block, and subdivision fields.
///
/// Scans tokens left to right, consuming up to one `Lot <n>` and one
/// `Block <m>` pair in either order from the front of the string; whatever
/// remains is the subdivision name. Fails if a keyword lacks its number, if a
/// keyword repeats, or if no subdivision text remains.
pub fn parse_parcel(text: &str) -> Result<ParcelDescriptor, ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut lot: Option<u32> = None;
    let mut block: Option<u32> = None;
    let mut pos = 0;

    while pos < tokens.len() {
        let slot = match tokens[pos] {
            t if t.eq_ignore_ascii_case("lot") => &mut lot,
            t if t.eq_ignore_ascii_case("block") => &mut block,
            _ => break,
        };
        if slot.is_some() {
            return Err(ParseError::DuplicateKeyword {
                keyword: tokens[pos].to_lowercase(),
            });
        }
        let number = tokens
            .get(pos + 1)
            .and_then(|t| t.parse::<u32>().ok())
            .ok_or(ParseError::MissingLotBlockNumber)?;
        *slot = Some(number);
        pos += 2;
    }

    if lot.is_none() && block.is_none() {
        // Caller should only hand us LotBlock-classified text
        return Err(ParseError::MissingLotBlockNumber);
    }

    let subdivision = tokens[pos..].join(" ");
    if subdivision.is_empty() {
        return Err(ParseError::EmptySubdivision);
    }

    Ok(ParcelDescriptor {
        lot,
        block,
        subdivision,
    })
}
