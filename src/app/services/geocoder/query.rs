//! Service request construction from parsed addresses
//!
//! Pure field shaping; no network access. Street addresses collapse to the
//! locator's single-line input, legal descriptions to a SQL `where` clause
//! over the parcel layer's `SUB_NAME`/`LOT`/`BLOCK` attributes.

use crate::app::models::{ParcelDescriptor, ParsedAddress, StreetAddress};

/// A request shaped for one of the two service endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceRequest {
    /// Street locator `findAddressCandidates` input
    Street { single_line: String },
    /// Parcel map-server attribute filter
    Parcel { where_clause: String },
}

/// Build the request matching the parsed address's pattern
pub fn build_query(parsed: &ParsedAddress) -> ServiceRequest {
    match parsed {
        ParsedAddress::Street(addr) => street_request(addr),
        ParsedAddress::Parcel(parcel) => parcel_request(parcel),
    }
}

fn street_request(addr: &StreetAddress) -> ServiceRequest {
    ServiceRequest::Street {
        single_line: addr.single_line(),
    }
}

/// Parcel attributes are stored upper-case; the name match is a prefix LIKE
/// so minor trailing variations ("ADDITION", "REPLAT") still hit.
fn parcel_request(parcel: &ParcelDescriptor) -> ServiceRequest {
    let name = escape_quotes(&parcel.subdivision.to_uppercase());
    let mut where_clause = format!("SUB_NAME LIKE '{}%'", name);
    if let Some(lot) = parcel.lot {
        where_clause.push_str(&format!(" AND LOT LIKE '{}'", lot));
    }
    if let Some(block) = parcel.block {
        where_clause.push_str(&format!(" AND BLOCK LIKE '{}'", block));
    }
    ServiceRequest::Parcel { where_clause }
}

/// Double single quotes so names like "O'Neal" survive the SQL literal
fn escape_quotes(text: &str) -> String {
    text.replace('\'', "''")
}
