//! Tests for service request construction

use crate::app::models::{ParcelDescriptor, ParsedAddress, StreetAddress};
use crate::app::services::geocoder::{build_query, ServiceRequest};

fn street(n: u32, name: &str, suffix: &str) -> ParsedAddress {
    ParsedAddress::Street(StreetAddress {
        house_number: n,
        street_name: name.to_string(),
        suffix: suffix.to_string(),
    })
}

fn parcel(lot: Option<u32>, block: Option<u32>, subdivision: &str) -> ParsedAddress {
    ParsedAddress::Parcel(ParcelDescriptor {
        lot,
        block,
        subdivision: subdivision.to_string(),
    })
}

#[test]
fn street_request_is_single_line() {
    let request = build_query(&street(123, "Main", "St"));
    assert_eq!(
        request,
        ServiceRequest::Street {
            single_line: "123 Main St".to_string()
        }
    );
}

#[test]
fn parcel_request_includes_all_present_fields() {
    let request = build_query(&parcel(Some(5), Some(2), "Sherwood Forest"));
    assert_eq!(
        request,
        ServiceRequest::Parcel {
            where_clause: "SUB_NAME LIKE 'SHERWOOD FOREST%' AND LOT LIKE '5' AND BLOCK LIKE '2'"
                .to_string()
        }
    );
}

#[test]
fn parcel_request_omits_absent_numbers() {
    let request = build_query(&parcel(None, Some(7), "Oak Grove"));
    assert_eq!(
        request,
        ServiceRequest::Parcel {
            where_clause: "SUB_NAME LIKE 'OAK GROVE%' AND BLOCK LIKE '7'".to_string()
        }
    );

    let request = build_query(&parcel(Some(12), None, "Pleasant Valley"));
    assert_eq!(
        request,
        ServiceRequest::Parcel {
            where_clause: "SUB_NAME LIKE 'PLEASANT VALLEY%' AND LOT LIKE '12'".to_string()
        }
    );
}

#[test]
fn parcel_request_escapes_single_quotes() {
    let request = build_query(&parcel(Some(1), None, "O'Neal Heights"));
    assert_eq!(
        request,
        ServiceRequest::Parcel {
            where_clause: "SUB_NAME LIKE 'O''NEAL HEIGHTS%' AND LOT LIKE '1'".to_string()
        }
    );
}
