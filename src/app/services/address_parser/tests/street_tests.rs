//! Tests for street address field extraction

use super::default_vocabulary;
use crate::app::services::address_parser::{parse_street, ParseError};

#[test]
fn parses_simple_address() {
    let vocab = default_vocabulary();
    let addr = parse_street("123 Main St", &vocab).unwrap();
    assert_eq!(addr.house_number, 123);
    assert_eq!(addr.street_name, "Main");
    assert_eq!(addr.suffix, "St");
}

#[test]
fn house_number_round_trips_for_street_shaped_input() {
    // Property from the pattern definition: "<N> <word>+ <suffix>" always
    // yields house_number == N
    let vocab = default_vocabulary();
    for (text, expected) in [
        ("1 Oak Ln", 1),
        ("9914 Stagecoach Rd", 9914),
        ("665 Pleasant Valley Dr", 665),
    ] {
        let addr = parse_street(text, &vocab).unwrap();
        assert_eq!(addr.house_number, expected, "for {:?}", text);
    }
}

#[test]
fn canonicalizes_full_suffix_names() {
    let vocab = default_vocabulary();
    let addr = parse_street("4800 W Markham Street", &vocab).unwrap();
    assert_eq!(addr.suffix, "St");
    assert_eq!(addr.street_name, "W Markham");

    let addr = parse_street("300 University Avenue", &vocab).unwrap();
    assert_eq!(addr.suffix, "Ave");
}

#[test]
fn retains_directionals_in_place() {
    let vocab = default_vocabulary();
    let addr = parse_street("7612 North Rodney Parham Rd", &vocab).unwrap();
    assert_eq!(addr.street_name, "North Rodney Parham");

    let addr = parse_street("12 E 6th St", &vocab).unwrap();
    assert_eq!(addr.street_name, "E 6th");
}

#[test]
fn multi_word_names_join_with_single_spaces() {
    let vocab = default_vocabulary();
    let addr = parse_street("  18   Shady   Oak   Cove ", &vocab).unwrap();
    assert_eq!(addr.street_name, "Shady Oak");
    assert_eq!(addr.suffix, "Cv");
}

#[test]
fn numbered_route_suffix_kept_verbatim() {
    let vocab = default_vocabulary();
    let addr = parse_street("1401 Highway 161", &vocab).unwrap();
    assert_eq!(addr.street_name, "Highway");
    assert_eq!(addr.suffix, "161");
}

#[test]
fn rejects_missing_leading_number() {
    let vocab = default_vocabulary();
    assert_eq!(
        parse_street("Main St", &vocab),
        Err(ParseError::NoLeadingNumber)
    );
    assert_eq!(parse_street("", &vocab), Err(ParseError::NoLeadingNumber));
}

#[test]
fn rejects_unknown_suffix() {
    let vocab = default_vocabulary();
    assert_eq!(
        parse_street("123 Main Esplanade", &vocab),
        Err(ParseError::NoValidSuffix)
    );
}

#[test]
fn rejects_empty_street_name() {
    let vocab = default_vocabulary();
    assert_eq!(
        parse_street("123 St", &vocab),
        Err(ParseError::EmptyStreetName)
    );
}
