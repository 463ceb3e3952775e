//! Tests for address pattern classification

use super::default_classifier;
use crate::app::models::AddressClass;

#[test]
fn classifies_plain_street_address() {
    let classifier = default_classifier();
    assert_eq!(classifier.classify("123 Main St"), AddressClass::Street);
    assert_eq!(classifier.classify("4800 W Markham Street"), AddressClass::Street);
    assert_eq!(classifier.classify("12 Shady Oak Cv"), AddressClass::Street);
}

#[test]
fn classifies_numbered_route_as_street() {
    // The suffix slot may hold a short route number instead of a street type
    let classifier = default_classifier();
    assert_eq!(classifier.classify("1401 Highway 161"), AddressClass::Street);
}

#[test]
fn classifies_lot_block_forms() {
    let classifier = default_classifier();
    assert_eq!(
        classifier.classify("Lot 5 Block 2 Sherwood Forest"),
        AddressClass::LotBlock
    );
    assert_eq!(classifier.classify("Lot 12 Pleasant Valley"), AddressClass::LotBlock);
    // Block without a leading Lot is still a valid legal description
    assert_eq!(classifier.classify("Block 7 Oak Grove"), AddressClass::LotBlock);
    assert_eq!(classifier.classify("lot 3 riverdale"), AddressClass::LotBlock);
}

#[test]
fn lot_keyword_without_number_is_unrecognized() {
    let classifier = default_classifier();
    assert_eq!(classifier.classify("Lot Sherwood Forest"), AddressClass::Unrecognized);
}

#[test]
fn empty_and_whitespace_are_unrecognized() {
    let classifier = default_classifier();
    assert_eq!(classifier.classify(""), AddressClass::Unrecognized);
    assert_eq!(classifier.classify("   "), AddressClass::Unrecognized);
}

#[test]
fn non_matching_text_is_unrecognized() {
    let classifier = default_classifier();
    assert_eq!(classifier.classify("PO Box 12"), AddressClass::Unrecognized);
    assert_eq!(classifier.classify("Main Street"), AddressClass::Unrecognized);
    assert_eq!(classifier.classify("see attached plat"), AddressClass::Unrecognized);
}

#[test]
fn number_without_suffix_is_unrecognized() {
    let classifier = default_classifier();
    assert_eq!(classifier.classify("123"), AddressClass::Unrecognized);
    assert_eq!(classifier.classify("123 Main"), AddressClass::Unrecognized);
}

#[test]
fn suffix_matching_ignores_case() {
    let classifier = default_classifier();
    assert_eq!(classifier.classify("123 main STREET"), AddressClass::Street);
    assert_eq!(classifier.classify("27 Riverfront dr"), AddressClass::Street);
}

#[test]
fn leading_zero_house_number_is_unrecognized() {
    let classifier = default_classifier();
    assert_eq!(classifier.classify("0 Main St"), AddressClass::Unrecognized);
}
