//! Test utilities for the address parser modules

use crate::app::services::address_parser::AddressClassifier;
use crate::config::AddressVocabulary;

// Test modules
mod classifier_tests;
mod street_tests;

/// Classifier over the default vocabulary
pub fn default_classifier() -> AddressClassifier {
    AddressClassifier::new(AddressVocabulary::default())
}

/// The default vocabulary used by most parser tests
pub fn default_vocabulary() -> AddressVocabulary {
    AddressVocabulary::default()
}
