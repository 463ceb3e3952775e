//! Test helpers for the geocoder service modules

use crate::app::services::geocoder::types::{
    Location, ParcelFeature, RingGeometry, StreetCandidate,
};

// Test modules
mod query_tests;

/// Street candidate at the given coordinate
pub fn candidate_at(x: f64, y: f64) -> StreetCandidate {
    StreetCandidate {
        location: Location { x, y },
        score: Some(100.0),
        address: None,
    }
}

/// Parcel feature with a single ring
pub fn feature_with_ring(ring: Vec<[f64; 2]>) -> ParcelFeature {
    ParcelFeature {
        geometry: Some(RingGeometry { rings: vec![ring] }),
    }
}
