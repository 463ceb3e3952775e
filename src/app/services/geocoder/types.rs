//! Serde shapes for the ArcGIS REST responses.
//!
//! Only the fields the selector needs are modeled; everything else in the
//! (large) ArcGIS payloads is ignored during deserialization.

use serde::Deserialize;

/// Envelope of a `findAddressCandidates` response
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateList {
    #[serde(default)]
    pub candidates: Vec<StreetCandidate>,
}

/// One ranked street-locator candidate
#[derive(Debug, Clone, Deserialize)]
pub struct StreetCandidate {
    pub location: Location,
    /// Locator match score; candidates arrive ordered by it
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
}

/// A coordinate pair in the service's spatial reference
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

/// Envelope of a parcel map-server `query` response
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureSet {
    #[serde(default)]
    pub features: Vec<ParcelFeature>,
}

/// One parcel feature with its boundary geometry
#[derive(Debug, Clone, Deserialize)]
pub struct ParcelFeature {
    #[serde(default)]
    pub geometry: Option<RingGeometry>,
}

/// Esri polygon geometry: one or more closed rings of `[x, y]` vertices
#[derive(Debug, Clone, Deserialize)]
pub struct RingGeometry {
    #[serde(default)]
    pub rings: Vec<Vec<[f64; 2]>>,
}
