//! Candidate selection and parcel centroid derivation
//!
//! The services rank their own results, so selection is simply "take the
//! first". Street candidates carry a coordinate directly; parcel features
//! carry a polygon whose centroid becomes the row's coordinate.

use crate::app::models::Point;

use super::types::{ParcelFeature, StreetCandidate};

/// Area considered indistinguishable from a degenerate polygon
const MIN_RING_AREA: f64 = 1e-9;

/// Why no coordinate could be derived from a service response
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("no candidates")]
    NoCandidates,

    #[error("degenerate parcel geometry")]
    DegenerateGeometry,
}

/// Accept the first street candidate's location
pub fn select_street(candidates: &[StreetCandidate]) -> Result<Point, SelectError> {
    let first = candidates.first().ok_or(SelectError::NoCandidates)?;
    Ok(Point::new(first.location.x, first.location.y))
}

/// Accept the first parcel feature and derive its boundary centroid.
///
/// Only the outer ring is considered; holes and additional rings of
/// multi-part parcels are ignored. A feature without geometry, or with a
/// ring of (near-)zero area, yields [`SelectError::DegenerateGeometry`].
pub fn select_parcel(features: &[ParcelFeature]) -> Result<Point, SelectError> {
    let first = features.first().ok_or(SelectError::NoCandidates)?;
    let ring = first
        .geometry
        .as_ref()
        .and_then(|g| g.rings.first())
        .ok_or(SelectError::DegenerateGeometry)?;
    ring_centroid(ring).ok_or(SelectError::DegenerateGeometry)
}

/// Area-weighted centroid of a polygon ring (shoelace formula).
///
/// Works whether or not the ring repeats its first vertex at the end; the
/// implicit closing edge contributes the same terms either way. Returns
/// `None` when the signed area magnitude is below [`MIN_RING_AREA`].
pub fn ring_centroid(ring: &[[f64; 2]]) -> Option<Point> {
    if ring.len() < 3 {
        return None;
    }

    let mut doubled_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..ring.len() {
        let [x0, y0] = ring[i];
        let [x1, y1] = ring[(i + 1) % ring.len()];
        let cross = x0 * y1 - x1 * y0;
        doubled_area += cross;
        cx += (x0 + x1) * cross;
        cy += (y0 + y1) * cross;
    }

    let area = doubled_area / 2.0;
    if area.abs() < MIN_RING_AREA {
        return None;
    }
    Some(Point::new(cx / (6.0 * area), cy / (6.0 * area)))
}
