//! PAGIS service access: query shaping, HTTP client, and result selection
//!
//! Two ArcGIS REST endpoints resolve the two address patterns: the street
//! locator's `findAddressCandidates` operation and the parcel layer's
//! map-server `query` operation. This module turns parsed addresses into
//! requests, performs the lookups, and reduces the ranked responses to a
//! single coordinate.
//!
//! ## Architecture
//!
//! - [`query`] - [`ServiceRequest`] construction from parsed addresses
//! - [`client`] - reqwest wrapper over the two endpoints
//! - [`types`] - serde shapes for the ArcGIS JSON responses
//! - [`selector`] - first-candidate selection and parcel centroid derivation
//!
//! Every failure here is row-local: the pipeline maps [`GeocodeError`] and
//! [`SelectError`] to skip reasons and moves on to the next row.

pub mod client;
pub mod query;
pub mod selector;
pub mod types;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use client::GeocodeClient;
pub use query::{build_query, ServiceRequest};
pub use selector::{select_parcel, select_street, SelectError};
pub use types::{Location, ParcelFeature, StreetCandidate};

/// Errors from one service lookup.
///
/// All variants are row-local; none abort the batch.
#[derive(thiserror::Error, Debug)]
pub enum GeocodeError {
    /// Network, TLS, timeout, or non-2xx HTTP status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered 200 with an ArcGIS error envelope
    #[error("ArcGIS error: {0}")]
    Api(String),

    /// The response body did not match the expected shape
    #[error("unexpected response for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
