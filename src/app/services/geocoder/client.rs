//! HTTP client for the PAGIS ArcGIS REST endpoints.
//!
//! Wraps `reqwest` with typed response deserialization and ArcGIS-specific
//! error handling. ArcGIS map servers report failures inside an HTTP 200
//! body (`{"error": {...}}`), so every response is checked for that envelope
//! before deserialization. Endpoint URLs are injected, which lets tests point
//! the client at a mock server.

use std::time::Duration;

use reqwest::{Client, Url};
use tracing::debug;

use crate::config::{SearchExtent, ServicesConfig};
use crate::{Error, Result};

use super::types::{CandidateList, FeatureSet, ParcelFeature, StreetCandidate};
use super::GeocodeError;

/// Client for the street locator and parcel query endpoints.
///
/// Construct once per run; the underlying connection pool is reused across
/// rows. Construction validates both URLs up front, so a bad endpoint aborts
/// the batch before any row is read.
#[derive(Debug)]
pub struct GeocodeClient {
    client: Client,
    street_url: Url,
    parcel_url: Url,
    search_extent: SearchExtent,
}

impl GeocodeClient {
    /// Create a client from the services configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if either endpoint URL is invalid or
    /// the HTTP client cannot be constructed.
    pub fn new(services: &ServicesConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(services.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("sfha_geocoder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::configuration(format!("failed to build HTTP client: {}", e)))?;

        let street_url = Url::parse(&services.street_url).map_err(|e| {
            Error::configuration(format!("invalid street URL '{}': {}", services.street_url, e))
        })?;
        let parcel_url = Url::parse(&services.parcel_url).map_err(|e| {
            Error::configuration(format!("invalid parcel URL '{}': {}", services.parcel_url, e))
        })?;

        Ok(Self {
            client,
            street_url,
            parcel_url,
            search_extent: services.search_extent.clone(),
        })
    }

    /// Query the street locator with a single-line address.
    ///
    /// Returns the service's ranked candidate list, which may be empty.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure or non-2xx status.
    /// - [`GeocodeError::Api`] if the service returns an error envelope.
    /// - [`GeocodeError::Deserialize`] on an unexpected body shape.
    pub async fn geocode_street(
        &self,
        single_line: &str,
    ) -> std::result::Result<Vec<StreetCandidate>, GeocodeError> {
        let mut url = self.street_url.clone();
        url.query_pairs_mut()
            .append_pair("Single Line Input", single_line)
            .append_pair("outFields", "*")
            .append_pair("f", "pjson");

        debug!(address = single_line, "querying street locator");
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let list: CandidateList =
            serde_json::from_value(body).map_err(|e| GeocodeError::Deserialize {
                context: format!("findAddressCandidates({})", single_line),
                source: e,
            })?;

        Ok(list.candidates)
    }

    /// Query the parcel layer with an attribute filter.
    ///
    /// The search is constrained to the configured extent envelope and asks
    /// for geometry, so each returned feature carries its boundary rings.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`GeocodeClient::geocode_street`].
    pub async fn search_parcel(
        &self,
        where_clause: &str,
    ) -> std::result::Result<Vec<ParcelFeature>, GeocodeError> {
        let extent = &self.search_extent;
        let geometry = serde_json::json!({
            "xmin": extent.xmin,
            "ymin": extent.ymin,
            "xmax": extent.xmax,
            "ymax": extent.ymax,
            "spatialReference": { "wkid": extent.wkid },
        });

        let mut url = self.parcel_url.clone();
        url.query_pairs_mut()
            .append_pair("where", where_clause)
            .append_pair("geometry", &geometry.to_string())
            .append_pair("geometryType", "esriGeometryEnvelope")
            .append_pair("spatialRel", "esriSpatialRelIntersects")
            .append_pair("returnGeometry", "true")
            .append_pair("outFields", "")
            .append_pair("f", "pjson");

        debug!(filter = where_clause, "querying parcel layer");
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let set: FeatureSet =
            serde_json::from_value(body).map_err(|e| GeocodeError::Deserialize {
                context: format!("parcel query({})", where_clause),
                source: e,
            })?;

        Ok(set.features)
    }

    /// Send a GET request, assert a 2xx status, and parse the body as JSON
    async fn request_json(&self, url: &Url) -> std::result::Result<serde_json::Value, GeocodeError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Surface an ArcGIS `{"error": {...}}` envelope as [`GeocodeError::Api`]
    fn check_api_error(body: &serde_json::Value) -> std::result::Result<(), GeocodeError> {
        if let Some(error) = body.get("error") {
            let msg = error
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error");
            let code = error
                .get("code")
                .and_then(serde_json::Value::as_i64)
                .unwrap_or(0);
            return Err(GeocodeError::Api(format!("code {}: {}", code, msg)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_street_url() {
        let services = ServicesConfig {
            street_url: "not a url".to_string(),
            ..ServicesConfig::default()
        };
        assert!(GeocodeClient::new(&services).is_err());
    }

    #[test]
    fn check_api_error_passes_clean_body() {
        let body = serde_json::json!({ "candidates": [] });
        assert!(GeocodeClient::check_api_error(&body).is_ok());
    }

    #[test]
    fn check_api_error_surfaces_envelope() {
        let body = serde_json::json!({
            "error": { "code": 400, "message": "Invalid query" }
        });
        let err = GeocodeClient::check_api_error(&body).unwrap_err();
        assert!(matches!(err, GeocodeError::Api(ref m) if m.contains("Invalid query")));
    }
}
