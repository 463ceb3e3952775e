//! Configuration for classification vocabulary, service endpoints, and
//! spreadsheet column handling.
//!
//! Everything the parsers and the client need to know is carried in an
//! explicit [`Config`] passed at construction time; there is no process-wide
//! state. Defaults reproduce the PAGIS production setup.

use serde::{Deserialize, Serialize};

/// Top-level configuration for a geocoding run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Address classification vocabulary (street suffixes, directionals)
    pub vocabulary: AddressVocabulary,

    /// External service endpoints and HTTP behavior
    pub services: ServicesConfig,

    /// Spreadsheet column names and output naming
    pub processing: ProcessingConfig,
}

/// A canonical street suffix and the spellings that map to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixRule {
    /// Canonical abbreviation written into queries (e.g. "St")
    pub canonical: String,
    /// Alternate spellings, matched case-insensitively (e.g. "Street")
    pub aliases: Vec<String>,
}

impl SuffixRule {
    fn new(canonical: &str, aliases: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Vocabulary used to recognize street addresses.
///
/// The suffix list is representative rather than exhaustive; operators with
/// unusual street types extend it in configuration rather than in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressVocabulary {
    /// Recognized street-type suffixes
    pub suffixes: Vec<SuffixRule>,
    /// Directional tokens retained in place within street names
    pub directionals: Vec<String>,
}

impl Default for AddressVocabulary {
    fn default() -> Self {
        Self {
            suffixes: vec![
                SuffixRule::new("Rd", &["Road"]),
                SuffixRule::new("Dr", &["Drive"]),
                SuffixRule::new("Ct", &["Court"]),
                SuffixRule::new("Cv", &["Cove"]),
                SuffixRule::new("Blvd", &["Boulevard"]),
                SuffixRule::new("St", &["Street"]),
                SuffixRule::new("Cir", &["Circle"]),
                SuffixRule::new("Ave", &["Avenue"]),
                SuffixRule::new("Ln", &["Lane"]),
                SuffixRule::new("Pl", &["Place"]),
                SuffixRule::new("Trl", &["Trail"]),
                SuffixRule::new("Hwy", &["Highway"]),
                SuffixRule::new("Way", &[]),
            ],
            directionals: [
                "N", "S", "E", "W", "NE", "NW", "SE", "SW", "North", "South", "East", "West",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl AddressVocabulary {
    /// Look up the canonical abbreviation for a suffix token.
    ///
    /// Matching is case-insensitive and tolerates a trailing period
    /// ("Street", "street", "St.") — returns `None` for unknown tokens.
    pub fn canonical_suffix(&self, token: &str) -> Option<&str> {
        let token = token.trim_end_matches('.');
        self.suffixes
            .iter()
            .find(|rule| {
                rule.canonical.eq_ignore_ascii_case(token)
                    || rule.aliases.iter().any(|a| a.eq_ignore_ascii_case(token))
            })
            .map(|rule| rule.canonical.as_str())
    }

    /// Whether a token is a recognized directional (N, South, ...)
    pub fn is_directional(&self, token: &str) -> bool {
        let token = token.trim_end_matches('.');
        self.directionals.iter().any(|d| d.eq_ignore_ascii_case(token))
    }
}

/// Bounding envelope used to constrain parcel searches to the service area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchExtent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    /// Well-known ID of the envelope's spatial reference
    pub wkid: u32,
}

impl Default for SearchExtent {
    fn default() -> Self {
        // City-wide envelope in the PAGIS state-plane system
        Self {
            xmin: 1_150_000.0,
            ymin: 100_000.0,
            xmax: 1_275_000.0,
            ymax: 180_000.0,
            wkid: 102_651,
        }
    }
}

/// External service endpoints and HTTP client behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Street locator `findAddressCandidates` endpoint
    pub street_url: String,
    /// Parcel map-server `query` endpoint
    pub parcel_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Envelope intersected against parcel geometries
    pub search_extent: SearchExtent,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            street_url: "https://pagis.org/arcgis/rest/services/LOCATORS/AddressPoints/GeocodeServer/findAddressCandidates".to_string(),
            parcel_url: "https://pagis.org/arcgis/rest/services/APPS/OperationalLayers/MapServer/51/query".to_string(),
            timeout_secs: 30,
            search_extent: SearchExtent::default(),
        }
    }
}

/// Spreadsheet column names and output file naming
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Header of the column holding address text
    pub address_column: String,
    /// Header of the output easting/longitude column
    pub x_column: String,
    /// Header of the output northing/latitude column
    pub y_column: String,
    /// Header of the per-row status column
    pub status_column: String,
    /// Suffix inserted before the extension of the output filename
    pub output_suffix: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            address_column: "Address".to_string(),
            x_column: "X".to_string(),
            y_column: "Y".to_string(),
            status_column: "Status".to_string(),
            output_suffix: "_geocoded".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_suffix_matches_abbreviation_and_full_name() {
        let vocab = AddressVocabulary::default();
        assert_eq!(vocab.canonical_suffix("St"), Some("St"));
        assert_eq!(vocab.canonical_suffix("Street"), Some("St"));
        assert_eq!(vocab.canonical_suffix("BOULEVARD"), Some("Blvd"));
        assert_eq!(vocab.canonical_suffix("st."), Some("St"));
        assert_eq!(vocab.canonical_suffix("Main"), None);
    }

    #[test]
    fn directionals_match_case_insensitively() {
        let vocab = AddressVocabulary::default();
        assert!(vocab.is_directional("N"));
        assert!(vocab.is_directional("north"));
        assert!(vocab.is_directional("SW"));
        assert!(!vocab.is_directional("Main"));
    }

    #[test]
    fn default_services_point_at_pagis() {
        let services = ServicesConfig::default();
        assert!(services.street_url.contains("findAddressCandidates"));
        assert!(services.parcel_url.ends_with("/query"));
        assert_eq!(services.search_extent.wkid, 102_651);
    }
}
