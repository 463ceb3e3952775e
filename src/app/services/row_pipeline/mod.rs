//! Per-row orchestration: classify, parse, query, select, annotate
//!
//! [`RowPipeline::process_row`] is deliberately infallible: every failure
//! mode along the way collapses into a [`SkipReason`] on the annotated row,
//! so one malformed address or one service hiccup can never abort the batch.
//! Rows are processed one at a time in input order.

use tracing::{debug, warn};

use crate::app::models::{
    AddressClass, AnnotatedRow, ParsedAddress, RawRow, RowOutcome, SkipReason,
};
use crate::app::services::address_parser::{parse_parcel, parse_street, AddressClassifier};
use crate::app::services::geocoder::{
    build_query, select_parcel, select_street, GeocodeClient, ServiceRequest,
};
use crate::config::Config;
use crate::Result;

/// Sequential row processor.
///
/// Owns the classifier and the service client; holds the index of the
/// address column resolved once from the input header.
#[derive(Debug)]
pub struct RowPipeline {
    classifier: AddressClassifier,
    client: GeocodeClient,
    address_index: usize,
}

impl RowPipeline {
    /// Build a pipeline from the run configuration and the resolved address
    /// column index.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the service client cannot be built.
    pub fn new(config: &Config, address_index: usize) -> Result<Self> {
        let classifier = AddressClassifier::new(config.vocabulary.clone());
        let client = GeocodeClient::new(&config.services)?;
        Ok(Self {
            classifier,
            client,
            address_index,
        })
    }

    /// Resolve one row to an annotated row.
    ///
    /// Unrecognized and unparsable addresses are skipped without any service
    /// call; service and selection failures are skipped after the call. The
    /// row's passthrough fields are never modified.
    pub async fn process_row(&self, row: RawRow) -> AnnotatedRow {
        let address = row.field(self.address_index).trim().to_string();

        let parsed = match self.classifier.classify(&address) {
            AddressClass::Unrecognized => {
                debug!(%address, "address matches neither pattern");
                return AnnotatedRow::skipped(row, SkipReason::UnrecognizedPattern);
            }
            AddressClass::Street => match parse_street(&address, self.classifier.vocabulary()) {
                Ok(street) => ParsedAddress::Street(street),
                Err(e) => {
                    warn!(%address, error = %e, "street parse failed");
                    return AnnotatedRow::skipped(row, SkipReason::Parse(e));
                }
            },
            AddressClass::LotBlock => match parse_parcel(&address) {
                Ok(parcel) => ParsedAddress::Parcel(parcel),
                Err(e) => {
                    warn!(%address, error = %e, "legal description parse failed");
                    return AnnotatedRow::skipped(row, SkipReason::Parse(e));
                }
            },
        };

        let outcome = self.lookup(&parsed).await;
        match &outcome {
            RowOutcome::Resolved(point) => {
                debug!(%address, x = point.x, y = point.y, "resolved")
            }
            RowOutcome::Skipped(reason) => warn!(%address, reason = %reason, "row skipped"),
        }
        AnnotatedRow { row, outcome }
    }

    /// Call the endpoint matching the parsed pattern and select a coordinate
    async fn lookup(&self, parsed: &ParsedAddress) -> RowOutcome {
        let selected = match build_query(parsed) {
            ServiceRequest::Street { single_line } => {
                match self.client.geocode_street(&single_line).await {
                    Ok(candidates) => select_street(&candidates),
                    Err(e) => return RowOutcome::Skipped(SkipReason::Service(e.to_string())),
                }
            }
            ServiceRequest::Parcel { where_clause } => {
                match self.client.search_parcel(&where_clause).await {
                    Ok(features) => select_parcel(&features),
                    Err(e) => return RowOutcome::Skipped(SkipReason::Service(e.to_string())),
                }
            }
        };

        match selected {
            Ok(point) => RowOutcome::Resolved(point),
            Err(e) => RowOutcome::Skipped(SkipReason::NoResult(e.to_string())),
        }
    }
}
