//! SFHA Geocoder Library
//!
//! A Rust library for batch-geocoding spreadsheets of flood-hazard review
//! addresses against the PAGIS ArcGIS REST services.
//!
//! This library provides tools for:
//! - Classifying free-form address text as a street address or a lot/block
//!   legal description
//! - Parsing structured fields (house number/street/suffix, lot/block/subdivision)
//!   from inconsistently formatted text
//! - Querying the PAGIS street locator and parcel map server
//! - Selecting a single coordinate from ranked candidates, including parcel
//!   polygon centroids
//! - Writing an augmented spreadsheet with coordinates and per-row status

pub mod config;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod address_parser;
        pub mod geocoder;
        pub mod row_pipeline;
        pub mod sheet_io;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AddressClass, AnnotatedRow, Point, RowOutcome, SkipReason};
pub use config::Config;

/// Result type alias for batch-fatal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Batch-fatal error types for the geocoder.
///
/// Row-level failures (unparsable addresses, service hiccups, empty result
/// sets) are not errors at this level: they are recorded per row as
/// [`SkipReason`] values and never abort the run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing error
    #[error("CSV error in file '{file}': {message}")]
    Csv {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Input spreadsheet is missing the designated address column
    #[error("spreadsheet '{file}' has no column named '{column}'")]
    MissingAddressColumn { file: String, column: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::Csv {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing-address-column error
    pub fn missing_address_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingAddressColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            file: "unknown".to_string(),
            message: "CSV processing failed".to_string(),
            source: Some(error),
        }
    }
}
