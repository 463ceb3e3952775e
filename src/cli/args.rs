//! Command-line argument definitions for the SFHA geocoder
//!
//! Single-command CLI built with the clap derive API. The tool takes one
//! spreadsheet and a handful of overrides for column naming and service
//! endpoints; everything else comes from the built-in defaults.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::{Error, Result};

/// CLI arguments for the SFHA batch geocoder
///
/// Reads a spreadsheet of addresses, resolves each row against the PAGIS
/// street locator or parcel layer, and writes the sheet back out with X/Y
/// coordinates and a per-row status.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sfha-geocoder",
    version,
    about = "Batch-geocode a spreadsheet of street addresses and lot/block legal descriptions",
    long_about = "Reads a CSV spreadsheet containing an address column, classifies each row as a \
                  street address or a lot/block legal description, resolves it through the PAGIS \
                  ArcGIS services, and writes an augmented copy with X/Y coordinates and a status \
                  column. Rows that cannot be classified, parsed, or resolved pass through \
                  unmodified with the reason recorded; they never abort the batch."
)]
pub struct Args {
    /// Input spreadsheet (CSV with a header row)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output path
    ///
    /// Defaults to the input filename with `_geocoded` inserted before the
    /// extension, written beside the input.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Header of the column holding address text
    #[arg(long = "address-column", value_name = "NAME")]
    pub address_column: Option<String>,

    /// Override the street locator findAddressCandidates URL
    #[arg(long = "street-url", value_name = "URL")]
    pub street_url: Option<String>,

    /// Override the parcel map-server query URL
    #[arg(long = "parcel-url", value_name = "URL")]
    pub parcel_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Process at most this many rows (remaining rows are not emitted)
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Logging verbosity (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Suppress the progress bar and reduce logging to warnings
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Disable the progress bar only
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

impl Args {
    /// Validate argument combinations before any work starts
    pub fn validate(&self) -> Result<()> {
        if let Some(0) = self.limit {
            return Err(Error::configuration("--limit must be at least 1"));
        }
        const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::configuration(format!(
                "invalid log level '{}' (expected one of: {})",
                self.log_level,
                LEVELS.join(", ")
            )));
        }
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "input file does not exist: {}",
                self.input.display()
            )));
        }
        Ok(())
    }

    /// Effective log level, accounting for quiet mode
    pub fn get_log_level(&self) -> String {
        if self.quiet {
            "warn".to_string()
        } else {
            self.log_level.to_lowercase()
        }
    }

    /// Whether to render the progress bar
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }

    /// Build the run configuration: defaults overridden by CLI flags
    pub fn build_config(&self) -> Config {
        let mut config = Config::default();
        if let Some(column) = &self.address_column {
            config.processing.address_column = column.clone();
        }
        if let Some(url) = &self.street_url {
            config.services.street_url = url.clone();
        }
        if let Some(url) = &self.parcel_url {
            config.services.parcel_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.services.timeout_secs = secs;
        }
        config
    }
}
