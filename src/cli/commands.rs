//! Command execution for the SFHA geocoder CLI
//!
//! Drives the whole run: logging setup, spreadsheet reading, the per-row
//! geocoding loop with progress reporting, output writing, and the final
//! summary. Row-level failures are tallied and reported but never abort the
//! batch; only file and configuration problems do.

use std::path::PathBuf;
use std::time::Instant;

use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::app::models::GeocodeStats;
use crate::app::services::row_pipeline::RowPipeline;
use crate::app::services::sheet_io::{derive_output_path, SheetReader, SheetWriter};
use crate::cli::args::Args;
use crate::Result;

/// Run one geocoding batch end to end
pub async fn run(args: Args) -> Result<GeocodeStats> {
    let start_time = Instant::now();

    setup_logging(&args);

    info!("Starting SFHA geocoder");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = args.build_config();
    debug!("Run configuration: {:?}", config);

    // Resolve the input sheet and output schema before any network work
    let mut reader = SheetReader::open(&args.input, &config.processing.address_column)?;
    let writer = SheetWriter::new(reader.header(), &config.processing);
    let output_path = resolve_output_path(&args, &config.processing.output_suffix);

    let mut rows = reader.read_rows()?;
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }
    info!("Read {} rows from {}", rows.len(), args.input.display());

    let pipeline = RowPipeline::new(&config, reader.address_index())?;

    let progress = if args.show_progress() {
        Some(create_progress_bar(rows.len() as u64, "geocoding"))
    } else {
        None
    };

    let mut stats = GeocodeStats::default();
    let mut annotated = Vec::with_capacity(rows.len());
    for row in rows {
        let result = pipeline.process_row(row).await;
        stats.record(&result.outcome);
        annotated.push(result);
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    writer.write(&output_path, &annotated)?;
    info!("Wrote {} rows to {}", annotated.len(), output_path.display());

    stats.processing_time = start_time.elapsed();
    if !args.quiet {
        print_summary(&stats, &output_path);
    }

    Ok(stats)
}

/// Set up structured logging on stderr
fn setup_logging(args: &Args) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sfha_geocoder={}", args.get_log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", args.get_log_level());
}

/// Explicit output path, or the `_geocoded` convention beside the input
fn resolve_output_path(args: &Args, suffix: &str) -> PathBuf {
    match &args.output {
        Some(path) => path.clone(),
        None => derive_output_path(&args.input, suffix),
    }
}

/// Progress bar over input rows
fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Human-readable run summary on stdout
fn print_summary(stats: &GeocodeStats, output_path: &std::path::Path) {
    println!("\n{}", "Geocoding complete".bright_green().bold());
    println!(
        "  {} {}",
        "Rows processed:".bright_cyan(),
        stats.rows_total.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Resolved:".bright_cyan(),
        stats.rows_resolved.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Skipped:".bright_cyan(),
        stats.rows_skipped().to_string().bright_white().bold()
    );
    if stats.rows_skipped() > 0 {
        println!(
            "    unrecognized pattern: {}, parse failures: {}, service errors: {}, no result: {}",
            stats.skipped_unrecognized,
            stats.skipped_parse,
            stats.skipped_service,
            stats.skipped_no_result
        );
    }
    println!(
        "  {} {}",
        "Elapsed:".bright_cyan(),
        HumanDuration(stats.processing_time)
    );
    println!("  {} {}", "Output:".bright_cyan(), output_path.display());
    println!();
}
