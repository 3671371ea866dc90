//! End-to-end analysis run: telemetry file in, report and CSV out

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

use crate::config::Config;
use crate::error::ReportError;
use crate::export;
use crate::report::{ReportInput, ReportTemplate, render};
use crate::stats;
use crate::telemetry::TelemetryReader;

/// Where to read from and write to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub report: PathBuf,
    /// `None` skips the CSV export
    pub csv: Option<PathBuf>,
}

impl RunOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            input: config.output.input.clone(),
            report: config.output.report.clone(),
            csv: Some(config.output.csv.clone()),
        }
    }
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: String,
    pub record_count: usize,
    pub bucket_count: usize,
    pub report_path: PathBuf,
    pub csv_path: Option<PathBuf>,
}

pub fn run(options: &RunOptions, config: &Config) -> Result<RunSummary, ReportError> {
    run_at(options, config, Local::now().naive_local())
}

/// Run with a fixed report timestamp.
///
/// Missing or empty input halts before anything is written. The report is
/// written before the CSV, so a CSV failure leaves the report intact.
pub fn run_at(
    options: &RunOptions,
    config: &Config,
    generated_at: NaiveDateTime,
) -> Result<RunSummary, ReportError> {
    log::info!("Parsing telemetry from {}", options.input.display());
    let store = TelemetryReader::read_path(&options.input, &config.limits)?;
    if store.is_empty() {
        return Err(ReportError::NoRecords(options.input.clone()));
    }

    let records = store.all();
    let summary = stats::compute(records);
    let buckets = stats::group_by_sensed(records);
    log::info!(
        "Parsed {} samples across {} temperature levels",
        records.len(),
        buckets.len()
    );

    let template = ReportTemplate::from_config(&config.report, config.limits);
    let report = render(
        &template,
        &ReportInput {
            records,
            stats: summary.as_ref(),
            buckets: &buckets,
            generated_at,
        },
    );

    export::write_atomic(&options.report, &report)?;
    log::info!("Report written to {}", options.report.display());

    if let Some(csv_path) = &options.csv {
        export::write_csv(csv_path, records)?;
        log::info!("CSV written to {}", csv_path.display());
    }

    Ok(RunSummary {
        report,
        record_count: records.len(),
        bucket_count: buckets.len(),
        report_path: options.report.clone(),
        csv_path: options.csv.clone(),
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;
