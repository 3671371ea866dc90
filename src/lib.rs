//! Fan-controller telemetry analysis
//!
//! Parses the UART log of a simulated STM32 fan controller, computes
//! run statistics and per-temperature averages, and writes a text report
//! plus a CSV export of the raw samples.

pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod telemetry;

pub use error::ReportError;
pub use pipeline::{RunOptions, RunSummary, run};
pub use telemetry::{Limits, Record, RecordStore};
