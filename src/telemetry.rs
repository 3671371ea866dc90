//! Telemetry ingestion: line parsing, record storage and file reading
//!
//! The firmware prints one reading per line over UART. Lines that do not
//! look like a reading are log noise and are skipped without error.

mod parser;
mod reader;
mod record;
mod store;

pub use parser::parse_line;
pub use reader::TelemetryReader;
pub use record::{Limits, Record};
pub use store::RecordStore;
