use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::ReportError;

use super::parser::parse_line;
use super::record::{Limits, Record};
use super::store::RecordStore;

/// Read UART telemetry into a record store
pub struct TelemetryReader;

impl TelemetryReader {
    /// Read and parse a telemetry file
    ///
    /// # Returns
    /// * `Ok(RecordStore)` - Records in file order; may be empty
    /// * `Err(ReportError::SourceNotFound)` - If the file does not exist
    pub fn read_path(path: &Path, limits: &Limits) -> Result<RecordStore, ReportError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ReportError::SourceNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        Self::read_from(BufReader::new(file), limits)
    }

    /// Parse telemetry held in memory
    pub fn read_str(text: &str, limits: &Limits) -> RecordStore {
        text.lines()
            .filter_map(|line| accept(line, limits))
            .collect()
    }

    /// Parse telemetry from any buffered reader
    ///
    /// Invalid UTF-8 is replaced rather than rejected; simulator logs are
    /// not always clean.
    pub fn read_from<R: BufRead>(mut reader: R, limits: &Limits) -> Result<RecordStore, ReportError> {
        let mut store = RecordStore::new();
        let mut buf = Vec::new();
        let mut skipped = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            match accept(&line, limits) {
                Some(record) => store.add(record),
                None => skipped += 1,
            }
        }

        log::debug!("Read {} records, skipped {} lines", store.count(), skipped);
        Ok(store)
    }
}

fn accept(line: &str, limits: &Limits) -> Option<Record> {
    let record = parse_line(line)?;
    if !record.within(limits) {
        log::debug!("Dropping out-of-range reading {:?}", record);
        return None;
    }
    Some(record)
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
