//! Output artifacts: the CSV export and atomic file writes
//!
//! Artifacts are written to a sibling `.tmp` file and renamed into place,
//! so a failed write never leaves a truncated file under the final name.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::telemetry::Record;

/// Column order of the export
pub const CSV_HEADER: [&str; 3] = ["sensed_value", "converter_value", "actuator_value"];

/// Write `records` as CSV (RFC 4180 line endings), one row per record in store order
pub fn write_csv(path: &Path, records: &[Record]) -> Result<(), ReportError> {
    write_with(path, |file| {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);
        writer.write_record(CSV_HEADER)?;
        for record in records {
            writer.serialize(record)?;
        }
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(())
    })
}

/// Read a CSV export back into records
pub fn read_csv(path: &Path) -> Result<Vec<Record>, ReportError> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize()
        .collect::<Result<Vec<Record>, csv::Error>>()?;
    Ok(records)
}

/// Atomically replace `path` with `contents`
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), ReportError> {
    write_with(path, |mut file| {
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        Ok(())
    })
}

fn write_with<F>(path: &Path, fill: F) -> Result<(), ReportError>
where
    F: FnOnce(File) -> Result<(), ReportError>,
{
    let tmp = tmp_path(path);
    let file = File::create(&tmp).map_err(|source| ReportError::Write {
        path: tmp.clone(),
        source,
    })?;

    let result = fill(file).map_err(|e| at_path(e, &tmp)).and_then(|()| {
        fs::rename(&tmp, path).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
    });

    if result.is_err() {
        log::warn!("Write of {} failed; partial output left at {}", path.display(), tmp.display());
    }
    result
}

// I/O failures while filling the tmp file should name it
fn at_path(err: ReportError, path: &Path) -> ReportError {
    let source = match err {
        ReportError::Io(source) => source,
        ReportError::Csv(e) if e.is_io_error() => match e.into_kind() {
            csv::ErrorKind::Io(source) => source,
            _ => unreachable!("is_io_error checked"),
        },
        other => return other,
    };
    ReportError::Write {
        path: path.to_path_buf(),
        source,
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;
