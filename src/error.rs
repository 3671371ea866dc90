use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for fanreport
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{} not found. Run the simulation first.", .0.display())]
    SourceNotFound(PathBuf),

    #[error("No data found in {}. Make sure you've run the simulation first.", .0.display())]
    NoRecords(PathBuf),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// True for the two "nothing to report" halts, which are notices rather than faults
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            ReportError::SourceNotFound(_) | ReportError::NoRecords(_)
        )
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
