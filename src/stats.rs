//! Statistics over a telemetry run
//!
//! Whole-run min/max/mean per field, and per-temperature buckets used for
//! the measurement table. Everything is kept at full precision; rounding
//! happens only when the report is rendered.

mod grouping;
mod summary;
mod types;

pub use grouping::group_by_sensed;
pub use summary::compute;
pub use types::{Bucket, FieldStats, StatsSummary};
