use crate::telemetry::Record;

use super::types::{FieldStats, StatsSummary};

/// Compute whole-run statistics.
///
/// Returns `None` for an empty record set; callers must check before
/// formatting.
pub fn compute(records: &[Record]) -> Option<StatsSummary> {
    Some(StatsSummary {
        count: records.len(),
        sensed: FieldStats::from_values(records.iter().map(|r| r.sensed_value))?,
        converter: FieldStats::from_values(records.iter().map(|r| r.converter_value))?,
        actuator: FieldStats::from_values(records.iter().map(|r| r.actuator_value))?,
    })
}
