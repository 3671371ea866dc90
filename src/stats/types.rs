//! Type definitions for telemetry statistics

use crate::telemetry::Record;

/// Min, max and arithmetic mean of one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub min: u32,
    pub max: u32,
    pub mean: f64,
}

impl FieldStats {
    /// `None` when `values` is empty
    pub fn from_values(values: impl Iterator<Item = u32>) -> Option<Self> {
        let mut count = 0u64;
        let mut sum = 0u64;
        let mut min = u32::MAX;
        let mut max = u32::MIN;

        for v in values {
            count += 1;
            sum += u64::from(v);
            min = min.min(v);
            max = max.max(v);
        }

        if count == 0 {
            return None;
        }
        Some(Self {
            min,
            max,
            mean: sum as f64 / count as f64,
        })
    }
}

/// Snapshot of a whole record set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    pub count: usize,
    pub sensed: FieldStats,
    pub converter: FieldStats,
    pub actuator: FieldStats,
}

impl StatsSummary {
    /// Mean actuator duty as a percentage of `full_scale`
    pub fn utilization(&self, full_scale: u32) -> f64 {
        percent_of(self.actuator.mean, full_scale)
    }
}

/// Records sharing one sensed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub key: u32,
    pub records: Vec<Record>,
}

impl Bucket {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn avg_converter(&self) -> f64 {
        mean(self.records.iter().map(|r| r.converter_value))
    }

    pub fn avg_actuator(&self) -> f64 {
        mean(self.records.iter().map(|r| r.actuator_value))
    }

    /// Average actuator value as a percentage of `full_scale`
    pub fn percentage(&self, full_scale: u32) -> f64 {
        percent_of(self.avg_actuator(), full_scale)
    }
}

fn mean(values: impl Iterator<Item = u32>) -> f64 {
    FieldStats::from_values(values).map_or(0.0, |s| s.mean)
}

fn percent_of(value: f64, full_scale: u32) -> f64 {
    if full_scale == 0 {
        return 0.0;
    }
    value / f64::from(full_scale) * 100.0
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
