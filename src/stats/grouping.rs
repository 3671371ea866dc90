use std::collections::BTreeMap;

use crate::telemetry::Record;

use super::types::Bucket;

/// Partition records by exact sensed value.
///
/// Buckets come back in ascending key order regardless of arrival order;
/// records within a bucket keep their arrival order.
pub fn group_by_sensed(records: &[Record]) -> Vec<Bucket> {
    let mut groups: BTreeMap<u32, Vec<Record>> = BTreeMap::new();
    for record in records {
        groups.entry(record.sensed_value).or_default().push(*record);
    }

    groups
        .into_iter()
        .map(|(key, records)| Bucket { key, records })
        .collect()
}
