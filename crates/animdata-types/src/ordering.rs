//! Record orderings applied before packing or exporting.

use std::collections::HashSet;

use crate::record::Record;

/// Stable sort by COF name, ascending byte-wise.
pub fn sort_by_name(records: &mut [Record]) {
    records.sort_by(|a, b| a.cof_name().as_bytes().cmp(b.cof_name().as_bytes()));
}

/// Indices of records whose COF name already appeared earlier in the slice.
///
/// The first occurrence of each name is never reported.
pub fn duplicate_indices(records: &[Record]) -> Vec<usize> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut duplicates = Vec::new();
    for (i, record) in records.iter().enumerate() {
        if !seen.insert(record.cof_name()) {
            duplicates.push(i);
        }
    }
    duplicates
}

/// Drop every record whose COF name was already seen. First occurrence wins.
pub fn dedupe(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.cof_name().to_string()))
        .collect()
}
