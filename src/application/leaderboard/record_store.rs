use std::collections::BTreeSet;

use crate::domain::lap::date::parse_timestamp_ms;
use crate::domain::lap::{LapField, LapRecord};

/// The canonical, unfiltered lap record collection for a session.
///
/// Built once from a loaded collection and never mutated afterwards; every
/// pipeline stage reads from it and produces new sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<LapRecord>,
}

impl RecordStore {
    /// Creates a store holding its own copy of `records`, in the given order.
    pub fn load(records: &[LapRecord]) -> Self {
        Self {
            records: records.to_vec(),
        }
    }

    pub fn records(&self) -> &[LapRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique non-empty values of `field` across all records, sorted.
    pub fn distinct_values(&self, field: LapField) -> BTreeSet<String> {
        self.records
            .iter()
            .filter_map(|record| field.text(record))
            .filter(|value| !value.is_empty())
            .map(|value| value.into_owned())
            .collect()
    }

    /// The record with the most recent date.
    ///
    /// Records with a missing or unparseable date never win over one with a
    /// valid date. Ties, including "no valid dates at all", go to the record
    /// loaded first. `None` only for an empty store.
    pub fn latest_by_date(&self) -> Option<&LapRecord> {
        let mut records = self.records.iter();
        let first = records.next()?;
        let mut best = (first, first.date.as_deref().and_then(parse_timestamp_ms));

        for record in records {
            let stamp = record.date.as_deref().and_then(parse_timestamp_ms);
            if stamp > best.1 {
                best = (record, stamp);
            }
        }

        Some(best.0)
    }
}
