use serde::{Deserialize, Serialize};

use crate::domain::lap::{LapField, LapRecord};

/// Caller-owned sort selection: which field, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: LapField,
    pub ascending: bool,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: LapField::Time,
            ascending: true,
        }
    }
}

impl SortSpec {
    pub fn new(field: LapField, ascending: bool) -> Self {
        Self { field, ascending }
    }

    /// Selection after the user picks `field` again: the same field flips
    /// direction, a different field starts ascending.
    pub fn toggle(self, field: LapField) -> Self {
        if self.field == field {
            Self {
                field,
                ascending: !self.ascending,
            }
        } else {
            Self {
                field,
                ascending: true,
            }
        }
    }
}

pub struct SortEngine;

impl SortEngine {
    /// Returns a sorted copy of `records`.
    ///
    /// Comparison follows the field's kind (see [`LapField::compare`]);
    /// descending order reverses that comparison. The sort is stable, so
    /// equal keys keep their input order in both directions.
    pub fn sort(records: &[LapRecord], spec: SortSpec) -> Vec<LapRecord> {
        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| {
            let ord = spec.field.compare(a, b);
            if spec.ascending { ord } else { ord.reverse() }
        });
        sorted
    }
}
