use std::collections::BTreeMap;

use tracing::debug;

use crate::application::leaderboard::record_store::RecordStore;
use crate::domain::errors::FieldError;
use crate::domain::lap::{LapField, LapRecord};

/// Selection value meaning "no constraint on this field".
pub const ALL: &str = "all";

/// Equality constraints, at most one per filterable field.
///
/// A field that is absent or set to [`ALL`] is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    selections: BTreeMap<LapField, String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds criteria from `(field, value)` name pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut criteria = Self::new();
        for (name, value) in pairs {
            let field = name.as_ref().parse::<LapField>()?;
            criteria.set(field, value)?;
        }
        Ok(criteria)
    }

    /// Builds criteria from `field=value` expressions, as given on the command line.
    pub fn from_expressions<S: AsRef<str>>(exprs: &[S]) -> Result<Self, FieldError> {
        let mut criteria = Self::new();
        for expr in exprs {
            let (field, value) = Self::parse_expression(expr.as_ref())?;
            criteria.set(field, value)?;
        }
        Ok(criteria)
    }

    /// Parses a `field=value` expression, e.g. `track=Nordschleife`.
    pub fn parse_expression(expr: &str) -> Result<(LapField, String), FieldError> {
        let (name, value) = expr
            .split_once('=')
            .ok_or_else(|| FieldError::InvalidExpression {
                expr: expr.to_string(),
            })?;
        let field = name.parse::<LapField>()?;
        Ok((field, value.to_string()))
    }

    /// Constrains `field` to `value`; [`ALL`] clears the constraint.
    pub fn set(&mut self, field: LapField, value: impl Into<String>) -> Result<(), FieldError> {
        if !field.is_filterable() {
            return Err(FieldError::NotFilterable {
                name: field.name().to_string(),
            });
        }

        let value = value.into();
        if value == ALL {
            self.selections.remove(&field);
        } else {
            self.selections.insert(field, value);
        }
        Ok(())
    }

    /// Puts every field back to [`ALL`].
    pub fn reset(&mut self) {
        self.selections.clear();
    }

    /// Selected value for `field`, or [`ALL`].
    pub fn selection(&self, field: LapField) -> &str {
        self.selections.get(&field).map_or(ALL, String::as_str)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.selections.is_empty()
    }

    /// Whether `record` satisfies every constraint (exact match).
    pub fn matches(&self, record: &LapRecord) -> bool {
        self.selections
            .iter()
            .all(|(field, wanted)| field.text(record).is_some_and(|value| value == wanted.as_str()))
    }
}

pub struct FilterEngine;

impl FilterEngine {
    /// Records of the store that satisfy `criteria`, in store order.
    pub fn apply(store: &RecordStore, criteria: &FilterCriteria) -> Vec<LapRecord> {
        Self::apply_to(store.records(), criteria)
    }

    pub fn apply_to(records: &[LapRecord], criteria: &FilterCriteria) -> Vec<LapRecord> {
        let filtered: Vec<LapRecord> = records
            .iter()
            .filter(|record| criteria.matches(record))
            .cloned()
            .collect();

        debug!(
            "FilterEngine: {} of {} records match {:?}",
            filtered.len(),
            records.len(),
            criteria
        );
        filtered
    }
}
