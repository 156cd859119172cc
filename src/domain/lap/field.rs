use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::FieldError;
use crate::domain::lap::date::timestamp_or_epoch;
use crate::domain::lap::record::LapRecord;
use crate::domain::lap::time_codec::TimeCodec;

/// How values of a field are compared when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Lap time, compared as parsed milliseconds.
    Temporal,
    /// Compared as a number, non-numeric values reading as `0`.
    Numeric,
    /// Compared as a calendar timestamp, unparseable dates reading as epoch.
    Calendar,
    /// Case-sensitive comparison of the raw text, missing values reading as "".
    Text,
}

/// The fields of a [`LapRecord`] that can be sorted, filtered or enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LapField {
    Car,
    Track,
    Layout,
    Time,
    Power,
    Drivetrain,
    ControlType,
    PowerType,
    StartType,
    Date,
    GameVersion,
}

impl LapField {
    pub fn all() -> Vec<LapField> {
        vec![
            LapField::Car,
            LapField::Track,
            LapField::Layout,
            LapField::Time,
            LapField::Power,
            LapField::Drivetrain,
            LapField::ControlType,
            LapField::PowerType,
            LapField::StartType,
            LapField::Date,
            LapField::GameVersion,
        ]
    }

    /// Fields that accept an equality filter, in the order filter controls are shown.
    pub fn filterable() -> Vec<LapField> {
        vec![
            LapField::Track,
            LapField::Car,
            LapField::Drivetrain,
            LapField::Layout,
            LapField::StartType,
            LapField::PowerType,
        ]
    }

    pub fn is_filterable(&self) -> bool {
        matches!(
            self,
            LapField::Track
                | LapField::Car
                | LapField::Drivetrain
                | LapField::Layout
                | LapField::StartType
                | LapField::PowerType
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            LapField::Car => "car",
            LapField::Track => "track",
            LapField::Layout => "layout",
            LapField::Time => "time",
            LapField::Power => "power",
            LapField::Drivetrain => "drivetrain",
            LapField::ControlType => "control_type",
            LapField::PowerType => "power_type",
            LapField::StartType => "start_type",
            LapField::Date => "date",
            LapField::GameVersion => "game_version",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            LapField::Time => FieldKind::Temporal,
            LapField::Power => FieldKind::Numeric,
            LapField::Date => FieldKind::Calendar,
            _ => FieldKind::Text,
        }
    }

    /// Raw value of this field on a record, as text.
    pub fn text<'a>(&self, record: &'a LapRecord) -> Option<Cow<'a, str>> {
        let raw = match self {
            LapField::Car => &record.car,
            LapField::Track => &record.track,
            LapField::Layout => &record.layout,
            LapField::Time => &record.time,
            LapField::Power => {
                return record.power.as_ref().map(|p| Cow::Owned(p.as_text()));
            }
            LapField::Drivetrain => &record.drivetrain,
            LapField::ControlType => &record.control_type,
            LapField::PowerType => &record.power_type,
            LapField::StartType => &record.start_type,
            LapField::Date => &record.date,
            LapField::GameVersion => &record.game_version,
        };
        raw.as_deref().map(Cow::Borrowed)
    }

    /// Three-way comparison of two records on this field, ascending.
    pub fn compare(&self, a: &LapRecord, b: &LapRecord) -> Ordering {
        match self.kind() {
            FieldKind::Temporal => {
                TimeCodec::parse_opt(a.time.as_deref()).cmp(&TimeCodec::parse_opt(b.time.as_deref()))
            }
            FieldKind::Numeric => a
                .power_for_sort()
                .partial_cmp(&b.power_for_sort())
                .unwrap_or(Ordering::Equal),
            FieldKind::Calendar => {
                timestamp_or_epoch(a.date.as_deref()).cmp(&timestamp_or_epoch(b.date.as_deref()))
            }
            FieldKind::Text => {
                let a = self.text(a).unwrap_or(Cow::Borrowed(""));
                let b = self.text(b).unwrap_or(Cow::Borrowed(""));
                a.cmp(&b)
            }
        }
    }
}

impl fmt::Display for LapField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LapField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        LapField::all()
            .into_iter()
            .find(|field| field.name() == normalized)
            .ok_or_else(|| FieldError::UnknownField {
                name: s.to_string(),
            })
    }
}
