use serde::Serialize;

use crate::application::leaderboard::{LapStats, LeaderboardView, RankedLap};
use crate::domain::lap::{ControlType, Drivetrain, NO_TIME_TEXT};

pub const UNKNOWN_CAR: &str = "Unknown car";
pub const UNKNOWN_TRACK: &str = "Unknown track";
pub const STANDARD_LAYOUT: &str = "Standard layout";
pub const PLACEHOLDER: &str = "--";

/// Display strings for one leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRowView {
    pub rank: usize,
    pub podium: bool,
    pub car: String,
    pub track: String,
    pub layout: String,
    pub time: String,
    pub power: String,
    pub drivetrain: String,
    pub drivetrain_badge: &'static str,
    pub control_type: String,
    pub control_badge: &'static str,
    pub date: String,
}

/// Display strings for the statistics strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub total_records: String,
    pub fastest_time: String,
    pub average_power: String,
}

pub struct LeaderboardViewModel;

impl LeaderboardViewModel {
    pub fn row(row: &RankedLap) -> LeaderboardRowView {
        let record = &row.record;
        let text = |value: &Option<String>, fallback: &str| -> String {
            match value.as_deref() {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => fallback.to_string(),
            }
        };

        let power = match record.reported_power() {
            Some(_) => format!(
                "{} hp",
                record.power.as_ref().map(|p| p.as_text().trim().to_string()).unwrap_or_default()
            ),
            None => PLACEHOLDER.to_string(),
        };

        LeaderboardRowView {
            rank: row.rank,
            podium: row.is_podium(),
            car: text(&record.car, UNKNOWN_CAR),
            track: text(&record.track, UNKNOWN_TRACK),
            layout: text(&record.layout, STANDARD_LAYOUT),
            time: text(&record.time, NO_TIME_TEXT),
            power,
            drivetrain: text(&record.drivetrain, PLACEHOLDER),
            drivetrain_badge: Drivetrain::classify(record.drivetrain.as_deref()).badge(),
            control_type: text(&record.control_type, PLACEHOLDER),
            control_badge: ControlType::classify(record.control_type.as_deref()).badge(),
            date: text(&record.date, PLACEHOLDER),
        }
    }

    pub fn rows(view: &LeaderboardView) -> Vec<LeaderboardRowView> {
        view.rows.iter().map(Self::row).collect()
    }

    pub fn stats(stats: &LapStats) -> StatsView {
        StatsView {
            total_records: stats.count.to_string(),
            fastest_time: stats.fastest_time(),
            average_power: stats.average_power.to_string(),
        }
    }
}
