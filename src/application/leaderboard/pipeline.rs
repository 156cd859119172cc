use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::application::leaderboard::filter_engine::{FilterCriteria, FilterEngine};
use crate::application::leaderboard::record_store::RecordStore;
use crate::application::leaderboard::sort_engine::{SortEngine, SortSpec};
use crate::application::leaderboard::stats_aggregator::{LapStats, StatsAggregator};
use crate::domain::lap::{LapField, LapRecord};

/// Number of leading positions shown as a podium.
pub const PODIUM_SIZE: usize = 3;

/// A record with its 1-based position in the sorted view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedLap {
    pub rank: usize,
    pub record: LapRecord,
}

impl RankedLap {
    pub fn is_podium(&self) -> bool {
        self.rank <= PODIUM_SIZE
    }
}

/// Output of one pipeline run: ranked rows and their statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub rows: Vec<RankedLap>,
    pub stats: LapStats,
}

impl LeaderboardView {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            stats: LapStats::default(),
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &LapRecord> {
        self.rows.iter().map(|row| &row.record)
    }
}

/// Filter → sort → summarize over a loaded store.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    store: RecordStore,
}

impl Leaderboard {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Option lists for every filterable field.
    pub fn filter_options(&self) -> Vec<(LapField, BTreeSet<String>)> {
        LapField::filterable()
            .into_iter()
            .map(|field| (field, self.store.distinct_values(field)))
            .collect()
    }

    /// Runs the pipeline. Cheap enough to call on every interaction.
    pub fn view(&self, criteria: &FilterCriteria, sort: SortSpec) -> LeaderboardView {
        let filtered = FilterEngine::apply(&self.store, criteria);
        let sorted = SortEngine::sort(&filtered, sort);
        let stats = StatsAggregator::summarize(&sorted);

        debug!(
            "Leaderboard: {} rows sorted by {} ({})",
            sorted.len(),
            sort.field,
            if sort.ascending { "asc" } else { "desc" }
        );

        let rows = sorted
            .into_iter()
            .enumerate()
            .map(|(i, record)| RankedLap { rank: i + 1, record })
            .collect();

        LeaderboardView { rows, stats }
    }
}
