pub mod filter_engine;
pub mod pipeline;
pub mod record_store;
pub mod sort_engine;
pub mod stats_aggregator;

pub use filter_engine::{ALL, FilterCriteria, FilterEngine};
pub use pipeline::{Leaderboard, LeaderboardView, RankedLap};
pub use record_store::RecordStore;
pub use sort_engine::{SortEngine, SortSpec};
pub use stats_aggregator::{LapStats, StatsAggregator};
