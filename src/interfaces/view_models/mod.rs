pub mod leaderboard_view_model;

pub use leaderboard_view_model::{LeaderboardRowView, LeaderboardViewModel, StatsView};
