// Filter / sort / statistics pipeline
pub mod leaderboard;

// Output port for display surfaces
pub mod presenter;

// Load state and presentation driver
pub mod session;
