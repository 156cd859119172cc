use std::collections::BTreeSet;

use anyhow::Result;

use crate::application::leaderboard::LeaderboardView;
use crate::application::session::SessionHeader;
use crate::domain::lap::LapField;

/// Display surface driven by a [`crate::application::session::Session`].
///
/// Implementations only render; they never filter, sort or aggregate.
pub trait Presenter {
    fn populate_options(&mut self, field: LapField, values: &BTreeSet<String>) -> Result<()>;

    fn show_header(&mut self, header: &SessionHeader) -> Result<()>;

    fn render(&mut self, view: &LeaderboardView) -> Result<()>;

    /// Informational state (e.g. an empty data file) shown in place of rows.
    fn show_message(&mut self, message: &str) -> Result<()>;

    /// Fatal load failure shown in place of rows.
    fn show_error(&mut self, message: &str) -> Result<()>;
}
