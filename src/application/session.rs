use serde::Serialize;
use tracing::{error, info, warn};

use crate::application::leaderboard::{
    FilterCriteria, Leaderboard, LeaderboardView, RecordStore, SortSpec,
};
use crate::application::presenter::Presenter;
use crate::domain::errors::LoadError;
use crate::domain::lap::{LapField, LapRecord};
use crate::domain::ports::RecordSource;

pub const EMPTY_DATA_MESSAGE: &str = "The data file is empty, add some lap records";
pub const NO_DATA_MESSAGE: &str = "No lap records loaded";

/// Values shown in the header when the latest record does not carry them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFallbacks {
    pub game_version: String,
    pub updated: String,
}

impl Default for HeaderFallbacks {
    fn default() -> Self {
        Self {
            game_version: "0.38.3".to_string(),
            updated: "2025-12-30".to_string(),
        }
    }
}

/// Game version and update date taken from the most recent record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionHeader {
    pub game_version: String,
    pub updated: String,
}

impl SessionHeader {
    fn from_store(store: &RecordStore, fallbacks: &HeaderFallbacks) -> Self {
        let latest = store.latest_by_date();
        Self {
            game_version: non_empty_or(
                latest.and_then(|r| r.game_version.as_deref()),
                &fallbacks.game_version,
            ),
            updated: non_empty_or(latest.and_then(|r| r.date.as_deref()), &fallbacks.updated),
        }
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or(fallback).to_string()
}

/// Load state of a leaderboard session.
#[derive(Debug, Clone)]
pub enum SessionState {
    NoData,
    Empty,
    Loaded {
        leaderboard: Leaderboard,
        header: SessionHeader,
    },
    Failed(String),
}

pub struct Session {
    state: SessionState,
    fallbacks: HeaderFallbacks,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(HeaderFallbacks::default())
    }
}

impl Session {
    pub fn new(fallbacks: HeaderFallbacks) -> Self {
        Self {
            state: SessionState::NoData,
            fallbacks,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Loads the collection from `source`, replacing whatever was loaded.
    ///
    /// On failure the session holds no data and the error is returned; the
    /// same message is kept for [`Session::refresh`].
    pub async fn load(&mut self, source: &dyn RecordSource) -> Result<(), LoadError> {
        info!("Loading lap records from {}", source.describe());
        match source.fetch().await {
            Ok(records) => {
                self.accept(&records);
                Ok(())
            }
            Err(e) => {
                error!("Failed to load lap records: {}", e);
                self.state = SessionState::Failed(format!("Failed to load data: {}", e));
                Err(e)
            }
        }
    }

    /// Installs an already fetched collection.
    pub fn accept(&mut self, records: &[LapRecord]) {
        if records.is_empty() {
            warn!("Data source is empty");
            self.state = SessionState::Empty;
            return;
        }

        let store = RecordStore::load(records);
        let header = SessionHeader::from_store(&store, &self.fallbacks);
        info!(
            "Loaded {} lap records (game version {}, updated {})",
            store.len(),
            header.game_version,
            header.updated
        );
        self.state = SessionState::Loaded {
            leaderboard: Leaderboard::new(store),
            header,
        };
    }

    /// Message of the last failed load, if the session is in that state.
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn leaderboard(&self) -> Option<&Leaderboard> {
        match &self.state {
            SessionState::Loaded { leaderboard, .. } => Some(leaderboard),
            _ => None,
        }
    }

    pub fn header(&self) -> Option<&SessionHeader> {
        match &self.state {
            SessionState::Loaded { header, .. } => Some(header),
            _ => None,
        }
    }

    /// Current view; an unloaded session yields zero rows and zero stats.
    pub fn view(&self, criteria: &FilterCriteria, sort: SortSpec) -> LeaderboardView {
        self.leaderboard()
            .map_or_else(LeaderboardView::empty, |board| board.view(criteria, sort))
    }

    /// Distinct values of `field` across the loaded store.
    pub fn options(&self, field: LapField) -> Vec<String> {
        self.leaderboard()
            .map(|board| board.store().distinct_values(field).into_iter().collect())
            .unwrap_or_default()
    }

    /// Drives `presenter` with the current state.
    pub fn refresh(
        &self,
        presenter: &mut dyn Presenter,
        criteria: &FilterCriteria,
        sort: SortSpec,
    ) -> anyhow::Result<LeaderboardView> {
        match &self.state {
            SessionState::Loaded {
                leaderboard,
                header,
            } => {
                presenter.show_header(header)?;
                for (field, values) in leaderboard.filter_options() {
                    presenter.populate_options(field, &values)?;
                }
                let view = leaderboard.view(criteria, sort);
                presenter.render(&view)?;
                Ok(view)
            }
            SessionState::Empty => {
                presenter.show_message(EMPTY_DATA_MESSAGE)?;
                Ok(LeaderboardView::empty())
            }
            SessionState::NoData => {
                presenter.show_message(NO_DATA_MESSAGE)?;
                Ok(LeaderboardView::empty())
            }
            SessionState::Failed(message) => {
                presenter.show_error(message)?;
                Ok(LeaderboardView::empty())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::BTreeSet;

    struct FailingSource;

    #[async_trait]
    impl RecordSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<LapRecord>, LoadError> {
            Err(LoadError::NotAnArray { found: "object" })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        options: Vec<LapField>,
        rendered: usize,
        messages: Vec<String>,
        errors: Vec<String>,
    }

    impl Presenter for RecordingPresenter {
        fn populate_options(&mut self, field: LapField, _: &BTreeSet<String>) -> anyhow::Result<()> {
            self.options.push(field);
            Ok(())
        }

        fn show_header(&mut self, _: &SessionHeader) -> anyhow::Result<()> {
            Ok(())
        }

        fn render(&mut self, _: &LeaderboardView) -> anyhow::Result<()> {
            self.rendered += 1;
            Ok(())
        }

        fn show_message(&mut self, message: &str) -> anyhow::Result<()> {
            self.messages.push(message.to_string());
            Ok(())
        }

        fn show_error(&mut self, message: &str) -> anyhow::Result<()> {
            self.errors.push(message.to_string());
            Ok(())
        }
    }

    fn lap(date: Option<&str>, version: Option<&str>) -> LapRecord {
        LapRecord {
            date: date.map(String::from),
            game_version: version.map(String::from),
            time: Some("1:00.000".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_header_from_latest_record() {
        let mut session = Session::default();
        session.accept(&[
            lap(Some("2025-01-01"), Some("0.37.0")),
            lap(Some("2025-02-01"), Some("0.38.1")),
        ]);

        let header = session.header().unwrap();
        assert_eq!(header.game_version, "0.38.1");
        assert_eq!(header.updated, "2025-02-01");
    }

    #[test]
    fn test_header_falls_back_to_defaults() {
        let mut session = Session::default();
        session.accept(&[lap(None, None)]);

        let header = session.header().unwrap();
        assert_eq!(header.game_version, "0.38.3");
        assert_eq!(header.updated, "2025-12-30");
    }

    #[test]
    fn test_empty_collection_is_not_an_error() {
        let mut session = Session::default();
        session.accept(&[]);

        let mut presenter = RecordingPresenter::default();
        let view = session
            .refresh(&mut presenter, &FilterCriteria::new(), SortSpec::default())
            .unwrap();

        assert!(matches!(session.state(), SessionState::Empty));
        assert!(view.rows.is_empty());
        assert_eq!(view.stats.count, 0);
        assert_eq!(presenter.messages, vec![EMPTY_DATA_MESSAGE]);
        assert!(presenter.errors.is_empty());
    }

    #[test]
    fn test_loaded_session_populates_and_renders() {
        let mut session = Session::default();
        session.accept(&[lap(None, None)]);

        let mut presenter = RecordingPresenter::default();
        session
            .refresh(&mut presenter, &FilterCriteria::new(), SortSpec::default())
            .unwrap();

        assert_eq!(presenter.options, LapField::filterable());
        assert_eq!(presenter.rendered, 1);
    }

    #[tokio::test]
    async fn test_failed_load_discards_previous_data() {
        let mut session = Session::default();
        session.accept(&[lap(None, None)]);

        let result = session.load(&FailingSource).await;
        assert!(result.is_err());
        assert!(session.leaderboard().is_none());
        assert_eq!(
            session.failure(),
            Some("Failed to load data: Data format error: expected a JSON array, got object")
        );

        let mut presenter = RecordingPresenter::default();
        let view = session
            .refresh(&mut presenter, &FilterCriteria::new(), SortSpec::default())
            .unwrap();

        assert_eq!(presenter.errors.len(), 1);
        assert!(presenter.errors[0].contains("expected a JSON array"));
        assert_eq!(presenter.rendered, 0);
        assert!(view.rows.is_empty());
    }
}
