use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::leaderboard::{LapStats, LeaderboardView};
use crate::application::presenter::Presenter;
use crate::application::session::SessionHeader;
use crate::domain::lap::LapField;
use crate::interfaces::view_models::{LeaderboardRowView, LeaderboardViewModel};

#[derive(Debug, Serialize)]
struct StatsDocument {
    count: usize,
    fastest_time: String,
    average_power: i64,
}

impl From<&LapStats> for StatsDocument {
    fn from(stats: &LapStats) -> Self {
        Self {
            count: stats.count,
            fastest_time: stats.fastest_time(),
            average_power: stats.average_power,
        }
    }
}

fn no_options(options: &&BTreeMap<LapField, Vec<String>>) -> bool {
    options.is_empty()
}

#[derive(Debug, Serialize)]
struct LeaderboardDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    header: Option<&'a SessionHeader>,
    #[serde(skip_serializing_if = "no_options")]
    options: &'a BTreeMap<LapField, Vec<String>>,
    rows: Vec<LeaderboardRowView>,
    stats: StatsDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Writes one JSON document per render (or message/error) to a `Write` sink.
///
/// Header and option lists arrive before the rows and are buffered into
/// the next document.
pub struct JsonPresenter<W: Write> {
    out: W,
    header: Option<SessionHeader>,
    options: BTreeMap<LapField, Vec<String>>,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header: None,
            options: BTreeMap::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(
        &mut self,
        rows: Vec<LeaderboardRowView>,
        stats: &LapStats,
        message: Option<&str>,
        error: Option<&str>,
    ) -> Result<()> {
        let document = LeaderboardDocument {
            header: self.header.as_ref(),
            options: &self.options,
            rows,
            stats: StatsDocument::from(stats),
            message,
            error,
        };
        serde_json::to_writer_pretty(&mut self.out, &document)
            .context("Failed to write leaderboard JSON")?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn populate_options(&mut self, field: LapField, values: &BTreeSet<String>) -> Result<()> {
        self.options.insert(field, values.iter().cloned().collect());
        Ok(())
    }

    fn show_header(&mut self, header: &SessionHeader) -> Result<()> {
        self.header = Some(header.clone());
        Ok(())
    }

    fn render(&mut self, view: &LeaderboardView) -> Result<()> {
        self.emit(LeaderboardViewModel::rows(view), &view.stats, None, None)
    }

    fn show_message(&mut self, message: &str) -> Result<()> {
        self.emit(Vec::new(), &LapStats::default(), Some(message), None)
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        self.emit(Vec::new(), &LapStats::default(), None, Some(message))
    }
}
