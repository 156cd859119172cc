use std::collections::BTreeSet;
use std::io::Write;

use anyhow::Result;

use crate::application::leaderboard::LeaderboardView;
use crate::application::presenter::Presenter;
use crate::application::session::SessionHeader;
use crate::domain::lap::LapField;
use crate::interfaces::view_models::{LeaderboardRowView, LeaderboardViewModel, StatsView};

pub const NO_MATCH_MESSAGE: &str = "No matching records";

const HEADERS: [&str; 9] = [
    "#", "Car", "Track", "Layout", "Time", "Power", "Drivetrain", "Control", "Date",
];

fn cells(row: &LeaderboardRowView) -> [String; 9] {
    let rank = if row.podium {
        format!("*{}", row.rank)
    } else {
        row.rank.to_string()
    };
    [
        rank,
        row.car.clone(),
        row.track.clone(),
        row.layout.clone(),
        row.time.clone(),
        row.power.clone(),
        row.drivetrain.clone(),
        row.control_type.clone(),
        row.date.clone(),
    ]
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// Plain-text table written to any `Write` sink.
pub struct TablePresenter<W: Write> {
    out: W,
    show_options: bool,
}

impl<W: Write> TablePresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_options: false,
        }
    }

    /// Also list the selectable values of each filter field.
    pub fn with_options(mut self, show: bool) -> Self {
        self.show_options = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_stats(&mut self, stats: &StatsView) -> Result<()> {
        writeln!(
            self.out,
            "Records: {} | Fastest: {} | Avg power: {}",
            stats.total_records, stats.fastest_time, stats.average_power
        )?;
        Ok(())
    }
}

impl<W: Write> Presenter for TablePresenter<W> {
    fn populate_options(&mut self, field: LapField, values: &BTreeSet<String>) -> Result<()> {
        if self.show_options {
            let listed: Vec<&str> = values.iter().map(String::as_str).collect();
            writeln!(self.out, "{}: all, {}", field, listed.join(", "))?;
        }
        Ok(())
    }

    fn show_header(&mut self, header: &SessionHeader) -> Result<()> {
        writeln!(
            self.out,
            "Game version {} | Updated {}",
            header.game_version, header.updated
        )?;
        Ok(())
    }

    fn render(&mut self, view: &LeaderboardView) -> Result<()> {
        let rows: Vec<[String; 9]> = LeaderboardViewModel::rows(view).iter().map(cells).collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cols: Vec<String>| cols.join("  ").trim_end().to_string();

        writeln!(
            self.out,
            "{}",
            line(HEADERS.iter().zip(widths).map(|(h, w)| pad(h, w)).collect())
        )?;
        let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        writeln!(self.out, "{}", "-".repeat(total))?;

        if rows.is_empty() {
            writeln!(self.out, "{}", NO_MATCH_MESSAGE)?;
        }
        for row in &rows {
            writeln!(
                self.out,
                "{}",
                line(row.iter().zip(widths).map(|(c, w)| pad(c, w)).collect())
            )?;
        }

        writeln!(self.out)?;
        self.write_stats(&LeaderboardViewModel::stats(&view.stats))
    }

    fn show_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        self.write_stats(&LeaderboardViewModel::stats(&Default::default()))
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "Error: {}", message)?;
        self.write_stats(&LeaderboardViewModel::stats(&Default::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::leaderboard::{FilterCriteria, Leaderboard, RecordStore, SortSpec};
    use crate::domain::lap::{LapRecord, PowerValue};

    fn output(presenter: TablePresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_render_rows_and_stats() {
        let board = Leaderboard::new(RecordStore::load(&[
            LapRecord {
                car: Some("Corvette Z06".to_string()),
                time: Some("1:41.020".to_string()),
                power: Some(PowerValue::Number(670.0)),
                ..Default::default()
            },
            LapRecord {
                car: Some("GR86".to_string()),
                time: Some("1:52.500".to_string()),
                power: Some(PowerValue::Number(228.0)),
                ..Default::default()
            },
        ]));
        let view = board.view(&FilterCriteria::new(), SortSpec::default());

        let mut presenter = TablePresenter::new(Vec::new());
        presenter.render(&view).unwrap();
        let text = output(presenter);

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("#"));
        assert!(lines[2].starts_with("*1"));
        assert!(lines[2].contains("Corvette Z06"));
        assert!(lines[3].contains("228 hp"));
        assert!(text.contains("Records: 2 | Fastest: 1:41.020 | Avg power: 449"));
    }

    #[test]
    fn test_render_empty_view() {
        let mut presenter = TablePresenter::new(Vec::new());
        presenter.render(&LeaderboardView::empty()).unwrap();
        let text = output(presenter);

        assert!(text.contains(NO_MATCH_MESSAGE));
        assert!(text.contains("Records: 0 | Fastest: --:--.-- | Avg power: 0"));
    }

    #[test]
    fn test_error_shows_zero_stats() {
        let mut presenter = TablePresenter::new(Vec::new());
        presenter.show_error("Failed to load data").unwrap();
        let text = output(presenter);

        assert!(text.starts_with("Error: Failed to load data"));
        assert!(text.contains("Records: 0"));
    }

    #[test]
    fn test_options_only_when_enabled() {
        let values: BTreeSet<String> = ["Imola".to_string(), "Spa".to_string()].into();

        let mut quiet = TablePresenter::new(Vec::new());
        quiet.populate_options(LapField::Track, &values).unwrap();
        assert!(output(quiet).is_empty());

        let mut verbose = TablePresenter::new(Vec::new()).with_options(true);
        verbose.populate_options(LapField::Track, &values).unwrap();
        assert_eq!(output(verbose), "track: all, Imola, Spa\n");
    }
}
