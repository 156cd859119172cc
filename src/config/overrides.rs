//! Command-line overrides applied on top of the environment configuration.

use anyhow::{Context, Result};
use std::str::FromStr;

use super::{Config, OutputFormat};
use crate::application::leaderboard::SortSpec;
use crate::domain::lap::LapField;

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub source: Option<String>,
    pub sort_field: Option<String>,
    pub descending: bool,
    pub output: Option<String>,
}

impl Config {
    /// Applies `overrides`. A new sort field keeps the configured direction;
    /// `descending` always forces a descending sort.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> Result<()> {
        if let Some(source) = &overrides.source {
            self.source.location = source.clone();
        }
        if let Some(name) = &overrides.sort_field {
            let field = name.parse::<LapField>().context("Invalid --sort field")?;
            self.display.sort = SortSpec::new(field, self.display.sort.ascending);
        }
        if overrides.descending {
            self.display.sort.ascending = false;
        }
        if let Some(format) = &overrides.output {
            self.display.output = OutputFormat::from_str(format)?;
        }
        Ok(())
    }
}
