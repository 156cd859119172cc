//! Display configuration parsing from environment variables.
//!
//! Covers the initial sort order, the output format and the header values
//! used when the data does not provide them.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::application::leaderboard::SortSpec;
use crate::application::session::HeaderFallbacks;
use crate::domain::lap::LapField;

/// How the leaderboard is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Must be 'table' or 'json'", s),
        }
    }
}

/// Display environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEnvConfig {
    pub sort: SortSpec,
    pub output: OutputFormat,
    pub fallbacks: HeaderFallbacks,
}

impl Default for DisplayEnvConfig {
    fn default() -> Self {
        Self {
            sort: SortSpec::default(),
            output: OutputFormat::Table,
            fallbacks: HeaderFallbacks::default(),
        }
    }
}

impl DisplayEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let field = match env::var("LAPBOARD_SORT_FIELD") {
            Ok(name) => name
                .parse::<LapField>()
                .context("Invalid LAPBOARD_SORT_FIELD")?,
            Err(_) => defaults.sort.field,
        };
        let ascending = env::var("LAPBOARD_SORT_ASCENDING")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(defaults.sort.ascending);

        let output = match env::var("LAPBOARD_OUTPUT") {
            Ok(value) => OutputFormat::from_str(&value)?,
            Err(_) => defaults.output,
        };

        Ok(Self {
            sort: SortSpec::new(field, ascending),
            output,
            fallbacks: HeaderFallbacks {
                game_version: env::var("LAPBOARD_FALLBACK_GAME_VERSION")
                    .unwrap_or(defaults.fallbacks.game_version),
                updated: env::var("LAPBOARD_FALLBACK_UPDATED")
                    .unwrap_or(defaults.fallbacks.updated),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
