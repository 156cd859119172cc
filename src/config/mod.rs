//! Configuration module for Lapboard.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: data Source and Display, plus command-line overrides.

mod display_config;
mod overrides;
mod source_config;

pub use display_config::{DisplayEnvConfig, OutputFormat};
pub use overrides::ConfigOverrides;
pub use source_config::SourceEnvConfig;

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub source: SourceEnvConfig,
    pub display: DisplayEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let source = SourceEnvConfig::from_env();
        let display = DisplayEnvConfig::from_env().context("Failed to load display config")?;

        Ok(Self { source, display })
    }
}
