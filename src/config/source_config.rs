//! Data source configuration parsing from environment variables.

use std::env;

use crate::infrastructure::core::HttpSettings;

/// Data source environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEnvConfig {
    pub location: String,
    pub http_timeout_secs: u64,
    pub http_max_retries: u32,
}

impl Default for SourceEnvConfig {
    fn default() -> Self {
        Self {
            location: "data.json".to_string(),
            http_timeout_secs: 30,
            http_max_retries: 3,
        }
    }
}

impl SourceEnvConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            location: env::var("LAPBOARD_SOURCE").unwrap_or(defaults.location),
            http_timeout_secs: env::var("LAPBOARD_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(defaults.http_timeout_secs),
            http_max_retries: env::var("LAPBOARD_HTTP_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(defaults.http_max_retries),
        }
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            timeout_secs: self.http_timeout_secs,
            max_retries: self.http_max_retries,
        }
    }
}
