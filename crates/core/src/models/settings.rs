use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::CoreError;

/// Default candidate data files, tried in order.
pub const DEFAULT_DATA_FILES: &[&str] = &[
    "data/gold-rupee.json",
    "public/data/gold-rupee.json",
    "gold-rupee.json",
];

/// Runtime configuration for the data endpoint and the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Candidate data file paths; the first that exists is served.
    pub data_files: Vec<PathBuf>,

    /// Size of the history window in calendar years.
    pub window_years: u32,

    /// Directory holding the static front end.
    pub public_dir: PathBuf,

    pub port: u16,

    pub renderer: RendererSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_files: DEFAULT_DATA_FILES.iter().map(PathBuf::from).collect(),
            window_years: 5,
            public_dir: PathBuf::from("public"),
            port: 3000,
            renderer: RendererSettings::default(),
        }
    }
}

impl Settings {
    /// Overlay values from environment variables onto `self`.
    ///
    /// `lookup` abstracts `std::env::var` so callers (and tests) decide where
    /// the values come from. Unset variables leave the current value alone.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(files) = lookup("GOLD_RUPEE_DATA_FILES") {
            let parsed: Vec<PathBuf> = files
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect();
            if parsed.is_empty() {
                return Err(CoreError::InvalidConfig(
                    "GOLD_RUPEE_DATA_FILES is set but lists no paths".into(),
                ));
            }
            self.data_files = parsed;
        }
        if let Some(years) = lookup("GOLD_RUPEE_WINDOW_YEARS") {
            self.window_years = parse_env("GOLD_RUPEE_WINDOW_YEARS", &years)?;
        }
        if let Some(dir) = lookup("PUBLIC_DIR") {
            self.public_dir = PathBuf::from(dir);
        }
        if let Some(port) = lookup("PORT") {
            self.port = parse_env("PORT", &port)?;
        }
        if let Some(retries) = lookup("GOLD_RUPEE_RETRIES") {
            self.renderer.retries = parse_env("GOLD_RUPEE_RETRIES", &retries)?;
        }
        if let Some(delay) = lookup("GOLD_RUPEE_RETRY_DELAY_MS") {
            self.renderer.retry_delay_ms = parse_env("GOLD_RUPEE_RETRY_DELAY_MS", &delay)?;
        }
        Ok(self)
    }

    /// Overlay the process environment.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }
}

/// Retry policy for the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererSettings {
    /// Immediate retries after the first failed fetch.
    pub retries: u32,

    /// Fixed pause between attempts.
    pub retry_delay_ms: u64,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            retries: 3,
            retry_delay_ms: 500,
        }
    }
}

impl RendererSettings {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::InvalidConfig(format!("{key} has invalid value: {raw:?}")))
}
