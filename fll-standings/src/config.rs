//! Standings configuration: TOML file with defaults for every field.
//!
//! ```toml
//! event_order = "supplied"
//! competitor_count = "roster"
//!
//! [divisions]
//! enabled = false
//! names = ["Blue", "Red"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fll_core::{CompetitorCount, EventOptions, LeagueOptions};

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Order in which a season's events are scanned for league scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOrder {
    /// The order the data source lists the events in.
    #[default]
    Supplied,
    /// Ascending by event date; undated events keep their relative order
    /// after every dated event.
    ByDate,
}

/// Division mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DivisionConfig {
    pub enabled: bool,
    /// Display names; index 0 names division 1.
    pub names: Vec<String>,
}

/// Everything that shapes how standings are computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingsConfig {
    pub event_order: EventOrder,
    pub competitor_count: CompetitorCount,
    pub divisions: DivisionConfig,
}

impl StandingsConfig {
    /// Load and validate a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.divisions.enabled && self.divisions.names.is_empty() {
            return Err(ConfigError::Invalid(
                "divisions are enabled but no division names are configured".into(),
            ));
        }
        if self.divisions.names.len() > usize::from(u8::MAX) {
            return Err(ConfigError::Invalid(format!(
                "at most {} divisions are supported, got {}",
                u8::MAX,
                self.divisions.names.len()
            )));
        }
        if let Some(blank) = self.divisions.names.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "division {} has a blank name",
                blank + 1
            )));
        }
        Ok(())
    }

    pub fn event_options(&self) -> EventOptions {
        EventOptions {
            competitor_count: self.competitor_count,
        }
    }

    pub fn league_options(&self) -> LeagueOptions {
        LeagueOptions {
            divisions: self.divisions.enabled,
        }
    }

    /// Display name of a 1-based division number.
    pub fn division_name(&self, division: u8) -> Option<&str> {
        let index = usize::from(division).checked_sub(1)?;
        self.divisions.names.get(index).map(String::as_str)
    }
}
