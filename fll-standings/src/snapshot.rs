//! Season snapshot: a JSON file holding one season's teams, events, and
//! records, served through [`SeasonSource`].
//!
//! Loading rejects unknown schema versions and checks referential integrity:
//! - team and event ids are unique
//! - every roster entry names a known team
//! - match indices are within 1..=4 (enforced while parsing)
//!
//! Records for teams that are not on an event's roster are kept. Ranking
//! ignores them and the service reports them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fll_core::{EventId, JudgingResult, MatchResult, SeasonId, Team, TeamId};

use crate::source::{Event, SeasonSource, SourceError};

/// Current snapshot schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors from loading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported schema version {found} (max supported: {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },

    #[error("team id {0} appears more than once")]
    DuplicateTeam(TeamId),

    #[error("event id {0} appears more than once")]
    DuplicateEvent(EventId),

    #[error("{event} roster lists unknown {team}")]
    UnknownRosterTeam { event: EventId, team: TeamId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    pub name: String,
}

/// One event with its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEvent {
    pub id: EventId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub roster: Vec<TeamId>,
    #[serde(default)]
    pub matches: Vec<MatchResult>,
    #[serde(default)]
    pub judging: Vec<JudgingResult>,
}

impl SnapshotEvent {
    pub fn event(&self) -> Event {
        Event {
            id: self.id,
            name: self.name.clone(),
            date: self.date,
            roster: self.roster.clone(),
        }
    }
}

/// A complete season, as exported by the league's scoring system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSnapshot {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub season: Season,
    pub teams: Vec<Team>,
    #[serde(default)]
    pub events: Vec<SnapshotEvent>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl SeasonSnapshot {
    pub fn from_file(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a snapshot and check it.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(SnapshotError::UnsupportedSchema {
                found: self.schema_version,
                supported: SCHEMA_VERSION,
            });
        }

        let mut team_ids = HashSet::with_capacity(self.teams.len());
        for team in &self.teams {
            if !team_ids.insert(team.id) {
                return Err(SnapshotError::DuplicateTeam(team.id));
            }
        }

        let mut event_ids = HashSet::with_capacity(self.events.len());
        for event in &self.events {
            if !event_ids.insert(event.id) {
                return Err(SnapshotError::DuplicateEvent(event.id));
            }
            if let Some(&team) = event.roster.iter().find(|t| !team_ids.contains(t)) {
                return Err(SnapshotError::UnknownRosterTeam {
                    event: event.id,
                    team,
                });
            }
        }
        Ok(())
    }

    /// BLAKE3 hash of the snapshot's canonical JSON, as lowercase hex.
    ///
    /// Two snapshots with identical content share a fingerprint regardless
    /// of the whitespace or key order of the files they were loaded from.
    pub fn fingerprint(&self) -> Result<String, SnapshotError> {
        let json = serde_json::to_vec(self)?;
        Ok(blake3::hash(&json).to_hex().to_string())
    }

    pub fn event(&self, id: EventId) -> Option<&SnapshotEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    fn check_season(&self, season: SeasonId) -> Result<(), SourceError> {
        if season == self.season.id {
            Ok(())
        } else {
            Err(SourceError::UnknownSeason(season))
        }
    }

    fn require_event(&self, season: SeasonId, event: EventId) -> Result<&SnapshotEvent, SourceError> {
        self.check_season(season)?;
        self.event(event)
            .ok_or(SourceError::UnknownEvent { season, event })
    }
}

impl SeasonSource for SeasonSnapshot {
    fn list_teams(
        &self,
        season: SeasonId,
        event: Option<EventId>,
    ) -> Result<Vec<Team>, SourceError> {
        let Some(event) = event else {
            self.check_season(season)?;
            return Ok(self.teams.clone());
        };
        let event = self.require_event(season, event)?;
        Ok(event
            .roster
            .iter()
            .filter_map(|&id| self.team(id).cloned())
            .collect())
    }

    fn list_match_results(
        &self,
        season: SeasonId,
        event: EventId,
    ) -> Result<Vec<MatchResult>, SourceError> {
        Ok(self.require_event(season, event)?.matches.clone())
    }

    fn list_judging_results(
        &self,
        season: SeasonId,
        event: EventId,
    ) -> Result<Vec<JudgingResult>, SourceError> {
        Ok(self.require_event(season, event)?.judging.clone())
    }

    fn list_events(&self, season: SeasonId) -> Result<Vec<Event>, SourceError> {
        self.check_season(season)?;
        Ok(self.events.iter().map(SnapshotEvent::event).collect())
    }

    fn revision(&self) -> Option<String> {
        self.fingerprint().ok()
    }
}
