//! Season data collaborator: where teams, events, and records come from.
//!
//! The standings service never stores anything. It asks a [`SeasonSource`]
//! for a fresh snapshot of the season on every call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fll_core::{EventId, JudgingResult, MatchResult, SeasonId, Team, TeamId};

/// Errors a data source can report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("unknown season {0}")]
    UnknownSeason(SeasonId),

    #[error("unknown event {event} in {season}")]
    UnknownEvent { season: SeasonId, event: EventId },

    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// An event as listed by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Registered teams.
    pub roster: Vec<TeamId>,
}

/// Read access to one or more seasons of league data.
///
/// Implementations handle the specifics of a particular backing store.
/// Every call returns owned data; the service ranks events in parallel, so
/// sources must be shareable across threads.
pub trait SeasonSource: Send + Sync {
    /// Teams of the season, or only the roster of `event` when given.
    fn list_teams(&self, season: SeasonId, event: Option<EventId>)
        -> Result<Vec<Team>, SourceError>;

    fn list_match_results(
        &self,
        season: SeasonId,
        event: EventId,
    ) -> Result<Vec<MatchResult>, SourceError>;

    fn list_judging_results(
        &self,
        season: SeasonId,
        event: EventId,
    ) -> Result<Vec<JudgingResult>, SourceError>;

    /// Events of the season in the source's own order.
    fn list_events(&self, season: SeasonId) -> Result<Vec<Event>, SourceError>;

    /// Identifier of the data revision being served, if the source has one.
    fn revision(&self) -> Option<String> {
        None
    }
}
