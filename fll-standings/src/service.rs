//! Standings service: drives the ranking engine from a [`SeasonSource`].
//!
//! Two entry points:
//! - `rank_event()`: ranks a single event (per division when enabled).
//! - `league_standings()`: ranks every event of a season in parallel, then
//!   aggregates the league standings in event order.
//!
//! Nothing is cached between calls; each call reads a fresh snapshot from
//! the source.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use fll_core::{
    compute_league_standings, rank_event, EventId, EventRanking, EventRoster, EventTotals,
    LeagueStanding, MatchIndex, MatchResult, SeasonId, Team, TeamId,
};

use crate::config::{ConfigError, EventOrder, StandingsConfig};
use crate::source::{Event, SeasonSource, SourceError};

/// Errors from the standings service.
#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("data source error: {0}")]
    Source(#[from] SourceError),
}

/// Ranking of one division's teams at an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionRanking {
    /// `None` when divisions are disabled, or for teams without a division.
    pub division: Option<u8>,
    pub roster: EventRoster,
    pub ranking: EventRanking,
}

/// Everything computed for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReport {
    pub event: Event,
    pub divisions: Vec<DivisionRanking>,
    /// Teams with records at this event that are not on its roster.
    pub ignored_records: Vec<TeamId>,
    /// Teams with more than one judging record; the last one was used.
    pub duplicate_judging: Vec<TeamId>,
    /// Match slots recorded more than once; the last record was used.
    pub duplicate_matches: Vec<(TeamId, MatchIndex)>,
}

impl EventReport {
    pub fn rankings(&self) -> impl Iterator<Item = &EventRanking> {
        self.divisions.iter().map(|d| &d.ranking)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.divisions
            .iter()
            .find_map(|d| d.roster.position(id).map(|slot| &d.roster.teams()[slot]))
    }

    pub fn totals(&self) -> EventTotals {
        EventTotals::from_rankings(self.event.id, self.rankings())
    }
}

/// League standings for a season plus the inputs that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonStandings {
    pub season: SeasonId,
    /// Events in the order they were scanned.
    pub events: Vec<Event>,
    pub standings: Vec<LeagueStanding>,
    /// Revision of the source data, when the source reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// Stateless standings computation over an injected data source.
pub struct StandingsService<S> {
    source: S,
    config: StandingsConfig,
}

impl<S: SeasonSource> StandingsService<S> {
    pub fn new(source: S, config: StandingsConfig) -> Result<Self, StandingsError> {
        config.validate()?;
        Ok(Self { source, config })
    }

    pub fn config(&self) -> &StandingsConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Rank one event of a season.
    pub fn rank_event(&self, season: SeasonId, event: EventId) -> Result<EventReport, StandingsError> {
        let events = self.source.list_events(season)?;
        let event = events
            .into_iter()
            .find(|e| e.id == event)
            .ok_or(SourceError::UnknownEvent { season, event })?;
        self.rank_listed_event(season, event)
    }

    /// Compute league standings for a season.
    pub fn league_standings(&self, season: SeasonId) -> Result<SeasonStandings, StandingsError> {
        let events = order_events(self.source.list_events(season)?, self.config.event_order);

        let reports: Vec<EventReport> = events
            .par_iter()
            .map(|event| self.rank_listed_event(season, event.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        let totals: Vec<EventTotals> = reports.iter().map(EventReport::totals).collect();

        let teams = self.source.list_teams(season, None)?;
        self.check_divisions(&teams);
        let standings = compute_league_standings(&teams, &totals, self.config.league_options());

        info!(
            season = %season,
            events = events.len(),
            teams = standings.len(),
            scored = standings.iter().filter(|s| s.is_scored()).count(),
            "league standings computed"
        );

        Ok(SeasonStandings {
            season,
            events,
            standings,
            fingerprint: self.source.revision(),
        })
    }

    fn rank_listed_event(&self, season: SeasonId, event: Event) -> Result<EventReport, StandingsError> {
        let roster = EventRoster::new(self.source.list_teams(season, Some(event.id))?);
        let matches = self.source.list_match_results(season, event.id)?;
        let judging = self.source.list_judging_results(season, event.id)?;
        let options = self.config.event_options();

        let divisions: Vec<DivisionRanking> = self
            .division_groups(&roster)
            .into_iter()
            .map(|(division, roster)| {
                let ranking = rank_event(&roster, &matches, &judging, options);
                DivisionRanking {
                    division,
                    roster,
                    ranking,
                }
            })
            .collect();

        // Records of other divisions look off-roster to each division ranking;
        // only teams missing from the whole event roster are reported.
        let mut ignored_records = Vec::new();
        let mut duplicate_judging = Vec::new();
        for d in &divisions {
            for &team in &d.ranking.ignored_records {
                if !roster.contains(team) && !ignored_records.contains(&team) {
                    ignored_records.push(team);
                }
            }
            for &team in &d.ranking.judging.duplicates {
                if !duplicate_judging.contains(&team) {
                    duplicate_judging.push(team);
                }
            }
        }
        let duplicate_matches = duplicate_match_slots(&matches);

        if !ignored_records.is_empty() {
            warn!(
                event = %event.id,
                teams = ?ignored_records,
                "ignoring records for teams not on the event roster"
            );
        }
        if !duplicate_judging.is_empty() {
            warn!(
                event = %event.id,
                teams = ?duplicate_judging,
                "multiple judging records per team; using the last"
            );
        }
        if !duplicate_matches.is_empty() {
            warn!(
                event = %event.id,
                slots = duplicate_matches.len(),
                "match slots recorded more than once; using the last record"
            );
        }
        debug!(
            event = %event.id,
            name = %event.name,
            teams = roster.len(),
            matches = matches.len(),
            judging = judging.len(),
            divisions = divisions.len(),
            "event ranked"
        );

        Ok(EventReport {
            event,
            divisions,
            ignored_records,
            duplicate_judging,
            duplicate_matches,
        })
    }

    /// Split a roster into the groups that are ranked separately.
    fn division_groups(&self, roster: &EventRoster) -> Vec<(Option<u8>, EventRoster)> {
        if !self.config.divisions.enabled {
            return vec![(None, roster.clone())];
        }
        let mut divisions: Vec<Option<u8>> = roster.teams().iter().map(|t| t.division).collect();
        divisions.sort_by_key(|d| (d.is_none(), *d));
        divisions.dedup();
        divisions
            .into_iter()
            .map(|d| (d, roster.division(d)))
            .collect()
    }

    fn check_divisions(&self, teams: &[Team]) {
        if !self.config.divisions.enabled {
            return;
        }
        for team in teams {
            match team.division {
                None => warn!(team = %team.id, number = team.number, "team has no division"),
                Some(d) if self.config.division_name(d).is_none() => {
                    warn!(team = %team.id, division = d, "team division has no configured name")
                }
                Some(_) => {}
            }
        }
    }
}

/// Apply the configured scan order. The sort is stable.
pub fn order_events(mut events: Vec<Event>, order: EventOrder) -> Vec<Event> {
    if order == EventOrder::ByDate {
        events.sort_by_key(|e| (e.date.is_none(), e.date));
    }
    events
}

fn duplicate_match_slots(matches: &[MatchResult]) -> Vec<(TeamId, MatchIndex)> {
    let mut seen = HashSet::with_capacity(matches.len());
    let mut duplicates = Vec::new();
    for record in matches {
        let slot = (record.team, record.index);
        if !seen.insert(slot) && !duplicates.contains(&slot) {
            duplicates.push(slot);
        }
    }
    duplicates
}
