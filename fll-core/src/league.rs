//! League standings: each team's first two qualifying event scores.
//!
//! Events are scanned in the order supplied. A team's first two nonzero
//! normalized totals are summed into its league score; later qualifying
//! events are kept for audit but do not count. Teams without a qualifying
//! event are unscored and unplaced.

use serde::{Deserialize, Serialize};

use crate::domain::{EventId, Rank, Team, TeamId};
use crate::event::EventRanking;
use crate::placement::rank_keys;

/// Event scores that count toward a league total.
pub const QUALIFYING_EVENTS: usize = 2;

/// Knobs for league aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueOptions {
    /// Place teams within their division instead of league-wide.
    pub divisions: bool,
}

/// Normalized totals produced by one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTotals {
    pub event: EventId,
    pub totals: Vec<(TeamId, u32)>,
}

impl EventTotals {
    /// Collect totals from one or more rankings of the same event (one per
    /// division when divisions are enabled).
    pub fn from_rankings<'a, I>(event: EventId, rankings: I) -> Self
    where
        I: IntoIterator<Item = &'a EventRanking>,
    {
        let totals = rankings
            .into_iter()
            .flat_map(|r| r.results.iter().map(|t| (t.team, t.normalized_total)))
            .collect();
        Self { event, totals }
    }

    pub fn total(&self, team: TeamId) -> Option<u32> {
        self.totals
            .iter()
            .find(|(id, _)| *id == team)
            .map(|&(_, points)| points)
    }
}

/// Points a team earned at one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventScore {
    pub event: EventId,
    pub points: u32,
}

/// One team's season standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueStanding {
    pub team: TeamId,
    pub number: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<u8>,
    pub place: Rank,
    /// Sum of the contributing event scores; `None` when unscored.
    pub score: Option<u32>,
    /// At most [`QUALIFYING_EVENTS`] event scores, in processing order.
    pub contributing: Vec<EventScore>,
    /// Qualifying event scores found after the cap was reached.
    pub non_contributing: Vec<EventScore>,
}

impl LeagueStanding {
    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }
}

/// Aggregate event totals into league standings.
///
/// `teams` is the season's team list; `events` must already be in processing
/// order. The result is in placement order (grouped by division, ascending,
/// teams without a division last, when divisions are enabled). Unscored
/// teams follow the placed teams of their group in team number order.
pub fn compute_league_standings(
    teams: &[Team],
    events: &[EventTotals],
    options: LeagueOptions,
) -> Vec<LeagueStanding> {
    let mut ordered: Vec<&Team> = teams.iter().collect();
    ordered.sort_by_key(|t| t.number);

    let standings: Vec<LeagueStanding> = ordered
        .into_iter()
        .map(|team| aggregate_team(team, events))
        .collect();

    if !options.divisions {
        return place_group(standings);
    }

    let mut divisions: Vec<Option<u8>> = standings.iter().map(|s| s.division).collect();
    divisions.sort_by_key(|d| (d.is_none(), *d));
    divisions.dedup();

    let mut remaining = standings;
    let mut placed = Vec::with_capacity(remaining.len());
    for division in divisions {
        let (group, rest): (Vec<_>, Vec<_>) =
            remaining.into_iter().partition(|s| s.division == division);
        remaining = rest;
        placed.extend(place_group(group));
    }
    placed
}

fn aggregate_team(team: &Team, events: &[EventTotals]) -> LeagueStanding {
    let mut contributing = Vec::with_capacity(QUALIFYING_EVENTS);
    let mut non_contributing = Vec::new();

    for event in events {
        let Some(points) = event.total(team.id).filter(|&p| p > 0) else {
            continue;
        };
        let score = EventScore {
            event: event.event,
            points,
        };
        if contributing.len() < QUALIFYING_EVENTS {
            contributing.push(score);
        } else {
            non_contributing.push(score);
        }
    }

    let score: Option<u32> =
        (!contributing.is_empty()).then(|| contributing.iter().map(|s| s.points).sum());

    LeagueStanding {
        team: team.id,
        number: team.number,
        name: team.name.clone(),
        division: team.division,
        place: Rank::Unranked,
        score,
        contributing,
        non_contributing,
    }
}

/// Place one group by league score and return it in placement order.
fn place_group(group: Vec<LeagueStanding>) -> Vec<LeagueStanding> {
    let keys: Vec<Option<u32>> = group.iter().map(|s| s.score).collect();
    let placements = rank_keys(&keys, |a: &u32, b: &u32| a.cmp(b));

    let mut slots: Vec<Option<LeagueStanding>> = group.into_iter().map(Some).collect();
    placements
        .order
        .iter()
        .filter_map(|&i| {
            let mut standing = slots[i].take()?;
            standing.place = placements.ranks[i];
            Some(standing)
        })
        .collect()
}
