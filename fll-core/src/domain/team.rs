//! Team: a competitor registered for a season.

use serde::{Deserialize, Serialize};

use super::ids::TeamId;

/// A team registered for a season.
///
/// `number` is the public tournament number printed on the scoreboard; rosters
/// are kept in ascending `number` order, which is also the order that tied and
/// unranked teams keep in every ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub number: u32,
    pub name: String,
    /// Division the team competes in, when the league runs divisions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<u8>,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, number: u32, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number,
            name: name.into(),
            division: None,
        }
    }

    pub fn with_division(mut self, division: u8) -> Self {
        self.division = Some(division);
        self
    }
}

/// Teams registered at one event: the competitor universe for every ranking
/// produced for that event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRoster {
    teams: Vec<Team>,
}

impl EventRoster {
    /// Build a roster, sorting by tournament number and dropping repeated ids.
    pub fn new(mut teams: Vec<Team>) -> Self {
        teams.sort_by_key(|t| t.number);
        let mut seen = std::collections::HashSet::with_capacity(teams.len());
        teams.retain(|t| seen.insert(t.id));
        Self { teams }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// N, the competitor count used for normalization.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn contains(&self, id: TeamId) -> bool {
        self.position(id).is_some()
    }

    /// Roster slot of a team, if registered.
    pub fn position(&self, id: TeamId) -> Option<usize> {
        self.teams.iter().position(|t| t.id == id)
    }

    /// Sub-roster of the teams in `division` (`None` selects teams without one).
    pub fn division(&self, division: Option<u8>) -> Self {
        Self {
            teams: self
                .teams
                .iter()
                .filter(|t| t.division == division)
                .cloned()
                .collect(),
        }
    }
}

impl FromIterator<Team> for EventRoster {
    fn from_iter<I: IntoIterator<Item = Team>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
