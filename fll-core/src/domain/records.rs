//! Raw per-event records supplied by the data collaborator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::TeamId;

/// Robot game attempts per team per event.
pub const MATCHES_PER_EVENT: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("match index {0} out of range (expected 1..=4)")]
    MatchIndexOutOfRange(u8),
}

/// 1-based robot game match number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MatchIndex(u8);

impl MatchIndex {
    pub fn new(index: u8) -> Result<Self, RecordError> {
        if index == 0 || usize::from(index) > MATCHES_PER_EVENT {
            return Err(RecordError::MatchIndexOutOfRange(index));
        }
        Ok(Self(index))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot into a per-team match array.
    pub fn slot(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for MatchIndex {
    type Error = RecordError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<MatchIndex> for u8 {
    fn from(index: MatchIndex) -> Self {
        index.0
    }
}

/// One robot game attempt.
///
/// `None` means "not yet scored", which is distinct from a recorded zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub team: TeamId,
    #[serde(rename = "match")]
    pub index: MatchIndex,
    #[serde(default)]
    pub score: Option<i32>,
    /// Core values points awarded by the referee alongside this match.
    #[serde(default)]
    pub core_values: Option<i32>,
}

impl MatchResult {
    pub fn new(team: impl Into<TeamId>, index: MatchIndex, score: Option<i32>) -> Self {
        Self {
            team: team.into(),
            index,
            score,
            core_values: None,
        }
    }

    pub fn with_core_values(mut self, core_values: Option<i32>) -> Self {
        self.core_values = core_values;
        self
    }
}

/// Rubric-derived judging scores for one team at one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgingResult {
    pub team: TeamId,
    #[serde(default)]
    pub project: Option<i32>,
    #[serde(default)]
    pub robot_design: Option<i32>,
    #[serde(default)]
    pub core_values: Option<i32>,
}

impl JudgingResult {
    pub fn new(team: impl Into<TeamId>) -> Self {
        Self {
            team: team.into(),
            project: None,
            robot_design: None,
            core_values: None,
        }
    }
}
