//! Robot game ranking: best-of-four with consistency tie-breaks.
//!
//! Each team's recorded match scores are sorted descending and compared
//! element-wise: the best score decides, then the second best, and so on.
//! Missing scores sort below every recorded score. A team with no recorded
//! score is unranked.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::{EventRoster, MatchIndex, MatchResult, Rank, TeamId, MATCHES_PER_EVENT};
use crate::placement::rank_keys;

/// A team's robot game attempts at one event, indexed by match slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchScores {
    slots: [Option<i32>; MATCHES_PER_EVENT],
}

impl MatchScores {
    pub fn new(slots: [Option<i32>; MATCHES_PER_EVENT]) -> Self {
        Self { slots }
    }

    pub fn set(&mut self, index: MatchIndex, score: Option<i32>) {
        self.slots[index.slot()] = score;
    }

    pub fn get(&self, index: MatchIndex) -> Option<i32> {
        self.slots[index.slot()]
    }

    pub fn slots(&self) -> &[Option<i32>; MATCHES_PER_EVENT] {
        &self.slots
    }

    /// Scores sorted best-first, missing scores last.
    pub fn sorted_desc(&self) -> [Option<i32>; MATCHES_PER_EVENT] {
        let mut sorted = self.slots;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted
    }

    /// Best single match score.
    pub fn best(&self) -> Option<i32> {
        self.slots.iter().flatten().max().copied()
    }

    pub fn recorded(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded() == 0
    }
}

/// Compare two teams' robot game results. `Greater` means `a` places higher.
pub fn compare(a: &MatchScores, b: &MatchScores) -> Ordering {
    // `None < Some(_)` for Option, so missing scores act as negative infinity.
    a.sorted_desc().cmp(&b.sorted_desc())
}

/// One team's robot game outcome at an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotGameEntry {
    pub team: TeamId,
    pub rank: Rank,
    pub scores: MatchScores,
    pub best_match: Option<i32>,
    /// Sum of the referee core values sub-scores, `None` if none was recorded.
    pub core_values: Option<i32>,
}

/// Robot game ranking for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotGameRanking {
    /// One entry per roster team, in roster order.
    pub entries: Vec<RobotGameEntry>,
    /// Entry indices in placement order.
    pub order: Vec<usize>,
    /// Teams with match records that are not on the roster.
    pub ignored: Vec<TeamId>,
}

impl RobotGameRanking {
    pub fn get(&self, team: TeamId) -> Option<&RobotGameEntry> {
        self.entries.iter().find(|e| e.team == team)
    }

    /// Entries best-first, unranked last.
    pub fn ranked(&self) -> impl Iterator<Item = &RobotGameEntry> {
        self.order.iter().map(|&i| &self.entries[i])
    }
}

/// Rank the roster by robot game results.
///
/// Records for teams outside the roster are ignored and reported. Repeated
/// records for the same match slot overwrite; core values sub-scores add up,
/// saturating at the `i32` bounds.
pub fn rank_robot_game(roster: &EventRoster, matches: &[MatchResult]) -> RobotGameRanking {
    let mut scores = vec![MatchScores::default(); roster.len()];
    let mut core_values: Vec<Option<i32>> = vec![None; roster.len()];
    let mut ignored = Vec::new();

    for record in matches {
        let Some(slot) = roster.position(record.team) else {
            if !ignored.contains(&record.team) {
                ignored.push(record.team);
            }
            continue;
        };
        if record.score.is_some() {
            scores[slot].set(record.index, record.score);
        }
        if let Some(cv) = record.core_values {
            core_values[slot] = Some(core_values[slot].unwrap_or(0).saturating_add(cv));
        }
    }

    let keys: Vec<Option<MatchScores>> = scores
        .iter()
        .map(|s| (!s.is_empty()).then_some(*s))
        .collect();
    let placements = rank_keys(&keys, compare);

    let entries = roster
        .teams()
        .iter()
        .zip(scores)
        .zip(core_values)
        .zip(&placements.ranks)
        .map(|(((team, scores), core_values), &rank)| RobotGameEntry {
            team: team.id,
            rank,
            best_match: scores.best(),
            scores,
            core_values,
        })
        .collect();

    RobotGameRanking {
        entries,
        order: placements.order,
        ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Team;

    fn idx(i: u8) -> MatchIndex {
        MatchIndex::new(i).unwrap()
    }

    fn record(team: u32, m: u8, score: Option<i32>) -> MatchResult {
        MatchResult::new(team, idx(m), score)
    }

    fn roster(n: u32) -> EventRoster {
        (1..=n).map(|i| Team::new(i, i * 100, format!("T{i}"))).collect()
    }

    fn played(scores: &[i32]) -> MatchScores {
        assert!(scores.len() <= MATCHES_PER_EVENT);
        let mut slots = [None; MATCHES_PER_EVENT];
        for (slot, &score) in slots.iter_mut().zip(scores) {
            *slot = Some(score);
        }
        MatchScores::new(slots)
    }

    #[test]
    fn higher_best_score_wins() {
        let a = played(&[100, 90, 80]);
        let b = played(&[95, 95, 95]);
        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn second_best_breaks_tie() {
        let a = played(&[200, 150]);
        let b = played(&[120, 200]);
        assert_eq!(compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn extra_attempt_breaks_tie() {
        // Same top two, but one team has a third recorded attempt.
        let a = played(&[200, 150, 0]);
        let b = played(&[200, 150]);
        assert_eq!(compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn order_of_attempts_does_not_matter() {
        let a = MatchScores::new([Some(10), None, Some(30), Some(20)]);
        let b = MatchScores::new([Some(30), Some(20), Some(10), None]);
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn empty_sorts_last_and_ties_with_empty() {
        let empty = MatchScores::default();
        let zero = played(&[0]);
        assert_eq!(compare(&zero, &empty), Ordering::Greater);
        assert_eq!(compare(&empty, &MatchScores::default()), Ordering::Equal);
    }

    #[test]
    fn best_match_is_max_recorded() {
        let s = MatchScores::new([Some(10), None, Some(310), Some(20)]);
        assert_eq!(s.best(), Some(310));
        assert_eq!(MatchScores::default().best(), None);
    }

    #[test]
    fn ranks_roster_with_gaps_and_unranked() {
        let matches = vec![
            record(1, 1, Some(300)),
            record(2, 1, Some(300)),
            record(3, 1, Some(250)),
            record(4, 1, Some(200)),
            record(5, 1, None),
        ];
        let ranking = rank_robot_game(&roster(5), &matches);
        let ranks: Vec<Rank> = ranking.entries.iter().map(|e| e.rank).collect();
        assert_eq!(
            ranks,
            vec![
                Rank::Ranked(1),
                Rank::Ranked(1),
                Rank::Ranked(3),
                Rank::Ranked(4),
                Rank::Unranked,
            ]
        );
        assert_eq!(ranking.order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn off_roster_records_ignored() {
        let matches = vec![record(1, 1, Some(50)), record(99, 1, Some(500)), record(99, 2, Some(1))];
        let ranking = rank_robot_game(&roster(1), &matches);
        assert_eq!(ranking.entries.len(), 1);
        assert_eq!(ranking.entries[0].rank, Rank::Ranked(1));
        assert_eq!(ranking.ignored, vec![TeamId(99)]);
    }

    #[test]
    fn core_values_sum_treats_missing_as_zero() {
        let matches = vec![
            record(1, 1, Some(10)).with_core_values(Some(3)),
            record(1, 2, Some(10)).with_core_values(None),
            record(1, 3, Some(10)).with_core_values(Some(2)),
            record(2, 1, Some(10)),
        ];
        let ranking = rank_robot_game(&roster(2), &matches);
        assert_eq!(ranking.get(TeamId(1)).unwrap().core_values, Some(5));
        assert_eq!(ranking.get(TeamId(2)).unwrap().core_values, None);
    }

    #[test]
    fn core_values_sum_saturates() {
        let matches = vec![
            record(1, 1, Some(10)).with_core_values(Some(i32::MAX)),
            record(1, 2, Some(10)).with_core_values(Some(1)),
        ];
        let ranking = rank_robot_game(&roster(1), &matches);
        assert_eq!(ranking.get(TeamId(1)).unwrap().core_values, Some(i32::MAX));
    }

    #[test]
    fn empty_roster_gives_empty_ranking() {
        let ranking = rank_robot_game(&EventRoster::default(), &[record(1, 1, Some(5))]);
        assert!(ranking.entries.is_empty());
        assert_eq!(ranking.ignored, vec![TeamId(1)]);
    }
}
