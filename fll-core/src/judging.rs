//! Judging area rankings: Innovation Project, Robot Design, Core Values.
//!
//! Each area is a single integer score per team, ranked highest first with
//! standard competition ranking. Core Values combines the rubric score with
//! the core values points referees award during robot game matches.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, EventRoster, JudgingResult, Rank, TeamId};
use crate::placement::rank_keys;
use crate::robot_game::RobotGameRanking;

/// The three judged areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudgingArea {
    InnovationProject,
    RobotDesign,
    CoreValues,
}

impl JudgingArea {
    pub const ALL: [JudgingArea; 3] = [
        JudgingArea::InnovationProject,
        JudgingArea::RobotDesign,
        JudgingArea::CoreValues,
    ];

    pub fn category(self) -> Category {
        match self {
            Self::InnovationProject => Category::InnovationProject,
            Self::RobotDesign => Category::RobotDesign,
            Self::CoreValues => Category::CoreValues,
        }
    }

    /// Rubric score for this area from a judging record.
    pub fn rubric_score(self, result: &JudgingResult) -> Option<i32> {
        match self {
            Self::InnovationProject => result.project,
            Self::RobotDesign => result.robot_design,
            Self::CoreValues => result.core_values,
        }
    }
}

/// Raw Core Values score: rubric plus referee match points.
///
/// A missing source counts as zero in the sum, but the team has a score only
/// if at least one source produced a value. The sum saturates at the `i32`
/// bounds.
pub fn combined_core_values(rubric: Option<i32>, match_points: Option<i32>) -> Option<i32> {
    match (rubric, match_points) {
        (None, None) => None,
        (rubric, match_points) => {
            Some(rubric.unwrap_or(0).saturating_add(match_points.unwrap_or(0)))
        }
    }
}

/// Rank raw scores (indexed like the roster) highest first.
///
/// Returns the ranks in input order and the placement order.
pub fn rank_scores(scores: &[Option<i32>]) -> (Vec<Rank>, Vec<usize>) {
    let placements = rank_keys(scores, |a: &i32, b: &i32| a.cmp(b));
    (placements.ranks, placements.order)
}

/// One team's result in one judging area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgingEntry {
    pub team: TeamId,
    /// Raw score that was ranked (combined value for Core Values).
    pub score: Option<i32>,
    pub rank: Rank,
}

/// Ranking of one judging area at one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgingRanking {
    pub area: JudgingArea,
    /// One entry per roster team, in roster order.
    pub entries: Vec<JudgingEntry>,
    /// Entry indices in placement order.
    pub order: Vec<usize>,
}

impl JudgingRanking {
    pub fn get(&self, team: TeamId) -> Option<&JudgingEntry> {
        self.entries.iter().find(|e| e.team == team)
    }

    pub fn ranked(&self) -> impl Iterator<Item = &JudgingEntry> {
        self.order.iter().map(|&i| &self.entries[i])
    }
}

/// All three judging rankings for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgingRankings {
    pub project: JudgingRanking,
    pub robot_design: JudgingRanking,
    pub core_values: JudgingRanking,
    /// Teams with judging records that are not on the roster.
    pub ignored: Vec<TeamId>,
    /// Teams with more than one judging record; the last record wins.
    pub duplicates: Vec<TeamId>,
}

impl JudgingRankings {
    pub fn area(&self, area: JudgingArea) -> &JudgingRanking {
        match area {
            JudgingArea::InnovationProject => &self.project,
            JudgingArea::RobotDesign => &self.robot_design,
            JudgingArea::CoreValues => &self.core_values,
        }
    }
}

/// Rank the roster in every judging area.
///
/// `robot_game` supplies the referee core values points folded into the
/// Core Values score.
pub fn rank_judging(
    roster: &EventRoster,
    judging: &[JudgingResult],
    robot_game: &RobotGameRanking,
) -> JudgingRankings {
    let mut records: Vec<Option<&JudgingResult>> = vec![None; roster.len()];
    let mut ignored = Vec::new();
    let mut duplicates = Vec::new();

    for record in judging {
        match roster.position(record.team) {
            Some(slot) => {
                if records[slot].replace(record).is_some() && !duplicates.contains(&record.team) {
                    duplicates.push(record.team);
                }
            }
            None => {
                if !ignored.contains(&record.team) {
                    ignored.push(record.team);
                }
            }
        }
    }

    let area_ranking = |area: JudgingArea| {
        let scores: Vec<Option<i32>> = roster
            .teams()
            .iter()
            .zip(&records)
            .map(|(team, &record)| {
                let rubric = record.and_then(|r| area.rubric_score(r));
                match area {
                    JudgingArea::CoreValues => {
                        let match_points = robot_game.get(team.id).and_then(|e| e.core_values);
                        combined_core_values(rubric, match_points)
                    }
                    _ => rubric,
                }
            })
            .collect();

        let (ranks, order) = rank_scores(&scores);
        let entries = roster
            .teams()
            .iter()
            .zip(scores)
            .zip(ranks)
            .map(|((team, score), rank)| JudgingEntry {
                team: team.id,
                score,
                rank,
            })
            .collect();

        JudgingRanking {
            area,
            entries,
            order,
        }
    };

    JudgingRankings {
        project: area_ranking(JudgingArea::InnovationProject),
        robot_design: area_ranking(JudgingArea::RobotDesign),
        core_values: area_ranking(JudgingArea::CoreValues),
        ignored,
        duplicates,
    }
}
