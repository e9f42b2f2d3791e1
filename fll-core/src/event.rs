//! Per-event ranking: robot game + three judging areas + normalized total.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, EventRoster, JudgingResult, MatchResult, Rank, TeamId};
use crate::judging::{rank_judging, JudgingRankings};
use crate::normalize::{category_points, normalized_total, CompetitorCount};
use crate::robot_game::{rank_robot_game, MatchScores, RobotGameRanking};

/// Knobs for ranking a single event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOptions {
    pub competitor_count: CompetitorCount,
}

/// Competitor count (N) used for each category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub robot_game: u32,
    pub project: u32,
    pub robot_design: u32,
    pub core_values: u32,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::RobotGame => self.robot_game,
            Category::InnovationProject => self.project,
            Category::RobotDesign => self.robot_design,
            Category::CoreValues => self.core_values,
        }
    }
}

/// One team's complete result at an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEventResult {
    pub team: TeamId,
    pub robot_rank: Rank,
    pub project_rank: Rank,
    pub robot_design_rank: Rank,
    pub core_values_rank: Rank,
    /// Sum of category points; zero when the team is unranked everywhere.
    pub normalized_total: u32,
    pub best_match: Option<i32>,
    pub match_scores: MatchScores,
}

impl TeamEventResult {
    pub fn rank(&self, category: Category) -> Rank {
        match category {
            Category::RobotGame => self.robot_rank,
            Category::InnovationProject => self.project_rank,
            Category::RobotDesign => self.robot_design_rank,
            Category::CoreValues => self.core_values_rank,
        }
    }

    /// True when the event produced a score that can count toward the league.
    pub fn qualifies(&self) -> bool {
        self.normalized_total > 0
    }
}

/// Full ranking of one event roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRanking {
    /// One result per roster team, in roster order.
    pub results: Vec<TeamEventResult>,
    pub counts: CategoryCounts,
    pub robot_game: RobotGameRanking,
    pub judging: JudgingRankings,
    /// Teams referenced by records but not on the roster, in first-seen order.
    pub ignored_records: Vec<TeamId>,
}

impl EventRanking {
    pub fn get(&self, team: TeamId) -> Option<&TeamEventResult> {
        self.results.iter().find(|r| r.team == team)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Per-category points for a team, in [`Category::ALL`] order.
    pub fn category_points(&self, team: TeamId) -> Option<[u32; 4]> {
        let result = self.get(team)?;
        Some(Category::ALL.map(|c| category_points(result.rank(c), self.counts.get(c))))
    }
}

/// Rank every team on the roster in all four categories and normalize.
///
/// Records for teams outside the roster never affect the result. They are
/// listed in [`EventRanking::ignored_records`] for the caller to report.
pub fn rank_event(
    roster: &EventRoster,
    matches: &[MatchResult],
    judging: &[JudgingResult],
    options: EventOptions,
) -> EventRanking {
    let robot_game = rank_robot_game(roster, matches);
    let judging = rank_judging(roster, judging, &robot_game);

    let counts = match options.competitor_count {
        CompetitorCount::Roster => {
            let n = u32::try_from(roster.len()).unwrap_or(u32::MAX);
            CategoryCounts {
                robot_game: n,
                project: n,
                robot_design: n,
                core_values: n,
            }
        }
        CompetitorCount::RankedInCategory => CategoryCounts {
            robot_game: count_ranked(robot_game.entries.iter().map(|e| e.rank)),
            project: count_ranked(judging.project.entries.iter().map(|e| e.rank)),
            robot_design: count_ranked(judging.robot_design.entries.iter().map(|e| e.rank)),
            core_values: count_ranked(judging.core_values.entries.iter().map(|e| e.rank)),
        },
    };

    let results = robot_game
        .entries
        .iter()
        .enumerate()
        .map(|(slot, rg)| {
            let mut result = TeamEventResult {
                team: rg.team,
                robot_rank: rg.rank,
                project_rank: judging.project.entries[slot].rank,
                robot_design_rank: judging.robot_design.entries[slot].rank,
                core_values_rank: judging.core_values.entries[slot].rank,
                normalized_total: 0,
                best_match: rg.best_match,
                match_scores: rg.scores,
            };
            result.normalized_total =
                normalized_total(Category::ALL.map(|c| (result.rank(c), counts.get(c))));
            result
        })
        .collect();

    let mut ignored_records = robot_game.ignored.clone();
    for team in &judging.ignored {
        if !ignored_records.contains(team) {
            ignored_records.push(*team);
        }
    }

    EventRanking {
        results,
        counts,
        robot_game,
        judging,
        ignored_records,
    }
}

fn count_ranked(ranks: impl Iterator<Item = Rank>) -> u32 {
    ranks.filter(|r| r.is_ranked()).map(|_| 1).sum()
}
