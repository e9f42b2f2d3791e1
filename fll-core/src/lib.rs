//! FLL Core: the ranking and standings engine.
//!
//! Pure, stateless computation over caller-supplied snapshots:
//! - Domain types (teams, rosters, match and judging records, ranks)
//! - Standard competition placement ("1224" ranking)
//! - Robot game ranking by sorted best-of-four comparison
//! - Judging area rankings, including the combined Core Values score
//! - Rank → point normalization into [100, 200]
//! - Per-event ranking and league aggregation over the first two qualifying events

pub mod domain;
pub mod event;
pub mod judging;
pub mod league;
pub mod normalize;
pub mod placement;
pub mod robot_game;

pub use domain::{
    Category, EventId, EventRoster, JudgingResult, MatchIndex, MatchResult, Rank, RecordError,
    SeasonId, Team, TeamId,
};
pub use event::{rank_event, CategoryCounts, EventOptions, EventRanking, TeamEventResult};
pub use judging::{combined_core_values, rank_judging, JudgingArea, JudgingRankings};
pub use league::{
    compute_league_standings, EventScore, EventTotals, LeagueOptions, LeagueStanding,
    QUALIFYING_EVENTS,
};
pub use normalize::{category_points, normalized_total, CompetitorCount};
pub use placement::{assign_places, assign_places_by, rank_keys, Placements};
pub use robot_game::{rank_robot_game, MatchScores, RobotGameRanking};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: every engine output can cross threads.
    ///
    /// The standings service ranks events on a rayon pool, so these types
    /// must stay `Send + Sync`.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Team>();
        require_sync::<Team>();
        require_send::<EventRoster>();
        require_sync::<EventRoster>();
        require_send::<MatchResult>();
        require_sync::<MatchResult>();
        require_send::<JudgingResult>();
        require_sync::<JudgingResult>();
        require_send::<EventRanking>();
        require_sync::<EventRanking>();
        require_send::<EventTotals>();
        require_sync::<EventTotals>();
        require_send::<LeagueStanding>();
        require_sync::<LeagueStanding>();
    }

    /// Architecture contract: ranking takes snapshots by reference and has
    /// no access to any shared state.
    #[test]
    fn rank_event_is_a_pure_function_of_its_inputs() {
        let roster: EventRoster = vec![Team::new(1, 100, "A"), Team::new(2, 200, "B")]
            .into_iter()
            .collect();
        let matches = vec![MatchResult::new(1, MatchIndex::new(1).unwrap(), Some(120))];

        let first = rank_event(&roster, &matches, &[], EventOptions::default());
        let second = rank_event(&roster, &matches, &[], EventOptions::default());
        assert_eq!(first, second);
    }
}
