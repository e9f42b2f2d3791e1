//! End-to-end ranking scenarios: records in, event rankings and league
//! standings out.

use fll_core::domain::{
    EventId, EventRoster, JudgingResult, MatchIndex, MatchResult, Rank, Team, TeamId,
};
use fll_core::event::{rank_event, EventOptions};
use fll_core::league::{compute_league_standings, EventScore, EventTotals, LeagueOptions};
use fll_core::placement::assign_places;

// ─── Helpers ─────────────────────────────────────────────────────────

fn team(id: u32) -> Team {
    Team::new(id, 1000 + id, format!("Team {id}"))
}

fn roster(ids: &[u32]) -> EventRoster {
    ids.iter().map(|&id| team(id)).collect()
}

fn played(team: u32, scores: &[Option<i32>]) -> Vec<MatchResult> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &s)| MatchResult::new(team, MatchIndex::new(i as u8 + 1).unwrap(), s))
        .collect()
}

fn judged(team: u32, project: i32, design: i32, core_values: i32) -> JudgingResult {
    JudgingResult {
        team: TeamId(team),
        project: Some(project),
        robot_design: Some(design),
        core_values: Some(core_values),
    }
}

// ─── Event ranking ───────────────────────────────────────────────────

#[test]
fn standard_competition_ranking_gaps() {
    let places = assign_places(&[Some(300), Some(300), Some(250), Some(200)]);
    assert_eq!(
        places,
        vec![Rank::Ranked(1), Rank::Ranked(1), Rank::Ranked(3), Rank::Ranked(4)]
    );
}

#[test]
fn three_team_event_end_to_end() {
    let mut matches = played(1, &[Some(100), Some(90), Some(80)]);
    matches.extend(played(2, &[Some(95), Some(95), Some(95)]));

    let ranking = rank_event(&roster(&[1, 2, 3]), &matches, &[], EventOptions::default());

    let a = ranking.get(TeamId(1)).unwrap();
    let b = ranking.get(TeamId(2)).unwrap();
    let c = ranking.get(TeamId(3)).unwrap();
    assert_eq!((a.robot_rank, a.normalized_total), (Rank::Ranked(1), 200));
    assert_eq!((b.robot_rank, b.normalized_total), (Rank::Ranked(2), 150));
    assert_eq!((c.robot_rank, c.normalized_total), (Rank::Unranked, 0));

    let order: Vec<TeamId> = ranking.robot_game.ranked().map(|e| e.team).collect();
    assert_eq!(order, vec![TeamId(1), TeamId(2), TeamId(3)]);
}

#[test]
fn team_with_only_missing_scores_is_unranked() {
    let mut matches = played(1, &[None, None, None, None]);
    matches.extend(played(2, &[Some(0)]));

    let ranking = rank_event(&roster(&[1, 2]), &matches, &[], EventOptions::default());
    assert_eq!(ranking.get(TeamId(1)).unwrap().robot_rank, Rank::Unranked);
    assert_eq!(ranking.get(TeamId(2)).unwrap().robot_rank, Rank::Ranked(1));
}

#[test]
fn single_team_event_earns_max_points_per_category() {
    let matches = played(1, &[Some(10)]);
    let ranking = rank_event(
        &roster(&[1]),
        &matches,
        &[judged(1, 1, 1, 1)],
        EventOptions::default(),
    );
    assert_eq!(ranking.get(TeamId(1)).unwrap().normalized_total, 800);
}

#[test]
fn four_team_event_points() {
    let mut matches = Vec::new();
    for (id, score) in [(1, 400), (2, 300), (3, 200), (4, 100)] {
        matches.extend(played(id, &[Some(score)]));
    }
    let ranking = rank_event(&roster(&[1, 2, 3, 4]), &matches, &[], EventOptions::default());
    let totals: Vec<u32> = ranking.results.iter().map(|r| r.normalized_total).collect();
    assert_eq!(totals, vec![200, 166, 133, 100]);
}

#[test]
fn core_values_combines_rubric_and_referee_points() {
    let matches = vec![
        MatchResult::new(1, MatchIndex::new(1).unwrap(), Some(50)).with_core_values(Some(3)),
        MatchResult::new(1, MatchIndex::new(2).unwrap(), Some(60)).with_core_values(None),
        MatchResult::new(1, MatchIndex::new(3).unwrap(), Some(70)).with_core_values(Some(2)),
        MatchResult::new(1, MatchIndex::new(4).unwrap(), Some(80)).with_core_values(None),
    ];
    let judging = vec![JudgingResult {
        core_values: Some(12),
        ..JudgingResult::new(1)
    }];
    let ranking = rank_event(&roster(&[1]), &matches, &judging, EventOptions::default());
    assert_eq!(ranking.judging.core_values.entries[0].score, Some(17));
}

#[test]
fn all_zero_referee_points_still_ranked_in_core_values() {
    let matches: Vec<MatchResult> = (1..=4)
        .map(|m| MatchResult::new(2, MatchIndex::new(m).unwrap(), None).with_core_values(Some(0)))
        .collect();
    let ranking = rank_event(&roster(&[1, 2]), &matches, &[], EventOptions::default());

    let entry = ranking.judging.core_values.get(TeamId(2)).unwrap();
    assert_eq!(entry.score, Some(0));
    assert_eq!(entry.rank, Rank::Ranked(1));
    assert_eq!(ranking.get(TeamId(2)).unwrap().normalized_total, 200);
    assert_eq!(ranking.get(TeamId(1)).unwrap().core_values_rank, Rank::Unranked);
}

// ─── League ──────────────────────────────────────────────────────────

#[test]
fn season_uses_first_two_qualifying_events() {
    let teams = vec![team(1), team(2), team(3)];
    let rosters = roster(&[1, 2, 3]);

    // Event 1: team 1 wins, team 2 second, team 3 absent from play.
    let mut e1 = played(1, &[Some(300)]);
    e1.extend(played(2, &[Some(200)]));
    // Event 2: nobody from team 1; team 3 wins.
    let mut e2 = played(3, &[Some(250)]);
    e2.extend(played(2, &[Some(100)]));
    // Event 3: team 1 again; team 2 beats team 1.
    let mut e3 = played(1, &[Some(100)]);
    e3.extend(played(2, &[Some(400)]));

    let events: Vec<EventTotals> = [e1, e2, e3]
        .iter()
        .enumerate()
        .map(|(i, matches)| {
            let ranking = rank_event(&rosters, matches, &[], EventOptions::default());
            EventTotals::from_rankings(EventId(i as u32 + 1), [&ranking])
        })
        .collect();

    let standings = compute_league_standings(&teams, &events, LeagueOptions::default());

    // N = 3 everywhere: rank 1 = 200, rank 2 = 150.
    let t1 = standings.iter().find(|s| s.team == TeamId(1)).unwrap();
    let t2 = standings.iter().find(|s| s.team == TeamId(2)).unwrap();
    let t3 = standings.iter().find(|s| s.team == TeamId(3)).unwrap();

    assert_eq!(t1.score, Some(200 + 150));
    assert_eq!(t2.score, Some(150 + 150));
    assert_eq!(
        t2.non_contributing,
        vec![EventScore { event: EventId(3), points: 200 }]
    );
    assert_eq!(t3.score, Some(200));

    assert_eq!(t1.place, Rank::Ranked(1));
    assert_eq!(t2.place, Rank::Ranked(2));
    assert_eq!(t3.place, Rank::Ranked(3));
}

#[test]
fn equal_league_scores_share_place() {
    let teams = vec![team(1), team(2), team(3)];
    let events = vec![EventTotals {
        event: EventId(1),
        totals: vec![(TeamId(1), 300), (TeamId(2), 300), (TeamId(3), 250)],
    }];
    let standings = compute_league_standings(&teams, &events, LeagueOptions::default());
    let places: Vec<Rank> = standings.iter().map(|s| s.place).collect();
    assert_eq!(places, vec![Rank::Ranked(1), Rank::Ranked(1), Rank::Ranked(3)]);
}
