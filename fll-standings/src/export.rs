//! Reporting and export: JSON, CSV, and Markdown output.
//!
//! - **JSON**: any report, pretty-printed
//! - **CSV**: event rankings and league standings for spreadsheets
//! - **Markdown**: human-readable tables printed by the CLI
//!
//! Unranked places and unscored totals are written as empty CSV cells and as
//! `-` in Markdown.

use anyhow::{Context, Result};
use serde::Serialize;

use fll_core::{EventScore, Rank};

use crate::config::StandingsConfig;
use crate::service::{EventReport, SeasonStandings};

// ─── JSON export ────────────────────────────────────────────────────

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize report to JSON")
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export an event ranking, one row per team in robot game placement order.
///
/// Columns: division, team_number, team_name, robot_rank, best_match,
/// match_1..match_4, project_rank, robot_design_rank, core_values_rank,
/// normalized_total
pub fn event_ranking_csv(report: &EventReport, config: &StandingsConfig) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "division",
        "team_number",
        "team_name",
        "robot_rank",
        "best_match",
        "match_1",
        "match_2",
        "match_3",
        "match_4",
        "project_rank",
        "robot_design_rank",
        "core_values_rank",
        "normalized_total",
    ])?;

    for d in &report.divisions {
        let division = division_label(config, d.division);
        for &slot in &d.ranking.robot_game.order {
            let team = &d.roster.teams()[slot];
            let r = &d.ranking.results[slot];

            let mut row = vec![
                division.clone(),
                team.number.to_string(),
                team.name.clone(),
                rank_cell(r.robot_rank),
                opt_cell(r.best_match),
            ];
            row.extend(r.match_scores.slots().iter().map(|&s| opt_cell(s)));
            row.extend([
                rank_cell(r.project_rank),
                rank_cell(r.robot_design_rank),
                rank_cell(r.core_values_rank),
                r.normalized_total.to_string(),
            ]);
            wtr.write_record(&row)?;
        }
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Export league standings in placement order.
///
/// Columns: division, place, team_number, team_name, score, contributing,
/// non_contributing. Event lists are `event_id:points` pairs joined by `;`.
pub fn standings_csv(standings: &SeasonStandings, config: &StandingsConfig) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "division",
        "place",
        "team_number",
        "team_name",
        "score",
        "contributing",
        "non_contributing",
    ])?;

    for s in &standings.standings {
        wtr.write_record([
            division_label(config, s.division),
            rank_cell(s.place),
            s.number.to_string(),
            s.name.clone(),
            opt_cell(s.score),
            event_list(&s.contributing),
            event_list(&s.non_contributing),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Markdown reports ───────────────────────────────────────────────

/// Markdown tables for one event, one table per division.
pub fn event_ranking_report(report: &EventReport, config: &StandingsConfig) -> String {
    let mut md = String::with_capacity(2048);

    md.push_str(&format!("# {} ({})\n\n", report.event.name, report.event.id));
    if let Some(date) = report.event.date {
        md.push_str(&format!("Date: {date}\n\n"));
    }

    for d in &report.divisions {
        if d.division.is_some() {
            md.push_str(&format!("## {}\n\n", division_heading(config, d.division)));
        }
        md.push_str("| Robot | Team | Name | Best | Matches | Project | Design | Core Values | Total |\n");
        md.push_str("| ---: | ---: | --- | ---: | --- | ---: | ---: | ---: | ---: |\n");
        for &slot in &d.ranking.robot_game.order {
            let team = &d.roster.teams()[slot];
            let r = &d.ranking.results[slot];
            let matches: Vec<String> = r
                .match_scores
                .slots()
                .iter()
                .map(|s| s.map_or_else(|| "-".to_string(), |v| v.to_string()))
                .collect();
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
                r.robot_rank,
                team.number,
                team.name,
                r.best_match.map_or_else(|| "-".to_string(), |v| v.to_string()),
                matches.join(" "),
                r.project_rank,
                r.robot_design_rank,
                r.core_values_rank,
                r.normalized_total,
            ));
        }
        md.push('\n');
    }

    if !report.ignored_records.is_empty() {
        let teams: Vec<String> = report.ignored_records.iter().map(|t| t.to_string()).collect();
        md.push_str(&format!("Ignored records for: {}\n", teams.join(", ")));
    }

    md
}

/// Markdown table of league standings.
pub fn standings_report(standings: &SeasonStandings, config: &StandingsConfig) -> String {
    let mut md = String::with_capacity(2048);

    md.push_str(&format!("# League Standings ({})\n\n", standings.season));
    let names: Vec<&str> = standings.events.iter().map(|e| e.name.as_str()).collect();
    md.push_str(&format!("Events: {}\n\n", names.join(", ")));

    let mut current: Option<Option<u8>> = None;
    for s in &standings.standings {
        let group = s.division.filter(|_| config.divisions.enabled);
        if current != Some(group) {
            if current.is_some() {
                md.push('\n');
            }
            current = Some(group);
            if config.divisions.enabled {
                md.push_str(&format!("## {}\n\n", division_heading(config, group)));
            }
            md.push_str("| Place | Team | Name | Score | Events |\n");
            md.push_str("| ---: | ---: | --- | ---: | --- |\n");
        }
        let events: Vec<String> = s
            .contributing
            .iter()
            .map(|e| format!("{}: {}", event_name(standings, e), e.points))
            .collect();
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            s.place,
            s.number,
            s.name,
            s.score.map_or_else(|| "-".to_string(), |v| v.to_string()),
            events.join(", "),
        ));
    }

    if let Some(fingerprint) = &standings.fingerprint {
        md.push_str(&format!("\nSnapshot: {fingerprint}\n"));
    }

    md
}

fn rank_cell(rank: Rank) -> String {
    rank.get().map(|p| p.to_string()).unwrap_or_default()
}

fn opt_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn event_list(events: &[EventScore]) -> String {
    events
        .iter()
        .map(|e| format!("{}:{}", e.event.0, e.points))
        .collect::<Vec<_>>()
        .join(";")
}

fn event_name<'a>(standings: &'a SeasonStandings, score: &EventScore) -> &'a str {
    standings
        .events
        .iter()
        .find(|e| e.id == score.event)
        .map_or("?", |e| e.name.as_str())
}

/// Empty when divisions are disabled, whatever the team record says.
fn division_label(config: &StandingsConfig, division: Option<u8>) -> String {
    match division.filter(|_| config.divisions.enabled) {
        None => String::new(),
        Some(d) => config
            .division_name(d)
            .map_or_else(|| d.to_string(), str::to_string),
    }
}

fn division_heading(config: &StandingsConfig, division: Option<u8>) -> String {
    match division {
        None => "No division".to_string(),
        Some(_) => format!("Division {}", division_label(config, division)),
    }
}
