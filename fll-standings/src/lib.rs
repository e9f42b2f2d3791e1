//! FLL Standings: season orchestration on top of `fll-core`.
//!
//! This crate provides:
//! - TOML configuration (event order, competitor count, divisions)
//! - The `SeasonSource` data collaborator trait
//! - A file-backed JSON season snapshot with validation and a BLAKE3 fingerprint
//! - `StandingsService`: parallel per-event ranking and league aggregation
//! - JSON, CSV, and Markdown export

pub mod config;
pub mod export;
pub mod service;
pub mod snapshot;
pub mod source;

pub use config::{ConfigError, DivisionConfig, EventOrder, StandingsConfig};
pub use export::{
    event_ranking_csv, event_ranking_report, standings_csv, standings_report, to_json,
};
pub use service::{
    order_events, DivisionRanking, EventReport, SeasonStandings, StandingsError, StandingsService,
};
pub use snapshot::{Season, SeasonSnapshot, SnapshotError, SnapshotEvent, SCHEMA_VERSION};
pub use source::{Event, SeasonSource, SourceError};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn config_is_send_sync() {
        assert_send::<StandingsConfig>();
        assert_sync::<StandingsConfig>();
    }

    #[test]
    fn snapshot_is_send_sync() {
        assert_send::<SeasonSnapshot>();
        assert_sync::<SeasonSnapshot>();
    }

    #[test]
    fn reports_are_send_sync() {
        assert_send::<EventReport>();
        assert_sync::<EventReport>();
        assert_send::<SeasonStandings>();
        assert_sync::<SeasonStandings>();
    }

    #[test]
    fn service_is_send_sync() {
        assert_send::<StandingsService<SeasonSnapshot>>();
        assert_sync::<StandingsService<SeasonSnapshot>>();
    }

    #[test]
    fn errors_are_send_sync() {
        assert_send::<StandingsError>();
        assert_sync::<StandingsError>();
        assert_send::<SnapshotError>();
        assert_sync::<SnapshotError>();
    }
}
