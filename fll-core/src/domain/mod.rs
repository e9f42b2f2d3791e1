//! Domain types for the ranking engine

pub mod ids;
pub mod rank;
pub mod records;
pub mod team;

pub use ids::{EventId, SeasonId, TeamId};
pub use rank::{Category, Rank};
pub use records::{JudgingResult, MatchIndex, MatchResult, RecordError, MATCHES_PER_EVENT};
pub use team::{EventRoster, Team};
