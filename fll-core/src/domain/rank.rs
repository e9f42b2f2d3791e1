//! Placement values shared by every ranking in the engine.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A 1-based place, or no place at all because the team produced no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Ranked(u32),
    Unranked,
}

impl Rank {
    pub fn get(self) -> Option<u32> {
        match self {
            Self::Ranked(place) => Some(place),
            Self::Unranked => None,
        }
    }

    pub fn is_ranked(self) -> bool {
        matches!(self, Self::Ranked(_))
    }
}

impl From<Option<u32>> for Rank {
    fn from(place: Option<u32>) -> Self {
        place.map_or(Self::Unranked, Self::Ranked)
    }
}

/// Display order: better places first, unranked last.
impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Ranked(a), Self::Ranked(b)) => a.cmp(b),
            (Self::Ranked(_), Self::Unranked) => Ordering::Less,
            (Self::Unranked, Self::Ranked(_)) => Ordering::Greater,
            (Self::Unranked, Self::Unranked) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ranked(place) => write!(f, "{place}"),
            Self::Unranked => f.write_str("-"),
        }
    }
}

/// The four areas a team is placed in at every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RobotGame,
    InnovationProject,
    RobotDesign,
    CoreValues,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::RobotGame,
        Category::InnovationProject,
        Category::RobotDesign,
        Category::CoreValues,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::RobotGame => "Robot Game",
            Self::InnovationProject => "Innovation Project",
            Self::RobotDesign => "Robot Design",
            Self::CoreValues => "Core Values",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unranked_sorts_after_every_place() {
        let mut ranks = vec![Rank::Unranked, Rank::Ranked(3), Rank::Ranked(1), Rank::Unranked];
        ranks.sort();
        assert_eq!(
            ranks,
            vec![Rank::Ranked(1), Rank::Ranked(3), Rank::Unranked, Rank::Unranked]
        );
    }

    #[test]
    fn serializes_without_sentinels() {
        assert_eq!(serde_json::to_string(&Rank::Ranked(2)).unwrap(), r#"{"ranked":2}"#);
        assert_eq!(serde_json::to_string(&Rank::Unranked).unwrap(), r#""unranked""#);
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Rank::from(Some(4)), Rank::Ranked(4));
        assert_eq!(Rank::from(None), Rank::Unranked);
        assert_eq!(Rank::Ranked(4).get(), Some(4));
        assert!(!Rank::Unranked.is_ranked());
    }
}
