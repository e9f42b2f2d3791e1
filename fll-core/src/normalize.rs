//! Rank → points normalization.
//!
//! A ranked category is worth between 100 and 200 points: rank 1 earns 200,
//! last place among N competitors earns 100, and places in between are spread
//! linearly with truncating integer division. A single-competitor pool earns
//! 200. Unranked categories earn nothing.

use serde::{Deserialize, Serialize};

use crate::domain::Rank;

/// Points for the top place.
pub const MAX_POINTS: u32 = 200;
/// Points for the last place in a pool of two or more.
pub const MIN_POINTS: u32 = 100;

/// What N, the competitor count, means for a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitorCount {
    /// Every team on the event roster.
    #[default]
    Roster,
    /// Only the teams ranked in the category being scored.
    RankedInCategory,
}

/// Points for one category placement among `competitors` teams.
///
/// `rank` is clamped to `competitors` so a malformed rank can never produce
/// fewer than [`MIN_POINTS`].
pub fn category_points(rank: Rank, competitors: u32) -> u32 {
    let Rank::Ranked(place) = rank else {
        return 0;
    };
    if competitors <= 1 {
        return MAX_POINTS;
    }
    let place = place.clamp(1, competitors);
    let scaled =
        u64::from(MIN_POINTS) * u64::from(competitors - place) / u64::from(competitors - 1);
    // scaled <= MIN_POINTS, so the narrowing cannot fail.
    u32::try_from(scaled).map_or(MAX_POINTS, |p| p + MIN_POINTS)
}

/// Sum of the points a team earns across its category placements.
///
/// `placements` pairs each category rank with that category's competitor
/// count. Zero means no ranked category, i.e. no qualifying event score.
pub fn normalized_total<I>(placements: I) -> u32
where
    I: IntoIterator<Item = (Rank, u32)>,
{
    placements
        .into_iter()
        .map(|(rank, competitors)| category_points(rank, competitors))
        .sum()
}
