//! Standard competition ranking ("1224" ranking).
//!
//! Keys sorted best-first receive 1-based places. Equal keys share a place and
//! the next distinct key's place is its 1-based position, so places skip after
//! a tie: `[300, 300, 250, 200]` places as `[1, 1, 3, 4]`.
//!
//! A `None` key means the entrant produced no data. It is `Unranked`, is not
//! counted as a position, and keeps its relative order.

use std::cmp::Ordering;

use crate::domain::Rank;

/// Place keys that are already sorted best-first, comparing with `==`.
pub fn assign_places<K: PartialEq>(keys: &[Option<K>]) -> Vec<Rank> {
    assign_places_by(keys, |a, b| a == b)
}

/// Place keys that are already sorted best-first, using `tied` as the
/// category's equality.
pub fn assign_places_by<K, F>(keys: &[Option<K>], tied: F) -> Vec<Rank>
where
    F: Fn(&K, &K) -> bool,
{
    let mut places = Vec::with_capacity(keys.len());
    let mut previous: Option<(&K, u32)> = None;
    let mut position = 0u32;

    for key in keys {
        let Some(key) = key else {
            places.push(Rank::Unranked);
            continue;
        };
        position += 1;
        let place = match previous {
            Some((prev, prev_place)) if tied(prev, key) => prev_place,
            _ => position,
        };
        previous = Some((key, place));
        places.push(Rank::Ranked(place));
    }

    places
}

/// Result of ranking unsorted entrants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placements {
    /// Entrant indices in placement order (best first, unranked last).
    pub order: Vec<usize>,
    /// Place of each entrant, indexed like the input.
    pub ranks: Vec<Rank>,
}

/// Sort entrants best-first and place them.
///
/// `compare(a, b)` returns `Greater` when `a` performed better than `b`.
/// The sort is stable, so tied and unranked entrants keep input order.
pub fn rank_keys<K, F>(keys: &[Option<K>], compare: F) -> Placements
where
    F: Fn(&K, &K) -> Ordering,
{
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| match (&keys[a], &keys[b]) {
        (Some(x), Some(y)) => compare(y, x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let sorted: Vec<Option<&K>> = order.iter().map(|&i| keys[i].as_ref()).collect();
    let places = assign_places_by(&sorted, |a, b| compare(a, b) == Ordering::Equal);

    let mut ranks = vec![Rank::Unranked; keys.len()];
    for (&slot, place) in order.iter().zip(places) {
        ranks[slot] = place;
    }

    Placements { order, ranks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(places: &[u32]) -> Vec<Rank> {
        places.iter().map(|&p| Rank::Ranked(p)).collect()
    }

    #[test]
    fn ties_share_and_next_place_skips() {
        let places = assign_places(&[Some(300), Some(300), Some(250), Some(200)]);
        assert_eq!(places, ranked(&[1, 1, 3, 4]));
    }

    #[test]
    fn all_tied() {
        let places = assign_places(&[Some(5), Some(5), Some(5)]);
        assert_eq!(places, ranked(&[1, 1, 1]));
    }

    #[test]
    fn no_data_is_unranked_and_not_counted() {
        let places = assign_places(&[Some(10), Some(8), None, None]);
        assert_eq!(
            places,
            vec![Rank::Ranked(1), Rank::Ranked(2), Rank::Unranked, Rank::Unranked]
        );
    }

    #[test]
    fn empty_input() {
        assert!(assign_places::<i32>(&[]).is_empty());
    }

    #[test]
    fn custom_equality() {
        // Scores within the same hundred count as tied.
        let places = assign_places_by(&[Some(199), Some(150), Some(99)], |a, b| a / 100 == b / 100);
        assert_eq!(places, ranked(&[1, 1, 3]));
    }

    #[test]
    fn rank_keys_places_in_input_order() {
        let keys = [Some(50), None, Some(80), Some(50), Some(20)];
        let p = rank_keys(&keys, |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(p.order, vec![2, 0, 3, 4, 1]);
        assert_eq!(
            p.ranks,
            vec![
                Rank::Ranked(2),
                Rank::Unranked,
                Rank::Ranked(1),
                Rank::Ranked(2),
                Rank::Ranked(4),
            ]
        );
    }

    #[test]
    fn rank_keys_unranked_keep_relative_order() {
        let keys: [Option<i32>; 3] = [None, None, None];
        let p = rank_keys(&keys, |a, b| a.cmp(b));
        assert_eq!(p.order, vec![0, 1, 2]);
        assert!(p.ranks.iter().all(|r| *r == Rank::Unranked));
    }
}
