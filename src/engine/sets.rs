//! Set construction and exact intersection/union arithmetic.
//!
//! All operations are pure functions over borrowed sets: commutative in
//! their set arguments, deterministic, and free of shared state.

use crate::core::comparison::TrackSet;

/// Build one deduplicated track set per playlist, index-aligned with the
/// input key lists. Empty lists are valid and produce empty sets.
#[must_use]
pub fn build_track_sets(track_keys_by_playlist: &[Vec<String>]) -> Vec<TrackSet> {
    track_keys_by_playlist
        .iter()
        .map(|keys| keys.iter().cloned().collect())
        .collect()
}

/// Count of keys present in every set.
///
/// Zero input sets is defined as 0: the mathematical intersection of no
/// constraints would be unbounded, so the degenerate case is pinned
/// explicitly rather than left to interpretation.
#[must_use]
pub fn intersection_size(sets: &[&TrackSet]) -> usize {
    let Some((first, rest)) = sets.split_first() else {
        return 0;
    };
    first
        .iter()
        .filter(|key| rest.iter().all(|set| set.contains(*key)))
        .count()
}

/// Keys present in every set, for downstream track lookups.
///
/// Always the same cardinality as [`intersection_size`] over the same input.
/// Keys are returned sorted so repeated calls are byte-identical regardless
/// of hash iteration order.
#[must_use]
pub fn intersection_keys(sets: &[&TrackSet]) -> Vec<String> {
    let Some((first, rest)) = sets.split_first() else {
        return Vec::new();
    };
    let mut keys: Vec<String> = first
        .iter()
        .filter(|key| rest.iter().all(|set| set.contains(*key)))
        .cloned()
        .collect();
    keys.sort_unstable();
    keys
}

/// Count of keys present in at least one set.
#[must_use]
pub fn union_size(sets: &[&TrackSet]) -> usize {
    let mut union: std::collections::HashSet<&str> = std::collections::HashSet::new();
    for set in sets {
        union.extend(set.iter().map(String::as_str));
    }
    union.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(keys: &[&str]) -> TrackSet {
        keys.iter().map(|k| (*k).to_string()).collect()
    }

    #[test]
    fn test_build_track_sets_collapses_duplicates() {
        let keys = vec![
            vec!["a".to_string(), "b".to_string(), "a".to_string()],
            vec![],
        ];
        let sets = build_track_sets(&keys);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].len(), 2);
        assert!(sets[1].is_empty());
    }

    #[test]
    fn test_intersection_size_commutative() {
        let a = set(&["1", "2", "3"]);
        let b = set(&["2", "3", "4"]);
        assert_eq!(intersection_size(&[&a, &b]), 2);
        assert_eq!(intersection_size(&[&b, &a]), 2);
    }

    #[test]
    fn test_intersection_of_no_sets_is_zero() {
        assert_eq!(intersection_size(&[]), 0);
        assert!(intersection_keys(&[]).is_empty());
    }

    #[test]
    fn test_intersection_keys_matches_size() {
        let a = set(&["1", "2", "3"]);
        let b = set(&["2", "3", "4"]);
        let c = set(&["3", "4", "5"]);
        let sets = [&a, &b, &c];
        let keys = intersection_keys(&sets);
        assert_eq!(keys.len(), intersection_size(&sets));
        assert_eq!(keys, vec!["3".to_string()]);
    }

    #[test]
    fn test_intersection_keys_sorted() {
        let a = set(&["c", "a", "b"]);
        assert_eq!(intersection_keys(&[&a]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_union_size() {
        let a = set(&["1", "2"]);
        let b = set(&["2", "3"]);
        assert_eq!(union_size(&[&a, &b]), 3);
        assert_eq!(union_size(&[]), 0);
    }

    #[test]
    fn test_intersection_bounded_by_smallest_set() {
        let a = set(&["1", "2", "3", "4"]);
        let b = set(&["2"]);
        assert!(intersection_size(&[&a, &b]) <= b.len());
    }
}
