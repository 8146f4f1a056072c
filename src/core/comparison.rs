use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::playlist::Playlist;
use crate::core::track::Track;
use crate::core::types::PlaylistId;
use crate::engine::sets::build_track_sets;

/// A deduplicated set of track keys belonging to one playlist.
pub type TrackSet = HashSet<String>;

/// Immutable output of one comparison run.
///
/// `track_keys_by_playlist` is index-aligned with `playlists`: entry `i`
/// holds the deduplicated keys of playlist `i` in first-occurrence order.
/// `tracks_index` maps every key seen in the run to the first track reported
/// under it, for detail lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub playlists: Vec<Playlist>,
    pub track_keys_by_playlist: Vec<Vec<String>>,
    pub tracks_index: BTreeMap<String, Track>,
}

impl ComparisonResult {
    /// Build the id-keyed set mapping consumed by the overlap engine.
    #[must_use]
    pub fn playlist_sets(&self) -> PlaylistSets {
        let sets = build_track_sets(&self.track_keys_by_playlist);
        PlaylistSets::new(
            self.playlists
                .iter()
                .map(|playlist| playlist.id.clone())
                .zip(sets)
                .collect(),
        )
    }

    /// All playlist ids in input order.
    #[must_use]
    pub fn playlist_ids(&self) -> Vec<PlaylistId> {
        self.playlists.iter().map(|p| p.id.clone()).collect()
    }
}

/// Mapping from playlist id to its track-key set.
///
/// Built once per comparison result and never mutated afterwards; every
/// engine operation takes it by reference, so results can be derived
/// repeatedly (and from multiple call sites) without shared state.
#[derive(Debug, Clone, Default)]
pub struct PlaylistSets {
    sets: HashMap<PlaylistId, TrackSet>,
    empty: TrackSet,
}

impl PlaylistSets {
    #[must_use]
    pub fn new(sets: HashMap<PlaylistId, TrackSet>) -> Self {
        Self {
            sets,
            empty: TrackSet::new(),
        }
    }

    /// Look up the set for an id. An unknown id resolves to the empty set;
    /// it contributes nothing to any computation but never aborts one.
    #[must_use]
    pub fn resolve(&self, id: &PlaylistId) -> &TrackSet {
        self.sets.get(id).unwrap_or(&self.empty)
    }

    /// Resolve a list of ids into set references, preserving order.
    #[must_use]
    pub fn resolve_all<'a>(&'a self, ids: &[PlaylistId]) -> Vec<&'a TrackSet> {
        ids.iter().map(|id| self.resolve(id)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
