use std::collections::{BTreeMap, HashSet};

use crate::core::comparison::ComparisonResult;
use crate::core::playlist::Playlist;
use crate::core::types::PlaylistId;
use crate::parsing::url::PlaylistRef;
use crate::provider::web_handler::PlaylistSnapshot;

/// Join parsed refs and fetched snapshots into an immutable comparison
/// result.
///
/// Refs and snapshots are index-aligned. Playlists are assigned ids
/// `p0, p1, ...` in input order; per-playlist keys are deduplicated keeping
/// the first occurrence, and the declared count is the deduplicated key
/// count. `tracks_index` keeps the first track seen under each key across
/// all playlists.
#[must_use]
pub fn build_comparison(refs: &[PlaylistRef], snapshots: &[PlaylistSnapshot]) -> ComparisonResult {
    let mut playlists = Vec::with_capacity(snapshots.len());
    let mut track_keys_by_playlist = Vec::with_capacity(snapshots.len());
    let mut tracks_index = BTreeMap::new();

    for (index, (playlist_ref, snapshot)) in refs.iter().zip(snapshots).enumerate() {
        let mut keys = Vec::new();
        let mut seen = HashSet::new();
        for track in &snapshot.tracks {
            if seen.insert(track.track_key.as_str()) {
                keys.push(track.track_key.clone());
                tracks_index
                    .entry(track.track_key.clone())
                    .or_insert_with(|| track.clone());
            }
        }

        playlists.push(Playlist::new(
            PlaylistId::from_index(index),
            snapshot.title.clone(),
            playlist_ref.owner_login.clone(),
            keys.len(),
        ));
        track_keys_by_playlist.push(keys);
    }

    ComparisonResult {
        playlists,
        track_keys_by_playlist,
        tracks_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::track::Track;

    fn make_track(track_id: i64, album_id: i64, title: &str) -> Track {
        Track {
            track_key: Track::key_for(track_id, album_id),
            track_id,
            album_id,
            title: title.to_string(),
            artists: vec!["Artist".to_string()],
            duration_ms: None,
            cover_url: None,
            link: None,
        }
    }

    fn make_ref(owner: &str, kind: u64) -> PlaylistRef {
        PlaylistRef {
            owner_login: owner.to_string(),
            kind,
        }
    }

    #[test]
    fn test_empty_playlists() {
        let refs = [make_ref("a", 1), make_ref("b", 2)];
        let snapshots = [
            PlaylistSnapshot {
                title: "A".to_string(),
                tracks: vec![],
            },
            PlaylistSnapshot {
                title: "B".to_string(),
                tracks: vec![],
            },
        ];

        let result = build_comparison(&refs, &snapshots);
        assert_eq!(result.playlists[0].count, 0);
        assert_eq!(result.playlists[1].count, 0);
        assert_eq!(result.track_keys_by_playlist, vec![Vec::<String>::new(); 2]);
        assert!(result.tracks_index.is_empty());
    }

    #[test]
    fn test_partial_overlap() {
        let refs = [make_ref("a", 1), make_ref("b", 2)];
        let snapshots = [
            PlaylistSnapshot {
                title: "A".to_string(),
                tracks: vec![make_track(1, 10, "one"), make_track(2, 20, "two")],
            },
            PlaylistSnapshot {
                title: "B".to_string(),
                tracks: vec![make_track(2, 20, "two"), make_track(3, 30, "three")],
            },
        ];

        let result = build_comparison(&refs, &snapshots);
        assert_eq!(result.playlists[0].count, 2);
        assert_eq!(result.playlists[1].count, 2);
        assert_eq!(result.tracks_index.len(), 3);
        assert_eq!(result.track_keys_by_playlist[0], vec!["1:10", "2:20"]);
        assert_eq!(result.track_keys_by_playlist[1], vec!["2:20", "3:30"]);
        assert_eq!(result.playlists[0].id, PlaylistId::new("p0"));
        assert_eq!(result.playlists[0].owner, "a");
    }

    #[test]
    fn test_duplicates_collapse_but_declared_count_is_deduplicated() {
        let refs = [make_ref("a", 1)];
        let snapshots = [PlaylistSnapshot {
            title: "A".to_string(),
            tracks: vec![
                make_track(1, 10, "one"),
                make_track(1, 10, "one again"),
                make_track(2, 20, "two"),
            ],
        }];

        let result = build_comparison(&refs, &snapshots);
        assert_eq!(result.playlists[0].count, 2);
        assert_eq!(result.track_keys_by_playlist[0], vec!["1:10", "2:20"]);
        // first occurrence wins in the index
        assert_eq!(result.tracks_index["1:10"].title, "one");
    }

    #[test]
    fn test_tracks_index_first_seen_across_playlists() {
        let refs = [make_ref("a", 1), make_ref("b", 2)];
        let snapshots = [
            PlaylistSnapshot {
                title: "A".to_string(),
                tracks: vec![make_track(1, 10, "from A")],
            },
            PlaylistSnapshot {
                title: "B".to_string(),
                tracks: vec![make_track(1, 10, "from B")],
            },
        ];

        let result = build_comparison(&refs, &snapshots);
        assert_eq!(result.tracks_index["1:10"].title, "from A");
        // the key still appears in both playlists' lists
        assert_eq!(result.track_keys_by_playlist[1], vec!["1:10"]);
    }
}
