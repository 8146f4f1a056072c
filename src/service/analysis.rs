use serde::Serialize;

use crate::core::comparison::{ComparisonResult, PlaylistSets};
use crate::core::track::Track;
use crate::core::types::PlaylistId;
use crate::engine::heuristics;
use crate::engine::matrix::{self, SimilarityMatrix};
use crate::engine::regions::{self, Region};
use crate::engine::selection::{self, Selection};
use crate::engine::sets::intersection_keys;

/// Default-selection suggestions, one per policy.
#[derive(Debug, Clone, Serialize)]
pub struct SubsetSuggestions {
    /// Most similar pair plus the largest remaining playlist (may be empty)
    pub most_similar: Vec<PlaylistId>,
    /// First playlists in input order
    pub first: Vec<PlaylistId>,
    /// Largest playlists by declared count
    pub top_by_size: Vec<PlaylistId>,
}

/// Engine output for one comparison run: everything the presentation layer
/// consumes besides the raw [`ComparisonResult`].
#[derive(Debug, Clone, Serialize)]
pub struct OverlapAnalysis {
    pub matrix: SimilarityMatrix,
    /// Intersection of every compared playlist
    pub common_to_all: Selection,
    /// Subset the region breakdown was computed over
    pub default_subset: Vec<PlaylistId>,
    /// Venn regions of the default subset, cumulative sizes
    pub regions: Vec<Region>,
    pub suggestions: SubsetSuggestions,
}

/// Run the full engine over a comparison result.
#[must_use]
pub fn analyze(result: &ComparisonResult) -> OverlapAnalysis {
    let sets = result.playlist_sets();
    let all_ids = result.playlist_ids();
    let default_subset = heuristics::default_subset(&result.playlists);

    OverlapAnalysis {
        matrix: matrix::build(&result.playlists, &sets),
        common_to_all: selection::select_region(&all_ids, &result.playlists, &sets),
        regions: regions::decompose(&default_subset, &sets),
        default_subset,
        suggestions: SubsetSuggestions {
            most_similar: heuristics::most_similar_trio(&result.playlists, &sets),
            first: heuristics::first_n(&result.playlists),
            top_by_size: heuristics::top_by_size(&result.playlists),
        },
    }
}

/// Tracks inside a selected region, ordered by artist line then title.
///
/// Keys without an entry in the track index are skipped, mirroring how
/// unknown ids resolve to empty sets.
#[must_use]
pub fn selection_tracks<'a>(
    result: &'a ComparisonResult,
    sets: &PlaylistSets,
    ids: &[PlaylistId],
) -> Vec<&'a Track> {
    let keys = intersection_keys(&sets.resolve_all(ids));
    let mut tracks: Vec<&Track> = keys
        .iter()
        .filter_map(|key| result.tracks_index.get(key))
        .collect();
    tracks.sort_by(|a, b| {
        a.artist_line()
            .cmp(&b.artist_line())
            .then_with(|| a.title.cmp(&b.title))
    });
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::url::PlaylistRef;
    use crate::provider::web_handler::PlaylistSnapshot;
    use crate::service::compare::build_comparison;

    fn make_track(track_id: i64, title: &str, artist: &str) -> Track {
        Track {
            track_key: Track::key_for(track_id, 1),
            track_id,
            album_id: 1,
            title: title.to_string(),
            artists: vec![artist.to_string()],
            duration_ms: None,
            cover_url: None,
            link: None,
        }
    }

    fn fixture() -> ComparisonResult {
        let refs: Vec<PlaylistRef> = (0..3)
            .map(|kind| PlaylistRef {
                owner_login: "owner".to_string(),
                kind,
            })
            .collect();
        let snapshots = vec![
            PlaylistSnapshot {
                title: "P1".to_string(),
                tracks: vec![
                    make_track(1, "t1", "x"),
                    make_track(2, "t2", "x"),
                    make_track(3, "t3", "x"),
                ],
            },
            PlaylistSnapshot {
                title: "P2".to_string(),
                tracks: vec![
                    make_track(2, "t2", "x"),
                    make_track(3, "t3", "x"),
                    make_track(4, "t4", "x"),
                ],
            },
            PlaylistSnapshot {
                title: "P3".to_string(),
                tracks: vec![
                    make_track(3, "t3", "x"),
                    make_track(4, "t4", "x"),
                    make_track(5, "t5", "x"),
                ],
            },
        ];
        build_comparison(&refs, &snapshots)
    }

    #[test]
    fn test_analyze_wires_engine_together() {
        let result = fixture();
        let analysis = analyze(&result);

        assert_eq!(analysis.matrix.cells.len(), 3);
        assert_eq!(analysis.common_to_all.size, 1); // {3:1}
        assert_eq!(analysis.common_to_all.label, "P1 ∩ P2 ∩ P3");
        assert_eq!(analysis.regions.len(), 7);
        assert_eq!(analysis.default_subset.len(), 3);
        assert_eq!(analysis.suggestions.first.len(), 3);
    }

    #[test]
    fn test_selection_tracks_sorted_by_artist_then_title() {
        let refs = vec![PlaylistRef {
            owner_login: "owner".to_string(),
            kind: 0,
        }];
        let snapshots = vec![PlaylistSnapshot {
            title: "P".to_string(),
            tracks: vec![
                make_track(1, "Beta", "Zeta"),
                make_track(2, "Alpha", "Zeta"),
                make_track(3, "Gamma", "Alef"),
            ],
        }];
        let result = build_comparison(&refs, &snapshots);
        let sets = result.playlist_sets();

        let tracks = selection_tracks(&result, &sets, &[PlaylistId::new("p0")]);
        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Gamma", "Alpha", "Beta"]);
    }
}
