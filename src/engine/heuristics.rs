//! Default-selection policies used to seed the diagram view.
//!
//! All three policies are stateless functions of the playlist list and its
//! sets; the caller decides which suggestion to apply.

use crate::core::comparison::PlaylistSets;
use crate::core::playlist::Playlist;
use crate::core::types::PlaylistId;
use crate::engine::similarity::jaccard;

/// Upper bound on playlists in a diagram selection.
pub const MAX_SELECTION: usize = 5;

/// Number of playlists picked by the positional default.
const DEFAULT_SELECTION: usize = 3;

/// The most similar pair of playlists plus the largest remaining one.
///
/// Scans all unordered pairs in input order and keeps the first pair whose
/// score strictly exceeds the running best (initially 0.0), so a run where
/// every pair scores zero yields no suggestion. The third slot goes to the
/// remaining playlist with the largest track set, if any remain. Result
/// length is 0, 2, or 3.
#[must_use]
pub fn most_similar_trio(playlists: &[Playlist], sets: &PlaylistSets) -> Vec<PlaylistId> {
    if playlists.len() < 2 {
        return Vec::new();
    }

    let mut best_pair: Option<[&PlaylistId; 2]> = None;
    let mut best_score = 0.0;
    for i in 0..playlists.len() {
        for j in (i + 1)..playlists.len() {
            let score = jaccard(sets.resolve(&playlists[i].id), sets.resolve(&playlists[j].id));
            if score > best_score {
                best_score = score;
                best_pair = Some([&playlists[i].id, &playlists[j].id]);
            }
        }
    }

    let Some(pair) = best_pair else {
        return Vec::new();
    };

    let mut remaining: Vec<&Playlist> = playlists
        .iter()
        .filter(|playlist| !pair.contains(&&playlist.id))
        .collect();
    // Stable sort: equal sizes stay in input order
    remaining.sort_by(|a, b| sets.resolve(&b.id).len().cmp(&sets.resolve(&a.id).len()));

    let mut selected: Vec<PlaylistId> = pair.iter().map(|id| (*id).clone()).collect();
    selected.extend(remaining.first().map(|playlist| playlist.id.clone()));
    selected
}

/// The first playlists in input order, up to three.
#[must_use]
pub fn first_n(playlists: &[Playlist]) -> Vec<PlaylistId> {
    playlists
        .iter()
        .take(DEFAULT_SELECTION)
        .map(|playlist| playlist.id.clone())
        .collect()
}

/// All playlists sorted by descending declared count, truncated to five.
#[must_use]
pub fn top_by_size(playlists: &[Playlist]) -> Vec<PlaylistId> {
    let mut ordered: Vec<&Playlist> = playlists.iter().collect();
    ordered.sort_by(|a, b| b.count.cmp(&a.count));
    ordered
        .into_iter()
        .take(MAX_SELECTION)
        .map(|playlist| playlist.id.clone())
        .collect()
}

/// The subset the diagram opens with: the first three playlists, or all of
/// them when fewer than two would remain.
#[must_use]
pub fn default_subset(playlists: &[Playlist]) -> Vec<PlaylistId> {
    let first = first_n(playlists);
    if first.len() >= 2 {
        first
    } else {
        playlists.iter().map(|playlist| playlist.id.clone()).collect()
    }
}

/// Clamp a user-picked selection to the diagram bounds.
///
/// Excess ids are truncated from the end; a request that leaves fewer than
/// two ids is rejected with `None` so the caller keeps its prior selection.
#[must_use]
pub fn clamp_selection(requested: &[PlaylistId]) -> Option<Vec<PlaylistId>> {
    let clamped: Vec<PlaylistId> = requested.iter().take(MAX_SELECTION).cloned().collect();
    if clamped.len() < 2 {
        return None;
    }
    Some(clamped)
}
