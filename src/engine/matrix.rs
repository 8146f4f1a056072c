//! Pairwise similarity matrix and ranked top pairs.

use serde::Serialize;

use crate::core::comparison::PlaylistSets;
use crate::core::playlist::Playlist;
use crate::core::types::PlaylistId;
use crate::engine::sets::intersection_size;
use crate::engine::similarity::jaccard;

/// Maximum number of entries in the ranked pair list.
pub const MAX_TOP_PAIRS: usize = 20;

/// One cell of the similarity matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatrixCell {
    /// Jaccard score in [0, 1]; 1.0 on the diagonal by definition
    pub score: f64,
    /// Absolute intersection size; the playlist's declared count on the diagonal
    pub size: usize,
}

/// An off-diagonal pair ranked by similarity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairSimilarity {
    pub ids: [PlaylistId; 2],
    pub score: f64,
    pub size: usize,
}

/// Full pairwise comparison table for a run.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityMatrix {
    /// Square table, row/column order matching the input playlist order
    pub cells: Vec<Vec<MatrixCell>>,
    /// Unordered pairs (i < j) sorted by descending score, ties kept in
    /// input order, truncated to [`MAX_TOP_PAIRS`]
    pub top_pairs: Vec<PairSimilarity>,
}

/// Build the similarity matrix over all compared playlists.
///
/// The diagonal reports score 1.0 and the playlist's declared count rather
/// than its recomputed set size, so duplicate-key collapsing stays visible
/// to the caller.
#[must_use]
pub fn build(playlists: &[Playlist], sets: &PlaylistSets) -> SimilarityMatrix {
    let cells: Vec<Vec<MatrixCell>> = playlists
        .iter()
        .map(|row| {
            playlists
                .iter()
                .map(|column| {
                    if row.id == column.id {
                        return MatrixCell {
                            score: 1.0,
                            size: row.count,
                        };
                    }
                    let a = sets.resolve(&row.id);
                    let b = sets.resolve(&column.id);
                    MatrixCell {
                        score: jaccard(a, b),
                        size: intersection_size(&[a, b]),
                    }
                })
                .collect()
        })
        .collect();

    let mut top_pairs: Vec<PairSimilarity> = Vec::new();
    for i in 0..playlists.len() {
        for j in (i + 1)..playlists.len() {
            let cell = cells[i][j];
            top_pairs.push(PairSimilarity {
                ids: [playlists[i].id.clone(), playlists[j].id.clone()],
                score: cell.score,
                size: cell.size,
            });
        }
    }
    // Stable sort keeps input order among equal scores
    top_pairs.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    top_pairs.truncate(MAX_TOP_PAIRS);

    SimilarityMatrix { cells, top_pairs }
}
