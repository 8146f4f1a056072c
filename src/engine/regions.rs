//! Power-set decomposition of a selected group of playlists into Venn regions.

use serde::Serialize;

use crate::core::comparison::PlaylistSets;
use crate::core::types::PlaylistId;
use crate::engine::sets::intersection_size;

/// Maximum number of playlists in the combinatorial region view.
pub const MAX_REGION_SETS: usize = 5;

/// One Venn region: the participating playlists and the cumulative
/// intersection size of exactly those playlists' sets.
///
/// Sizes are cumulative, not exclusive: a key counted for `{A, B}` is
/// counted again for `{A, B, C}` when it also belongs to C. This is the
/// input shape Venn layout libraries expect; the diagram layer owns any
/// exclusivity adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Participating playlist ids, in selection order
    pub sets: Vec<PlaylistId>,
    /// Cumulative intersection size of the participating sets
    pub size: usize,
}

/// Enumerate every non-empty subset of `ids` with its cumulative
/// intersection size.
///
/// Subsets are generated by binary counting (mask 1..2^k, id `i` included
/// when bit `i` is set), so output order is identical across calls with the
/// same input. `ids` beyond [`MAX_REGION_SETS`] are ignored; an id with no
/// entry in `sets` acts as an empty set. No ids produces no regions.
#[must_use]
pub fn decompose(ids: &[PlaylistId], sets: &PlaylistSets) -> Vec<Region> {
    let ids = &ids[..ids.len().min(MAX_REGION_SETS)];
    let total = 1usize << ids.len();

    let mut regions = Vec::with_capacity(total.saturating_sub(1));
    for mask in 1..total {
        let subset: Vec<PlaylistId> = ids
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, id)| id.clone())
            .collect();
        let size = intersection_size(&sets.resolve_all(&subset));
        regions.push(Region { sets: subset, size });
    }
    regions
}
