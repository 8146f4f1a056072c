//! Jaccard similarity between two track sets.

use crate::core::comparison::TrackSet;
use crate::engine::sets::{intersection_size, union_size};

/// Safely convert usize to f64 for score calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Jaccard similarity: |A ∩ B| / |A ∪ B|, in [0, 1].
///
/// Returns 0.0 when the union is empty (both sets empty). The 0/0 case is
/// mathematically indeterminate; 0.0 keeps two empty playlists from reading
/// as identical.
#[must_use]
pub fn jaccard(a: &TrackSet, b: &TrackSet) -> f64 {
    let union = union_size(&[a, b]);
    if union == 0 {
        return 0.0;
    }
    count_to_f64(intersection_size(&[a, b])) / count_to_f64(union)
}
