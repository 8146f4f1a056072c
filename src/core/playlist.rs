use serde::{Deserialize, Serialize};

use crate::core::types::PlaylistId;

/// A compared playlist with its declared track count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,

    /// Display name as reported by the source
    pub title: String,

    /// Login of the playlist owner
    pub owner: String,

    /// Declared number of distinct tracks. The similarity matrix diagonal
    /// reports this value rather than the recomputed set size, so a source
    /// that repeats keys is visible to the caller.
    pub count: usize,
}

impl Playlist {
    pub fn new(id: PlaylistId, title: impl Into<String>, owner: impl Into<String>, count: usize) -> Self {
        Self {
            id,
            title: title.into(),
            owner: owner.into(),
            count,
        }
    }
}
