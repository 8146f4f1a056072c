use serde::{Deserialize, Serialize};

/// A single track as reported by the music service.
///
/// The `track_key` is the opaque identity used for all set arithmetic:
/// equality is exact string equality, no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Opaque key uniquely identifying the track: `"{track_id}:{album_id}"`
    pub track_key: String,

    pub track_id: i64,

    /// Id of the album the track was reported under (first album wins)
    pub album_id: i64,

    pub title: String,

    pub artists: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Track {
    /// The canonical track key for a track/album id pair.
    #[must_use]
    pub fn key_for(track_id: i64, album_id: i64) -> String {
        format!("{track_id}:{album_id}")
    }

    /// Artist names joined for display and sorting.
    #[must_use]
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}
