use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::track::Track;
use crate::parsing::url::PlaylistRef;
use crate::provider::cache::TtlCache;

/// The web player's playlist handler endpoint
pub const PLAYLIST_ENDPOINT: &str = "https://music.yandex.ru/handlers/playlist.jsx";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const CACHE_TTL: Duration = Duration::from_secs(600);

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Timed out while fetching playlist")]
    Timeout,

    #[error("Failed to fetch playlist: {0}")]
    Transport(String),

    #[error("Invalid response payload: {0}")]
    Payload(String),
}

/// A playlist as fetched from the music service: title plus track list,
/// before any deduplication.
#[derive(Debug, Clone)]
pub struct PlaylistSnapshot {
    pub title: String,
    pub tracks: Vec<Track>,
}

/// Fetches playlist snapshots from the music service's web handler,
/// caching results per `owner:kind` for ten minutes.
pub struct WebHandlerProvider {
    client: reqwest::Client,
    cache: TtlCache<PlaylistSnapshot>,
}

impl WebHandlerProvider {
    /// Create a provider with the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] if the HTTP client cannot be
    /// constructed (TLS backend initialization).
    pub fn new() -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            cache: TtlCache::new(CACHE_TTL),
        })
    }

    /// Fetch one playlist, serving repeated requests from the cache.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Timeout`] when the service does not answer
    /// in time, [`ProviderError::Transport`] for other HTTP failures
    /// (including non-2xx statuses), and [`ProviderError::Payload`] when the
    /// body is not JSON.
    pub async fn fetch(&self, playlist: &PlaylistRef) -> Result<PlaylistSnapshot, ProviderError> {
        let cache_key = format!("{}:{}", playlist.owner_login, playlist.kind);
        if let Some(snapshot) = self.cache.get(&cache_key) {
            debug!(key = %cache_key, "playlist served from cache");
            return Ok(snapshot);
        }

        // The web player appends a random query value to defeat intermediary
        // caches; sub-second noise serves the same purpose here.
        let bust = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0)
            .to_string();
        let kinds = playlist.kind.to_string();

        let response = self
            .client
            .get(PLAYLIST_ENDPOINT)
            .query(&[
                ("owner", playlist.owner_login.as_str()),
                ("kinds", kinds.as_str()),
                ("r", bust.as_str()),
            ])
            .send()
            .await
            .map_err(map_fetch_error)?
            .error_for_status()
            .map_err(map_fetch_error)?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Payload(e.to_string()))?;

        let snapshot = decode_snapshot(&payload, playlist.kind);
        debug!(
            key = %cache_key,
            tracks = snapshot.tracks.len(),
            "playlist fetched"
        );
        self.cache.set(cache_key, snapshot.clone());
        Ok(snapshot)
    }
}

fn map_fetch_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Transport(e.to_string())
    }
}

/// Decode the handler payload into a snapshot.
///
/// The payload is either `{"playlist": {...}}` or the playlist object
/// itself. Tracks missing an id, album id, or title are skipped rather than
/// failing the whole playlist.
fn decode_snapshot(payload: &Value, kind: u64) -> PlaylistSnapshot {
    let playlist = payload.get("playlist").unwrap_or(payload);

    let title = playlist
        .get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.is_empty())
        .map_or_else(|| format!("Playlist {kind}"), str::to_string);

    let mut tracks = Vec::new();
    if let Some(items) = playlist.get("tracks").and_then(Value::as_array) {
        for item in items {
            if let Some(track) = decode_track(item) {
                tracks.push(track);
            } else {
                warn!("skipping track without id, album, or title");
            }
        }
    }

    PlaylistSnapshot { title, tracks }
}

fn decode_track(item: &Value) -> Option<Track> {
    let track_id = to_i64(item.get("id"))?;
    let album_id = first_album_id(item.get("albums"))?;
    let title = item
        .get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.is_empty())?;

    Some(Track {
        track_key: Track::key_for(track_id, album_id),
        track_id,
        album_id,
        title: title.to_string(),
        artists: artist_names(item.get("artists")),
        duration_ms: to_i64(item.get("durationMs")),
        cover_url: cover_url(item.get("coverUri")),
        link: item.get("link").and_then(Value::as_str).map(str::to_string),
    })
}

/// Ids arrive as numbers or numeric strings depending on the endpoint era
fn to_i64(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn first_album_id(albums: Option<&Value>) -> Option<i64> {
    to_i64(albums?.as_array()?.first()?.get("id"))
}

fn artist_names(artists: Option<&Value>) -> Vec<String> {
    artists
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|artist| artist.get("name").and_then(Value::as_str))
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// The service reports cover art as a URI template with a `%%` size slot
fn cover_url(cover_uri: Option<&Value>) -> Option<String> {
    let uri = cover_uri?.as_str()?;
    if uri.is_empty() {
        return None;
    }
    Some(format!("https://{}", uri.replace("%%", "200x200")))
}
