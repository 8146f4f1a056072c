use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("Empty URL")]
    Empty,

    #[error("Invalid URL: {0}")]
    Invalid(String),

    #[error("Unsupported URL scheme")]
    UnsupportedScheme,

    #[error("Unsupported host")]
    UnsupportedHost,

    #[error("URL does not match playlist format")]
    InvalidFormat,

    #[error("Missing owner login")]
    MissingOwner,

    #[error("Playlist kind must be an integer")]
    InvalidKind,
}

/// Hosts the music service serves playlists from
const SUPPORTED_HOSTS: [&str; 2] = ["music.yandex.ru", "music.yandex.com"];

/// A parsed reference to a playlist on the music service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRef {
    pub owner_login: String,
    pub kind: u64,
}

/// Parse a playlist page URL of the form
/// `https://music.yandex.ru/users/{owner}/playlists/{kind}`.
///
/// Query strings and fragments are ignored. The owner login is taken
/// verbatim; `kind` must be a non-negative integer.
///
/// # Errors
///
/// Returns a [`UrlError`] describing the first check that failed: empty
/// input, unparseable URL, non-http(s) scheme, unknown host, a path that is
/// not `/users/{owner}/playlists/{kind}`, or a non-numeric kind.
pub fn parse_playlist_url(url: &str) -> Result<PlaylistRef, UrlError> {
    if url.is_empty() {
        return Err(UrlError::Empty);
    }

    let parsed = Url::parse(url).map_err(|e| UrlError::Invalid(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(UrlError::UnsupportedScheme);
    }

    let host = parsed.host_str().ok_or(UrlError::UnsupportedHost)?;
    if !SUPPORTED_HOSTS.contains(&host) {
        return Err(UrlError::UnsupportedHost);
    }

    let parts: Vec<&str> = parsed
        .path()
        .split('/')
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() < 4 || parts[0] != "users" || parts[2] != "playlists" {
        return Err(UrlError::InvalidFormat);
    }

    let owner_login = parts[1];
    if owner_login.is_empty() {
        return Err(UrlError::MissingOwner);
    }

    let kind = parts[3]
        .parse::<u64>()
        .map_err(|_| UrlError::InvalidKind)?;

    Ok(PlaylistRef {
        owner_login: owner_login.to_string(),
        kind,
    })
}
