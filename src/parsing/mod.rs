//! Parsing of user-supplied playlist references.
//!
//! The only input format is the playlist page URL:
//!
//! ```text
//! https://music.yandex.ru/users/{owner}/playlists/{kind}
//! ```
//!
//! ## Example
//!
//! ```rust
//! use playlist_overlap::parsing::url::parse_playlist_url;
//!
//! let parsed = parse_playlist_url("https://music.yandex.ru/users/alice/playlists/42").unwrap();
//! assert_eq!(parsed.owner_login, "alice");
//! assert_eq!(parsed.kind, 42);
//! ```

pub mod url;

pub use url::{parse_playlist_url, PlaylistRef, UrlError};
