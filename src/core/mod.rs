//! Core data types for playlist overlap analysis.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Track`]: A single track with its opaque comparison key
//! - [`Playlist`]: A compared playlist with title, owner, and declared count
//! - [`ComparisonResult`]: The materialized output of one comparison run
//! - [`PlaylistSets`]: The id-keyed track-set mapping the engine computes over
//! - [`PlaylistId`]: Identifier type, assigned from input position
//!
//! ## Track Keys
//!
//! Tracks are compared by an opaque string key of the form
//! `"{track_id}:{album_id}"`. Equality is exact string equality; the same
//! recording released on two albums counts as two distinct keys.

pub mod comparison;
pub mod playlist;
pub mod track;
pub mod types;

pub use comparison::{ComparisonResult, PlaylistSets, TrackSet};
pub use playlist::Playlist;
pub use track::Track;
pub use types::PlaylistId;
