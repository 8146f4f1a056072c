//! Retrieval of playlist contents from the music service.
//!
//! The engine never fetches anything itself; this module is the narrow
//! collaborator that materializes [`PlaylistSnapshot`]s before any
//! computation begins. Snapshots are cached per `owner:kind` with a
//! ten-minute TTL.

pub mod cache;
pub mod web_handler;

pub use web_handler::{PlaylistSnapshot, ProviderError, WebHandlerProvider};
