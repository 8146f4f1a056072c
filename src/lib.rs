//! # playlist-overlap
//!
//! A library for analyzing how music playlists overlap.
//!
//! Given several public playlists, it computes exact set arithmetic over
//! their track keys: a pairwise Jaccard similarity matrix, the power-set
//! decomposition of a selected subset into Venn regions, the tracks common
//! to every playlist, and heuristics for picking an interesting default
//! subset to visualize.
//!
//! The overlap engine is a pure function library: it takes the materialized
//! [`PlaylistSets`] mapping explicitly, performs no I/O, and returns
//! caller-owned values, so it can be driven from the CLI, the web server,
//! or any other front end.
//!
//! ## Example
//!
//! ```rust
//! use playlist_overlap::core::{PlaylistId, PlaylistSets};
//! use playlist_overlap::engine::{regions, similarity};
//!
//! let sets = PlaylistSets::new(
//!     [
//!         (PlaylistId::new("p0"), ["1:1", "2:1", "3:1"].map(String::from).into()),
//!         (PlaylistId::new("p1"), ["2:1", "3:1", "4:1"].map(String::from).into()),
//!     ]
//!     .into_iter()
//!     .collect(),
//! );
//!
//! let a = sets.resolve(&PlaylistId::new("p0"));
//! let b = sets.resolve(&PlaylistId::new("p1"));
//! assert!((similarity::jaccard(a, b) - 0.5).abs() < 1e-9);
//!
//! let ids = [PlaylistId::new("p0"), PlaylistId::new("p1")];
//! let venn = regions::decompose(&ids, &sets);
//! assert_eq!(venn.len(), 3);
//! assert_eq!(venn[2].size, 2); // {p0, p1}
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Data model — playlists, tracks, comparison results
//! - [`engine`]: The overlap computation engine (pure set arithmetic)
//! - [`parsing`]: Playlist URL parsing
//! - [`provider`]: Playlist retrieval from the music service
//! - [`service`]: Joining fetched playlists and running the engine
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server exposing the comparison API

pub mod cli;
pub mod core;
pub mod engine;
pub mod parsing;
pub mod provider;
pub mod service;
pub mod web;

// Re-export commonly used types for convenience
pub use core::comparison::{ComparisonResult, PlaylistSets, TrackSet};
pub use core::playlist::Playlist;
pub use core::track::Track;
pub use core::types::PlaylistId;
pub use engine::matrix::SimilarityMatrix;
pub use engine::regions::Region;
pub use engine::selection::Selection;
pub use service::analysis::OverlapAnalysis;
