//! The overlap computation engine.
//!
//! Pure, synchronous set arithmetic over the [`PlaylistSets`] mapping:
//!
//! - [`sets`]: set construction, exact intersection and union sizes
//! - [`similarity`]: Jaccard similarity between two playlists
//! - [`regions`]: power-set decomposition into Venn regions
//! - [`matrix`]: the full pairwise similarity table and ranked top pairs
//! - [`heuristics`]: default-selection policies for seeding the diagram
//! - [`selection`]: joining a chosen region back to display names
//!
//! Every operation is a deterministic function of its inputs: nothing here
//! performs I/O, blocks, or mutates the mapping it is given, so the engine
//! can be called repeatedly from any number of call sites. Unknown playlist
//! ids resolve to empty sets rather than errors.
//!
//! ## Example
//!
//! ```rust
//! use playlist_overlap::core::{Playlist, PlaylistId, PlaylistSets};
//! use playlist_overlap::engine::{matrix, regions};
//!
//! let playlists = vec![
//!     Playlist::new(PlaylistId::new("p0"), "Road Trip", "alice", 3),
//!     Playlist::new(PlaylistId::new("p1"), "Focus", "bob", 3),
//! ];
//! let sets = PlaylistSets::new(
//!     [
//!         (PlaylistId::new("p0"), ["1:1", "2:1", "3:1"].map(String::from).into()),
//!         (PlaylistId::new("p1"), ["2:1", "3:1", "4:2"].map(String::from).into()),
//!     ]
//!     .into_iter()
//!     .collect(),
//! );
//!
//! let table = matrix::build(&playlists, &sets);
//! assert_eq!(table.cells[0][1].size, 2);
//!
//! let ids: Vec<PlaylistId> = playlists.iter().map(|p| p.id.clone()).collect();
//! assert_eq!(regions::decompose(&ids, &sets).len(), 3);
//! ```

pub mod heuristics;
pub mod matrix;
pub mod regions;
pub mod selection;
pub mod sets;
pub mod similarity;

pub use matrix::{MatrixCell, PairSimilarity, SimilarityMatrix};
pub use regions::Region;
pub use selection::Selection;
