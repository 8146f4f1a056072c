//! The comparison service: joins fetched snapshots into a result and runs
//! the engine over it.
//!
//! [`compare::build_comparison`] materializes the immutable
//! [`ComparisonResult`](crate::core::ComparisonResult);
//! [`analysis::analyze`] derives everything else (matrix, regions,
//! suggestions) from it. The split keeps retrieval, joining, and
//! computation independently testable.

pub mod analysis;
pub mod compare;

pub use analysis::{analyze, selection_tracks, OverlapAnalysis, SubsetSuggestions};
pub use compare::build_comparison;
