//! All data types for the relgraph library.

pub mod error;
pub mod relation;

pub use error::{RelError, RelResult};
pub use relation::Relation;

/// Identifier for a vertex. Any value is valid, including negatives and
/// zero; a vertex exists in a graph only by virtue of having at least one
/// relationship record.
pub type VertexId = i64;

/// The key addressed when none is given. Parallel relationships between
/// the same vertex pair are distinguished by key; the unkeyed call sites
/// all use this one.
pub const DEFAULT_KEY: &str = "";

/// Absolute tolerance used when a written value is compared against the
/// graph's `no_relationship` sentinel. A value within this distance of the
/// sentinel deletes the relationship instead of storing it.
pub const WEIGHT_TOLERANCE: f64 = 1e-7;
