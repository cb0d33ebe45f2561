//! relgraph — in-memory weighted multigraph relationship container.
//!
//! Records weighted, multi-keyed, directed or undirected relationships
//! between integer-identified vertices, without storing vertex payloads.
//! Directed and undirected semantics share one storage model through a
//! mirror/shadow convention; see [`Graph`] for the details and the
//! sign-flip contract of [`Graph::get`].

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Direction, Graph};
pub use types::{RelError, RelResult, Relation, VertexId, DEFAULT_KEY, WEIGHT_TOLERANCE};
