//! The multigraph container — the core data structure.

pub mod direction;
pub mod multigraph;

pub use direction::Direction;
pub use multigraph::Graph;
