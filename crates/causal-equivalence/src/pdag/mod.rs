//! Partially directed acyclic graphs: directed arcs plus undirected edges over
//! one node set, with cached adjacency views kept in sync by every mutator.

pub mod container;
pub mod mutators;

pub use container::Pdag;
