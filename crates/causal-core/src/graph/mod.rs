//! Directed acyclic graph container and structural queries.

pub mod amat;
pub mod dag;
pub mod dag_enforcement;
pub mod structure;

pub use dag::{Arc, Dag};
