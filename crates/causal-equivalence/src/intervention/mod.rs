//! Interventional refinement and intervention selection.

pub mod refiner;
pub mod selector;

pub use refiner::{interventional_cpdag, interventional_cpdag_family};
pub use selector::{greedy_sequence, select, InterventionPlan};
