//! # causal-equivalence
//!
//! Markov equivalence classes of causal DAGs: the PDAG container, CPDAG
//! construction (v-structures plus Meek rules R1–R4), consistent extensions,
//! interventional refinement, and intervention selection.

pub mod cpdag;
pub mod engine;
pub mod extension;
pub mod intervention;
pub mod markov;
pub mod pdag;

pub use cpdag::{MeekRule, MeekStats};
pub use engine::EquivalenceEngine;
pub use extension::Enumeration;
pub use intervention::{
    greedy_sequence, interventional_cpdag, interventional_cpdag_family, select, InterventionPlan,
};
pub use markov::MarkovEquivalence;
pub use pdag::Pdag;
