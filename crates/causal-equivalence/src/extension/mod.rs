//! Consistent extensions of a PDAG (Dor–Tarsi).
//!
//! A consistent extension orients every undirected edge so that the result
//! is acyclic, keeps every existing arc, and has exactly the v-structures of
//! the PDAG.

pub mod enumerate;
pub mod sink;

use std::collections::BTreeSet;

use causal_core::{extension_span, Dag, PdagError};

use crate::pdag::Pdag;

pub use enumerate::Enumeration;

impl Pdag {
    /// One consistent extension, eliminating the lowest-id sink candidate at
    /// each step. Deterministic for a given PDAG.
    pub fn to_dag(&self) -> Result<Dag, PdagError> {
        let _span = extension_span!("single", self.num_edges()).entered();
        enumerate::first_extension(self)
    }

    /// Every consistent extension. For a CPDAG this is its whole Markov
    /// equivalence class. `verbose` logs each extension at `info`.
    pub fn all_dags(&self, verbose: bool) -> Result<BTreeSet<Dag>, PdagError> {
        self.all_dags_capped(None, verbose).map(|run| run.dags)
    }

    /// Like [`Pdag::all_dags`], stopping once `limit` extensions are found.
    pub fn all_dags_capped(
        &self,
        limit: Option<usize>,
        verbose: bool,
    ) -> Result<Enumeration, PdagError> {
        let _span = extension_span!("all", self.num_edges()).entered();
        enumerate::all_extensions(self, limit, verbose)
    }

    /// Size of the set of consistent extensions.
    pub fn count_dags(&self) -> Result<usize, PdagError> {
        self.all_dags(false).map(|dags| dags.len())
    }
}
