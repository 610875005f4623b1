//! Equivalence-class queries as methods on [`Dag`].

use std::collections::BTreeSet;

use causal_core::config::{ExtensionConfig, InterventionConfig};
use causal_core::{Arc, Dag, EquivalenceResult, GraphError, Node, Pair};

use crate::cpdag;
use crate::intervention;
use crate::pdag::Pdag;

/// Markov-equivalence operations for a DAG.
pub trait MarkovEquivalence {
    /// CPDAG of the DAG's equivalence class.
    fn cpdag(&self) -> Result<Pdag, GraphError>;

    /// Interventional CPDAG for single-node interventions on `targets`.
    /// A precomputed `cpdag` of this DAG is reused instead of rebuilt.
    fn interventional_cpdag(
        &self,
        targets: &BTreeSet<Node>,
        cpdag: Option<&Pdag>,
    ) -> EquivalenceResult<Pdag>;

    /// Node whose intervention leaves the fewest undirected edges (default
    /// policy). `None` when the DAG is already identified.
    fn optimal_intervention(&self) -> EquivalenceResult<Option<Node>>;

    /// Arcs directed in every member of the class.
    fn compelled_arcs(&self) -> Result<BTreeSet<Arc>, GraphError>;

    /// Adjacencies whose direction varies across the class.
    fn reversible_arcs(&self) -> Result<BTreeSet<Pair>, GraphError>;
}

impl MarkovEquivalence for Dag {
    fn cpdag(&self) -> Result<Pdag, GraphError> {
        cpdag::build(self)
    }

    fn interventional_cpdag(
        &self,
        targets: &BTreeSet<Node>,
        cpdag: Option<&Pdag>,
    ) -> EquivalenceResult<Pdag> {
        intervention::interventional_cpdag(self, targets, cpdag)
    }

    fn optimal_intervention(&self) -> EquivalenceResult<Option<Node>> {
        let cpdag = cpdag::build(self)?;
        let plan = intervention::select(
            self,
            &cpdag,
            &InterventionConfig::default(),
            &ExtensionConfig::default(),
        )?;
        Ok(plan.map(|p| p.node))
    }

    fn compelled_arcs(&self) -> Result<BTreeSet<Arc>, GraphError> {
        Ok(cpdag::build(self)?.arcs().clone())
    }

    fn reversible_arcs(&self) -> Result<BTreeSet<Pair>, GraphError> {
        Ok(cpdag::build(self)?.edges().clone())
    }
}
