//! `EquivalenceEngine`: config-bound entry point for every operation.

use std::collections::BTreeSet;

use causal_core::{CausalConfig, Dag, EquivalenceResult, Node};

use crate::cpdag;
use crate::intervention::{self, InterventionPlan};
use crate::pdag::Pdag;

/// Runs equivalence-class operations under one [`CausalConfig`].
#[derive(Debug, Clone, Default)]
pub struct EquivalenceEngine {
    config: CausalConfig,
}

impl EquivalenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CausalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CausalConfig {
        &self.config
    }

    pub fn cpdag(&self, dag: &Dag) -> EquivalenceResult<Pdag> {
        Ok(cpdag::build(dag)?)
    }

    pub fn to_dag(&self, pdag: &Pdag) -> EquivalenceResult<Dag> {
        Ok(pdag.to_dag()?)
    }

    /// All consistent extensions, honouring `extension.max_extensions`.
    pub fn all_dags(&self, pdag: &Pdag, verbose: bool) -> EquivalenceResult<BTreeSet<Dag>> {
        let run = pdag.all_dags_capped(self.config.extension.max_extensions, verbose)?;
        Ok(run.dags)
    }

    pub fn interventional_cpdag(
        &self,
        dag: &Dag,
        targets: &BTreeSet<Node>,
        cpdag: Option<&Pdag>,
    ) -> EquivalenceResult<Pdag> {
        intervention::interventional_cpdag(dag, targets, cpdag)
    }

    pub fn interventional_cpdag_family(
        &self,
        dag: &Dag,
        family: &[BTreeSet<Node>],
        cpdag: Option<&Pdag>,
    ) -> EquivalenceResult<Pdag> {
        intervention::interventional_cpdag_family(dag, family, cpdag)
    }

    /// Best single intervention for `dag`, computing its CPDAG when not given.
    pub fn select_intervention(
        &self,
        dag: &Dag,
        cpdag: Option<&Pdag>,
    ) -> EquivalenceResult<Option<InterventionPlan>> {
        let owned;
        let cpdag = match cpdag {
            Some(given) => given,
            None => {
                owned = cpdag::build(dag)?;
                &owned
            }
        };
        intervention::select(
            dag,
            cpdag,
            &self.config.intervention,
            &self.config.extension,
        )
    }

    pub fn optimal_intervention(&self, dag: &Dag, cpdag: Option<&Pdag>) -> EquivalenceResult<Option<Node>> {
        Ok(self.select_intervention(dag, cpdag)?.map(|plan| plan.node))
    }

    pub fn greedy_sequence(&self, dag: &Dag, budget: usize) -> EquivalenceResult<Vec<InterventionPlan>> {
        let cpdag = cpdag::build(dag)?;
        intervention::greedy_sequence(
            dag,
            &cpdag,
            budget,
            &self.config.intervention,
            &self.config.extension,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_caps_enumeration_from_config() {
        let config = CausalConfig::from_toml("[extension]\nmax_extensions = 2\n").unwrap();
        let engine = EquivalenceEngine::with_config(config);
        let cpdag = engine.cpdag(&Dag::from_arcs([(1, 2), (1, 3), (2, 3)])).unwrap();
        assert_eq!(engine.all_dags(&cpdag, false).unwrap().len(), 2);
    }

    #[test]
    fn engine_uses_configured_policy() {
        let dag = Dag::from_arcs([(1, 2), (1, 3), (2, 3)]);
        let oracle = EquivalenceEngine::new();
        assert_eq!(oracle.optimal_intervention(&dag, None).unwrap(), Some(2));

        let config = CausalConfig::from_toml("[intervention]\npolicy = \"worst_case\"\n").unwrap();
        let worst = EquivalenceEngine::with_config(config);
        assert_eq!(worst.optimal_intervention(&dag, None).unwrap(), Some(1));
    }
}
