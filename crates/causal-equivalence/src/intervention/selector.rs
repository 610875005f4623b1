//! Choosing which node to intervene on.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use causal_core::config::{ExtensionConfig, InterventionConfig};
use causal_core::tracing_setup::events;
use causal_core::{selection_span, Dag, EquivalenceResult, Node, SelectionPolicy};

use super::refiner::interventional_cpdag;
use crate::pdag::Pdag;

/// The chosen intervention and what it buys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionPlan {
    pub node: Node,
    /// Undirected edges left after intervening on `node` in the true DAG.
    pub remaining_edges: usize,
    /// Policy score. Lower is better.
    pub score: f64,
    /// Interventional CPDAG obtained from the true DAG.
    pub icpdag: Pdag,
}

/// Nodes incident to at least one undirected edge, ascending.
pub fn candidates(cpdag: &Pdag) -> Vec<Node> {
    cpdag
        .undirected_neighbors()
        .iter()
        .filter(|(_, nbrs)| !nbrs.is_empty())
        .map(|(&node, _)| node)
        .collect()
}

/// Pick the single-node intervention minimising the remaining undirected
/// edges under `config.policy`. Ties go to the lowest node id. Returns
/// `None` when `cpdag` is already fully directed.
pub fn select(
    dag: &Dag,
    cpdag: &Pdag,
    config: &InterventionConfig,
    extension: &ExtensionConfig,
) -> EquivalenceResult<Option<InterventionPlan>> {
    select_with_targets(dag, cpdag, &BTreeSet::new(), config, extension)
}

/// Greedily pick up to `budget` interventions, each chosen given those before
/// it, stopping early once everything is oriented.
pub fn greedy_sequence(
    dag: &Dag,
    cpdag: &Pdag,
    budget: usize,
    config: &InterventionConfig,
    extension: &ExtensionConfig,
) -> EquivalenceResult<Vec<InterventionPlan>> {
    let mut plans = Vec::new();
    let mut targets = BTreeSet::new();
    let mut current = cpdag.clone();
    while plans.len() < budget {
        let Some(plan) = select_with_targets(dag, &current, &targets, config, extension)? else {
            break;
        };
        targets.insert(plan.node);
        current = plan.icpdag.clone();
        plans.push(plan);
    }
    Ok(plans)
}

/// `base` is the CPDAG refined by `prior` targets already applied.
fn select_with_targets(
    dag: &Dag,
    base: &Pdag,
    prior: &BTreeSet<Node>,
    config: &InterventionConfig,
    extension: &ExtensionConfig,
) -> EquivalenceResult<Option<InterventionPlan>> {
    let nodes = candidates(base);
    if nodes.is_empty() {
        return Ok(None);
    }
    let _span = selection_span!(config.policy, nodes.len()).entered();

    // Other members of the class, for policies that average over it.
    let class: Vec<Dag> = match config.policy {
        SelectionPolicy::Oracle => Vec::new(),
        SelectionPolicy::WorstCase | SelectionPolicy::Expected => base
            .all_dags_capped(extension.max_extensions, false)?
            .dags
            .into_iter()
            .collect(),
    };

    let evaluate = |node: Node| -> EquivalenceResult<InterventionPlan> {
        let targets = with_target(prior, node);
        let icpdag = interventional_cpdag(dag, &targets, Some(base))?;
        let remaining_edges = icpdag.num_edges();
        let score = match config.policy {
            SelectionPolicy::Oracle => remaining_edges as f64,
            SelectionPolicy::WorstCase => class_scores(&class, base, &targets)?
                .into_iter()
                .max()
                .unwrap_or(0) as f64,
            SelectionPolicy::Expected => {
                let scores = class_scores(&class, base, &targets)?;
                if scores.is_empty() {
                    0.0
                } else {
                    scores.iter().sum::<usize>() as f64 / scores.len() as f64
                }
            }
        };
        Ok(InterventionPlan {
            node,
            remaining_edges,
            score,
            icpdag,
        })
    };

    let plans: Vec<InterventionPlan> = if config.parallel {
        nodes.par_iter().map(|&n| evaluate(n)).collect::<EquivalenceResult<_>>()?
    } else {
        nodes.iter().map(|&n| evaluate(n)).collect::<EquivalenceResult<_>>()?
    };

    let best = plans.into_iter().min_by(|a, b| match a.score.total_cmp(&b.score) {
        Ordering::Equal => a.node.cmp(&b.node),
        other => other,
    });
    if let Some(plan) = &best {
        events::intervention_selected(
            plan.node,
            plan.score,
            plan.remaining_edges,
            config.policy.as_str(),
        );
    }
    Ok(best)
}

fn with_target(prior: &BTreeSet<Node>, node: Node) -> BTreeSet<Node> {
    let mut targets = prior.clone();
    targets.insert(node);
    targets
}

/// Remaining undirected edges for each class member under `targets`.
fn class_scores(class: &[Dag], base: &Pdag, targets: &BTreeSet<Node>) -> EquivalenceResult<Vec<usize>> {
    class
        .iter()
        .map(|member| interventional_cpdag(member, targets, Some(base)).map(|p| p.num_edges()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpdag;

    fn config(policy: SelectionPolicy, parallel: bool) -> InterventionConfig {
        InterventionConfig { policy, parallel }
    }

    fn pick(dag: &Dag, policy: SelectionPolicy) -> Option<InterventionPlan> {
        let cpdag = cpdag::build(dag).unwrap();
        select(dag, &cpdag, &config(policy, false), &ExtensionConfig::default()).unwrap()
    }

    #[test]
    fn oracle_picks_triangle_middle() {
        let dag = Dag::from_arcs([(1, 2), (1, 3), (2, 3)]);
        let plan = pick(&dag, SelectionPolicy::Oracle).unwrap();
        assert_eq!(plan.node, 2);
        assert_eq!(plan.remaining_edges, 0);
        assert!(plan.icpdag.is_directed());
    }

    #[test]
    fn class_policies_tie_on_triangle() {
        let dag = Dag::from_arcs([(1, 2), (1, 3), (2, 3)]);
        let worst = pick(&dag, SelectionPolicy::WorstCase).unwrap();
        assert_eq!(worst.node, 1);
        assert_eq!(worst.score, 1.0);
        let expected = pick(&dag, SelectionPolicy::Expected).unwrap();
        assert_eq!(expected.node, 1);
        assert!((expected.score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn fully_directed_cpdag_needs_nothing() {
        let dag = Dag::from_arcs([(1, 2), (3, 2)]);
        assert!(pick(&dag, SelectionPolicy::Oracle).is_none());
    }

    #[test]
    fn parallel_matches_sequential() {
        let dag = Dag::from_arcs([(1, 2), (2, 3), (3, 4), (1, 5), (5, 4)]);
        let cpdag = cpdag::build(&dag).unwrap();
        let ext = ExtensionConfig::default();
        for policy in SelectionPolicy::ALL {
            let seq = select(&dag, &cpdag, &config(policy, false), &ext).unwrap();
            let par = select(&dag, &cpdag, &config(policy, true), &ext).unwrap();
            assert_eq!(seq, par);
        }
    }

    #[test]
    fn greedy_sequence_orients_a_chain() {
        let dag = Dag::from_arcs([(1, 2), (2, 3), (3, 4), (4, 5)]);
        let cpdag = cpdag::build(&dag).unwrap();
        let plans = greedy_sequence(
            &dag,
            &cpdag,
            10,
            &config(SelectionPolicy::Oracle, false),
            &ExtensionConfig::default(),
        )
        .unwrap();
        assert_eq!(plans.len(), 1);
        assert!(plans[0].icpdag.is_directed());
    }

    #[test]
    fn greedy_sequence_respects_budget() {
        let dag = Dag::from_arcs([(1, 2), (1, 3), (2, 3)]);
        let cpdag = cpdag::build(&dag).unwrap();
        let plans = greedy_sequence(
            &dag,
            &cpdag,
            0,
            &config(SelectionPolicy::Oracle, false),
            &ExtensionConfig::default(),
        )
        .unwrap();
        assert!(plans.is_empty());
    }
}
