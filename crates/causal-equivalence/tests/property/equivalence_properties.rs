//! Property tests over random DAGs of up to seven nodes.

use std::collections::BTreeSet;

use proptest::prelude::*;

use causal_core::config::{ExtensionConfig, InterventionConfig};
use causal_core::{Dag, SelectionPolicy};
use causal_equivalence::{cpdag, interventional_cpdag, select, MarkovEquivalence};

/// Random DAG: arcs only go from lower to higher rank, and ranks are a
/// shuffled labelling so node ids carry no ordering hint.
fn dag_strategy(max_nodes: usize) -> impl Strategy<Value = Dag> {
    (1..=max_nodes).prop_flat_map(|n| {
        let pairs = n * (n - 1) / 2;
        (
            Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
            prop::collection::vec(any::<bool>(), pairs),
        )
            .prop_map(move |(labels, present)| {
                let mut arcs = Vec::new();
                let mut k = 0;
                for i in 0..n {
                    for j in (i + 1)..n {
                        if present[k] {
                            arcs.push((labels[i], labels[j]));
                        }
                        k += 1;
                    }
                }
                Dag::with_nodes(labels, arcs)
            })
    })
}

proptest! {
    #[test]
    fn cpdag_keeps_the_skeleton(dag in dag_strategy(7)) {
        let cpdag = dag.cpdag().unwrap();
        prop_assert_eq!(cpdag.skeleton(), dag.skeleton());
        prop_assert_eq!(cpdag.nodes(), &dag.nodes());
    }

    #[test]
    fn cpdag_arcs_come_from_the_dag(dag in dag_strategy(7)) {
        let cpdag = dag.cpdag().unwrap();
        for &(from, to) in cpdag.arcs() {
            prop_assert!(dag.has_arc(from, to), "arc {} -> {} not in dag", from, to);
        }
    }

    #[test]
    fn cpdag_is_idempotent(dag in dag_strategy(7)) {
        prop_assert_eq!(dag.cpdag().unwrap(), dag.cpdag().unwrap());
    }

    #[test]
    fn to_dag_is_an_equivalent_dag(dag in dag_strategy(7)) {
        let extension = dag.cpdag().unwrap().to_dag().unwrap();
        prop_assert!(extension.is_acyclic());
        prop_assert!(extension.is_markov_equivalent(&dag));
    }

    #[test]
    fn refining_with_no_targets_is_the_cpdag(dag in dag_strategy(7)) {
        let refined = interventional_cpdag(&dag, &BTreeSet::new(), None).unwrap();
        prop_assert_eq!(refined, cpdag::build(&dag).unwrap());
    }

    #[test]
    fn refining_only_removes_edges(
        dag in dag_strategy(7),
        picks in prop::collection::vec(any::<bool>(), 7)
    ) {
        let targets: BTreeSet<usize> = dag
            .nodes()
            .into_iter()
            .zip(picks)
            .filter_map(|(node, picked)| picked.then_some(node))
            .collect();
        let cpdag = cpdag::build(&dag).unwrap();
        let refined = interventional_cpdag(&dag, &targets, Some(&cpdag)).unwrap();

        prop_assert_eq!(refined.nodes(), &dag.nodes());
        prop_assert!(refined.edges().is_subset(cpdag.edges()));
        prop_assert!(cpdag.arcs().is_subset(refined.arcs()));
        for &(from, to) in refined.arcs() {
            prop_assert!(dag.has_arc(from, to), "arc {} -> {} not in dag", from, to);
        }
        // Every edge with a target endpoint is resolved.
        for &(a, b) in refined.edges() {
            prop_assert!(!targets.contains(&a) && !targets.contains(&b));
        }
    }

    #[test]
    fn refining_with_every_target_is_the_dag(dag in dag_strategy(7)) {
        let refined = interventional_cpdag(&dag, &dag.nodes(), None).unwrap();
        prop_assert!(refined.is_directed());
        prop_assert_eq!(refined.into_dag().unwrap(), dag);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn class_contains_the_dag_and_shares_compelled_arcs(dag in dag_strategy(6)) {
        let cpdag = dag.cpdag().unwrap();
        let members = cpdag.all_dags(false).unwrap();
        prop_assert!(members.contains(&dag));
        for member in &members {
            prop_assert_eq!(member.skeleton(), cpdag.skeleton());
            prop_assert!(cpdag.arcs().iter().all(|&(f, t)| member.has_arc(f, t)));
            prop_assert!(member.is_markov_equivalent(&dag));
        }
    }

    #[test]
    fn every_undirected_edge_is_reversible(dag in dag_strategy(6)) {
        let cpdag = dag.cpdag().unwrap();
        let members = cpdag.all_dags(false).unwrap();
        for &(a, b) in cpdag.edges() {
            prop_assert!(members.iter().any(|m| m.has_arc(a, b)), "{} -> {} never seen", a, b);
            prop_assert!(members.iter().any(|m| m.has_arc(b, a)), "{} -> {} never seen", b, a);
        }
    }

    #[test]
    fn selection_is_some_iff_edges_remain(dag in dag_strategy(6)) {
        let cpdag = dag.cpdag().unwrap();
        let ext = ExtensionConfig::default();
        for policy in SelectionPolicy::ALL {
            let sequential = InterventionConfig { policy, parallel: false };
            let parallel = InterventionConfig { policy, parallel: true };
            let plan = select(&dag, &cpdag, &sequential, &ext).unwrap();
            prop_assert_eq!(plan.is_some(), cpdag.num_edges() > 0);
            prop_assert_eq!(plan, select(&dag, &cpdag, &parallel, &ext).unwrap());
        }
    }
}
