//! Interventional CPDAG: the equivalence class left after interventions.

use std::collections::BTreeSet;

use causal_core::tracing_setup::events;
use causal_core::{intervention_span, Dag, EquivalenceError, EquivalenceResult, GraphError, Node};

use crate::cpdag::{self, meek};
use crate::pdag::Pdag;

/// Refine the CPDAG of `dag` with single-node interventions on each of
/// `targets`. An undirected edge becomes directed (as in `dag`) when at least
/// one endpoint is a target; Meek closure then propagates.
///
/// `cpdag` may be passed to skip recomputing it; it must describe `dag`.
pub fn interventional_cpdag(
    dag: &Dag,
    targets: &BTreeSet<Node>,
    cpdag: Option<&Pdag>,
) -> EquivalenceResult<Pdag> {
    let family: Vec<BTreeSet<Node>> = targets.iter().map(|&t| BTreeSet::from([t])).collect();
    interventional_cpdag_family(dag, &family, cpdag)
}

/// Refine the CPDAG of `dag` with a family of interventions, each a set of
/// nodes intervened on together. An edge is identified when some set
/// contains exactly one of its endpoints.
pub fn interventional_cpdag_family(
    dag: &Dag,
    family: &[BTreeSet<Node>],
    cpdag: Option<&Pdag>,
) -> EquivalenceResult<Pdag> {
    for &node in family.iter().flatten() {
        if !dag.contains_node(node) {
            return Err(GraphError::UnknownNode { node }.into());
        }
    }
    let _span = intervention_span!(family).entered();

    let mut refined = match cpdag {
        Some(given) => {
            check_describes(dag, given)?;
            given.clone()
        }
        None => cpdag::build(dag)?,
    };

    let identifiable: Vec<_> = refined
        .edges()
        .iter()
        .copied()
        .filter(|&(a, b)| family.iter().any(|set| set.contains(&a) != set.contains(&b)))
        .collect();
    for &(a, b) in &identifiable {
        if dag.has_arc(a, b) {
            refined.orient(a, b);
        } else {
            refined.orient(b, a);
        }
    }
    let before = refined.num_edges();
    meek::close(&mut refined);

    events::interventional_cpdag_built(
        family.len(),
        identifiable.len() + before - refined.num_edges(),
        refined.num_edges(),
    );
    Ok(refined)
}

fn check_describes(dag: &Dag, pdag: &Pdag) -> EquivalenceResult<()> {
    if pdag.nodes() != &dag.nodes() {
        return Err(EquivalenceError::SkeletonMismatch {
            details: format!("nodes {:?} vs {:?}", pdag.nodes(), dag.nodes()),
        });
    }
    let expected = dag.skeleton();
    let actual = pdag.skeleton();
    if actual != expected {
        let missing: Vec<_> = expected.difference(&actual).collect();
        let extra: Vec<_> = actual.difference(&expected).collect();
        return Err(EquivalenceError::SkeletonMismatch {
            details: format!("missing {missing:?}, extra {extra:?}"),
        });
    }
    if let Some(&(from, to)) = pdag.arcs().iter().find(|&&(f, t)| !dag.has_arc(f, t)) {
        return Err(EquivalenceError::SkeletonMismatch {
            details: format!("arc {from} -> {to} is reversed in the DAG"),
        });
    }
    Ok(())
}
