//! Consistent-extension search over an explicit work stack.
//!
//! A state is the remaining graph plus the arcs fixed so far. Nodes without
//! children or undirected edges are stripped without branching; branching is
//! over every sink candidate on an undirected edge. Identical states reached
//! through different elimination orders are explored once, so every finished
//! state is a distinct extension.

use std::collections::{BTreeSet, HashSet};

use causal_core::tracing_setup::events;
use causal_core::{Arc, Dag, Node, PdagError};

use super::sink;
use crate::pdag::Pdag;

/// Outcome of an enumeration run.
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    /// Distinct consistent extensions, ordered by arc set.
    pub dags: BTreeSet<Dag>,
    /// Number of distinct search states expanded.
    pub states: usize,
    /// True if `limit` stopped the search with at least one extension unreported.
    pub truncated: bool,
}

/// Produce one consistent extension, always eliminating the lowest-id
/// candidate. By Dor–Tarsi any candidate choice succeeds iff an extension
/// exists, so a greedy pass suffices.
pub fn first_extension(pdag: &Pdag) -> Result<Dag, PdagError> {
    let mut work = pdag.clone();
    let mut oriented: BTreeSet<Arc> = pdag.arcs().clone();
    loop {
        sink::strip_free_sinks(&mut work);
        if work.nodes().is_empty() {
            break;
        }
        let Some(&sink) = sink::sink_candidates(&work).first() else {
            return Err(stuck(&work));
        };
        sink::eliminate(&mut work, sink, &mut oriented);
    }
    Ok(Dag::with_nodes(pdag.nodes().iter().copied(), oriented))
}

/// Enumerate every consistent extension, up to `limit` distinct DAGs.
pub fn all_extensions(
    pdag: &Pdag,
    limit: Option<usize>,
    verbose: bool,
) -> Result<Enumeration, PdagError> {
    let mut result = Enumeration::default();
    let mut seen: HashSet<(BTreeSet<Node>, BTreeSet<Arc>)> = HashSet::new();
    let mut stack: Vec<(Pdag, BTreeSet<Arc>)> = vec![(pdag.clone(), pdag.arcs().clone())];

    while let Some((mut work, oriented)) = stack.pop() {
        sink::strip_free_sinks(&mut work);
        if !seen.insert((work.nodes().clone(), oriented.clone())) {
            continue;
        }
        result.states += 1;

        if work.nodes().is_empty() {
            // A finished state is never revisited, so this extension is new.
            // Reaching one past the cap is what makes the run truncated.
            if limit.is_some_and(|max| result.dags.len() >= max) {
                result.truncated = true;
                break;
            }
            let dag = Dag::with_nodes(pdag.nodes().iter().copied(), oriented);
            let arcs: Vec<Arc> = dag.arcs().into_iter().collect();
            if result.dags.insert(dag) {
                events::extension_found(result.dags.len(), &arcs, verbose);
            }
            continue;
        }

        let candidates = sink::sink_candidates(&work);
        if candidates.is_empty() {
            return Err(stuck(&work));
        }
        // Reverse so the lowest id is popped first.
        for &x in candidates.iter().rev() {
            let mut next = work.clone();
            let mut next_oriented = oriented.clone();
            sink::eliminate(&mut next, x, &mut next_oriented);
            stack.push((next, next_oriented));
        }
    }

    events::extensions_enumerated(result.dags.len(), result.states, result.truncated);
    Ok(result)
}

fn stuck(work: &Pdag) -> PdagError {
    PdagError::Inconsistent {
        remaining: work.nodes().iter().copied().collect(),
    }
}
