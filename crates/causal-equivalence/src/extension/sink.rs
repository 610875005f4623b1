//! Dor–Tarsi sink candidates and elimination.

use std::collections::{BTreeSet, VecDeque};

use causal_core::{Arc, Node};

use crate::pdag::Pdag;

/// `x` may be made a sink of the remaining graph: it has no children, and
/// every undirected neighbour of `x` is adjacent to every other node adjacent
/// to `x` (so directing all of them into `x` adds no v-structure).
pub fn is_sink_candidate(work: &Pdag, x: Node) -> bool {
    if !work.children_of(x).is_empty() {
        return false;
    }
    let adjacent = work.neighbors_of(x);
    work.undirected_neighbors_of(x).iter().all(|&y| {
        adjacent
            .iter()
            .all(|&z| z == y || work.is_adjacent(y, z))
    })
}

/// `x` has neither children nor undirected neighbours. Removing it orients
/// nothing, and removal order among such nodes never matters.
pub fn is_free_sink(work: &Pdag, x: Node) -> bool {
    work.children_of(x).is_empty() && work.undirected_neighbors_of(x).is_empty()
}

/// Remove free sinks until none remain, including parents that become free
/// once their children are gone. Returns how many nodes were removed.
pub fn strip_free_sinks(work: &mut Pdag) -> usize {
    let mut queue: VecDeque<Node> = work
        .nodes()
        .iter()
        .copied()
        .filter(|&x| is_free_sink(work, x))
        .collect();
    let mut stripped = 0;
    while let Some(x) = queue.pop_front() {
        if !work.contains_node(x) {
            continue;
        }
        let parents: Vec<Node> = work.parents_of(x).iter().copied().collect();
        work.delete_node(x);
        stripped += 1;
        queue.extend(parents.into_iter().filter(|&p| is_free_sink(work, p)));
    }
    stripped
}

/// Sink candidates that are endpoints of an undirected edge, ascending.
/// These are the only eliminations that orient anything.
pub fn sink_candidates(work: &Pdag) -> Vec<Node> {
    work.nodes()
        .iter()
        .copied()
        .filter(|&x| !work.undirected_neighbors_of(x).is_empty() && is_sink_candidate(work, x))
        .collect()
}

/// Direct every remaining undirected edge at `x` into `x`, record those arcs,
/// and drop `x` from the remaining graph.
pub fn eliminate(work: &mut Pdag, x: Node, oriented: &mut BTreeSet<Arc>) {
    for &y in work.undirected_neighbors_of(x) {
        oriented.insert((y, x));
    }
    work.delete_node(x);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_middle_is_not_a_candidate() {
        let work = Pdag::new([], [], [(1, 2), (2, 3)]).unwrap();
        assert_eq!(sink_candidates(&work), vec![1, 3]);
    }

    #[test]
    fn nodes_with_children_are_not_candidates() {
        let work = Pdag::new([], [(1, 2)], [(2, 3)]).unwrap();
        assert!(!is_sink_candidate(&work, 1));
        // 2 would get 3 -> 2 <- 1 with 1, 3 non-adjacent.
        assert!(!is_sink_candidate(&work, 2));
        assert!(is_sink_candidate(&work, 3));
    }

    #[test]
    fn free_nodes_are_never_branch_candidates() {
        let work = Pdag::new([9], [(4, 5)], [(1, 2)]).unwrap();
        assert_eq!(sink_candidates(&work), vec![1, 2]);
    }

    #[test]
    fn stripping_cascades_through_directed_chains() {
        // 3 -> 4 -> 5 unwinds completely; 1 - 2 stays; 6 -> 1 keeps 6.
        let mut work = Pdag::new([], [(3, 4), (4, 5), (6, 1)], [(1, 2)]).unwrap();
        assert_eq!(strip_free_sinks(&mut work), 3);
        assert_eq!(work.nodes(), &BTreeSet::from([1, 2, 6]));
    }

    #[test]
    fn stripping_leaves_directed_cycles() {
        let mut work = Pdag::new([], [(1, 2), (2, 3), (3, 1)], []).unwrap();
        assert_eq!(strip_free_sinks(&mut work), 0);
        assert_eq!(work.num_nodes(), 3);
    }

    #[test]
    fn elimination_orients_into_the_sink() {
        let mut work = Pdag::new([], [], [(1, 2), (1, 3), (2, 3)]).unwrap();
        let mut oriented = BTreeSet::new();
        eliminate(&mut work, 1, &mut oriented);
        assert_eq!(oriented, BTreeSet::from([(2, 1), (3, 1)]));
        assert_eq!(work.edges(), &BTreeSet::from([(2, 3)]));
        assert!(!work.contains_node(1));
    }
}
