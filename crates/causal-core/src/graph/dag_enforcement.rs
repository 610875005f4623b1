//! Acyclicity enforcement: reachability checks before arc insertion,
//! Tarjan's SCC for cycle reporting, and Kahn's ordering.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap, VecDeque};

use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::Direction;

use super::dag::DagGraph;
use crate::errors::GraphError;
use crate::Node;

/// Check whether adding an arc from `source` to `target` would create a cycle.
///
/// Returns `true` if a cycle would be created (arc should be rejected).
pub fn would_create_cycle(graph: &DagGraph, source: Node, target: Node) -> bool {
    // Self-loops are always cycles.
    if source == target {
        return true;
    }
    path_between(graph, target, source).is_some()
}

/// Shortest directed path `from -> ... -> to` (BFS), both endpoints included.
pub fn path_between(graph: &DagGraph, from: Node, to: Node) -> Option<Vec<Node>> {
    if !graph.contains_node(from) || !graph.contains_node(to) {
        return None;
    }
    let mut prev: HashMap<Node, Node> = HashMap::new();
    let mut queue = VecDeque::from([from]);
    while let Some(node) = queue.pop_front() {
        if node == to {
            let mut path = vec![to];
            let mut current = to;
            while let Some(&p) = prev.get(&current) {
                path.push(p);
                current = p;
            }
            path.reverse();
            return Some(path);
        }
        for next in graph.neighbors_directed(node, Direction::Outgoing) {
            if next != from && !prev.contains_key(&next) {
                prev.insert(next, node);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Validate the entire graph is a DAG (no cycles).
/// Returns every SCC that contains a cycle (including self-loops), each sorted.
pub fn find_cycles(graph: &DagGraph) -> Vec<Vec<Node>> {
    let mut cycles: Vec<Vec<Node>> = tarjan_scc(graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|mut scc| {
            scc.sort_unstable();
            scc
        })
        .collect();
    cycles.sort();
    cycles
}

pub fn is_acyclic(graph: &DagGraph) -> bool {
    !is_cyclic_directed(graph)
}

/// Kahn's algorithm with a min-heap so ties resolve to the lowest node id.
pub fn topological_sort(graph: &DagGraph) -> Result<Vec<Node>, GraphError> {
    let mut in_degree: BTreeMap<Node, usize> = graph
        .nodes()
        .map(|n| (n, graph.neighbors_directed(n, Direction::Incoming).count()))
        .collect();
    let mut ready: BinaryHeap<Reverse<Node>> = in_degree
        .iter()
        .filter(|(_, d)| **d == 0)
        .map(|(&n, _)| Reverse(n))
        .collect();

    let mut order = Vec::with_capacity(in_degree.len());
    while let Some(Reverse(node)) = ready.pop() {
        order.push(node);
        for child in graph.neighbors_directed(node, Direction::Outgoing) {
            if let Some(d) = in_degree.get_mut(&child) {
                *d -= 1;
                if *d == 0 {
                    ready.push(Reverse(child));
                }
            }
        }
    }

    if order.len() == in_degree.len() {
        Ok(order)
    } else {
        Err(GraphError::Cycle {
            path: first_cycle(graph),
        })
    }
}

/// One concrete cycle `v0 -> v1 -> ... -> vk (-> v0)` starting at the lowest
/// node of the first cyclic SCC.
fn first_cycle(graph: &DagGraph) -> Vec<Node> {
    let Some(scc) = find_cycles(graph).into_iter().next() else {
        return Vec::new();
    };
    let start = scc[0];
    if graph.contains_edge(start, start) {
        return vec![start];
    }
    graph
        .neighbors_directed(start, Direction::Incoming)
        .filter(|p| scc.binary_search(p).is_ok())
        .filter_map(|p| path_between(graph, start, p))
        .min_by_key(|path| path.len())
        .unwrap_or(scc)
}
