//! `Dag`: a value-like directed acyclic graph over [`Node`] ids, backed by
//! `petgraph::graphmap::DiGraphMap`.
//!
//! Acyclicity is the caller's responsibility for [`Dag::add_arc`] and the
//! constructors; [`Dag::try_add_arc`] enforces it. Violations surface through
//! [`Dag::topological_sort`].

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use petgraph::graphmap::DiGraphMap;
use petgraph::visit::{Dfs, Reversed};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use super::dag_enforcement;
use crate::errors::GraphError;
use crate::Node;

/// A directed arc `(from, to)`.
pub type Arc = (Node, Node);

/// The underlying directed graph type.
pub type DagGraph = DiGraphMap<Node, ()>;

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(from = "DagRepr", into = "DagRepr")]
pub struct Dag {
    graph: DagGraph,
}

/// Serialized form: `{ "nodes": [...], "arcs": [[u, v], ...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DagRepr {
    #[serde(default)]
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
}

impl Dag {
    /// Create an empty DAG.
    pub fn new() -> Self {
        Self {
            graph: DiGraphMap::new(),
        }
    }

    /// Create a DAG whose node set is exactly the endpoints of `arcs`.
    pub fn from_arcs<I>(arcs: I) -> Self
    where
        I: IntoIterator<Item = Arc>,
    {
        Self::with_nodes(std::iter::empty(), arcs)
    }

    /// Create a DAG from an explicit node set plus arcs. Arc endpoints missing
    /// from `nodes` are added.
    pub fn with_nodes<N, I>(nodes: N, arcs: I) -> Self
    where
        N: IntoIterator<Item = Node>,
        I: IntoIterator<Item = Arc>,
    {
        let mut dag = Self::new();
        for node in nodes {
            dag.add_node(node);
        }
        for (from, to) in arcs {
            dag.add_arc(from, to);
        }
        dag
    }

    /// Add a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.graph.contains_node(node) {
            return false;
        }
        self.graph.add_node(node);
        true
    }

    /// Add an arc without checking acyclicity. Missing endpoints are added.
    pub fn add_arc(&mut self, from: Node, to: Node) {
        self.graph.add_edge(from, to, ());
    }

    /// Add an arc, rejecting self-loops and arcs that would close a cycle.
    /// The DAG is unchanged on error.
    pub fn try_add_arc(&mut self, from: Node, to: Node) -> Result<(), GraphError> {
        if from == to {
            return Err(GraphError::SelfLoop { node: from });
        }
        if dag_enforcement::would_create_cycle(&self.graph, from, to) {
            // The path to ... from closes into a cycle through the new arc.
            let path = dag_enforcement::path_between(&self.graph, to, from).unwrap_or_default();
            return Err(GraphError::Cycle { path });
        }
        self.add_arc(from, to);
        Ok(())
    }

    /// Remove an arc.
    pub fn remove_arc(&mut self, from: Node, to: Node) -> Result<(), GraphError> {
        self.graph
            .remove_edge(from, to)
            .map(|_| ())
            .ok_or(GraphError::ArcNotFound { from, to })
    }

    /// Remove a node and every arc touching it.
    pub fn remove_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.graph.remove_node(node) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode { node })
        }
    }

    pub fn nodes(&self) -> BTreeSet<Node> {
        self.graph.nodes().collect()
    }

    pub fn arcs(&self) -> BTreeSet<Arc> {
        self.graph.all_edges().map(|(a, b, _)| (a, b)).collect()
    }

    pub fn num_nodes(&self) -> usize {
        self.graph.node_count()
    }

    pub fn num_arcs(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, node: Node) -> bool {
        self.graph.contains_node(node)
    }

    pub fn has_arc(&self, from: Node, to: Node) -> bool {
        self.graph.contains_edge(from, to)
    }

    /// True if an arc joins `a` and `b` in either direction.
    pub fn is_adjacent(&self, a: Node, b: Node) -> bool {
        self.has_arc(a, b) || self.has_arc(b, a)
    }

    /// Parents of `node`; empty for unknown nodes.
    pub fn parents_of(&self, node: Node) -> BTreeSet<Node> {
        self.directed_neighbors(node, Direction::Incoming)
    }

    /// Children of `node`; empty for unknown nodes.
    pub fn children_of(&self, node: Node) -> BTreeSet<Node> {
        self.directed_neighbors(node, Direction::Outgoing)
    }

    /// Parents and children of `node`.
    pub fn neighbors_of(&self, node: Node) -> BTreeSet<Node> {
        let mut out = self.parents_of(node);
        out.extend(self.children_of(node));
        out
    }

    /// Every node with a directed path into `node` (excluding `node`).
    pub fn ancestors_of(&self, node: Node) -> BTreeSet<Node> {
        if !self.contains_node(node) {
            return BTreeSet::new();
        }
        let reversed = Reversed(&self.graph);
        let mut dfs = Dfs::new(reversed, node);
        let mut out = BTreeSet::new();
        while let Some(n) = dfs.next(reversed) {
            if n != node {
                out.insert(n);
            }
        }
        out
    }

    /// Every node reachable from `node` (excluding `node`).
    pub fn descendants_of(&self, node: Node) -> BTreeSet<Node> {
        if !self.contains_node(node) {
            return BTreeSet::new();
        }
        let mut dfs = Dfs::new(&self.graph, node);
        let mut out = BTreeSet::new();
        while let Some(n) = dfs.next(&self.graph) {
            if n != node {
                out.insert(n);
            }
        }
        out
    }

    /// Nodes without parents.
    pub fn sources(&self) -> BTreeSet<Node> {
        self.graph
            .nodes()
            .filter(|&n| {
                self.graph
                    .neighbors_directed(n, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect()
    }

    /// Nodes without children.
    pub fn sinks(&self) -> BTreeSet<Node> {
        self.graph
            .nodes()
            .filter(|&n| {
                self.graph
                    .neighbors_directed(n, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .collect()
    }

    /// Linear extension of the arcs, ties broken by ascending node id.
    pub fn topological_sort(&self) -> Result<Vec<Node>, GraphError> {
        dag_enforcement::topological_sort(&self.graph)
    }

    pub fn is_acyclic(&self) -> bool {
        dag_enforcement::is_acyclic(&self.graph)
    }

    /// Every strongly connected component containing a cycle, each sorted.
    pub fn find_cycles(&self) -> Vec<Vec<Node>> {
        dag_enforcement::find_cycles(&self.graph)
    }

    /// Read-only access to the petgraph representation.
    pub fn graph(&self) -> &DagGraph {
        &self.graph
    }

    fn directed_neighbors(&self, node: Node, dir: Direction) -> BTreeSet<Node> {
        self.graph.neighbors_directed(node, dir).collect()
    }

    fn key(&self) -> (BTreeSet<Node>, BTreeSet<Arc>) {
        (self.nodes(), self.arcs())
    }
}

impl PartialEq for Dag {
    fn eq(&self, other: &Self) -> bool {
        self.num_nodes() == other.num_nodes()
            && self.num_arcs() == other.num_arcs()
            && self.key() == other.key()
    }
}

impl Eq for Dag {}

impl PartialOrd for Dag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dag {
    fn cmp(&self, other: &Self) -> Ordering {
        let (nodes_a, arcs_a) = self.key();
        let (nodes_b, arcs_b) = other.key();
        arcs_a.cmp(&arcs_b).then_with(|| nodes_a.cmp(&nodes_b))
    }
}

impl Hash for Dag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Debug for Dag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dag")
            .field("nodes", &self.nodes())
            .field("arcs", &self.arcs())
            .finish()
    }
}

impl fmt::Display for Dag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arcs: Vec<String> = self
            .arcs()
            .into_iter()
            .map(|(a, b)| format!("{a}->{b}"))
            .collect();
        write!(f, "[{}]", arcs.join(", "))
    }
}

impl From<DagRepr> for Dag {
    fn from(repr: DagRepr) -> Self {
        Dag::with_nodes(repr.nodes, repr.arcs)
    }
}

impl From<Dag> for DagRepr {
    fn from(dag: Dag) -> Self {
        DagRepr {
            nodes: dag.nodes().into_iter().collect(),
            arcs: dag.arcs().into_iter().collect(),
        }
    }
}
