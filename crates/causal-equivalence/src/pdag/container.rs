//! `Pdag` storage, construction, and read-only views.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use causal_core::{pair, Arc, Dag, Node, Pair, PdagError};
use serde::{Deserialize, Serialize};

static EMPTY: BTreeSet<Node> = BTreeSet::new();

/// A mixed graph of arcs and undirected edges.
///
/// Invariants: no pair is both an arc and an edge, no two opposing arcs, no
/// self-loops. Edges are stored normalized as `(min, max)`. The adjacency maps
/// hold an entry for every node. A `Pdag` built directly by a caller carries no
/// completeness guarantee; only [`crate::cpdag::build`] and the interventional
/// refiner produce CPDAGs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PdagRepr", into = "PdagRepr")]
pub struct Pdag {
    pub(crate) nodes: BTreeSet<Node>,
    pub(crate) arcs: BTreeSet<Arc>,
    pub(crate) edges: BTreeSet<Pair>,
    pub(crate) parents: BTreeMap<Node, BTreeSet<Node>>,
    pub(crate) children: BTreeMap<Node, BTreeSet<Node>>,
    pub(crate) undirected: BTreeMap<Node, BTreeSet<Node>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PdagRepr {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    arcs: Vec<Arc>,
    #[serde(default)]
    edges: Vec<Pair>,
}

impl Pdag {
    /// Create an empty PDAG over `nodes`.
    pub fn empty<N>(nodes: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        let mut pdag = Self {
            nodes: BTreeSet::new(),
            arcs: BTreeSet::new(),
            edges: BTreeSet::new(),
            parents: BTreeMap::new(),
            children: BTreeMap::new(),
            undirected: BTreeMap::new(),
        };
        for node in nodes {
            pdag.ensure_node(node);
        }
        pdag
    }

    /// Build a PDAG, validating the invariants. Endpoints missing from `nodes`
    /// are added.
    pub fn new<N, A, E>(nodes: N, arcs: A, edges: E) -> Result<Self, PdagError>
    where
        N: IntoIterator<Item = Node>,
        A: IntoIterator<Item = Arc>,
        E: IntoIterator<Item = Pair>,
    {
        let mut pdag = Self::empty(nodes);
        for (from, to) in arcs {
            if from == to {
                return Err(PdagError::SelfLoop { node: from });
            }
            if pdag.has_arc(to, from) || pdag.has_edge(from, to) {
                return Err(PdagError::Conflict { a: from, b: to });
            }
            pdag.insert_arc(from, to);
        }
        for (a, b) in edges {
            if a == b {
                return Err(PdagError::SelfLoop { node: a });
            }
            if pdag.has_arc(a, b) || pdag.has_arc(b, a) {
                return Err(PdagError::Conflict { a, b });
            }
            pdag.insert_edge(a, b);
        }
        Ok(pdag)
    }

    /// Every arc of `dag`, no undirected edges.
    pub fn from_dag(dag: &Dag) -> Self {
        let mut pdag = Self::empty(dag.nodes());
        for (from, to) in dag.arcs() {
            pdag.insert_arc(from, to);
        }
        pdag
    }

    /// The skeleton of `dag`: every arc replaced by an undirected edge.
    pub fn skeleton_of(dag: &Dag) -> Self {
        let mut pdag = Self::empty(dag.nodes());
        for (from, to) in dag.arcs() {
            pdag.insert_edge(from, to);
        }
        pdag
    }

    pub fn nodes(&self) -> &BTreeSet<Node> {
        &self.nodes
    }

    pub fn arcs(&self) -> &BTreeSet<Arc> {
        &self.arcs
    }

    /// Undirected edges, each as `(min, max)`.
    pub fn edges(&self) -> &BTreeSet<Pair> {
        &self.edges
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, node: Node) -> bool {
        self.nodes.contains(&node)
    }

    pub fn has_arc(&self, from: Node, to: Node) -> bool {
        self.arcs.contains(&(from, to))
    }

    pub fn has_edge(&self, a: Node, b: Node) -> bool {
        self.edges.contains(&pair(a, b))
    }

    /// True if any arc or edge joins `a` and `b`.
    pub fn is_adjacent(&self, a: Node, b: Node) -> bool {
        self.has_edge(a, b) || self.has_arc(a, b) || self.has_arc(b, a)
    }

    /// True when no undirected edges remain.
    pub fn is_directed(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn parents_of(&self, node: Node) -> &BTreeSet<Node> {
        self.parents.get(&node).unwrap_or(&EMPTY)
    }

    pub fn children_of(&self, node: Node) -> &BTreeSet<Node> {
        self.children.get(&node).unwrap_or(&EMPTY)
    }

    pub fn undirected_neighbors_of(&self, node: Node) -> &BTreeSet<Node> {
        self.undirected.get(&node).unwrap_or(&EMPTY)
    }

    /// Parents, children, and undirected neighbours of `node`.
    pub fn neighbors_of(&self, node: Node) -> BTreeSet<Node> {
        let mut out = self.parents_of(node).clone();
        out.extend(self.children_of(node));
        out.extend(self.undirected_neighbors_of(node));
        out
    }

    pub fn parents(&self) -> &BTreeMap<Node, BTreeSet<Node>> {
        &self.parents
    }

    pub fn children(&self) -> &BTreeMap<Node, BTreeSet<Node>> {
        &self.children
    }

    pub fn undirected_neighbors(&self) -> &BTreeMap<Node, BTreeSet<Node>> {
        &self.undirected
    }

    pub fn neighbors(&self) -> BTreeMap<Node, BTreeSet<Node>> {
        self.nodes
            .iter()
            .map(|&n| (n, self.neighbors_of(n)))
            .collect()
    }

    /// Adjacent pairs, direction ignored.
    pub fn skeleton(&self) -> BTreeSet<Pair> {
        self.arcs
            .iter()
            .map(|&(a, b)| pair(a, b))
            .chain(self.edges.iter().copied())
            .collect()
    }

    /// Ascending node list and matrix: arc `u -> v` sets `[v][u]`, an edge sets both.
    pub fn to_amat(&self) -> (Vec<Node>, Vec<Vec<u8>>) {
        let nodes: Vec<Node> = self.nodes.iter().copied().collect();
        let index = |n: Node| nodes.binary_search(&n).ok();
        let mut matrix = vec![vec![0u8; nodes.len()]; nodes.len()];
        for &(from, to) in &self.arcs {
            if let (Some(i), Some(j)) = (index(from), index(to)) {
                matrix[j][i] = 1;
            }
        }
        for &(a, b) in &self.edges {
            if let (Some(i), Some(j)) = (index(a), index(b)) {
                matrix[i][j] = 1;
                matrix[j][i] = 1;
            }
        }
        (nodes, matrix)
    }

    /// Convert a fully directed PDAG into a `Dag`.
    pub fn into_dag(self) -> Result<Dag, PdagError> {
        if !self.is_directed() {
            return Err(PdagError::NotFullyDirected {
                edges: self.edges.len(),
            });
        }
        Ok(Dag::with_nodes(self.nodes, self.arcs))
    }

    // --- Unchecked primitives. Callers validate first. ---

    pub(crate) fn ensure_node(&mut self, node: Node) {
        if self.nodes.insert(node) {
            self.parents.insert(node, BTreeSet::new());
            self.children.insert(node, BTreeSet::new());
            self.undirected.insert(node, BTreeSet::new());
        }
    }

    pub(crate) fn insert_arc(&mut self, from: Node, to: Node) {
        self.ensure_node(from);
        self.ensure_node(to);
        self.arcs.insert((from, to));
        self.children.entry(from).or_default().insert(to);
        self.parents.entry(to).or_default().insert(from);
    }

    pub(crate) fn delete_arc(&mut self, from: Node, to: Node) {
        self.arcs.remove(&(from, to));
        if let Some(c) = self.children.get_mut(&from) {
            c.remove(&to);
        }
        if let Some(p) = self.parents.get_mut(&to) {
            p.remove(&from);
        }
    }

    pub(crate) fn insert_edge(&mut self, a: Node, b: Node) {
        self.ensure_node(a);
        self.ensure_node(b);
        self.edges.insert(pair(a, b));
        self.undirected.entry(a).or_default().insert(b);
        self.undirected.entry(b).or_default().insert(a);
    }

    pub(crate) fn delete_edge(&mut self, a: Node, b: Node) {
        self.edges.remove(&pair(a, b));
        if let Some(u) = self.undirected.get_mut(&a) {
            u.remove(&b);
        }
        if let Some(u) = self.undirected.get_mut(&b) {
            u.remove(&a);
        }
    }

    /// Turn the undirected edge `{from, to}` into the arc `from -> to`.
    pub(crate) fn orient(&mut self, from: Node, to: Node) {
        self.delete_edge(from, to);
        self.insert_arc(from, to);
    }

    pub(crate) fn delete_node(&mut self, node: Node) {
        let parents = self.parents.remove(&node).unwrap_or_default();
        let children = self.children.remove(&node).unwrap_or_default();
        let undirected = self.undirected.remove(&node).unwrap_or_default();
        for p in parents {
            self.arcs.remove(&(p, node));
            if let Some(c) = self.children.get_mut(&p) {
                c.remove(&node);
            }
        }
        for c in children {
            self.arcs.remove(&(node, c));
            if let Some(p) = self.parents.get_mut(&c) {
                p.remove(&node);
            }
        }
        for u in undirected {
            self.edges.remove(&pair(node, u));
            if let Some(n) = self.undirected.get_mut(&u) {
                n.remove(&node);
            }
        }
        self.nodes.remove(&node);
    }
}

impl fmt::Debug for Pdag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pdag")
            .field("nodes", &self.nodes)
            .field("arcs", &self.arcs)
            .field("edges", &self.edges)
            .finish()
    }
}

impl fmt::Display for Pdag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .arcs
            .iter()
            .map(|(a, b)| format!("{a}->{b}"))
            .chain(self.edges.iter().map(|(a, b)| format!("{a}-{b}")))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

impl TryFrom<PdagRepr> for Pdag {
    type Error = PdagError;

    fn try_from(repr: PdagRepr) -> Result<Self, Self::Error> {
        Pdag::new(repr.nodes, repr.arcs, repr.edges)
    }
}

impl From<Pdag> for PdagRepr {
    fn from(pdag: Pdag) -> Self {
        PdagRepr {
            nodes: pdag.nodes.into_iter().collect(),
            arcs: pdag.arcs.into_iter().collect(),
            edges: pdag.edges.into_iter().collect(),
        }
    }
}
