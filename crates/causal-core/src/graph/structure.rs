//! Structural comparisons: skeletons, v-structures, Markov equivalence, SHD.

use std::collections::BTreeSet;

use super::dag::Dag;
use crate::Node;

/// An unordered node pair stored as `(min, max)`.
pub type Pair = (Node, Node);

/// An unshielded collider `i -> k <- j` stored as `(i, k, j)` with `i < j`.
pub type VStructure = (Node, Node, Node);

/// Normalize an unordered pair.
pub fn pair(a: Node, b: Node) -> Pair {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Dag {
    /// Adjacent pairs, direction ignored.
    pub fn skeleton(&self) -> BTreeSet<Pair> {
        self.arcs().into_iter().map(|(a, b)| pair(a, b)).collect()
    }

    /// Every unshielded collider in the DAG.
    pub fn vstructures(&self) -> BTreeSet<VStructure> {
        let mut out = BTreeSet::new();
        for k in self.nodes() {
            let parents: Vec<Node> = self.parents_of(k).into_iter().collect();
            for (idx, &i) in parents.iter().enumerate() {
                for &j in &parents[idx + 1..] {
                    if !self.is_adjacent(i, j) {
                        out.insert((i, k, j));
                    }
                }
            }
        }
        out
    }

    /// Verma–Pearl: same nodes, same skeleton, same v-structures.
    pub fn is_markov_equivalent(&self, other: &Dag) -> bool {
        self.nodes() == other.nodes()
            && self.skeleton() == other.skeleton()
            && self.vstructures() == other.vstructures()
    }

    /// Structural Hamming distance: node pairs whose adjacency or orientation
    /// differ. A reversed arc counts once.
    pub fn shd(&self, other: &Dag) -> usize {
        let pairs: BTreeSet<Pair> = self.skeleton().union(&other.skeleton()).copied().collect();
        pairs
            .into_iter()
            .filter(|&(a, b)| {
                (self.has_arc(a, b), self.has_arc(b, a)) != (other.has_arc(a, b), other.has_arc(b, a))
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collider_is_a_vstructure_and_triangle_is_not() {
        let collider = Dag::from_arcs([(1, 2), (3, 2)]);
        assert_eq!(collider.vstructures(), BTreeSet::from([(1, 2, 3)]));

        let triangle = Dag::from_arcs([(1, 2), (1, 3), (2, 3)]);
        assert!(triangle.vstructures().is_empty());
    }

    #[test]
    fn chains_are_equivalent_but_collider_is_not() {
        let forward = Dag::from_arcs([(1, 2), (2, 3)]);
        let backward = Dag::from_arcs([(3, 2), (2, 1)]);
        let fork = Dag::from_arcs([(2, 1), (2, 3)]);
        let collider = Dag::from_arcs([(1, 2), (3, 2)]);
        assert!(forward.is_markov_equivalent(&backward));
        assert!(forward.is_markov_equivalent(&fork));
        assert!(!forward.is_markov_equivalent(&collider));
    }

    #[test]
    fn shd_counts_reversals_once() {
        let a = Dag::from_arcs([(1, 2), (2, 3)]);
        let b = Dag::with_nodes([3], [(2, 1)]);
        // 1-2 reversed, 2-3 missing.
        assert_eq!(a.shd(&b), 2);
        assert_eq!(a.shd(&a), 0);
    }
}
