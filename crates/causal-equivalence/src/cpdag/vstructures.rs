//! Orient the unshielded colliders of a DAG on its skeleton.

use causal_core::Dag;

use crate::pdag::Pdag;

/// Orient `i -> k <- j` for every v-structure of `dag` whose edges are still
/// undirected in `pdag`. Returns the number of v-structures found.
pub fn orient_vstructures(dag: &Dag, pdag: &mut Pdag) -> usize {
    let vstructures = dag.vstructures();
    for &(i, k, j) in &vstructures {
        for parent in [i, j] {
            if pdag.has_edge(parent, k) {
                pdag.orient(parent, k);
            }
        }
    }
    vstructures.len()
}
