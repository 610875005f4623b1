//! Adjacency-matrix conversion. Entry `[i][j]` non-zero means arc `j -> i`:
//! row `i` lists the parents of node `i`.

use super::dag::Dag;
use crate::errors::GraphError;
use crate::Node;

impl Dag {
    /// Build a DAG on nodes `0..n` from a square matrix. Any value other than
    /// `T::default()` counts as an arc. Acyclicity is not checked.
    pub fn from_amat<T>(matrix: &[Vec<T>]) -> Result<Dag, GraphError>
    where
        T: PartialEq + Default,
    {
        let n = matrix.len();
        let zero = T::default();
        let mut dag = Dag::new();
        for i in 0..n {
            dag.add_node(i);
        }
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::InvalidMatrix {
                    reason: format!("row {i} has {} columns, expected {n}", row.len()),
                });
            }
            for (j, value) in row.iter().enumerate() {
                if *value != zero {
                    dag.add_arc(j, i);
                }
            }
        }
        Ok(dag)
    }

    /// The ascending node list and the 0/1 matrix indexed by position in it,
    /// in the same parent-column convention as [`Dag::from_amat`].
    pub fn to_amat(&self) -> (Vec<Node>, Vec<Vec<u8>>) {
        let nodes: Vec<Node> = self.nodes().into_iter().collect();
        let mut matrix = vec![vec![0u8; nodes.len()]; nodes.len()];
        for (from, to) in self.arcs() {
            if let (Ok(i), Ok(j)) = (nodes.binary_search(&from), nodes.binary_search(&to)) {
                matrix[j][i] = 1;
            }
        }
        (nodes, matrix)
    }
}
