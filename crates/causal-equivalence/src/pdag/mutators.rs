//! Checked mutators. Each validates before touching any state, so a failed
//! call leaves the PDAG unchanged. Single-writer; not thread-safe.

use causal_core::{Node, PdagError};

use super::container::Pdag;
use crate::cpdag::meek;

impl Pdag {
    /// Replace arc `from -> to` with the undirected edge `{from, to}`.
    pub fn replace_arc_with_edge(&mut self, from: Node, to: Node) -> Result<(), PdagError> {
        if !self.has_arc(from, to) {
            return Err(PdagError::InvalidArc { from, to });
        }
        self.delete_arc(from, to);
        self.insert_edge(from, to);
        Ok(())
    }

    /// Orient the undirected edge `{from, to}` as `from -> to`.
    pub fn replace_edge_with_arc(&mut self, from: Node, to: Node) -> Result<(), PdagError> {
        if !self.has_edge(from, to) {
            return Err(PdagError::InvalidEdge { a: from, b: to });
        }
        self.orient(from, to);
        Ok(())
    }

    pub fn remove_arc(&mut self, from: Node, to: Node) -> Result<(), PdagError> {
        if !self.has_arc(from, to) {
            return Err(PdagError::InvalidArc { from, to });
        }
        self.delete_arc(from, to);
        Ok(())
    }

    pub fn remove_edge(&mut self, a: Node, b: Node) -> Result<(), PdagError> {
        if !self.has_edge(a, b) {
            return Err(PdagError::InvalidEdge { a, b });
        }
        self.delete_edge(a, b);
        Ok(())
    }

    /// Remove a node together with every arc and edge touching it.
    pub fn remove_node(&mut self, node: Node) -> Result<(), PdagError> {
        if !self.contains_node(node) {
            return Err(PdagError::UnknownNode { node });
        }
        self.delete_node(node);
        Ok(())
    }

    /// Record background knowledge that `from -> to`, then propagate it with
    /// the Meek rules. A no-op when the arc is already present.
    pub fn add_known_arc(&mut self, from: Node, to: Node) -> Result<(), PdagError> {
        if self.has_arc(from, to) {
            return Ok(());
        }
        if !self.has_edge(from, to) {
            return Err(PdagError::InvalidEdge { a: from, b: to });
        }
        self.orient(from, to);
        meek::close(self);
        Ok(())
    }
}
