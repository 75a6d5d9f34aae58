//! Per-vertex adjacency lists used by [`Graph`](super::Graph).
//!
//! Lists hold slots into the graph's single edge table, so an undirected edge is shared by both
//! of its endpoints rather than copied.

#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct AdjacencyList {
    // Directed: edges leaving the vertex. Undirected: every incident edge.
    outgoing: Vec<usize>,
    // Directed only.
    incoming: Vec<usize>,
}

impl AdjacencyList {
    pub(in crate::graph) fn outgoing(&self) -> &[usize] {
        &self.outgoing
    }

    pub(in crate::graph) fn incoming(&self) -> &[usize] {
        &self.incoming
    }

    pub(in crate::graph) fn push_outgoing(&mut self, edge_ix: usize) {
        self.outgoing.push(edge_ix);
    }

    pub(in crate::graph) fn push_incoming(&mut self, edge_ix: usize) {
        self.incoming.push(edge_ix);
    }

    pub(in crate::graph) fn clear(&mut self) {
        self.outgoing.clear();
        self.incoming.clear();
    }
}
