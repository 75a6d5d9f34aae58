//! Internal storage entries for [`Graph`](super::Graph).

use super::Edge;
use super::adjacency::AdjacencyList;

#[derive(Debug, Clone)]
pub(in crate::graph) struct VertexEntry<K, V> {
    pub(in crate::graph) key: K,
    /// `None` until a property is set; reads fall back to the graph default.
    pub(in crate::graph) property: Option<V>,
    pub(in crate::graph) adjacency: AdjacencyList,
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry<K, E> {
    pub(in crate::graph) edge: Edge<K>,
    pub(in crate::graph) source_ix: usize,
    pub(in crate::graph) destination_ix: usize,
    pub(in crate::graph) property: Option<E>,
}
