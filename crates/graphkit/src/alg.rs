//! Graph algorithms built on [`crate::graph`] and [`crate::traverse`].
//!
//! Algorithms that start DFS sweeps from every vertex do so in key order, so their output only
//! depends on the graph's contents and not on insertion order.

pub mod cutting;
pub mod lca;
pub mod scc;
pub mod shortest_paths;
pub mod topological_sort;

use crate::graph::{Direction, Graph, VertexKey};

/// Vertex keys of `graph` in ascending order.
pub(crate) fn sorted_vertices<K, V, E, D>(graph: &Graph<K, V, E, D>) -> Vec<K>
where
    K: VertexKey + Ord,
    D: Direction,
{
    let mut vertices: Vec<K> = graph.vertices().cloned().collect();
    vertices.sort_unstable();
    vertices
}
