//! Topological ordering of directed graphs.
//!
//! Both functions return every vertex exactly once, with each edge pointing from an earlier to a
//! later vertex, or fail with [`Error::CyclicGraph`]. A graph without edges is returned in
//! insertion order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::alg::sorted_vertices;
use crate::graph::{DirectedGraph, VertexKey, VertexSet};
use crate::traverse::{self, BfsStrategy, DfsStrategy};
use crate::{Error, Result};

/// Kahn's algorithm. Among the vertices with no remaining inputs, the smallest key is taken
/// first, so the result is the lexicographically smallest valid order.
pub fn inputs_elimination<K, V, E>(graph: &DirectedGraph<K, V, E>) -> Result<Vec<K>>
where
    K: VertexKey + Ord,
{
    if graph.edges_count() == 0 {
        return Ok(graph.vertices().cloned().collect());
    }

    let mut input_degrees = Vec::with_capacity(graph.vertices_count());
    let mut ready = BinaryHeap::new();
    for vertex in graph.vertices() {
        let degree = graph.input_degree(vertex)?;
        if degree == 0 {
            ready.push(Reverse(vertex));
        }
        input_degrees.push(degree);
    }

    let mut order = Vec::with_capacity(graph.vertices_count());
    while let Some(Reverse(vertex)) = ready.pop() {
        order.push(vertex.clone());
        for neighbour in graph.neighbours(vertex)? {
            let ix = graph.position(neighbour)?;
            input_degrees[ix] -= 1;
            if input_degrees[ix] == 0 {
                ready.push(Reverse(neighbour));
            }
        }
    }

    if order.len() != graph.vertices_count() {
        tracing::debug!(
            sorted = order.len(),
            vertices = graph.vertices_count(),
            "inputs elimination stopped on a cycle"
        );
        return Err(Error::CyclicGraph);
    }
    Ok(order)
}

struct TopologicalStrategy<K> {
    order: Vec<K>,
    open: VertexSet<K>,
}

impl<K: VertexKey> BfsStrategy<K> for TopologicalStrategy<K> {
    fn on_entry(&mut self, vertex: &K) -> Result<()> {
        self.open.insert(vertex.clone());
        Ok(())
    }

    fn on_exit(&mut self, vertex: &K) -> Result<()> {
        self.open.remove(vertex);
        self.order.push(vertex.clone());
        Ok(())
    }
}

impl<K: VertexKey> DfsStrategy<K> for TopologicalStrategy<K> {
    fn on_edge_to_visited(&mut self, vertex: &K, neighbour: &K) -> Result<()> {
        if self.open.contains(neighbour) {
            tracing::trace!(?vertex, ?neighbour, "back edge");
            return Err(Error::CyclicGraph);
        }
        Ok(())
    }
}

/// Reverse DFS post-order over sweeps started in key order. Fails as soon as an edge closes a
/// path back to a vertex that is still open.
pub fn dfs<K, V, E>(graph: &DirectedGraph<K, V, E>) -> Result<Vec<K>>
where
    K: VertexKey + Ord,
{
    if graph.edges_count() == 0 {
        return Ok(graph.vertices().cloned().collect());
    }

    let mut strategy = TopologicalStrategy {
        order: Vec::with_capacity(graph.vertices_count()),
        open: VertexSet::default(),
    };
    traverse::dfs_iterative(graph, &mut strategy, sorted_vertices(graph))?;

    let mut order = strategy.order;
    order.reverse();
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_topological(graph: &DirectedGraph<u32>, order: &[u32]) -> bool {
        let rank = |v: &u32| order.iter().position(|x| x == v);
        order.len() == graph.vertices_count()
            && graph
                .edges()
                .all(|e| rank(e.source()) < rank(e.destination()))
    }

    fn sample() -> DirectedGraph<u32> {
        let mut g = DirectedGraph::with_vertices(0..6);
        for (s, d) in [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)] {
            g.add_edge(s, d).unwrap();
        }
        g
    }

    #[test]
    fn inputs_elimination_prefers_smaller_keys() {
        let g = sample();
        assert_eq!(inputs_elimination(&g), Ok(vec![4, 5, 0, 2, 3, 1]));
    }

    #[test]
    fn dfs_order_respects_edges() {
        let g = sample();
        let order = dfs(&g).unwrap();
        assert!(is_topological(&g, &order));
        assert_eq!(order, vec![5, 4, 2, 3, 1, 0]);
    }

    #[test]
    fn edgeless_graph_keeps_insertion_order() {
        let g: DirectedGraph<u32> = DirectedGraph::with_vertices([3, 1, 2]);
        assert_eq!(inputs_elimination(&g), Ok(vec![3, 1, 2]));
        assert_eq!(dfs(&g), Ok(vec![3, 1, 2]));
    }

    #[test]
    fn cycle_is_rejected_by_both() {
        let mut g = sample();
        g.add_edge(1, 5).unwrap();

        assert_eq!(inputs_elimination(&g), Err(Error::CyclicGraph));
        assert_eq!(dfs(&g), Err(Error::CyclicGraph));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let mut g: DirectedGraph<u32> = DirectedGraph::with_vertices(0..2);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 1).unwrap();

        assert_eq!(inputs_elimination(&g), Err(Error::CyclicGraph));
        assert_eq!(dfs(&g), Err(Error::CyclicGraph));
    }

    #[test]
    fn cross_edges_are_not_cycles() {
        let mut g: DirectedGraph<u32> = DirectedGraph::with_vertices(0..3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(2, 1).unwrap();

        assert_eq!(dfs(&g), Ok(vec![0, 2, 1]));
    }
}
