//! Cut vertices (articulation points) and bridges of undirected graphs.
//!
//! One DFS pass records each vertex's discovery depth and its low value: the smallest depth
//! reachable from its DFS subtree through a single non-tree edge. Both cut sets are read off
//! those two numbers.

use crate::alg::sorted_vertices;
use crate::graph::{Edge, HashMap, UndirectedGraph, VertexKey};
use crate::traverse::{self, BfsStrategy, DfsStrategy};
use crate::Result;

struct CuttingStrategy<K> {
    depth: usize,
    depths: HashMap<K, usize>,
    low_values: HashMap<K, usize>,
    parents: HashMap<K, K>,
    children: HashMap<K, Vec<K>>,
}

impl<K: VertexKey> CuttingStrategy<K> {
    fn lower(&mut self, vertex: &K, candidate: usize) {
        if let Some(low) = self.low_values.get_mut(vertex) {
            *low = (*low).min(candidate);
        }
    }
}

impl<K: VertexKey> BfsStrategy<K> for CuttingStrategy<K> {
    fn on_entry(&mut self, vertex: &K) -> Result<()> {
        self.depths.insert(vertex.clone(), self.depth);
        self.low_values.insert(vertex.clone(), self.depth);
        self.depth += 1;
        Ok(())
    }

    fn on_next_vertex(&mut self, vertex: &K, neighbour: &K) -> Result<()> {
        self.parents.insert(neighbour.clone(), vertex.clone());
        self.children
            .entry(vertex.clone())
            .or_default()
            .push(neighbour.clone());
        Ok(())
    }

    fn on_exit(&mut self, vertex: &K) -> Result<()> {
        self.depth -= 1;
        let children_low = self
            .children
            .get(vertex)
            .into_iter()
            .flatten()
            .filter_map(|child| self.low_values.get(child).copied())
            .min();
        if let Some(children_low) = children_low {
            self.lower(vertex, children_low);
        }
        Ok(())
    }
}

impl<K: VertexKey> DfsStrategy<K> for CuttingStrategy<K> {
    fn on_edge_to_visited(&mut self, vertex: &K, neighbour: &K) -> Result<()> {
        if self.parents.get(vertex) == Some(neighbour) {
            return Ok(());
        }
        let Some(&depth) = self.depths.get(neighbour) else {
            debug_assert!(false, "visited vertex without a depth");
            return Ok(());
        };
        self.lower(vertex, depth);
        Ok(())
    }
}

/// Cut vertices and bridges of an undirected graph, with the DFS data they were derived from.
#[derive(Debug, Clone)]
pub struct Cutting<K> {
    depths: HashMap<K, usize>,
    low_values: HashMap<K, usize>,
    vertex_cut: Vec<K>,
    edge_cut: Vec<Edge<K>>,
}

impl<K> Cutting<K>
where
    K: VertexKey + Ord,
{
    /// Runs one DFS over `graph`, starting sweeps in key order.
    pub fn compute<V, E>(graph: &UndirectedGraph<K, V, E>) -> Result<Self> {
        let mut strategy = CuttingStrategy {
            depth: 0,
            depths: HashMap::default(),
            low_values: HashMap::default(),
            parents: HashMap::default(),
            children: HashMap::default(),
        };
        traverse::dfs_iterative(graph, &mut strategy, sorted_vertices(graph))?;

        let mut vertex_cut = Vec::new();
        let mut edge_cut = Vec::new();
        for vertex in sorted_vertices(graph) {
            let depth = strategy.depths[&vertex];
            let low = strategy.low_values[&vertex];
            let children = strategy
                .children
                .get(&vertex)
                .map(Vec::as_slice)
                .unwrap_or_default();

            match strategy.parents.get(&vertex) {
                None => {
                    if children.len() > 1 {
                        vertex_cut.push(vertex.clone());
                    }
                }
                Some(parent) => {
                    if children
                        .iter()
                        .any(|child| strategy.low_values[child] >= depth)
                    {
                        vertex_cut.push(vertex.clone());
                    }
                    if low == depth {
                        let Some(bridge) = graph.get_edge(parent, &vertex)? else {
                            debug_assert!(false, "tree edge missing from the graph");
                            continue;
                        };
                        edge_cut.push(bridge.clone());
                    }
                }
            }
        }

        tracing::debug!(
            cut_vertices = vertex_cut.len(),
            bridges = edge_cut.len(),
            "cutting"
        );
        Ok(Self {
            depths: strategy.depths,
            low_values: strategy.low_values,
            vertex_cut,
            edge_cut,
        })
    }
}

impl<K: VertexKey> Cutting<K> {
    /// Cut vertices in key order.
    pub fn vertex_cut(&self) -> &[K] {
        &self.vertex_cut
    }

    /// Bridges, ordered by the key of their deeper endpoint. Each edge is reported as stored in
    /// the graph.
    pub fn edge_cut(&self) -> &[Edge<K>] {
        &self.edge_cut
    }

    /// DFS discovery depth of `vertex`; roots have depth 0.
    pub fn depth(&self, vertex: &K) -> Option<usize> {
        self.depths.get(vertex).copied()
    }

    pub fn low_value(&self, vertex: &K) -> Option<usize> {
        self.low_values.get(vertex).copied()
    }

    pub fn into_cuts(self) -> (Vec<K>, Vec<Edge<K>>) {
        (self.vertex_cut, self.edge_cut)
    }
}

/// Bridges of `graph`: edges whose removal disconnects their endpoints.
pub fn find_edge_cut<K, V, E>(graph: &UndirectedGraph<K, V, E>) -> Result<Vec<Edge<K>>>
where
    K: VertexKey + Ord,
{
    Ok(Cutting::compute(graph)?.into_cuts().1)
}

/// Cut vertices of `graph`: vertices whose removal splits their component.
pub fn find_vertex_cut<K, V, E>(graph: &UndirectedGraph<K, V, E>) -> Result<Vec<K>>
where
    K: VertexKey + Ord,
{
    Ok(Cutting::compute(graph)?.into_cuts().0)
}
