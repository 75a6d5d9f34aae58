//! Rooted trees built on top of [`UndirectedGraph`].
//!
//! Every vertex after the root is added together with the edge to its parent, so the graph stays
//! connected and acyclic without any cycle check.

use super::{Adjacency, Edge, UndirectedGraph, VertexKey};
use crate::Result;

#[derive(Debug, Clone)]
pub struct TreeGraph<K, V = (), E = ()> {
    graph: UndirectedGraph<K, V, E>,
    root: K,
}

impl<K, V, E> TreeGraph<K, V, E>
where
    K: VertexKey,
    V: Default,
    E: Default,
{
    pub fn new(root: K, property: V) -> Self {
        let mut graph = UndirectedGraph::new();
        graph.add_vertex(root.clone(), property);
        Self { graph, root }
    }

    /// Creates a tree whose root has an unset property.
    pub fn with_root(root: K) -> Self {
        let mut graph = UndirectedGraph::new();
        graph.add_vertices([root.clone()]);
        Self { graph, root }
    }
}

impl<K, V, E> TreeGraph<K, V, E>
where
    K: VertexKey,
{
    pub fn root(&self) -> &K {
        &self.root
    }

    /// Attaches `vertex` below `parent`. Returns `Ok(None)` and changes nothing if `vertex` is
    /// already in the tree; `parent` must be a member either way.
    pub fn add_vertex(
        &mut self,
        vertex: K,
        property: V,
        parent: &K,
        edge_property: E,
    ) -> Result<Option<&Edge<K>>> {
        self.graph.position(parent)?;
        if !self.graph.add_vertex(vertex.clone(), property) {
            return Ok(None);
        }
        self.graph
            .add_edge_with_property(parent.clone(), vertex, edge_property)
            .map(Some)
    }

    pub fn as_undirected(&self) -> &UndirectedGraph<K, V, E> {
        &self.graph
    }

    pub fn into_undirected(self) -> UndirectedGraph<K, V, E> {
        self.graph
    }

    pub fn vertices_count(&self) -> usize {
        self.graph.vertices_count()
    }

    pub fn edges_count(&self) -> usize {
        self.graph.edges_count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &K> {
        self.graph.vertices()
    }

    pub fn contains_vertex(&self, vertex: &K) -> bool {
        self.graph.contains_vertex(vertex)
    }

    pub fn position(&self, vertex: &K) -> Result<usize> {
        self.graph.position(vertex)
    }

    pub fn get_edge(&self, source: &K, destination: &K) -> Result<Option<&Edge<K>>> {
        self.graph.get_edge(source, destination)
    }

    pub fn neighbours(&self, vertex: &K) -> Result<Vec<&K>> {
        self.graph.neighbours(vertex)
    }

    pub fn vertex_property(&self, vertex: &K) -> Result<&V> {
        self.graph.vertex_property(vertex)
    }

    pub fn set_vertex_property(&mut self, vertex: &K, property: V) -> Result<()> {
        self.graph.set_vertex_property(vertex, property)
    }

    pub fn edge_property(&self, edge: &Edge<K>) -> Result<&E> {
        self.graph.edge_property(edge)
    }

    pub fn set_edge_property(&mut self, edge: &Edge<K>, property: E) -> Result<()> {
        self.graph.set_edge_property(edge, property)
    }
}

impl<K, V, E> Adjacency for TreeGraph<K, V, E>
where
    K: VertexKey,
{
    type Key = K;

    fn vertices_count(&self) -> usize {
        self.graph.vertices_count()
    }

    fn position(&self, vertex: &K) -> Result<usize> {
        self.graph.position(vertex)
    }

    fn neighbours(&self, vertex: &K) -> Result<Vec<&K>> {
        self.graph.neighbours(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn vertices_hang_off_their_parent() {
        let mut tree: TreeGraph<u32, &str, u8> = TreeGraph::new(0, "root");
        tree.add_vertex(1, "left", &0, 3).unwrap();
        tree.add_vertex(2, "right", &0, 4).unwrap();
        tree.add_vertex(3, "leaf", &1, 5).unwrap();

        assert_eq!(tree.root(), &0);
        assert_eq!(tree.vertices_count(), 4);
        assert_eq!(tree.edges_count(), tree.vertices_count() - 1);
        assert_eq!(tree.neighbours(&1), Ok(vec![&0, &3]));
        assert_eq!(tree.edge_property(&Edge::new(3, 1)), Ok(&5));
        assert_eq!(tree.vertex_property(&0), Ok(&"root"));
    }

    #[test]
    fn duplicate_vertex_is_ignored() {
        let mut tree: TreeGraph<u32> = TreeGraph::with_root(0);
        tree.add_vertex(1, (), &0, ()).unwrap();

        assert_eq!(tree.add_vertex(1, (), &0, ()), Ok(None));
        assert_eq!(tree.add_vertex(0, (), &1, ()), Ok(None));
        assert_eq!(tree.edges_count(), 1);
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let mut tree: TreeGraph<u32> = TreeGraph::with_root(0);
        let err = tree.add_vertex(5, (), &9, ()).unwrap_err();

        assert!(matches!(err, Error::VertexNotMember { .. }));
        assert!(!tree.contains_vertex(&5));
    }
}
