use super::{Directed, DirectedGraph, Graph, Undirected, VertexKey};

impl<K, V, E> Graph<K, V, E, Undirected>
where
    K: VertexKey,
{
    /// Copies the graph into a directed one, materializing each edge as two opposite edges that
    /// share its property. A self-loop becomes a single directed loop.
    pub fn as_directed(&self) -> DirectedGraph<K, V, E>
    where
        V: Clone,
        E: Clone,
    {
        let mut directed: Graph<K, V, E, Directed> = Graph::with_defaults(
            self.default_vertex_property.clone(),
            self.default_edge_property.clone(),
        );
        for vertex in &self.vertices {
            directed.insert_vertex(vertex.key.clone(), vertex.property.clone());
        }
        for entry in &self.edges {
            directed.insert_edge_at(entry.source_ix, entry.destination_ix, entry.property.clone());
            directed.insert_edge_at(entry.destination_ix, entry.source_ix, entry.property.clone());
        }
        directed
    }
}
