//! Graph storage shared by the directed, undirected and tree variants.
//!
//! Vertices are identified by caller-chosen keys and carry a property of type `V`; edges carry
//! a property of type `E`. Unset properties read as the graph's default value. Every lookup
//! resolves a key through [`Graph::position`], which is the only place that reports a
//! "not a member of this graph" error.

mod adjacency;
mod direction;
mod directed;
mod edge;
mod entries;
mod tree;
mod undirected;
mod weight;

pub use direction::{Directed, Direction, Undirected};
pub use edge::Edge;
pub use tree::TreeGraph;
pub use weight::{INFINITY, Weighted};

use crate::{Error, Result};
use adjacency::AdjacencyList;
use entries::{EdgeEntry, VertexEntry};
use rustc_hash::FxBuildHasher;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

pub(crate) type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Set of vertex keys returned by traversals and component searches.
pub type VertexSet<K> = hashbrown::HashSet<K, FxBuildHasher>;

pub type DirectedGraph<K, V = (), E = ()> = Graph<K, V, E, Directed>;
pub type UndirectedGraph<K, V = (), E = ()> = Graph<K, V, E, Undirected>;

/// Requirements on vertex keys.
pub trait VertexKey: Clone + Eq + Hash + Debug {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + Debug {}

/// Read-only adjacency surface consumed by the traversal engine.
pub trait Adjacency {
    type Key: VertexKey;

    fn vertices_count(&self) -> usize;

    /// Dense index of `vertex` in `0..vertices_count()`, in insertion order.
    fn position(&self, vertex: &Self::Key) -> Result<usize>;

    /// Vertices reachable over one edge from `vertex`, in adjacency order.
    fn neighbours(&self, vertex: &Self::Key) -> Result<Vec<&Self::Key>>;
}

#[derive(Debug, Clone)]
pub struct Graph<K, V = (), E = (), D = Directed> {
    default_vertex_property: V,
    default_edge_property: E,

    vertices: Vec<VertexEntry<K, V>>,
    vertex_index: HashMap<K, usize>,

    edges: Vec<EdgeEntry<K, E>>,
    // Keyed by endpoint positions; undirected keys are stored as (min, max).
    edge_index: HashMap<(usize, usize), usize>,

    direction: PhantomData<D>,
}

impl<K, V, E, D> Graph<K, V, E, D>
where
    K: VertexKey,
    V: Default,
    E: Default,
    D: Direction,
{
    pub fn new() -> Self {
        Self::with_defaults(V::default(), E::default())
    }

    /// Creates a graph holding `vertices`, all with unset properties.
    pub fn with_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut graph = Self::new();
        graph.add_vertices(vertices);
        graph
    }
}

impl<K, V, E, D> Default for Graph<K, V, E, D>
where
    K: VertexKey,
    V: Default,
    E: Default,
    D: Direction,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, E, D> Graph<K, V, E, D>
where
    K: VertexKey,
    D: Direction,
{
    pub fn with_defaults(default_vertex_property: V, default_edge_property: E) -> Self {
        Self {
            default_vertex_property,
            default_edge_property,
            vertices: Vec::new(),
            vertex_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            direction: PhantomData,
        }
    }

    pub fn set_default_vertex_property(&mut self, property: V) -> &mut Self {
        self.default_vertex_property = property;
        self
    }

    pub fn set_default_edge_property(&mut self, property: E) -> &mut Self {
        self.default_edge_property = property;
        self
    }

    pub fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    pub fn vertices_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex keys in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &K> {
        self.vertices.iter().map(|v| &v.key)
    }

    /// Every edge once, in insertion order. An undirected edge is yielded in the orientation it
    /// was added with.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<K>> {
        self.edges.iter().map(|e| &e.edge)
    }

    pub fn contains_vertex(&self, vertex: &K) -> bool {
        self.vertex_index.contains_key(vertex)
    }

    pub fn position(&self, vertex: &K) -> Result<usize> {
        self.vertex_index
            .get(vertex)
            .copied()
            .ok_or_else(|| Error::vertex_not_member(vertex))
    }

    fn edge_slot_key(&self, source_ix: usize, destination_ix: usize) -> (usize, usize) {
        if D::DIRECTED || source_ix <= destination_ix {
            (source_ix, destination_ix)
        } else {
            (destination_ix, source_ix)
        }
    }

    fn edge_slot(&self, edge: &Edge<K>) -> Result<usize> {
        let source_ix = self.position(edge.source())?;
        let destination_ix = self.position(edge.destination())?;
        self.edge_index
            .get(&self.edge_slot_key(source_ix, destination_ix))
            .copied()
            .ok_or_else(|| Error::edge_not_member(edge))
    }

    /// Adds `vertex` with `property`. Returns `false` and leaves the existing property untouched
    /// if the vertex is already present.
    pub fn add_vertex(&mut self, vertex: K, property: V) -> bool {
        if self.vertex_index.contains_key(&vertex) {
            return false;
        }
        self.insert_vertex(vertex, Some(property));
        true
    }

    /// Adds every new key in `vertices` with an unset property. Returns how many were added.
    pub fn add_vertices<I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = K>,
    {
        let mut added = 0;
        for vertex in vertices {
            if !self.vertex_index.contains_key(&vertex) {
                self.insert_vertex(vertex, None);
                added += 1;
            }
        }
        added
    }

    fn insert_vertex(&mut self, vertex: K, property: Option<V>) -> usize {
        let ix = self.vertices.len();
        self.vertex_index.insert(vertex.clone(), ix);
        self.vertices.push(VertexEntry {
            key: vertex,
            property,
            adjacency: AdjacencyList::default(),
        });
        ix
    }

    /// Adds an edge with an unset property, or returns the edge already joining the endpoints.
    pub fn add_edge(&mut self, source: K, destination: K) -> Result<&Edge<K>> {
        let source_ix = self.position(&source)?;
        let destination_ix = self.position(&destination)?;
        let edge_ix = self.insert_edge_at(source_ix, destination_ix, None);
        Ok(&self.edges[edge_ix].edge)
    }

    /// Adds an edge carrying `property`, or returns the edge already joining the endpoints
    /// without touching its property.
    pub fn add_edge_with_property(
        &mut self,
        source: K,
        destination: K,
        property: E,
    ) -> Result<&Edge<K>> {
        let source_ix = self.position(&source)?;
        let destination_ix = self.position(&destination)?;
        let edge_ix = self.insert_edge_at(source_ix, destination_ix, Some(property));
        Ok(&self.edges[edge_ix].edge)
    }

    fn insert_edge_at(
        &mut self,
        source_ix: usize,
        destination_ix: usize,
        property: Option<E>,
    ) -> usize {
        let slot_key = self.edge_slot_key(source_ix, destination_ix);
        if let Some(&edge_ix) = self.edge_index.get(&slot_key) {
            return edge_ix;
        }

        let edge = Edge::new(
            self.vertices[source_ix].key.clone(),
            self.vertices[destination_ix].key.clone(),
        );
        let edge_ix = self.edges.len();
        self.edges.push(EdgeEntry {
            edge,
            source_ix,
            destination_ix,
            property,
        });
        self.edge_index.insert(slot_key, edge_ix);
        self.link(edge_ix);
        edge_ix
    }

    fn link(&mut self, edge_ix: usize) {
        let (source_ix, destination_ix) = {
            let entry = &self.edges[edge_ix];
            (entry.source_ix, entry.destination_ix)
        };
        self.vertices[source_ix].adjacency.push_outgoing(edge_ix);
        if D::DIRECTED {
            self.vertices[destination_ix].adjacency.push_incoming(edge_ix);
        } else if source_ix != destination_ix {
            self.vertices[destination_ix].adjacency.push_outgoing(edge_ix);
        }
    }

    /// Rebuilds the edge index and every adjacency list from the edge table.
    fn relink_all(&mut self) {
        for vertex in &mut self.vertices {
            vertex.adjacency.clear();
        }
        self.edge_index.clear();
        for edge_ix in 0..self.edges.len() {
            let slot_key = {
                let entry = &self.edges[edge_ix];
                self.edge_slot_key(entry.source_ix, entry.destination_ix)
            };
            self.edge_index.insert(slot_key, edge_ix);
            self.link(edge_ix);
        }
    }

    /// Returns the edge joining `source` to `destination`; for undirected graphs either
    /// orientation finds it.
    pub fn get_edge(&self, source: &K, destination: &K) -> Result<Option<&Edge<K>>> {
        let source_ix = self.position(source)?;
        let destination_ix = self.position(destination)?;
        Ok(self
            .edge_index
            .get(&self.edge_slot_key(source_ix, destination_ix))
            .map(|&edge_ix| &self.edges[edge_ix].edge))
    }

    pub fn neighbours(&self, vertex: &K) -> Result<Vec<&K>> {
        let ix = self.position(vertex)?;
        Ok(self.vertices[ix]
            .adjacency
            .outgoing()
            .iter()
            .map(|&edge_ix| self.opposite(edge_ix, ix))
            .collect())
    }

    fn opposite(&self, edge_ix: usize, vertex_ix: usize) -> &K {
        let entry = &self.edges[edge_ix];
        let other_ix = if entry.source_ix == vertex_ix {
            entry.destination_ix
        } else {
            entry.source_ix
        };
        &self.vertices[other_ix].key
    }

    /// Edges leaving `vertex` (directed) or incident to it (undirected).
    pub fn adjacent_edges(&self, vertex: &K) -> Result<Vec<&Edge<K>>> {
        let ix = self.position(vertex)?;
        Ok(self.vertices[ix]
            .adjacency
            .outgoing()
            .iter()
            .map(|&edge_ix| &self.edges[edge_ix].edge)
            .collect())
    }

    pub fn output_degree(&self, vertex: &K) -> Result<usize> {
        let ix = self.position(vertex)?;
        Ok(self.vertices[ix].adjacency.outgoing().len())
    }

    pub fn input_degree(&self, vertex: &K) -> Result<usize> {
        let ix = self.position(vertex)?;
        let adjacency = &self.vertices[ix].adjacency;
        if D::DIRECTED {
            Ok(adjacency.incoming().len())
        } else {
            Ok(adjacency.outgoing().len())
        }
    }

    pub fn vertex_property(&self, vertex: &K) -> Result<&V> {
        let ix = self.position(vertex)?;
        Ok(self.vertices[ix]
            .property
            .as_ref()
            .unwrap_or(&self.default_vertex_property))
    }

    pub fn set_vertex_property(&mut self, vertex: &K, property: V) -> Result<()> {
        let ix = self.position(vertex)?;
        self.vertices[ix].property = Some(property);
        Ok(())
    }

    pub fn edge_property(&self, edge: &Edge<K>) -> Result<&E> {
        let edge_ix = self.edge_slot(edge)?;
        Ok(self.edges[edge_ix]
            .property
            .as_ref()
            .unwrap_or(&self.default_edge_property))
    }

    pub fn set_edge_property(&mut self, edge: &Edge<K>, property: E) -> Result<()> {
        let edge_ix = self.edge_slot(edge)?;
        self.edges[edge_ix].property = Some(property);
        Ok(())
    }
}

impl<K, V, E, D> Adjacency for Graph<K, V, E, D>
where
    K: VertexKey,
    D: Direction,
{
    type Key = K;

    fn vertices_count(&self) -> usize {
        Graph::vertices_count(self)
    }

    fn position(&self, vertex: &K) -> Result<usize> {
        Graph::position(self, vertex)
    }

    fn neighbours(&self, vertex: &K) -> Result<Vec<&K>> {
        Graph::neighbours(self, vertex)
    }
}
