#![forbid(unsafe_code)]

//! In-memory graphs with a strategy-driven traversal engine.
//!
//! [`graph`] holds the storage (directed, undirected and rooted-tree variants with per-vertex and
//! per-edge properties), [`traverse`] drives BFS/DFS through caller-supplied hooks, and [`alg`]
//! builds topological sorting, strongly connected components, cut vertices and bridges, lowest
//! common ancestors and shortest paths on top of them.

pub mod alg;
pub mod error;
pub mod graph;
pub mod traverse;

pub use error::{Error, Result};
pub use graph::{
    Adjacency, Directed, DirectedGraph, Direction, Edge, Graph, INFINITY, TreeGraph, Undirected,
    UndirectedGraph, VertexKey, VertexSet, Weighted,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
