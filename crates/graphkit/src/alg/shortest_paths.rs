//! Shortest path distances over weighted edges.
//!
//! Edge weights come from the edge property through [`Weighted`]. Unreachable vertices get
//! [`INFINITY`]; that is never an error.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxBuildHasher;

use crate::graph::{DirectedGraph, Direction, Graph, INFINITY, VertexKey, Weighted};
use crate::{Error, Result};

/// Distance from a fixed source to every vertex.
pub type DistanceMap<K> = hashbrown::HashMap<K, f64, FxBuildHasher>;

/// Distance for every ordered `(from, to)` pair of vertices.
pub type PairDistanceMap<K> = hashbrown::HashMap<(K, K), f64, FxBuildHasher>;

fn into_distance_map<K, V, E, D>(graph: &Graph<K, V, E, D>, distances: Vec<f64>) -> DistanceMap<K>
where
    K: VertexKey,
    D: Direction,
{
    graph.vertices().cloned().zip(distances).collect()
}

/// Single-source distances allowing negative weights.
///
/// Runs `|V| - 1` relaxation rounds over all edges in vertex-then-adjacency order, stopping early
/// once a round changes nothing, then fails with [`Error::NegativeCycle`] if one more round would
/// still improve a distance. Cycles not reachable from `source` are not reported.
pub fn bellman_ford<K, V, E>(graph: &DirectedGraph<K, V, E>, source: &K) -> Result<DistanceMap<K>>
where
    K: VertexKey,
    E: Weighted,
{
    let source_ix = graph.position(source)?;

    let mut edges = Vec::with_capacity(graph.edges_count());
    for (ix, vertex) in graph.vertices().enumerate() {
        for edge in graph.adjacent_edges(vertex)? {
            let destination_ix = graph.position(edge.destination())?;
            edges.push((ix, destination_ix, graph.edge_property(edge)?.weight()));
        }
    }

    let mut distances = vec![INFINITY; graph.vertices_count()];
    distances[source_ix] = 0.0;

    for _ in 1..graph.vertices_count() {
        let mut changed = false;
        for &(from, to, weight) in &edges {
            let candidate = distances[from] + weight;
            if candidate < distances[to] {
                distances[to] = candidate;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    for &(from, to, weight) in &edges {
        if distances[from] + weight < distances[to] {
            tracing::trace!(from, to, weight, "edge still relaxes");
            tracing::debug!(source = ?source, "bellman-ford found a negative cycle");
            return Err(Error::NegativeCycle);
        }
    }

    Ok(into_distance_map(graph, distances))
}

#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: f64,
    vertex: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    // Reversed so the max-heap pops the closest vertex first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Single-source distances for non-negative weights, on directed or undirected graphs.
///
/// Every edge weight is checked before any relaxation; a negative one fails with
/// [`Error::NegativeWeight`]. Stale queue entries are skipped when popped.
pub fn dijkstra<K, V, E, D>(graph: &Graph<K, V, E, D>, source: &K) -> Result<DistanceMap<K>>
where
    K: VertexKey,
    E: Weighted,
    D: Direction,
{
    let source_ix = graph.position(source)?;

    for edge in graph.edges() {
        let weight = graph.edge_property(edge)?.weight();
        if weight < 0.0 {
            return Err(Error::negative_weight(edge, weight));
        }
    }

    let n = graph.vertices_count();
    let keys: Vec<&K> = graph.vertices().collect();
    let mut distances = vec![INFINITY; n];
    let mut finished = vec![false; n];
    let mut queue = BinaryHeap::new();

    distances[source_ix] = 0.0;
    queue.push(QueueEntry {
        distance: 0.0,
        vertex: source_ix,
    });

    while let Some(QueueEntry { distance, vertex }) = queue.pop() {
        if finished[vertex] {
            continue;
        }
        finished[vertex] = true;

        let key = keys[vertex];
        for edge in graph.adjacent_edges(key)? {
            let Some(neighbour) = edge.get(key) else {
                debug_assert!(false, "adjacent edge does not touch its vertex");
                continue;
            };
            let neighbour_ix = graph.position(neighbour)?;
            let candidate = distance + graph.edge_property(edge)?.weight();
            if candidate < distances[neighbour_ix] {
                distances[neighbour_ix] = candidate;
                queue.push(QueueEntry {
                    distance: candidate,
                    vertex: neighbour_ix,
                });
            }
        }
    }

    Ok(into_distance_map(graph, distances))
}

/// Distances between every ordered pair of vertices.
///
/// The diagonal starts at zero; a self-loop only lowers it when its weight is negative.
/// Negative cycles are not detected: vertices on one end up with a negative distance to
/// themselves, and distances through them are not shortest paths.
pub fn floyd_warshall<K, V, E>(graph: &DirectedGraph<K, V, E>) -> Result<PairDistanceMap<K>>
where
    K: VertexKey,
    E: Weighted,
{
    let n = graph.vertices_count();
    let mut distances = vec![vec![INFINITY; n]; n];
    for (ix, row) in distances.iter_mut().enumerate() {
        row[ix] = 0.0;
    }

    for edge in graph.edges() {
        let from = graph.position(edge.source())?;
        let to = graph.position(edge.destination())?;
        let weight = graph.edge_property(edge)?.weight();
        distances[from][to] = distances[from][to].min(weight);
    }

    for pivot in 0..n {
        for from in 0..n {
            let via = distances[from][pivot];
            if via == INFINITY {
                continue;
            }
            for to in 0..n {
                let candidate = via + distances[pivot][to];
                if candidate < distances[from][to] {
                    distances[from][to] = candidate;
                }
            }
        }
    }

    let keys: Vec<&K> = graph.vertices().collect();
    let mut result = PairDistanceMap::with_capacity_and_hasher(n * n, FxBuildHasher);
    for (from, row) in distances.into_iter().enumerate() {
        for (to, distance) in row.into_iter().enumerate() {
            result.insert((keys[from].clone(), keys[to].clone()), distance);
        }
    }
    Ok(result)
}
