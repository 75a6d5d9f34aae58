//! Strategy-driven BFS and DFS.
//!
//! A traversal walks every vertex reachable from a sequence of root candidates and reports what it
//! sees through a strategy's hooks. Each root not reached by an earlier sweep of the same call
//! starts a new sweep; roots already reached are skipped. The returned set holds every vertex
//! visited across all sweeps.
//!
//! Sweeps are numbered from 1. A vertex is tagged with `+n` while it is open in sweep `n` and
//! with `-n` once it has exited, which lets DFS report edges to vertices of the current sweep
//! without consulting a separate visited set.

use std::collections::VecDeque;

use crate::Result;
use crate::graph::{Adjacency, VertexSet};

/// Hooks shared by BFS and DFS. Every hook defaults to doing nothing; an error returned from a
/// hook stops the traversal and is handed back to the caller.
pub trait BfsStrategy<K> {
    /// Called once before the sweep started from `root`.
    fn for_root(&mut self, _root: &K) -> Result<()> {
        Ok(())
    }

    /// Called when `vertex` is visited.
    fn on_entry(&mut self, _vertex: &K) -> Result<()> {
        Ok(())
    }

    /// Called for a tree edge: `neighbour` is discovered from `vertex`.
    fn on_next_vertex(&mut self, _vertex: &K, _neighbour: &K) -> Result<()> {
        Ok(())
    }

    /// Called once every neighbour of `vertex` has been handled.
    fn on_exit(&mut self, _vertex: &K) -> Result<()> {
        Ok(())
    }
}

pub trait DfsStrategy<K>: BfsStrategy<K> {
    /// Called for an edge to a `neighbour` already reached in the current sweep, whether it is
    /// still open or has exited. Edges into earlier sweeps are not reported.
    fn on_edge_to_visited(&mut self, _vertex: &K, _neighbour: &K) -> Result<()> {
        Ok(())
    }
}

/// Strategy with no behaviour, for plain reachability queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyStrategy;

impl<K> BfsStrategy<K> for EmptyStrategy {}

impl<K> DfsStrategy<K> for EmptyStrategy {}

/// Breadth-first traversal. Neighbours are discovered in adjacency order; `on_entry` and
/// `on_exit` fire when a vertex is taken from the queue.
pub fn bfs<G, S, I>(graph: &G, strategy: &mut S, roots: I) -> Result<VertexSet<G::Key>>
where
    G: Adjacency,
    S: BfsStrategy<G::Key> + ?Sized,
    I: IntoIterator<Item = G::Key>,
{
    let mut tags = vec![0isize; graph.vertices_count()];
    let mut visited = VertexSet::default();
    let mut iteration = 0isize;

    for root in roots {
        let root_ix = graph.position(&root)?;
        if tags[root_ix] != 0 {
            continue;
        }
        iteration += 1;
        tracing::trace!(?root, iteration, "bfs sweep");

        strategy.for_root(&root)?;
        tags[root_ix] = iteration;
        visited.insert(root.clone());

        let mut queue = VecDeque::from([(root, root_ix)]);
        while let Some((vertex, vertex_ix)) = queue.pop_front() {
            strategy.on_entry(&vertex)?;
            for neighbour in graph.neighbours(&vertex)? {
                let neighbour_ix = graph.position(neighbour)?;
                if tags[neighbour_ix] == 0 {
                    strategy.on_next_vertex(&vertex, neighbour)?;
                    tags[neighbour_ix] = iteration;
                    visited.insert(neighbour.clone());
                    queue.push_back((neighbour.clone(), neighbour_ix));
                }
            }
            strategy.on_exit(&vertex)?;
            tags[vertex_ix] = -iteration;
        }
    }

    Ok(visited)
}

struct Frame<'g, K> {
    vertex: K,
    ix: usize,
    neighbours: Vec<&'g K>,
    next: usize,
}

fn enter<'g, G>(graph: &'g G, vertex: G::Key, ix: usize) -> Result<Frame<'g, G::Key>>
where
    G: Adjacency,
{
    let neighbours = graph.neighbours(&vertex)?;
    Ok(Frame {
        vertex,
        ix,
        neighbours,
        next: 0,
    })
}

/// Depth-first traversal on an explicit frame stack. Reports the same hooks as
/// [`dfs_recursive`] and is safe on arbitrarily deep graphs.
pub fn dfs_iterative<G, S, I>(graph: &G, strategy: &mut S, roots: I) -> Result<VertexSet<G::Key>>
where
    G: Adjacency,
    S: DfsStrategy<G::Key> + ?Sized,
    I: IntoIterator<Item = G::Key>,
{
    let mut tags = vec![0isize; graph.vertices_count()];
    let mut visited = VertexSet::default();
    let mut iteration = 0isize;

    for root in roots {
        let root_ix = graph.position(&root)?;
        if tags[root_ix] != 0 {
            continue;
        }
        iteration += 1;
        tracing::trace!(?root, iteration, "dfs sweep");

        strategy.for_root(&root)?;
        tags[root_ix] = iteration;
        visited.insert(root.clone());
        strategy.on_entry(&root)?;

        let mut stack = vec![enter(graph, root, root_ix)?];
        while let Some(frame) = stack.last_mut() {
            if let Some(&neighbour) = frame.neighbours.get(frame.next) {
                frame.next += 1;
                let neighbour_ix = graph.position(neighbour)?;
                let tag = tags[neighbour_ix];
                if tag == 0 {
                    strategy.on_next_vertex(&frame.vertex, neighbour)?;
                    tags[neighbour_ix] = iteration;
                    visited.insert(neighbour.clone());
                    strategy.on_entry(neighbour)?;
                    stack.push(enter(graph, neighbour.clone(), neighbour_ix)?);
                } else if tag.abs() == iteration {
                    strategy.on_edge_to_visited(&frame.vertex, neighbour)?;
                }
            } else {
                let Some(done) = stack.pop() else {
                    break;
                };
                tags[done.ix] = -iteration;
                strategy.on_exit(&done.vertex)?;
            }
        }
    }

    Ok(visited)
}

struct RecursiveSweep<'a, G: Adjacency, S: ?Sized> {
    graph: &'a G,
    strategy: &'a mut S,
    tags: Vec<isize>,
    visited: VertexSet<G::Key>,
    iteration: isize,
}

impl<G, S> RecursiveSweep<'_, G, S>
where
    G: Adjacency,
    S: DfsStrategy<G::Key> + ?Sized,
{
    fn visit(&mut self, vertex: &G::Key, ix: usize) -> Result<()> {
        self.tags[ix] = self.iteration;
        self.visited.insert(vertex.clone());
        self.strategy.on_entry(vertex)?;

        let graph = self.graph;
        for neighbour in graph.neighbours(vertex)? {
            let neighbour_ix = graph.position(neighbour)?;
            let tag = self.tags[neighbour_ix];
            if tag == 0 {
                self.strategy.on_next_vertex(vertex, neighbour)?;
                self.visit(neighbour, neighbour_ix)?;
            } else if tag.abs() == self.iteration {
                self.strategy.on_edge_to_visited(vertex, neighbour)?;
            }
        }

        self.tags[ix] = -self.iteration;
        self.strategy.on_exit(vertex)
    }
}

/// Depth-first traversal on the call stack. Recursion depth grows with the longest path
/// explored, so prefer [`dfs_iterative`] for large graphs.
pub fn dfs_recursive<G, S, I>(graph: &G, strategy: &mut S, roots: I) -> Result<VertexSet<G::Key>>
where
    G: Adjacency,
    S: DfsStrategy<G::Key> + ?Sized,
    I: IntoIterator<Item = G::Key>,
{
    let mut sweep = RecursiveSweep {
        graph,
        strategy,
        tags: vec![0isize; graph.vertices_count()],
        visited: VertexSet::default(),
        iteration: 0,
    };

    for root in roots {
        let root_ix = graph.position(&root)?;
        if sweep.tags[root_ix] != 0 {
            continue;
        }
        sweep.iteration += 1;
        tracing::trace!(?root, iteration = sweep.iteration, "dfs sweep");

        sweep.strategy.for_root(&root)?;
        sweep.visit(&root, root_ix)?;
    }

    Ok(sweep.visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::graph::{DirectedGraph, UndirectedGraph};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Root(u32),
        Entry(u32),
        Next(u32, u32),
        Exit(u32),
        Visited(u32, u32),
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl BfsStrategy<u32> for Recorder {
        fn for_root(&mut self, root: &u32) -> Result<()> {
            self.events.push(Event::Root(*root));
            Ok(())
        }

        fn on_entry(&mut self, vertex: &u32) -> Result<()> {
            self.events.push(Event::Entry(*vertex));
            Ok(())
        }

        fn on_next_vertex(&mut self, vertex: &u32, neighbour: &u32) -> Result<()> {
            self.events.push(Event::Next(*vertex, *neighbour));
            Ok(())
        }

        fn on_exit(&mut self, vertex: &u32) -> Result<()> {
            self.events.push(Event::Exit(*vertex));
            Ok(())
        }
    }

    impl DfsStrategy<u32> for Recorder {
        fn on_edge_to_visited(&mut self, vertex: &u32, neighbour: &u32) -> Result<()> {
            self.events.push(Event::Visited(*vertex, *neighbour));
            Ok(())
        }
    }

    fn diamond() -> DirectedGraph<u32> {
        let mut g = DirectedGraph::with_vertices(0..5);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(1, 3).unwrap();
        g.add_edge(2, 3).unwrap();
        g.add_edge(3, 0).unwrap();
        g
    }

    #[test]
    fn dfs_reports_post_order_and_visited_edges() {
        use Event::*;

        let g = diamond();
        let mut recorder = Recorder::default();
        let visited = dfs_iterative(&g, &mut recorder, [0, 4]).unwrap();

        assert_eq!(visited.len(), 5);
        assert_eq!(
            recorder.events,
            vec![
                Root(0),
                Entry(0),
                Next(0, 1),
                Entry(1),
                Next(1, 3),
                Entry(3),
                Visited(3, 0),
                Exit(3),
                Exit(1),
                Next(0, 2),
                Entry(2),
                Visited(2, 3),
                Exit(2),
                Exit(0),
                Root(4),
                Entry(4),
                Exit(4),
            ]
        );
    }

    #[test]
    fn iterative_and_recursive_dfs_agree() {
        let g = diamond();
        let mut iterative = Recorder::default();
        let mut recursive = Recorder::default();

        let a = dfs_iterative(&g, &mut iterative, [2, 0, 4, 1]).unwrap();
        let b = dfs_recursive(&g, &mut recursive, [2, 0, 4, 1]).unwrap();

        assert_eq!(a, b);
        assert_eq!(iterative.events, recursive.events);
    }

    #[test]
    fn edges_into_earlier_sweeps_are_silent() {
        let mut g: DirectedGraph<u32> = DirectedGraph::with_vertices(0..2);
        g.add_edge(1, 0).unwrap();

        let mut recorder = Recorder::default();
        dfs_recursive(&g, &mut recorder, [0, 1]).unwrap();

        assert!(
            !recorder
                .events
                .iter()
                .any(|e| matches!(e, Event::Visited(..)))
        );
    }

    #[test]
    fn bfs_visits_by_layers() {
        use Event::*;

        let mut g: UndirectedGraph<u32> = UndirectedGraph::with_vertices(0..4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(1, 3).unwrap();
        g.add_edge(2, 3).unwrap();

        let mut recorder = Recorder::default();
        bfs(&g, &mut recorder, [0]).unwrap();

        assert_eq!(
            recorder.events,
            vec![
                Root(0),
                Entry(0),
                Next(0, 1),
                Next(0, 2),
                Exit(0),
                Entry(1),
                Next(1, 3),
                Exit(1),
                Entry(2),
                Exit(2),
                Entry(3),
                Exit(3),
            ]
        );
    }

    struct FailOn(u32);

    impl BfsStrategy<u32> for FailOn {
        fn on_entry(&mut self, vertex: &u32) -> Result<()> {
            if *vertex == self.0 {
                Err(Error::CyclicGraph)
            } else {
                Ok(())
            }
        }
    }

    impl DfsStrategy<u32> for FailOn {}

    #[test]
    fn hook_errors_stop_the_traversal() {
        let g = diamond();
        assert_eq!(
            dfs_iterative(&g, &mut FailOn(3), [0]),
            Err(Error::CyclicGraph)
        );
        assert_eq!(
            dfs_recursive(&g, &mut FailOn(3), [0]),
            Err(Error::CyclicGraph)
        );
        assert_eq!(bfs(&g, &mut FailOn(3), [0]), Err(Error::CyclicGraph));
    }

    #[test]
    fn unknown_root_is_a_membership_error() {
        let g = diamond();
        let err = bfs(&g, &mut EmptyStrategy, [7]).unwrap_err();
        assert!(matches!(err, Error::VertexNotMember { .. }));
    }
}
