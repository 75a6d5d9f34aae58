use graphkit::traverse::{self, BfsStrategy, DfsStrategy, EmptyStrategy};
use graphkit::{DirectedGraph, Result, TreeGraph, UndirectedGraph, VertexSet};

#[derive(Default)]
struct Log {
    lines: Vec<String>,
}

impl BfsStrategy<u32> for Log {
    fn for_root(&mut self, root: &u32) -> Result<()> {
        self.lines.push(format!("root {root}"));
        Ok(())
    }

    fn on_entry(&mut self, vertex: &u32) -> Result<()> {
        self.lines.push(format!("enter {vertex}"));
        Ok(())
    }

    fn on_next_vertex(&mut self, vertex: &u32, neighbour: &u32) -> Result<()> {
        self.lines.push(format!("tree {vertex} {neighbour}"));
        Ok(())
    }

    fn on_exit(&mut self, vertex: &u32) -> Result<()> {
        self.lines.push(format!("exit {vertex}"));
        Ok(())
    }
}

impl DfsStrategy<u32> for Log {
    fn on_edge_to_visited(&mut self, vertex: &u32, neighbour: &u32) -> Result<()> {
        self.lines.push(format!("visited {vertex} {neighbour}"));
        Ok(())
    }
}

fn tangled() -> DirectedGraph<u32> {
    let mut g = DirectedGraph::with_vertices(0..8);
    for (s, d) in [
        (0, 1),
        (1, 2),
        (2, 0),
        (2, 3),
        (3, 3),
        (4, 3),
        (4, 5),
        (5, 6),
        (6, 4),
        (7, 7),
    ] {
        g.add_edge(s, d).unwrap();
    }
    g
}

#[test]
fn iterative_dfs_replays_recursive_dfs() {
    let g = tangled();
    for roots in [vec![0, 4, 7], vec![7, 6, 5, 4, 3, 2, 1, 0], vec![3, 0, 5]] {
        let mut iterative = Log::default();
        let mut recursive = Log::default();

        let a = traverse::dfs_iterative(&g, &mut iterative, roots.clone()).unwrap();
        let b = traverse::dfs_recursive(&g, &mut recursive, roots).unwrap();

        assert_eq!(a, b);
        assert_eq!(iterative.lines, recursive.lines);
    }
}

#[test]
fn every_vertex_enters_and_exits_once() {
    let g = tangled();
    let mut log = Log::default();
    traverse::dfs_iterative(&g, &mut log, 0..8).unwrap();

    for v in 0..8 {
        let entered = log.lines.iter().filter(|l| **l == format!("enter {v}")).count();
        let exited = log.lines.iter().filter(|l| **l == format!("exit {v}")).count();
        assert_eq!((entered, exited), (1, 1), "vertex {v}");
    }
    assert_eq!(log.lines.iter().filter(|l| l.starts_with("root")).count(), 3);
}

#[test]
fn reached_roots_do_not_start_sweeps() {
    let g = tangled();
    let mut log = Log::default();
    let visited = traverse::bfs(&g, &mut log, [0, 1, 2, 3]).unwrap();

    assert_eq!(log.lines.first().map(String::as_str), Some("root 0"));
    assert_eq!(log.lines.iter().filter(|l| l.starts_with("root")).count(), 1);
    assert_eq!(visited, [0, 1, 2, 3].into_iter().collect::<VertexSet<u32>>());
}

#[test]
fn empty_strategy_answers_reachability() {
    let mut g: UndirectedGraph<&str> = UndirectedGraph::with_vertices(["a", "b", "c", "d"]);
    g.add_edge("a", "b").unwrap();
    g.add_edge("c", "b").unwrap();

    let reached = traverse::bfs(&g, &mut EmptyStrategy, ["a"]).unwrap();
    assert!(reached.contains(&"c"));
    assert!(!reached.contains(&"d"));

    let reached = traverse::dfs_recursive(&g, &mut EmptyStrategy, ["d"]).unwrap();
    assert_eq!(reached.len(), 1);
}

#[test]
fn trees_can_be_traversed_directly() {
    let mut tree: TreeGraph<u32> = TreeGraph::with_root(0);
    tree.add_vertex(1, (), &0, ()).unwrap();
    tree.add_vertex(2, (), &1, ()).unwrap();

    let mut log = Log::default();
    traverse::dfs_iterative(&tree, &mut log, [0]).unwrap();

    assert_eq!(
        log.lines,
        vec![
            "root 0",
            "enter 0",
            "tree 0 1",
            "enter 1",
            "visited 1 0",
            "tree 1 2",
            "enter 2",
            "visited 2 1",
            "exit 2",
            "exit 1",
            "exit 0",
        ]
    );
}

#[test]
fn deep_paths_do_not_overflow_the_iterative_stack() {
    let n = 100_000u32;
    let mut g: DirectedGraph<u32> = DirectedGraph::with_vertices(0..n);
    for v in 1..n {
        g.add_edge(v - 1, v).unwrap();
    }

    let reached = traverse::dfs_iterative(&g, &mut EmptyStrategy, [0]).unwrap();
    assert_eq!(reached.len(), n as usize);
}
