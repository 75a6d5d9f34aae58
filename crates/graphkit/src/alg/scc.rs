//! Strongly connected components (Kosaraju).

use crate::Result;
use crate::alg::sorted_vertices;
use crate::graph::{DirectedGraph, VertexKey, VertexSet};
use crate::traverse::{self, BfsStrategy, DfsStrategy};

struct FinishOrder<K> {
    order: Vec<K>,
}

impl<K: VertexKey> BfsStrategy<K> for FinishOrder<K> {
    fn on_exit(&mut self, vertex: &K) -> Result<()> {
        self.order.push(vertex.clone());
        Ok(())
    }
}

impl<K: VertexKey> DfsStrategy<K> for FinishOrder<K> {}

struct Components<K> {
    components: Vec<VertexSet<K>>,
}

impl<K: VertexKey> BfsStrategy<K> for Components<K> {
    fn for_root(&mut self, _root: &K) -> Result<()> {
        self.components.push(VertexSet::default());
        Ok(())
    }

    fn on_entry(&mut self, vertex: &K) -> Result<()> {
        let Some(component) = self.components.last_mut() else {
            debug_assert!(false, "vertex entered before any root");
            return Ok(());
        };
        component.insert(vertex.clone());
        Ok(())
    }
}

impl<K: VertexKey> DfsStrategy<K> for Components<K> {}

/// Splits `graph` into strongly connected components.
///
/// The first pass records DFS finish order over sweeps started in key order. The second pass
/// walks the reversed graph, taking roots by descending finish time; each sweep there is one
/// component. Components come out in that root order.
pub fn find_scc<K, V, E>(graph: &DirectedGraph<K, V, E>) -> Result<Vec<VertexSet<K>>>
where
    K: VertexKey + Ord,
    V: Clone,
    E: Clone,
{
    let mut finish = FinishOrder {
        order: Vec::with_capacity(graph.vertices_count()),
    };
    traverse::dfs_iterative(graph, &mut finish, sorted_vertices(graph))?;

    let reversed = graph.reversed_copy();
    let mut components = Components {
        components: Vec::new(),
    };
    traverse::dfs_iterative(
        &reversed,
        &mut components,
        finish.order.into_iter().rev(),
    )?;

    tracing::debug!(
        vertices = graph.vertices_count(),
        components = components.components.len(),
        "strongly connected components"
    );
    Ok(components.components)
}
