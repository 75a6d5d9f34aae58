//! Lowest common ancestor queries on rooted trees, by binary lifting.
//!
//! The ancestor table is built from one DFS on the first query and reused afterwards. The tree
//! is borrowed for the lifetime of the query object, so it cannot change under a built table.

use std::cell::OnceCell;

use crate::Result;
use crate::graph::{TreeGraph, VertexKey};
use crate::traverse::{self, BfsStrategy, DfsStrategy};

struct AncestorTable<K> {
    keys: Vec<K>,
    pre: Vec<usize>,
    post: Vec<usize>,
    // jumps[v][k] is the 2^k-th ancestor of v; the root is its own ancestor.
    jumps: Vec<Vec<usize>>,
}

impl<K> AncestorTable<K> {
    fn is_ancestor(&self, ancestor: usize, vertex: usize) -> bool {
        self.pre[ancestor] <= self.pre[vertex] && self.post[ancestor] >= self.post[vertex]
    }
}

struct LcaStrategy<'t, K, V, E> {
    tree: &'t TreeGraph<K, V, E>,
    timer: usize,
    pre: Vec<usize>,
    post: Vec<usize>,
    parents: Vec<usize>,
}

impl<K: VertexKey, V, E> BfsStrategy<K> for LcaStrategy<'_, K, V, E> {
    fn for_root(&mut self, root: &K) -> Result<()> {
        let ix = self.tree.position(root)?;
        self.parents[ix] = ix;
        Ok(())
    }

    fn on_entry(&mut self, vertex: &K) -> Result<()> {
        let ix = self.tree.position(vertex)?;
        self.pre[ix] = self.timer;
        self.timer += 1;
        Ok(())
    }

    fn on_next_vertex(&mut self, vertex: &K, neighbour: &K) -> Result<()> {
        let ix = self.tree.position(neighbour)?;
        self.parents[ix] = self.tree.position(vertex)?;
        Ok(())
    }

    fn on_exit(&mut self, vertex: &K) -> Result<()> {
        let ix = self.tree.position(vertex)?;
        self.post[ix] = self.timer;
        self.timer += 1;
        Ok(())
    }
}

impl<K: VertexKey, V, E> DfsStrategy<K> for LcaStrategy<'_, K, V, E> {}

pub struct LowestCommonAncestor<'t, K, V = (), E = ()> {
    tree: &'t TreeGraph<K, V, E>,
    root: K,
    table: OnceCell<AncestorTable<K>>,
}

impl<'t, K, V, E> LowestCommonAncestor<'t, K, V, E>
where
    K: VertexKey,
{
    /// Answers queries for `tree` rooted at its own root.
    pub fn new(tree: &'t TreeGraph<K, V, E>) -> Self {
        Self {
            tree,
            root: tree.root().clone(),
            table: OnceCell::new(),
        }
    }

    /// Answers queries for `tree` re-rooted at `root`.
    pub fn with_root(tree: &'t TreeGraph<K, V, E>, root: K) -> Result<Self> {
        tree.position(&root)?;
        Ok(Self {
            tree,
            root,
            table: OnceCell::new(),
        })
    }

    pub fn root(&self) -> &K {
        &self.root
    }

    fn table(&self) -> Result<&AncestorTable<K>> {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }
        let table = self.build_table()?;
        Ok(self.table.get_or_init(|| table))
    }

    fn build_table(&self) -> Result<AncestorTable<K>> {
        let n = self.tree.vertices_count();
        let mut strategy = LcaStrategy {
            tree: self.tree,
            timer: 0,
            pre: vec![0; n],
            post: vec![0; n],
            parents: (0..n).collect(),
        };
        traverse::dfs_iterative(self.tree, &mut strategy, [self.root.clone()])?;

        let levels = n
            .saturating_sub(1)
            .checked_ilog2()
            .map_or(0, |log| log as usize + 1)
            + 2;
        let mut jumps: Vec<Vec<usize>> = strategy
            .parents
            .iter()
            .map(|&parent| {
                let mut row = Vec::with_capacity(levels);
                row.push(parent);
                row
            })
            .collect();
        for level in 1..levels {
            for vertex in 0..n {
                let half = jumps[vertex][level - 1];
                let full = jumps[half][level - 1];
                jumps[vertex].push(full);
            }
        }

        tracing::debug!(vertices = n, levels, root = ?self.root, "ancestor table");
        Ok(AncestorTable {
            keys: self.tree.vertices().cloned().collect(),
            pre: strategy.pre,
            post: strategy.post,
            jumps,
        })
    }

    /// Whether `ancestor` lies on the path from the root to `vertex`. Every vertex is its own
    /// ancestor.
    pub fn is_ancestor(&self, ancestor: &K, vertex: &K) -> Result<bool> {
        let table = self.table()?;
        Ok(table.is_ancestor(self.tree.position(ancestor)?, self.tree.position(vertex)?))
    }

    /// Deepest vertex that is an ancestor of both `first` and `second`.
    pub fn find(&self, first: &K, second: &K) -> Result<K> {
        let table = self.table()?;
        let mut first_ix = self.tree.position(first)?;
        let second_ix = self.tree.position(second)?;

        if table.is_ancestor(first_ix, second_ix) {
            return Ok(table.keys[first_ix].clone());
        }
        if table.is_ancestor(second_ix, first_ix) {
            return Ok(table.keys[second_ix].clone());
        }
        for level in (0..table.jumps[first_ix].len()).rev() {
            let candidate = table.jumps[first_ix][level];
            if !table.is_ancestor(candidate, second_ix) {
                first_ix = candidate;
            }
        }
        Ok(table.keys[table.jumps[first_ix][0]].clone())
    }
}
