use super::{Directed, Graph, VertexKey};

impl<K, V, E> Graph<K, V, E, Directed>
where
    K: VertexKey,
{
    /// Flips every edge in place. Properties stay with their (now reversed) edges.
    pub fn reverse(&mut self) {
        for entry in &mut self.edges {
            entry.edge.flip();
            std::mem::swap(&mut entry.source_ix, &mut entry.destination_ix);
        }
        self.relink_all();
    }

    pub fn reversed_copy(&self) -> Self
    where
        V: Clone,
        E: Clone,
    {
        let mut reversed = self.clone();
        reversed.reverse();
        reversed
    }
}
