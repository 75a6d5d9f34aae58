//! Edge identity.
//!
//! An edge is an ordered `(source, destination)` pair of vertex keys. Undirected graphs keep the
//! orientation the edge was first added with and resolve both orientations to that one edge.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<K> {
    source: K,
    destination: K,
}

impl<K> Edge<K> {
    pub fn new(source: K, destination: K) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn source(&self) -> &K {
        &self.source
    }

    pub fn destination(&self) -> &K {
        &self.destination
    }

    pub fn into_endpoints(self) -> (K, K) {
        (self.source, self.destination)
    }

    pub(in crate::graph) fn flip(&mut self) {
        std::mem::swap(&mut self.source, &mut self.destination);
    }
}

impl<K: PartialEq> Edge<K> {
    /// Returns the endpoint opposite to `vertex`, or `None` if `vertex` is not an endpoint.
    pub fn get(&self, vertex: &K) -> Option<&K> {
        if *vertex == self.source {
            Some(&self.destination)
        } else if *vertex == self.destination {
            Some(&self.source)
        } else {
            None
        }
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl<K: Clone> Edge<K> {
    pub fn reversed(&self) -> Self {
        Self::new(self.destination.clone(), self.source.clone())
    }
}

impl<K: fmt::Debug> fmt::Display for Edge<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.source, self.destination)
    }
}
