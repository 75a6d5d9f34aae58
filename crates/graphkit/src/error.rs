use crate::graph::Edge;
use std::fmt::Debug;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("vertex {vertex} is not a member of this graph")]
    VertexNotMember { vertex: String },

    #[error("edge {edge} is not a member of this graph")]
    EdgeNotMember { edge: String },

    #[error("graph contains a cycle")]
    CyclicGraph,

    #[error("graph contains a cycle with negative total weight")]
    NegativeCycle,

    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight { edge: String, weight: f64 },
}

impl Error {
    pub(crate) fn vertex_not_member<K: Debug>(vertex: &K) -> Self {
        Self::VertexNotMember {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn edge_not_member<K: Debug>(edge: &Edge<K>) -> Self {
        Self::EdgeNotMember {
            edge: edge.to_string(),
        }
    }

    pub(crate) fn negative_weight<K: Debug>(edge: &Edge<K>, weight: f64) -> Self {
        Self::NegativeWeight {
            edge: edge.to_string(),
            weight,
        }
    }
}
