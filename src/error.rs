use thiserror::Error;

use crate::graph::IndexT;

/// Ways a two-coloring can fail to come back from `check_bipartite`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColoringError {
    /// The graph has an odd cycle; `vertex -> neighbor` is the edge where two equal colors met.
    #[error("graph is not bipartite: edge {vertex} -> {neighbor} joins two nodes of the same color")]
    NotBipartite { vertex: IndexT, neighbor: IndexT },

    #[error("invalid graph: node {vertex} lists neighbor {neighbor}, but the graph has {n} nodes")]
    InvalidGraph {
        vertex: IndexT,
        neighbor: IndexT,
        n: usize,
    },
}

impl ColoringError {
    pub fn is_not_bipartite(&self) -> bool {
        matches!(self, ColoringError::NotBipartite { .. })
    }
}
