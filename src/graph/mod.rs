//! Graph implementation and associated functionality


mod graph_traits;
mod labeled_graph;
mod vector_graph;

pub use graph_traits::*;
pub use labeled_graph::*;
pub use vector_graph::*;
