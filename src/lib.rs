pub mod coloring;
pub mod error;
pub mod graph;
pub mod logging;
pub mod report;
pub mod util;

pub use coloring::{check_bipartite, check_bipartite_many, Color, Coloring, Partition};
pub use error::ColoringError;
