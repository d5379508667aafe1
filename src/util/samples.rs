//! small hardcoded conflict graphs

use crate::graph::{LabeledGraph, VectorGraph};

/// names accepted by `by_name`
pub const SAMPLE_NAMES: [&str; 3] = ["employees", "square", "triangle"];

/// ten employees, each listing the colleagues they conflict with.
///
/// The conflicts form a single 10-cycle, so the employees can be split into two groups.
pub fn employees() -> LabeledGraph {
    let names = vec![
        "Diogo",
        "Paixao",
        "Virna",
        "Caio",
        "Pedro",
        "Carlos",
        "Wiener",
        "Peter",
        "Cristiano Ronaldo",
        "Sam",
    ];

    let conflicts = vec![
        vec![1, 4],
        vec![0, 2],
        vec![1, 5],
        vec![6, 7],
        vec![0, 8],
        vec![2, 9],
        vec![3, 8],
        vec![3, 9],
        vec![4, 6],
        vec![5, 7],
    ];

    LabeledGraph::new(names, VectorGraph::new(conflicts))
}

/// the 4-cycle 0-1-2-3-0
pub fn square() -> LabeledGraph {
    LabeledGraph::unlabeled(VectorGraph::from_undirected_edges(
        4,
        &[(0, 1), (1, 2), (2, 3), (3, 0)],
    ))
}

/// the 3-cycle 0-1-2-0
pub fn triangle() -> LabeledGraph {
    LabeledGraph::unlabeled(VectorGraph::from_undirected_edges(
        3,
        &[(0, 1), (1, 2), (2, 0)],
    ))
}

pub fn by_name(name: &str) -> Option<LabeledGraph> {
    match name {
        "employees" => Some(employees()),
        "square" => Some(square()),
        "triangle" => Some(triangle()),
        _ => None,
    }
}
