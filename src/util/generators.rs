//! structured and random graph generators
//!
//! Every generator inserts edges in both directions, so the output is symmetric.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::{IndexT, VectorGraph};

/// the cycle 0-1-...-(n-1)-0; for n < 3 this degenerates to a path
pub fn cycle(n: usize) -> VectorGraph {
    let mut edges: Vec<(IndexT, IndexT)> = (1..n).map(|i| ((i - 1) as IndexT, i as IndexT)).collect();
    if n >= 3 {
        edges.push(((n - 1) as IndexT, 0));
    }
    VectorGraph::from_undirected_edges(n, &edges)
}

/// the path 0-1-...-(n-1)
pub fn path(n: usize) -> VectorGraph {
    let edges: Vec<(IndexT, IndexT)> = (1..n).map(|i| ((i - 1) as IndexT, i as IndexT)).collect();
    VectorGraph::from_undirected_edges(n, &edges)
}

/// every node in `0..a` joined to every node in `a..a + b`
pub fn complete_bipartite(a: usize, b: usize) -> VectorGraph {
    let mut edges = Vec::with_capacity(a * b);
    for i in 0..a {
        for j in a..a + b {
            edges.push((i as IndexT, j as IndexT));
        }
    }
    VectorGraph::from_undirected_edges(a + b, &edges)
}

/// `num_edges` random edges, each between one of `a` hidden "left" nodes and one of `b` hidden
/// "right" nodes. The sides are shuffled over the node indices, so the split is not visible
/// from the numbering. Repeated edges are possible.
pub fn random_bipartite<R: Rng + ?Sized>(
    a: usize,
    b: usize,
    num_edges: usize,
    rng: &mut R,
) -> VectorGraph {
    let n = a + b;
    if a == 0 || b == 0 {
        return VectorGraph::empty(n);
    }

    let mut ids: Vec<IndexT> = (0..n as IndexT).collect();
    ids.shuffle(rng);
    let (left, right) = ids.split_at(a);

    let edges: Vec<(IndexT, IndexT)> = (0..num_edges)
        .map(|_| {
            let u = left[rng.random_range(0..a)];
            let v = right[rng.random_range(0..b)];
            (u, v)
        })
        .collect();
    VectorGraph::from_undirected_edges(n, &edges)
}

/// roughly `n * avg_degree / 2` uniformly random edges without self-loops
pub fn random_graph<R: Rng + ?Sized>(n: usize, avg_degree: usize, rng: &mut R) -> VectorGraph {
    if n < 2 {
        return VectorGraph::empty(n);
    }

    let num_edges = n * avg_degree / 2;
    let mut edges = Vec::with_capacity(num_edges);
    while edges.len() < num_edges {
        let u = rng.random_range(0..n as IndexT);
        let v = rng.random_range(0..n as IndexT);
        if u != v {
            edges.push((u, v));
        }
    }
    VectorGraph::from_undirected_edges(n, &edges)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn cycle_has_n_edges() {
        let g = cycle(5);
        assert_eq!(g.undirected_edges().len(), 5);
        assert!((0..5).all(|i| g.degree(i) == 2));
        assert!(g.is_symmetric());
    }

    #[test]
    fn small_cycles_are_paths() {
        assert_eq!(cycle(2), path(2));
        assert_eq!(cycle(1).total_edges(), 0);
        assert_eq!(cycle(0).n(), 0);
    }

    #[test]
    fn complete_bipartite_degrees() {
        let g = complete_bipartite(2, 3);
        assert_eq!(g.n(), 5);
        assert_eq!(g.degree(0), 3);
        assert_eq!(g.degree(4), 2);
        assert_eq!(g.undirected_edges().len(), 6);
    }

    #[test]
    fn random_graphs_are_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = random_graph(50, 4, &mut rng);
        assert!(g.is_symmetric());
        assert!(!g.has_self_loops());
        assert_eq!(g.total_edges(), 50 * 4);

        let g = random_bipartite(20, 30, 100, &mut rng);
        assert!(g.is_symmetric());
        assert_eq!(g.total_edges(), 200);
    }

    #[test]
    fn one_sided_bipartite_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_bipartite(0, 4, 10, &mut rng).total_edges(), 0);
    }
}
