//! a graph implementation using a vector of vectors

use itertools::Itertools;

use crate::graph::IndexT;

use super::{Graph, MutableGraph};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VectorGraph {
    neighborhoods: Vec<Vec<IndexT>>,
}

impl VectorGraph {
    /// constructs a new empty VectorGraph with the given number of nodes
    pub fn empty(n: usize) -> VectorGraph {
        VectorGraph {
            neighborhoods: vec![Vec::new(); n],
        }
    }

    /// wraps the given adjacency lists as they are.
    ///
    /// Entries are not checked against the number of nodes; `Graph::first_out_of_range` reports
    /// the first bad entry, and the bipartite check refuses graphs that have one.
    pub fn new(neighborhoods: Vec<Vec<IndexT>>) -> VectorGraph {
        VectorGraph { neighborhoods }
    }

    /// builds an undirected graph, inserting each edge in both directions in the order given
    pub fn from_undirected_edges(n: usize, edges: &[(IndexT, IndexT)]) -> VectorGraph {
        let mut graph = VectorGraph::empty(n);
        for &(u, v) in edges {
            graph.add_neighbor(u, v);
            if u != v {
                graph.add_neighbor(v, u);
            }
        }
        graph
    }

    /// returns the number of nodes in the graph
    pub fn n(&self) -> usize {
        self.neighborhoods.len()
    }

    /// returns the neighborhood of a node
    pub fn get_neighborhood(&self, i: IndexT) -> &[IndexT] {
        assert!(i < self.n() as IndexT);
        &self.neighborhoods[i as usize]
    }

    pub fn degree(&self, i: IndexT) -> usize {
        self.get_neighborhood(i).len()
    }

    /// sum of degrees of all nodes
    pub fn total_edges(&self) -> usize {
        self.neighborhoods.iter().map(|n| n.len()).sum()
    }

    /// maximum degree of the graph
    pub fn max_degree(&self) -> usize {
        self.neighborhoods
            .iter()
            .map(|n| n.len())
            .max()
            .unwrap_or(0)
    }

    /// distinct undirected edges as `(low, high)` pairs, sorted
    pub fn undirected_edges(&self) -> Vec<(IndexT, IndexT)> {
        self.neighborhoods
            .iter()
            .enumerate()
            .flat_map(|(i, neighborhood)| {
                let i = i as IndexT;
                neighborhood.iter().map(move |&j| (i.min(j), i.max(j)))
            })
            .sorted_unstable()
            .dedup()
            .collect()
    }

    /// true if every edge `i -> j` has a matching `j -> i`
    pub fn is_symmetric(&self) -> bool {
        let n = self.n() as IndexT;
        self.neighborhoods.iter().enumerate().all(|(i, neighborhood)| {
            neighborhood
                .iter()
                .all(|&j| j < n && self.neighborhoods[j as usize].contains(&(i as IndexT)))
        })
    }

    pub fn has_self_loops(&self) -> bool {
        self.neighborhoods
            .iter()
            .enumerate()
            .any(|(i, neighborhood)| neighborhood.contains(&(i as IndexT)))
    }
}

impl Graph for VectorGraph {
    fn n(&self) -> usize {
        self.neighborhoods.len()
    }

    fn neighbors(&self, i: IndexT) -> &[IndexT] {
        self.get_neighborhood(i)
    }
}

impl MutableGraph for VectorGraph {
    fn add_neighbor(&mut self, from: IndexT, to: IndexT) {
        assert!(from < self.n() as IndexT && to < self.n() as IndexT);
        self.neighborhoods[from as usize].push(to);
    }

    fn set_neighborhood(&mut self, i: IndexT, neighborhood: &[IndexT]) {
        assert!(i < self.n() as IndexT);
        self.neighborhoods[i as usize] = neighborhood.to_vec();
    }
}

impl From<Vec<Vec<IndexT>>> for VectorGraph {
    fn from(neighborhoods: Vec<Vec<IndexT>>) -> VectorGraph {
        VectorGraph::new(neighborhoods)
    }
}
