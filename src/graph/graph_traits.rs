//! Traits for graph interfaces

pub type IndexT = u32;

pub trait Graph {
    /// number of nodes
    fn n(&self) -> usize;

    fn neighbors(&self, i: IndexT) -> &[IndexT];

    /// returns the first `(node, neighbor)` entry whose neighbor is not a node of the graph,
    /// scanning nodes in index order and each neighborhood in list order
    fn first_out_of_range(&self) -> Option<(IndexT, IndexT)> {
        let n = self.n() as IndexT;
        (0..n).find_map(|i| {
            self.neighbors(i)
                .iter()
                .find(|&&j| j >= n)
                .map(|&j| (i, j))
        })
    }
}

pub trait MutableGraph {
    fn add_neighbor(&mut self, from: IndexT, to: IndexT);
    fn set_neighborhood(&mut self, i: IndexT, neighborhood: &[IndexT]);
}
