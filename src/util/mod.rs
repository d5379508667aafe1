use crate::graph::{Graph, IndexT};

pub mod generators;
pub mod samples;

pub struct DSU {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl DSU {
    /// Create `n` singleton sets: 0, 1, …, n-1.
    pub fn new(n: usize) -> Self {
        DSU {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Find the set representative for `x`, compressing paths.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Union the sets containing `x` and `y`.
    pub fn union(&mut self, x: usize, y: usize) {
        let mut a = self.find(x);
        let mut b = self.find(y);
        if a == b {
            return;
        }

        // attach smaller rank tree under the higher-rank one
        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        if self.rank[a] == self.rank[b] {
            self.rank[a] += 1;
        }
    }

    /// Check if `x` and `y` are in the same set.
    pub fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// number of distinct sets
    pub fn count(&mut self) -> usize {
        (0..self.parent.len()).filter(|&i| self.find(i) == i).count()
    }
}

/// unions the endpoints of every edge of `graph`, treating edges as undirected.
///
/// Neighbors outside the graph are skipped.
pub fn connectivity<G: Graph + ?Sized>(graph: &G) -> DSU {
    let n = graph.n();
    let mut dsu = DSU::new(n);
    for i in 0..n as IndexT {
        for &j in graph.neighbors(i) {
            if (j as usize) < n {
                dsu.union(i as usize, j as usize);
            }
        }
    }
    dsu
}

/// number of connected components of `graph`, edges taken as undirected
pub fn count_components<G: Graph + ?Sized>(graph: &G) -> usize {
    connectivity(graph).count()
}
