//! Two-coloring of graphs by breadth-first search
//!
//! `check_bipartite` tries to split the nodes of a graph into two groups such that no edge joins
//! two nodes of the same group. Components are discovered in node index order, each one is
//! rooted at its lowest unvisited node (which always gets `Color::Zero`) and explored with a
//! FIFO queue, scanning neighborhoods in list order. Together these fix which of the valid
//! colorings comes back.

use std::collections::VecDeque;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::ColoringError;
use crate::graph::{Graph, IndexT};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Zero,
    One,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Zero => Color::One,
            Color::One => Color::Zero,
        }
    }

    /// 0 or 1, usable as a group index
    pub fn index(self) -> usize {
        match self {
            Color::Zero => 0,
            Color::One => 1,
        }
    }
}

/// A complete, valid two-coloring produced by `check_bipartite`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colors: Box<[Color]>,
    components: Box<[usize]>,
    visit_order: Box<[IndexT]>,
    component_count: usize,
}

impl Coloring {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, i: IndexT) -> Color {
        self.colors[i as usize]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// nodes in the order they were taken off the BFS queue
    pub fn visit_order(&self) -> &[IndexT] {
        &self.visit_order
    }

    /// component of a node; components are numbered in the order they were discovered
    pub fn component(&self, i: IndexT) -> usize {
        self.components[i as usize]
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// groups the nodes by color, each group in ascending index order
    pub fn partition(&self) -> Partition {
        let mut groups: [Vec<IndexT>; 2] = [Vec::new(), Vec::new()];
        for (i, color) in self.colors.iter().enumerate() {
            groups[color.index()].push(i as IndexT);
        }
        Partition { groups }
    }

    /// true if every edge of `graph` joins nodes of different colors
    pub fn is_proper<G: Graph + ?Sized>(&self, graph: &G) -> bool {
        graph.n() == self.len()
            && (0..graph.n() as IndexT).all(|i| {
                graph
                    .neighbors(i)
                    .iter()
                    .all(|&j| (j as usize) < self.len() && self.color(i) != self.color(j))
            })
    }

    /// the same coloring with both colors exchanged inside one component.
    ///
    /// The result is as valid as `self`; every valid coloring of the graph is reachable from any
    /// other by swapping some set of components.
    pub fn swapped_component(&self, component: usize) -> Coloring {
        let colors = self
            .colors
            .iter()
            .zip(self.components.iter())
            .map(|(&color, &c)| if c == component { color.flip() } else { color })
            .collect();
        Coloring {
            colors,
            ..self.clone()
        }
    }
}

/// The two groups of a coloring: `groups[0]` holds the `Color::Zero` nodes, `groups[1]` the
/// `Color::One` nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition {
    groups: [Vec<IndexT>; 2],
}

impl Partition {
    pub fn group(&self, color: Color) -> &[IndexT] {
        &self.groups[color.index()]
    }

    pub fn groups(&self) -> &[Vec<IndexT>; 2] {
        &self.groups
    }

    pub fn into_groups(self) -> [Vec<IndexT>; 2] {
        self.groups
    }
}

/// Two-colors `graph` or reports why it cannot be done.
///
/// Fails with `ColoringError::InvalidGraph` before coloring anything if some neighborhood names a
/// node outside the graph, and with `ColoringError::NotBipartite` as soon as an edge between two
/// nodes of the same color is seen. No partial coloring is returned on either path. A self-loop
/// is always a `NotBipartite`. Symmetry of the adjacency is not required: each edge is only
/// examined from the node whose list contains it.
pub fn check_bipartite<G: Graph + ?Sized>(graph: &G) -> Result<Coloring, ColoringError> {
    let n = graph.n();
    if let Some((vertex, neighbor)) = graph.first_out_of_range() {
        debug!(vertex, neighbor, n, "neighbor out of range");
        return Err(ColoringError::InvalidGraph {
            vertex,
            neighbor,
            n,
        });
    }

    let mut colors: Vec<Option<Color>> = vec![None; n];
    let mut components = vec![0; n];
    let mut visit_order = Vec::with_capacity(n);
    let mut component_count = 0;
    let mut queue: VecDeque<(IndexT, Color)> = VecDeque::new();

    for start in 0..n as IndexT {
        if colors[start as usize].is_some() {
            continue;
        }

        debug!(start, component = component_count, "new component");
        colors[start as usize] = Some(Color::Zero);
        components[start as usize] = component_count;
        queue.push_back((start, Color::Zero));

        while let Some((node, color)) = queue.pop_front() {
            visit_order.push(node);

            for &neighbor in graph.neighbors(node) {
                match colors[neighbor as usize] {
                    None => {
                        let next = color.flip();
                        trace!(node = neighbor, color = ?next, "colored");
                        colors[neighbor as usize] = Some(next);
                        components[neighbor as usize] = component_count;
                        queue.push_back((neighbor, next));
                    }
                    Some(existing) if existing == color => {
                        debug!(node, neighbor, "conflict between same-colored nodes");
                        return Err(ColoringError::NotBipartite {
                            vertex: node,
                            neighbor,
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        component_count += 1;
    }

    // every node was rooted or reached, so nothing is left unassigned
    let colors: Box<[Color]> = colors.into_iter().flatten().collect();
    debug_assert_eq!(colors.len(), n);

    Ok(Coloring {
        colors,
        components: components.into_boxed_slice(),
        visit_order: visit_order.into_boxed_slice(),
        component_count,
    })
}

/// Runs `check_bipartite` on every graph in parallel. Results are in input order.
pub fn check_bipartite_many<G: Graph + Sync>(graphs: &[G]) -> Vec<Result<Coloring, ColoringError>> {
    graphs.par_iter().map(|g| check_bipartite(g)).collect()
}
