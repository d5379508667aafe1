//! a graph whose nodes carry display labels
//!
//! Labels live in their own arena indexed by `IndexT`; the adjacency is a plain `VectorGraph`.
//! The bipartite check never reads the labels, they only matter when results are presented.

use std::borrow::Cow;

use super::{Graph, IndexT, VectorGraph};

#[derive(Debug, Clone, Default)]
pub struct LabeledGraph {
    labels: Vec<Option<String>>,
    graph: VectorGraph,
}

impl LabeledGraph {
    /// a graph with one label per node
    pub fn new<S: Into<String>>(labels: Vec<S>, graph: VectorGraph) -> LabeledGraph {
        assert_eq!(
            labels.len(),
            graph.n(),
            "expected one label per node"
        );
        LabeledGraph {
            labels: labels.into_iter().map(|l| Some(l.into())).collect(),
            graph,
        }
    }

    /// a graph whose nodes are presented by their index
    pub fn unlabeled(graph: VectorGraph) -> LabeledGraph {
        LabeledGraph {
            labels: vec![None; graph.n()],
            graph,
        }
    }

    pub fn graph(&self) -> &VectorGraph {
        &self.graph
    }

    pub fn n(&self) -> usize {
        self.graph.n()
    }

    /// sets or replaces the label of a single node
    pub fn set_label<S: Into<String>>(&mut self, i: IndexT, label: S) {
        assert!(i < self.n() as IndexT);
        self.labels[i as usize] = Some(label.into());
    }

    /// the label of a node, falling back to its index when it has none
    pub fn label(&self, i: IndexT) -> Cow<'_, str> {
        assert!(i < self.n() as IndexT);
        match &self.labels[i as usize] {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => Cow::Owned(i.to_string()),
        }
    }

    /// finds a node by its label
    pub fn find(&self, label: &str) -> Option<IndexT> {
        self.labels
            .iter()
            .position(|l| l.as_deref() == Some(label))
            .map(|i| i as IndexT)
    }
}

impl Graph for LabeledGraph {
    fn n(&self) -> usize {
        self.graph.n()
    }

    fn neighbors(&self, i: IndexT) -> &[IndexT] {
        self.graph.get_neighborhood(i)
    }
}
