use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::graph::{MutableGraph, VectorGraph};
use crate::util::generators::{complete_bipartite, cycle, path, random_bipartite, random_graph};
use crate::util::{connectivity, samples};

fn ids(v: &[u32]) -> Vec<IndexT> {
    v.to_vec()
}

/// disjoint union of two graphs, `b`'s nodes shifted past `a`'s
fn disjoint_union(a: &VectorGraph, b: &VectorGraph) -> VectorGraph {
    let offset = a.n() as IndexT;
    let mut neighborhoods: Vec<Vec<IndexT>> =
        (0..a.n() as IndexT).map(|i| a.get_neighborhood(i).to_vec()).collect();
    neighborhoods.extend(
        (0..b.n() as IndexT).map(|i| b.get_neighborhood(i).iter().map(|&j| j + offset).collect()),
    );
    VectorGraph::new(neighborhoods)
}

#[test]
fn square_splits_into_opposite_corners() {
    let coloring = check_bipartite(&samples::square()).unwrap();
    let partition = coloring.partition();
    assert_eq!(partition.group(Color::Zero), ids(&[0, 2]));
    assert_eq!(partition.group(Color::One), ids(&[1, 3]));
    assert_eq!(coloring.component_count(), 1);
}

#[test]
fn triangle_is_not_bipartite() {
    // 0 colors 1 and 2 alike, the conflict shows up when 1 is expanded
    let result = check_bipartite(&samples::triangle());
    assert_eq!(
        result,
        Err(ColoringError::NotBipartite {
            vertex: 1,
            neighbor: 2
        })
    );
}

#[test]
fn employees_follow_bfs_order() {
    let sample = samples::employees();
    let coloring = check_bipartite(&sample).unwrap();

    assert_eq!(coloring.visit_order(), &[0, 1, 4, 2, 8, 5, 6, 9, 3, 7]);

    let [first, second] = coloring.partition().into_groups();
    assert_eq!(first, ids(&[0, 2, 3, 8, 9]));
    assert_eq!(second, ids(&[1, 4, 5, 6, 7]));
    assert!(coloring.is_proper(&sample));
}

#[test]
fn empty_graph_is_bipartite() {
    let coloring = check_bipartite(&VectorGraph::empty(0)).unwrap();
    assert!(coloring.is_empty());
    assert_eq!(coloring.component_count(), 0);
    assert!(coloring.visit_order().is_empty());
}

#[test]
fn isolated_nodes_are_their_own_components() {
    let coloring = check_bipartite(&VectorGraph::empty(5)).unwrap();
    assert_eq!(coloring.component_count(), 5);
    assert!(coloring.colors().iter().all(|&c| c == Color::Zero));
    for i in 0..5 {
        assert_eq!(coloring.component(i), i as usize);
    }
}

#[test]
fn self_loop_is_not_bipartite() {
    let graph = VectorGraph::new(vec![vec![1], vec![0, 1]]);
    assert_eq!(
        check_bipartite(&graph),
        Err(ColoringError::NotBipartite {
            vertex: 1,
            neighbor: 1
        })
    );
}

#[test]
fn out_of_range_neighbor_is_invalid() {
    let graph = VectorGraph::new(vec![vec![1], vec![0, 5]]);
    assert_eq!(
        check_bipartite(&graph),
        Err(ColoringError::InvalidGraph {
            vertex: 1,
            neighbor: 5,
            n: 2
        })
    );
}

#[test]
fn invalid_graph_is_reported_before_conflicts() {
    // node 0 has a self-loop, but node 1's bad entry wins because nothing is colored first
    let graph = VectorGraph::new(vec![vec![0], vec![7]]);
    assert!(matches!(
        check_bipartite(&graph),
        Err(ColoringError::InvalidGraph { neighbor: 7, .. })
    ));
}

#[test]
fn one_bad_component_fails_the_whole_graph() {
    let graph = disjoint_union(&cycle(4), &cycle(5));
    let result = check_bipartite(&graph);
    assert!(result.unwrap_err().is_not_bipartite());

    let graph = disjoint_union(&cycle(5), &cycle(4));
    assert!(check_bipartite(&graph).unwrap_err().is_not_bipartite());
}

#[test]
fn components_are_colored_independently() {
    let graph = disjoint_union(&path(3), &complete_bipartite(2, 2));
    let coloring = check_bipartite(&graph).unwrap();

    assert_eq!(coloring.component_count(), 2);
    assert!(coloring.is_proper(&graph));
    // each component root gets color zero
    assert_eq!(coloring.color(0), Color::Zero);
    assert_eq!(coloring.color(3), Color::Zero);
    assert_eq!(coloring.partition().group(Color::Zero), ids(&[0, 2, 3, 4]));

    let mut dsu = connectivity(&graph);
    for i in 0..graph.n() {
        for j in 0..graph.n() {
            assert_eq!(
                coloring.component(i as IndexT) == coloring.component(j as IndexT),
                dsu.same(i, j)
            );
        }
    }
}

#[test]
fn directed_cycle_is_caught_from_one_side() {
    // 0 -> 1 -> 2 -> 0
    let graph = VectorGraph::new(vec![vec![1], vec![2], vec![0]]);
    assert!(!graph.is_symmetric());
    assert_eq!(
        check_bipartite(&graph),
        Err(ColoringError::NotBipartite {
            vertex: 2,
            neighbor: 0
        })
    );
}

#[test]
fn asymmetric_edges_are_only_seen_forward() {
    // 0 -> 1 and 2 -> 1: node 2 is not reachable from 0, so it roots a second component
    let graph = VectorGraph::new(vec![vec![1], vec![], vec![1]]);
    let coloring = check_bipartite(&graph).unwrap();
    assert_eq!(coloring.colors(), &[Color::Zero, Color::One, Color::Zero]);
    assert_eq!(coloring.component_count(), 2);
    assert_eq!(coloring.component(1), 0);
    assert_eq!(coloring.component(2), 1);
}

#[test]
fn swapping_a_component_keeps_the_coloring_proper() {
    let graph = disjoint_union(&cycle(4), &path(2));
    let coloring = check_bipartite(&graph).unwrap();

    let swapped = coloring.swapped_component(1);
    assert!(swapped.is_proper(&graph));
    assert_eq!(swapped.color(4), Color::One);
    assert_eq!(swapped.color(5), Color::Zero);
    assert_eq!(swapped.color(0), coloring.color(0));
    assert_eq!(swapped.swapped_component(1), coloring);
}

#[test]
fn proper_check_rejects_same_colored_edges() {
    let mut graph = path(3);
    let coloring = check_bipartite(&graph).unwrap();
    graph.add_neighbor(0, 2);
    assert!(!coloring.is_proper(&graph));
    assert!(!coloring.is_proper(&path(4)));
}

#[test]
fn color_flip_and_index() {
    assert_eq!(Color::Zero.flip(), Color::One);
    assert_eq!(Color::One.flip().flip(), Color::One);
    assert_eq!(Color::Zero.index(), 0);
    assert_eq!(Color::One.index(), 1);
}

#[test]
fn many_keeps_input_order() {
    let graphs = vec![cycle(4), cycle(3), VectorGraph::empty(2), cycle(7), cycle(8)];
    let verdicts: Vec<bool> = check_bipartite_many(&graphs)
        .iter()
        .map(|r| r.is_ok())
        .collect();
    assert_eq!(verdicts, vec![true, false, true, false, true]);
}

proptest! {
    #[test]
    fn edgeless_graphs_accept_any_coloring(n in 0usize..40, swaps in proptest::collection::vec(any::<prop::sample::Index>(), 0..10)) {
        let graph = VectorGraph::empty(n);
        let mut coloring = check_bipartite(&graph).unwrap();
        prop_assert_eq!(coloring.component_count(), n);
        if n > 0 {
            for swap in swaps {
                coloring = coloring.swapped_component(swap.index(n));
                prop_assert!(coloring.is_proper(&graph));
            }
        }
    }

    #[test]
    fn odd_cycles_are_rejected(k in 1usize..60, tail in 0usize..5) {
        // an odd cycle with a path hanging off node 0
        let n = 2 * k + 1;
        let mut graph = disjoint_union(&cycle(n), &path(tail));
        if tail > 0 {
            graph.add_neighbor(0, n as IndexT);
            graph.add_neighbor(n as IndexT, 0);
        }
        let err = check_bipartite(&graph).unwrap_err();
        prop_assert!(err.is_not_bipartite());
    }

    #[test]
    fn even_cycles_alternate(k in 2usize..60) {
        let graph = cycle(2 * k);
        let coloring = check_bipartite(&graph).unwrap();
        prop_assert!(coloring.is_proper(&graph));
        let partition = coloring.partition();
        prop_assert_eq!(partition.group(Color::Zero).len(), k);
        prop_assert!(partition.group(Color::Zero).iter().all(|&i| i % 2 == 0));
    }

    #[test]
    fn trees_are_bipartite(parents in proptest::collection::vec(any::<prop::sample::Index>(), 0..80)) {
        // node i + 1 hangs off some node in 0..=i
        let n = parents.len() + 1;
        let edges: Vec<(IndexT, IndexT)> = parents
            .iter()
            .enumerate()
            .map(|(i, parent)| (parent.index(i + 1) as IndexT, (i + 1) as IndexT))
            .collect();
        let graph = VectorGraph::from_undirected_edges(n, &edges);
        let coloring = check_bipartite(&graph).unwrap();
        prop_assert!(coloring.is_proper(&graph));
        prop_assert_eq!(coloring.component_count(), 1);
    }

    #[test]
    fn hidden_splits_are_found(seed in any::<u64>(), a in 1usize..30, b in 1usize..30, m in 0usize..120) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_bipartite(a, b, m, &mut rng);
        let coloring = check_bipartite(&graph).unwrap();
        prop_assert!(coloring.is_proper(&graph));
    }

    #[test]
    fn verdicts_are_consistent(seed in any::<u64>(), n in 0usize..60, degree in 0usize..5) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(n, degree, &mut rng);

        let first = check_bipartite(&graph);
        prop_assert_eq!(&first, &check_bipartite(&graph));

        match first {
            Ok(coloring) => prop_assert!(coloring.is_proper(&graph)),
            Err(ColoringError::NotBipartite { vertex, neighbor }) => {
                prop_assert!(graph.get_neighborhood(vertex).contains(&neighbor));
            }
            Err(err) => prop_assert!(false, "unexpected error {}", err),
        }
    }
}
