/*!
Bipartiteness test with rendered vertex sides.

A two-coloring is proposed by BFS: every component root goes to side A and
every discovered node to the side opposite its parent. The proposal is then
verified against all edges. Side membership is listed in discovery order,
which is what the rendered form exposes.
*/

use std::fmt::{self, Display};

use itertools::Itertools;

use super::traversal::SequencedItem;
use crate::edge::Edge;
use crate::graph::AdjMatrix;
use crate::node::Node;

/// Outcome of a bipartiteness test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BipartitionResult {
    /// Some edge joins two nodes of the same side (self-loops always do).
    NotBipartite,
    /// The two sides, each in BFS discovery order.
    Bipartite { a: Vec<Node>, b: Vec<Node> },
}

impl Display for BipartitionResult {
    /// Renders `NotBipartite` as `0` and a bipartition as
    /// `The graph is bipartite: A={0, 2}, B={1, 3}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BipartitionResult::NotBipartite => write!(f, "0"),
            BipartitionResult::Bipartite { a, b } => write!(
                f,
                "The graph is bipartite: A={{{}}}, B={{{}}}",
                a.iter().join(", "),
                b.iter().join(", ")
            ),
        }
    }
}

/// Splits the nodes into two independent sides if possible.
///
/// The sides are proposed by a BFS two-coloring over all components (roots in
/// ascending order) and accepted once every edge of the matrix joins opposite
/// sides. The empty graph is bipartite with two empty sides; isolated nodes
/// are component roots and therefore all land in side A.
///
/// # Examples
/// ```
/// use mgraphs::prelude::*;
///
/// let path = AdjMatrix::from_matrix(vec![
///     vec![0, 1, 0],
///     vec![1, 0, 1],
///     vec![0, 1, 0],
/// ])
/// .unwrap();
///
/// assert_eq!(
///     algo::compute_bipartition(&path).to_string(),
///     "The graph is bipartite: A={0, 2}, B={1}"
/// );
/// ```
pub fn compute_bipartition(graph: &AdjMatrix) -> BipartitionResult {
    if graph.is_empty() {
        return BipartitionResult::Bipartite {
            a: Vec::new(),
            b: Vec::new(),
        };
    }

    let mut in_a = graph.vertex_bitset_unset();
    let mut a = Vec::new();
    let mut b = Vec::new();

    let mut bfs = graph.bfs_with_predecessor(0);
    loop {
        for item in bfs.by_ref() {
            let (pred, node) = item.predecessor_with_item();
            // component roots land in A, everyone else opposite their parent
            let side_a = match pred {
                None => true,
                Some(p) => !in_a.get_bit(p),
            };
            if side_a {
                in_a.set_bit(node);
                a.push(node);
            } else {
                b.push(node);
            }
        }
        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    let every_edge_crosses = graph
        .edges()
        .all(|(Edge(u, v), _)| in_a.get_bit(u) != in_a.get_bit(v));

    if every_edge_crosses {
        BipartitionResult::Bipartite { a, b }
    } else {
        BipartitionResult::NotBipartite
    }
}

/// Returns *true* if the nodes can be split into two independent sides.
pub fn is_bipartite(graph: &AdjMatrix) -> bool {
    matches!(compute_bipartition(graph), BipartitionResult::Bipartite { .. })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Weight;
    use crate::gens;

    fn graph(rows: Vec<Vec<Weight>>) -> AdjMatrix {
        AdjMatrix::from_matrix(rows).unwrap()
    }

    #[test]
    fn three_node_path() {
        let g = graph(vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        assert_eq!(
            compute_bipartition(&g).to_string(),
            "The graph is bipartite: A={0, 2}, B={1}"
        );
    }

    #[test]
    fn four_node_path() {
        let g = graph(vec![
            vec![0, 1, 0, 0],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 1],
            vec![0, 0, 1, 0],
        ]);
        assert_eq!(
            compute_bipartition(&g).to_string(),
            "The graph is bipartite: A={0, 2}, B={1, 3}"
        );
    }

    #[test]
    fn triangle_plus_tail_is_not_bipartite() {
        let g = graph(vec![
            vec![0, 1, 1, 0],
            vec![1, 0, 1, 0],
            vec![1, 1, 0, 1],
            vec![0, 0, 1, 0],
        ]);
        assert_eq!(compute_bipartition(&g), BipartitionResult::NotBipartite);
        assert_eq!(compute_bipartition(&g).to_string(), "0");
    }

    #[test]
    fn odd_cycle_through_ten_nodes() {
        let g = graph(vec![
            vec![0, 1, 0, 0, 0, 0, 1, 0, 0, 0],
            vec![1, 0, 1, 0, 0, 0, 0, 1, 0, 0],
            vec![0, 1, 0, 1, 0, 0, 0, 0, 1, 0],
            vec![0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            vec![0, 0, 0, 1, 0, 1, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 1, 0, 1, 0, 0, 0],
            vec![1, 0, 0, 0, 0, 1, 0, 1, 0, 0],
            vec![0, 1, 0, 0, 0, 0, 1, 0, 1, 0],
            vec![0, 0, 1, 0, 0, 0, 0, 1, 0, 1],
            vec![0, 0, 0, 1, 0, 0, 0, 0, 1, 0],
        ]);
        assert!(!is_bipartite(&g));
    }

    #[test]
    fn ring_parity_decides() {
        for n in (4..=20).step_by(2) {
            assert!(is_bipartite(&gens::cycle(n)), "even ring of {n}");
        }
        for n in (3..=19).step_by(2) {
            assert!(!is_bipartite(&gens::cycle(n)), "odd ring of {n}");
        }
    }

    #[test]
    fn even_ring_renders_discovery_order() {
        assert_eq!(
            compute_bipartition(&gens::cycle(4)).to_string(),
            "The graph is bipartite: A={0, 2}, B={1, 3}"
        );
    }

    #[test]
    fn empty_graph_has_two_empty_sides() {
        assert_eq!(
            compute_bipartition(&AdjMatrix::new()).to_string(),
            "The graph is bipartite: A={}, B={}"
        );
    }

    #[test]
    fn isolated_nodes_gather_in_side_a() {
        let g = graph(vec![vec![0; 3]; 3]);
        assert_eq!(
            compute_bipartition(&g).to_string(),
            "The graph is bipartite: A={0, 1, 2}, B={}"
        );
    }

    #[test]
    fn components_are_colored_independently() {
        // 0 - 1    2 - 3
        let g = graph(vec![
            vec![0, 1, 0, 0],
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 1, 0],
        ]);
        assert_eq!(
            compute_bipartition(&g).to_string(),
            "The graph is bipartite: A={0, 2}, B={1, 3}"
        );
    }

    #[test]
    fn self_loop_is_never_bipartite() {
        assert!(!is_bipartite(&graph(vec![vec![1]])));
    }

    #[test]
    fn directed_odd_ring_fails_the_edge_check() {
        let g = graph(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]]);
        assert!(!is_bipartite(&g));

        // one-way edge between two nodes is fine
        let g = graph(vec![vec![0, 1], vec![0, 0]]);
        assert_eq!(
            compute_bipartition(&g).to_string(),
            "The graph is bipartite: A={0}, B={1}"
        );
    }
}
