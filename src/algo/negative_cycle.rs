/*!
Negative-cycle detection via Bellman-Ford.

After the usual `n - 1` relaxation rounds (shared with the shortest-path
module) one more scan over the edges is made: an edge that still improves a
distance proves a negative cycle reachable from node `0`. The cycle itself is
recovered from the parent array by following parents from that edge's head
until a node repeats.
*/

use std::fmt::{self, Display};

use itertools::Itertools;

use super::cycle::is_acyclic;
use super::shortest_path::Relaxation;
use crate::edge::Edge;
use crate::graph::AdjMatrix;
use crate::node::{INVALID_NODE, Node};

/// Outcome of a negative-cycle search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegativeCycleResult {
    /// No negative cycle is reachable from node `0`.
    NotFound,
    /// A closed walk of negative total weight, e.g. `[1, 2, 3, 0, 1]`.
    Found(Vec<Node>),
}

impl Display for NegativeCycleResult {
    /// Renders `NotFound` as `0` and a found cycle as
    /// `The negative weight cycle is: 1->2->3->0->1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NegativeCycleResult::NotFound => write!(f, "0"),
            NegativeCycleResult::Found(cycle) => {
                write!(f, "The negative weight cycle is: {}", cycle.iter().join("->"))
            }
        }
    }
}

/// Searches for a cycle of negative total weight reachable from node `0`.
///
/// Graphs without any cycle (including the empty graph) are rejected up
/// front. Two-node walks are the directed shadow of a single symmetric
/// negative edge rather than a real tour and count as
/// [`NegativeCycleResult::NotFound`], as does a parent chain that runs off
/// the shortest-path tree before closing.
///
/// # Examples
/// ```
/// use mgraphs::prelude::*;
///
/// let g = AdjMatrix::from_matrix(vec![
///     vec![0, -1, 7, 8],
///     vec![10, 0, -1, 6],
///     vec![9, 9, 0, -1],
///     vec![-1, 7, 8, 0],
/// ])
/// .unwrap();
///
/// assert_eq!(
///     algo::find_negative_cycle(&g).to_string(),
///     "The negative weight cycle is: 1->2->3->0->1"
/// );
/// ```
pub fn find_negative_cycle(graph: &AdjMatrix) -> NegativeCycleResult {
    // also keeps the empty graph out of the relaxation below
    if is_acyclic(graph) {
        return NegativeCycleResult::NotFound;
    }

    let relaxation = Relaxation::run(graph, 0);
    let Some(Edge(_, v)) = relaxation.find_relaxable_edge(graph) else {
        return NegativeCycleResult::NotFound;
    };

    // follow the parents from v until a node repeats; the repeated node is
    // guaranteed to lie on the parent cycle
    let mut seen = graph.vertex_bitset_unset();
    let mut anchor = v;
    while !seen.get_bit(anchor) {
        seen.set_bit(anchor);
        anchor = relaxation.parent(anchor);
        if anchor == INVALID_NODE {
            return NegativeCycleResult::NotFound;
        }
    }

    let mut cycle = vec![anchor];
    let mut cur = relaxation.parent(anchor);
    while cur != anchor {
        cycle.push(cur);
        cur = relaxation.parent(cur);
    }
    cycle.push(anchor);
    cycle.reverse();

    if cycle.len() < 4 {
        return NegativeCycleResult::NotFound;
    }

    NegativeCycleResult::Found(cycle)
}
