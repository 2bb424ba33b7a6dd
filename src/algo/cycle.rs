/*!
Cycle detection via depth-first search.

The search keeps an explicit stack of frames, one per node with an open
neighbor iterator, which emulates the call stack of a recursive DFS without
ever touching the real one. A neighbor that is already visited and is not the
tree parent of the current node closes a cycle; the parent array then yields
the closed walk.
*/

use std::fmt::{self, Display};

use itertools::Itertools;

use crate::graph::{AdjMatrix, Neighbors};
use crate::node::{INVALID_NODE, Node};

/// Outcome of a cycle search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleResult {
    /// No cycle anywhere in the graph.
    Acyclic,
    /// A closed walk with identical first and last node, e.g. `[3, 0, 1, 2, 3]`.
    Found(Vec<Node>),
}

impl Display for CycleResult {
    /// Renders `Acyclic` as `0` and a found cycle as
    /// `The cycle is: 3->0->1->2->3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleResult::Acyclic => write!(f, "0"),
            CycleResult::Found(cycle) => {
                write!(f, "The cycle is: {}", cycle.iter().join("->"))
            }
        }
    }
}

struct StackFrame<'a> {
    node: Node,
    neighbors: Neighbors<'a>,
}

/// Searches the graph for a cycle and returns the first one discovered in
/// DFS order (components in ascending root order, neighbors ascending).
///
/// A visited neighbor other than the tree parent closes a cycle; the cycle is
/// read off the discovery parents from the back edge's endpoints. Self-loops
/// are reported as the two-node walk `v->v`. On asymmetric matrices a back
/// edge may lead to an already finished branch instead of an ancestor; such
/// an edge closes no walk through the parent array and the search moves on.
///
/// # Examples
/// ```
/// use mgraphs::prelude::*;
///
/// let ring = AdjMatrix::from_matrix(vec![
///     vec![0, 1, 0, 1],
///     vec![1, 0, 1, 0],
///     vec![0, 1, 0, 1],
///     vec![1, 0, 1, 0],
/// ])
/// .unwrap();
///
/// assert_eq!(
///     algo::find_cycle(&ring).to_string(),
///     "The cycle is: 3->0->1->2->3"
/// );
/// ```
pub fn find_cycle(graph: &AdjMatrix) -> CycleResult {
    let mut visited = graph.vertex_bitset_unset();
    let mut parent = vec![INVALID_NODE; graph.len()];
    let mut stack: Vec<StackFrame> = Vec::new();

    for root in graph.vertices() {
        if visited.get_bit(root) {
            continue;
        }
        visited.set_bit(root);
        stack.push(StackFrame {
            node: root,
            neighbors: graph.neighbors_of(root),
        });

        while let Some(frame) = stack.last_mut() {
            let v = frame.node;
            match frame.neighbors.next() {
                None => {
                    stack.pop();
                }
                Some(i) if !visited.get_bit(i) => {
                    visited.set_bit(i);
                    parent[i as usize] = v;
                    stack.push(StackFrame {
                        node: i,
                        neighbors: graph.neighbors_of(i),
                    });
                }
                Some(i) if i == parent[v as usize] => {} // the tree edge we came by
                Some(i) => {
                    // back edge from v to i
                    if let Some(cycle) = close_walk(&parent, i, v) {
                        return CycleResult::Found(cycle);
                    }
                }
            }
        }
    }

    CycleResult::Acyclic
}

/// Returns *true* if the graph contains no cycle at all.
pub fn is_acyclic(graph: &AdjMatrix) -> bool {
    matches!(find_cycle(graph), CycleResult::Acyclic)
}

/// Walks the parents from `cycle_end` up to `cycle_start` and closes the
/// walk. `None` if the chain runs off the tree before reaching `cycle_start`.
fn close_walk(parent: &[Node], cycle_start: Node, cycle_end: Node) -> Option<Vec<Node>> {
    let mut cycle = Vec::new();
    let mut v = cycle_end;
    while v != cycle_start {
        if v == INVALID_NODE {
            return None;
        }
        cycle.push(v);
        v = parent[v as usize];
    }
    cycle.push(cycle_start);
    cycle.push(cycle_end);
    cycle.reverse();
    Some(cycle)
}
