/*!
Shortest paths with per-graph strategy dispatch.

[`shortest_path`] inspects the derived graph flags and picks the cheapest
correct strategy: plain BFS on unweighted matrices, Dijkstra on weighted
matrices without negative entries, and Bellman-Ford as soon as a negative
weight appears. All three strategies fill the same parent array (seeded with
[`INVALID_NODE`]) and share one reconstruction routine, so the rendered path
format is identical no matter which strategy ran.
*/

use std::{
    cmp::Reverse,
    collections::BinaryHeap,
    fmt::{self, Display},
};

use itertools::Itertools;

use super::traversal::SequencedItem;
use crate::edge::{Edge, Weight};
use crate::graph::AdjMatrix;
use crate::node::{INVALID_NODE, Node};

/// Outcome of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// The node sequence from start to end; a single node if both coincide.
    Path(Vec<Node>),
    /// No path exists, or an endpoint is not a node of the graph.
    Unreachable,
    /// The graph contains a negative cycle, so "shortest" is unbounded.
    NegativeCycle,
}

impl Display for PathResult {
    /// Renders `Path` as `0->1->2`, `Unreachable` as `-1` and
    /// `NegativeCycle` as its fixed sentinel line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathResult::Path(path) => write!(f, "{}", path.iter().join("->")),
            PathResult::Unreachable => write!(f, "-1"),
            PathResult::NegativeCycle => write!(f, "Negative cycle detected in the graph"),
        }
    }
}

/// Computes a shortest path from `start` to `end`.
///
/// Unweighted graphs are searched by BFS (fewest hops), weighted graphs by
/// Dijkstra (smallest weight sum), and graphs with negative weights by
/// Bellman-Ford; the latter answers [`PathResult::NegativeCycle`] if a
/// negative cycle is reachable from `start`. Endpoints outside the graph are
/// simply [`PathResult::Unreachable`].
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
/// assert_eq!(algo::shortest_path(&path, 0, 2).to_string(), "0->1->2");
/// assert_eq!(algo::shortest_path(&path, 0, 9).to_string(), "-1");
/// ```
pub fn shortest_path(graph: &AdjMatrix, start: Node, end: Node) -> PathResult {
    let n = graph.number_of_nodes();
    if start >= n || end >= n {
        return PathResult::Unreachable;
    }

    if graph.has_negative_weights() {
        bellman_ford_path(graph, start, end)
    } else if graph.is_weighted() {
        dijkstra_path(graph, start, end)
    } else {
        bfs_path(graph, start, end)
    }
}

/// Walks the parent array from `end` back to `start` and reverses. A hole in
/// the parent chain means `end` was never reached.
fn reconstruct_path(parent: &[Node], start: Node, end: Node) -> PathResult {
    let mut path = vec![end];
    let mut v = end;
    while v != start {
        v = parent[v as usize];
        if v == INVALID_NODE {
            return PathResult::Unreachable;
        }
        path.push(v);
    }
    path.reverse();
    PathResult::Path(path)
}

fn bfs_path(graph: &AdjMatrix, start: Node, end: Node) -> PathResult {
    let mut parent = vec![INVALID_NODE; graph.len()];
    for item in graph.bfs_with_predecessor(start).stop_at(end) {
        if let (Some(pred), node) = item.predecessor_with_item() {
            parent[node as usize] = pred;
        }
    }
    reconstruct_path(&parent, start, end)
}

fn dijkstra_path(graph: &AdjMatrix, start: Node, end: Node) -> PathResult {
    let n = graph.len();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut parent = vec![INVALID_NODE; n];
    let mut queue = BinaryHeap::new();

    dist[start as usize] = Some(0);
    queue.push(Reverse((0, start)));

    while let Some(Reverse((d, u))) = queue.pop() {
        if dist[u as usize].is_some_and(|best| d > best) {
            continue; // stale queue entry
        }
        for v in graph.neighbors_of(u) {
            let candidate = d + graph.weight(u, v);
            if dist[v as usize].map_or(true, |best| candidate < best) {
                dist[v as usize] = Some(candidate);
                parent[v as usize] = u;
                queue.push(Reverse((candidate, v)));
            }
        }
    }

    reconstruct_path(&parent, start, end)
}

fn bellman_ford_path(graph: &AdjMatrix, start: Node, end: Node) -> PathResult {
    let relaxation = Relaxation::run(graph, start);
    if relaxation.find_relaxable_edge(graph).is_some() {
        return PathResult::NegativeCycle;
    }
    reconstruct_path(relaxation.parents(), start, end)
}

/// Bellman-Ford working state: tentative distances (`None` = unreached) and
/// the parent of each node on its current best path.
///
/// Also used by the negative-cycle search, which needs the parent array as it
/// stands after the relaxation rounds.
pub(crate) struct Relaxation {
    dist: Vec<Option<Weight>>,
    parent: Vec<Node>,
}

impl Relaxation {
    /// Runs `n - 1` rounds of relaxation over all edges in row-major order,
    /// starting from `source`. The edge order is fixed, so parents (and with
    /// them every rendered cycle or path) are deterministic.
    pub(crate) fn run(graph: &AdjMatrix, source: Node) -> Self {
        let mut state = Self {
            dist: vec![None; graph.len()],
            parent: vec![INVALID_NODE; graph.len()],
        };
        state.dist[source as usize] = Some(0);

        for _ in 1..graph.len() {
            for (Edge(u, v), w) in graph.edges() {
                state.relax(u, v, w);
            }
        }
        state
    }

    /// Distance `source` to `v` improves going through `(u, v)`?
    fn improvement(&self, u: Node, v: Node, w: Weight) -> Option<Weight> {
        let candidate = self.dist[u as usize]? + w;
        match self.dist[v as usize] {
            Some(best) if candidate >= best => None,
            _ => Some(candidate),
        }
    }

    fn relax(&mut self, u: Node, v: Node, w: Weight) {
        if let Some(candidate) = self.improvement(u, v, w) {
            self.dist[v as usize] = Some(candidate);
            self.parent[v as usize] = u;
        }
    }

    /// First edge in row-major order that one more round would still improve.
    /// Such an edge exists exactly if a negative cycle is reachable from the
    /// source. The edge is reported without applying the improvement.
    pub(crate) fn find_relaxable_edge(&self, graph: &AdjMatrix) -> Option<Edge> {
        graph
            .edges()
            .find(|&(Edge(u, v), w)| self.improvement(u, v, w).is_some())
            .map(|(e, _)| e)
    }

    pub(crate) fn parent(&self, v: Node) -> Node {
        self.parent[v as usize]
    }

    pub(crate) fn parents(&self) -> &[Node] {
        &self.parent
    }
}
