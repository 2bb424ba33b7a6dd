/*!
Graph traversal iterators.

This module provides the BFS/DFS machinery (with and without predecessor
tracking) that the query algorithms of this crate are built on. Traversals are
lazy iterators over an explicit frontier, so no algorithm in this crate ever
recurses; deep graphs cannot exhaust the call stack.

Since there is exactly one graph representation, the iterators are generic only
over the frontier container (queue vs. stack) and the yielded item type.
*/

use std::{collections::VecDeque, marker::PhantomData};

use crate::graph::AdjMatrix;
use crate::node::{Node, NodeBitSet};

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`] — stores only the node (no predecessor information).
/// - [`PredecessorOfNode`] — stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)` where the predecessor
    /// may be `None` if not tracked.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }

    fn item(&self) -> Node {
        self.1
    }

    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 {
            None
        } else {
            Some(self.0)
        }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// nodes during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T>
where
    T: Clone,
{
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T>
where
    T: Clone,
{
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit "frontier" (queue or stack) of nodes to visit,
/// a set of visited nodes, and optionally records predecessor information.
/// Neighbors are expanded in ascending order, so every traversal of this
/// crate is deterministic.
pub struct TraversalSearch<'a, S, I>
where
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a AdjMatrix,
    visited: NodeBitSet,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a> = TraversalSearch<'a, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a> = TraversalSearch<'a, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a> =
    TraversalSearch<'a, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DFSWithPredecessor<'a> = TraversalSearch<'a, Vec<PredecessorOfNode>, PredecessorOfNode>;

impl<S, I> Iterator for TraversalSearch<'_, S, I>
where
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.get_bit(v) {
                    self.visited.set_bit(v);
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let unvisited = self.graph.len() - self.visited.cardinality() as usize;
        (
            self.sequencer.cardinality(),
            Some(unvisited + self.sequencer.cardinality()),
        )
    }
}

impl<'a, S, I> TraversalSearch<'a, S, I>
where
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// `start` must be a node of the graph.
    pub fn new(graph: &'a AdjMatrix, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            stop_at: None,
            _item: PhantomData,
        }
    }

    /// Returns the set of nodes visited so far.
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Checks if a given node `u` has already been visited.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Tries to restart the search at the smallest yet unvisited node and
    /// returns true iff successful. Requires that the search came to a hold
    /// earlier, i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.visited.iter_cleared_bits().next() {
            None => false,
            Some(u) => {
                self.visited.set_bit(u);
                self.sequencer.push(I::new_without_predecessor(u));
                true
            }
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }
}

impl AdjMatrix {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::prelude::*;
    ///
    /// let g = AdjMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    pub fn bfs(&self, start: Node) -> BFS<'_> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::prelude::*;
    ///
    /// let g = AdjMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    pub fn dfs(&self, start: Node) -> DFS<'_> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    ///
    /// # Examples
    /// ```
    /// use mgraphs::prelude::*;
    /// use mgraphs::algo::SequencedItem;
    ///
    /// let g = AdjMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().item(), 0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(0));
    /// ```
    pub fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    pub fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_> {
        DFSWithPredecessor::new(self, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NumNodes;
    use itertools::Itertools;

    fn graph_from_arcs(n: NumNodes, arcs: &[(Node, Node)]) -> AdjMatrix {
        let mut rows = vec![vec![0; n as usize]; n as usize];
        for &(u, v) in arcs {
            rows[u as usize][v as usize] = 1;
        }
        AdjMatrix::from_matrix(rows).unwrap()
    }

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = graph_from_arcs(6, &[(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let order: Vec<Node> = graph.bfs(1).collect();
        assert_eq!(order, vec![1, 0, 2, 5, 4, 3]);

        let order: Vec<Node> = BFS::new(&graph, 5).collect();
        assert_eq!(order, [5, 4, 3]);
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = graph_from_arcs(6, &[(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let mut edges: Vec<_> = graph
            .bfs_with_predecessor(1)
            .map(|x| x.predecessor_with_item())
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn test_stopper() {
        let graph = graph_from_arcs(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);

        assert_eq!(graph.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = graph_from_arcs(6, &[(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        let order: Vec<Node> = DFS::new(&graph, 1).collect();
        assert_eq!(order, vec![1, 2, 0, 5, 4, 3]);

        let order: Vec<Node> = graph.dfs(5).collect();
        assert_eq!(order, [5, 4, 3]);
    }

    #[test]
    fn dfs_with_predecessor() {
        let graph = graph_from_arcs(6, &[(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        let mut edges: Vec<_> = graph
            .dfs_with_predecessor(1)
            .map(|x| x.predecessor_with_item())
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(4), 3),
                (Some(5), 4)
            ]
        );
    }

    #[test]
    fn restart_covers_all_components() {
        // 0 - 1    2 - 3    4
        let graph = graph_from_arcs(5, &[(0, 1), (1, 0), (2, 3), (3, 2)]);

        let mut bfs = graph.bfs(0);
        assert_eq!(bfs.by_ref().collect_vec(), vec![0, 1]);

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![2, 3]);

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![4]);

        assert!(!bfs.try_restart_at_unvisited());
    }

    #[test]
    fn visited_state() {
        let graph = graph_from_arcs(3, &[(0, 1)]);
        let mut dfs = graph.dfs(0);
        while dfs.next().is_some() {}

        assert!(dfs.did_visit_node(0));
        assert!(dfs.did_visit_node(1));
        assert!(!dfs.did_visit_node(2));
        assert_eq!(dfs.visited().cardinality(), 2);
    }
}
