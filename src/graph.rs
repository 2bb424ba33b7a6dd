/*!
# Dense Adjacency-Matrix Graphs

The one and only graph representation of this crate: a square matrix of integer
weights where entry `[u][v]` is the weight of the edge from `u` to `v` and `0`
means "no edge". Everything else about the graph is *derived* from the matrix:

- the number of nodes (the matrix dimension),
- the number of edges (nonzero entries, halved for symmetric matrices),
- whether the graph is directed (the matrix is asymmetric),
- whether it is weighted (some entry is neither `0` nor `1`),
- whether it carries a negative weight.

There is deliberately no constructor taking these values from the caller:
[`AdjMatrix::from_matrix`] and [`AdjMatrix::load`] re-derive all of them, so a
graph whose flags disagree with its matrix cannot exist.
*/

use std::fmt::{self, Display};
use std::ops::Range;

use itertools::Itertools;
use thiserror::Error;

use crate::edge::{Edge, NumEdges, Weight};
use crate::node::{Node, NodeBitSet, NumNodes};

/// Errors raised when constructing or combining graphs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The input matrix has a row whose length differs from the row count.
    #[error("Invalid graph: The graph is not a square matrix.")]
    NotSquare,
    /// A binary matrix operation was applied to graphs of different dimensions.
    #[error("matrix dimensions do not match: {0}x{0} vs {1}x{1}")]
    DimensionMismatch(NumNodes, NumNodes),
}

/// A graph stored as a dense square adjacency matrix with derived metadata.
///
/// # Examples
/// ```
/// use mgraphs::prelude::*;
///
/// let g = AdjMatrix::from_matrix(vec![
///     vec![0, 1, 0],
///     vec![1, 0, 1],
///     vec![0, 1, 0],
/// ])
/// .unwrap();
///
/// assert_eq!(g.number_of_nodes(), 3);
/// assert_eq!(g.number_of_edges(), 2);
/// assert!(!g.is_directed());
/// assert!(!g.is_weighted());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjMatrix {
    matrix: Vec<Vec<Weight>>,
    num_edges: NumEdges,
    directed: bool,
    weighted: bool,
    has_negative: bool,
}

impl AdjMatrix {
    /// Creates the empty graph with no nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from a square weight matrix, deriving all metadata.
    ///
    /// This is the only way to obtain a non-empty graph; the flags returned by
    /// [`AdjMatrix::is_directed`], [`AdjMatrix::is_weighted`] and
    /// [`AdjMatrix::has_negative_weights`] therefore always agree with the matrix.
    ///
    /// # Errors
    /// Returns [`GraphError::NotSquare`] if any row length differs from the row count.
    pub fn from_matrix(matrix: Vec<Vec<Weight>>) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        graph.load(matrix)?;
        Ok(graph)
    }

    /// Replaces the adjacency matrix wholesale and re-derives all metadata.
    ///
    /// The previous state is discarded *before* validation: after a failed load
    /// the graph is empty, not rolled back.
    ///
    /// # Errors
    /// Returns [`GraphError::NotSquare`] if any row length differs from the row count.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::prelude::*;
    ///
    /// let mut g = AdjMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
    /// assert!(g.load(vec![vec![0, 1], vec![1, 0], vec![0, 0]]).is_err());
    /// assert!(g.is_empty());
    /// ```
    pub fn load(&mut self, matrix: Vec<Vec<Weight>>) -> Result<(), GraphError> {
        *self = Self::new();

        if !Self::is_square(&matrix) {
            return Err(GraphError::NotSquare);
        }

        self.matrix = matrix;
        self.derive_metadata();
        Ok(())
    }

    /// Returns true iff every row of `matrix` is as long as the number of rows.
    ///
    /// The empty matrix is square.
    pub fn is_square(matrix: &[Vec<Weight>]) -> bool {
        matrix.iter().all(|row| row.len() == matrix.len())
    }

    /// Number of nodes in the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.matrix.len() as NumNodes
    }

    /// Number of nodes as `usize` for indexing
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    /// Returns true if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Number of edges: nonzero entries, halved if the matrix is symmetric.
    ///
    /// Note that the halving uses integer division, so a symmetric matrix whose
    /// only nonzero entries are `k` self-loops reports `k / 2` edges. This
    /// mirrors the counting convention of the text formats we read and write.
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Returns true iff the matrix is asymmetric, i.e. `weight(u, v) != weight(v, u)` somewhere
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns true iff some entry is neither `0` nor `1`
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Returns true iff some entry is negative
    pub fn has_negative_weights(&self) -> bool {
        self.has_negative
    }

    /// Weight of the edge from `u` to `v`; `0` means there is no such edge
    pub fn weight(&self, u: Node, v: Node) -> Weight {
        self.matrix[u as usize][v as usize]
    }

    /// Returns true iff there is an edge from `u` to `v`
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight(u, v) != 0
    }

    /// Number of out-neighbors of `u`
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.matrix[u as usize].iter().filter(|&&w| w != 0).count() as NumNodes
    }

    /// Iterator over all nodes `0..n`
    pub fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an unset bitset able to hold all nodes of the graph
    pub fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Iterator over the out-neighbors of `u` in ascending order.
    ///
    /// Every algorithm of this crate visits neighbors through this iterator,
    /// which makes traversal orders (and thus rendered paths and cycles)
    /// deterministic.
    pub fn neighbors_of(&self, u: Node) -> Neighbors<'_> {
        Neighbors {
            row: &self.matrix[u as usize],
            next: 0,
        }
    }

    /// Iterator over all `(Edge, Weight)` pairs in row-major order
    pub fn edges(&self) -> EdgesIter<'_> {
        EdgesIter {
            matrix: &self.matrix,
            u: 0,
            v: 0,
        }
    }

    /// Borrow of the underlying rows
    pub fn matrix(&self) -> &[Vec<Weight>] {
        &self.matrix
    }

    /// Independent copy of the underlying matrix
    pub fn to_matrix(&self) -> Vec<Vec<Weight>> {
        self.matrix.clone()
    }

    /// Used by the in-place operators: hand out the rows for mutation and
    /// re-derive every flag and count afterwards.
    pub(crate) fn modify_matrix<F>(&mut self, modify: F)
    where
        F: FnOnce(&mut Vec<Vec<Weight>>),
    {
        modify(&mut self.matrix);
        debug_assert!(Self::is_square(&self.matrix));
        self.derive_metadata();
    }

    fn derive_metadata(&mut self) {
        let n = self.matrix.len();

        let mut nonzero: NumEdges = 0;
        let mut directed = false;
        let mut weighted = false;
        let mut has_negative = false;

        for i in 0..n {
            for j in 0..n {
                let w = self.matrix[i][j];
                if w != 0 {
                    nonzero += 1;
                    weighted |= w != 1;
                    has_negative |= w < 0;
                }
                directed |= w != self.matrix[j][i];
            }
        }

        self.num_edges = if directed { nonzero } else { nonzero / 2 };
        self.directed = directed;
        self.weighted = weighted;
        self.has_negative = has_negative;
    }
}

/// Iterator over the out-neighbors of a single node.
///
/// Returned by [`AdjMatrix::neighbors_of`]. Being a named type, it can be
/// stored inside stack frames of iterative searches.
pub struct Neighbors<'a> {
    row: &'a [Weight],
    next: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.row.len() {
            let v = self.next;
            self.next += 1;
            if self.row[v] != 0 {
                return Some(v as Node);
            }
        }
        None
    }
}

/// Row-major iterator over all edges of the graph.
///
/// Returned by [`AdjMatrix::edges`]. The scan order (all edges out of node 0,
/// then node 1, ...) is relied upon by the relaxation passes.
pub struct EdgesIter<'a> {
    matrix: &'a [Vec<Weight>],
    u: usize,
    v: usize,
}

impl Iterator for EdgesIter<'_> {
    type Item = (Edge, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        while self.u < self.matrix.len() {
            while self.v < self.matrix.len() {
                let (u, v) = (self.u, self.v);
                self.v += 1;

                let w = self.matrix[u][v];
                if w != 0 {
                    return Some((Edge(u as Node, v as Node), w));
                }
            }

            self.v = 0;
            self.u += 1;
        }
        None
    }
}

impl Display for AdjMatrix {
    /// Writes the matrix row by row with comma-separated entries.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.matrix {
            writeln!(f, "{}", row.iter().join(", "))?;
        }
        Ok(())
    }
}
