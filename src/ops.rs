/*!
Arithmetic and comparison operators on adjacency matrices.

All arithmetic is **non-mutating**: the `std::ops` impls on `&AdjMatrix`
return new graphs and panic on dimension mismatches, while the `try_*`
methods they delegate to report the mismatch as a [`GraphError`]. In-place
updates are provided as explicitly named methods plus the `*Assign` traits.

Since every constructor and mutation funnels through metadata derivation,
the results of these operators always carry consistent flags, e.g. a
product matrix with entries larger than one is reported as weighted.
*/

use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::edge::Weight;
use crate::graph::{AdjMatrix, GraphError};

/// Tie-break order used by [`AdjMatrix::compare_by`] when neither graph
/// contains the other: either compare edge counts first and use node counts
/// to break ties, or the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonStrategy {
    /// Compare by `(number_of_edges, number_of_nodes)`.
    EdgesThenNodes,
    /// Compare by `(number_of_nodes, number_of_edges)`.
    NodesThenEdges,
}

impl AdjMatrix {
    fn check_same_dimensions(&self, other: &AdjMatrix) -> Result<(), GraphError> {
        if self.number_of_nodes() == other.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::DimensionMismatch(
                self.number_of_nodes(),
                other.number_of_nodes(),
            ))
        }
    }

    fn map_entries(&self, f: impl Fn(Weight) -> Weight) -> AdjMatrix {
        let mut result = self.clone();
        result.modify_matrix(|m| {
            for row in m {
                for w in row {
                    *w = f(*w);
                }
            }
        });
        result
    }

    fn zip_entries(
        &self,
        other: &AdjMatrix,
        f: impl Fn(Weight, Weight) -> Weight,
    ) -> Result<AdjMatrix, GraphError> {
        self.check_same_dimensions(other)?;
        let mut result = self.clone();
        result.modify_matrix(|m| {
            for (row, other_row) in m.iter_mut().zip(other.matrix()) {
                for (w, &o) in row.iter_mut().zip(other_row) {
                    *w = f(*w, o);
                }
            }
        });
        Ok(result)
    }

    /// Returns the elementwise sum of both graphs.
    /// Fails with [`GraphError::DimensionMismatch`] if the graphs differ in size.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::prelude::*;
    ///
    /// let a = AdjMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
    /// let b = AdjMatrix::from_matrix(vec![vec![0, 2], vec![2, 0]]).unwrap();
    ///
    /// let sum = a.try_add(&b).unwrap();
    /// assert_eq!(sum.weight(0, 1), 3);
    ///
    /// let c = AdjMatrix::from_matrix(vec![vec![0]]).unwrap();
    /// assert!(a.try_add(&c).is_err());
    /// ```
    pub fn try_add(&self, other: &AdjMatrix) -> Result<AdjMatrix, GraphError> {
        self.zip_entries(other, |a, b| a + b)
    }

    /// Returns the elementwise difference of both graphs.
    /// Fails with [`GraphError::DimensionMismatch`] if the graphs differ in size.
    ///
    /// Entries that cancel out to zero are no longer edges.
    pub fn try_sub(&self, other: &AdjMatrix) -> Result<AdjMatrix, GraphError> {
        self.zip_entries(other, |a, b| a - b)
    }

    /// Returns the matrix product `self * other`.
    /// Fails with [`GraphError::DimensionMismatch`] if the graphs differ in size.
    ///
    /// For a 0/1 matrix, entry `[i][j]` of the square counts the walks of
    /// length two from `i` to `j`.
    pub fn try_matmul(&self, other: &AdjMatrix) -> Result<AdjMatrix, GraphError> {
        self.check_same_dimensions(other)?;
        let n = self.len();

        let mut result = self.clone();
        result.modify_matrix(|m| {
            let mut product = vec![vec![0 as Weight; n]; n];
            for (i, row) in product.iter_mut().enumerate() {
                for k in 0..n {
                    let a = m[i][k];
                    if a == 0 {
                        continue;
                    }
                    for (j, entry) in row.iter_mut().enumerate() {
                        *entry += a * other.matrix()[k][j];
                    }
                }
            }
            *m = product;
        });
        Ok(result)
    }

    /// Adds one to the weight of every edge in place. Non-edges are left
    /// untouched, and an edge of weight `-1` becomes a non-edge.
    pub fn increment_edge_weights(&mut self) {
        self.modify_matrix(|m| {
            for row in m {
                for w in row {
                    if *w != 0 {
                        *w += 1;
                    }
                }
            }
        });
    }

    /// Subtracts one from the weight of every edge in place. Non-edges are
    /// left untouched, and an edge of weight `1` becomes a non-edge.
    pub fn decrement_edge_weights(&mut self) {
        self.modify_matrix(|m| {
            for row in m {
                for w in row {
                    if *w != 0 {
                        *w -= 1;
                    }
                }
            }
        });
    }

    /// Returns *true* if `other` appears as a contiguous submatrix of `self`,
    /// i.e. some aligned window of `self` matches every entry of `other`.
    /// A zero entry of `other` matches anything; nonzero entries must be
    /// equal. The empty graph is contained in every graph.
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
    /// let h = AdjMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
    ///
    /// assert!(g.contains(&h));
    /// assert!(!h.contains(&g));
    /// ```
    pub fn contains(&self, other: &AdjMatrix) -> bool {
        let n = self.len();
        let m = other.len();
        if m > n {
            return false;
        }

        let matches_window = |di: usize, dj: usize| {
            other.matrix().iter().enumerate().all(|(i, row)| {
                row.iter()
                    .enumerate()
                    .all(|(j, &w)| w == 0 || self.matrix()[di + i][dj + j] == w)
            })
        };

        (0..=n - m).any(|di| (0..=n - m).any(|dj| matches_window(di, dj)))
    }

    /// Compares two graphs: equal matrices are `Equal`, otherwise containment
    /// decides (`Greater` if `self` contains `other`, `Less` for the
    /// converse), and only if neither contains the other does the given
    /// [`ComparisonStrategy`] compare the count pair.
    ///
    /// This is a preorder, not a total order: containment and counts can
    /// disagree, so the result is not antisymmetric. That is why the crate
    /// deliberately implements no `PartialOrd`.
    pub fn compare_by(&self, other: &AdjMatrix, strategy: ComparisonStrategy) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        if self.contains(other) {
            return Ordering::Greater;
        }
        if other.contains(self) {
            return Ordering::Less;
        }

        let key = |g: &AdjMatrix| match strategy {
            ComparisonStrategy::EdgesThenNodes => (g.number_of_edges(), g.number_of_nodes()),
            ComparisonStrategy::NodesThenEdges => (g.number_of_nodes(), g.number_of_edges()),
        };
        key(self).cmp(&key(other))
    }
}

macro_rules! delegate_binop {
    ($op:ident, $method:ident => $try_method:ident) => {
        impl $op for &AdjMatrix {
            type Output = AdjMatrix;

            /// Panicking shorthand for the corresponding `try_` method.
            /// ** Panics if the graphs differ in size **
            fn $method(self, rhs: Self) -> AdjMatrix {
                match self.$try_method(rhs) {
                    Ok(graph) => graph,
                    Err(e) => panic!("{e}"),
                }
            }
        }
    };
}

delegate_binop!(Add, add => try_add);
delegate_binop!(Sub, sub => try_sub);
delegate_binop!(Mul, mul => try_matmul);

impl Mul<Weight> for &AdjMatrix {
    type Output = AdjMatrix;

    /// Multiplies every entry by a scalar. Multiplying by zero removes all
    /// edges.
    fn mul(self, factor: Weight) -> AdjMatrix {
        self.map_entries(|w| w * factor)
    }
}

impl Neg for &AdjMatrix {
    type Output = AdjMatrix;

    /// Negates every entry, turning positive weights negative and vice versa.
    fn neg(self) -> AdjMatrix {
        self.map_entries(|w| -w)
    }
}

impl AddAssign<&AdjMatrix> for AdjMatrix {
    /// In-place version of [`AdjMatrix::try_add`].
    /// ** Panics if the graphs differ in size **
    fn add_assign(&mut self, rhs: &AdjMatrix) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&AdjMatrix> for AdjMatrix {
    /// In-place version of [`AdjMatrix::try_sub`].
    /// ** Panics if the graphs differ in size **
    fn sub_assign(&mut self, rhs: &AdjMatrix) {
        *self = &*self - rhs;
    }
}

impl MulAssign<Weight> for AdjMatrix {
    /// In-place scalar multiplication.
    fn mul_assign(&mut self, factor: Weight) {
        *self = &*self * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(rows: Vec<Vec<Weight>>) -> AdjMatrix {
        AdjMatrix::from_matrix(rows).unwrap()
    }

    #[test]
    fn add_sums_every_entry() {
        let a = graph(vec![vec![0, 1], vec![1, 0]]);
        let b = graph(vec![vec![0, 2], vec![2, 0]]);

        let sum = &a + &b;
        assert_eq!(sum.matrix(), &[vec![0, 3], vec![3, 0]]);
        assert!(sum.is_weighted());
        assert_eq!(sum.number_of_edges(), 1);
    }

    #[test]
    fn add_rejects_different_sizes() {
        let a = graph(vec![vec![0, 1], vec![1, 0]]);
        let b = graph(vec![vec![0]]);

        let err = a.try_add(&b).unwrap_err();
        assert!(matches!(err, GraphError::DimensionMismatch(2, 1)));
        assert_eq!(err.to_string(), "matrix dimensions do not match: 2x2 vs 1x1");
    }

    #[test]
    #[should_panic]
    fn add_operator_panics_on_mismatch() {
        let a = graph(vec![vec![0, 1], vec![1, 0]]);
        let b = graph(vec![vec![0]]);
        let _ = &a + &b;
    }

    #[test]
    fn sub_can_remove_edges() {
        let a = graph(vec![vec![0, 3], vec![1, 0]]);
        let b = graph(vec![vec![0, 3], vec![0, 0]]);

        let diff = &a - &b;
        assert_eq!(diff.matrix(), &[vec![0, 0], vec![1, 0]]);
        assert_eq!(diff.number_of_edges(), 1);
        assert!(diff.is_directed());
    }

    #[test]
    fn add_then_sub_round_trips() {
        let a = graph(vec![vec![0, 5, 0], vec![2, 0, -1], vec![0, 3, 0]]);
        let b = graph(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);

        assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn matmul_counts_two_step_walks() {
        // 0 - 1 - 2
        let p = graph(vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);

        let square = &p * &p;
        assert_eq!(
            square.matrix(),
            &[vec![1, 0, 1], vec![0, 2, 0], vec![1, 0, 1]]
        );
        assert!(square.is_weighted());
        assert!(!square.is_directed());
    }

    #[test]
    fn matmul_rejects_different_sizes() {
        let a = graph(vec![vec![0, 1], vec![1, 0]]);
        let b = graph(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]]);

        assert!(matches!(
            a.try_matmul(&b),
            Err(GraphError::DimensionMismatch(2, 3))
        ));
    }

    #[test]
    fn scalar_mul_scales_weights() {
        let a = graph(vec![vec![0, 2], vec![-1, 0]]);

        let doubled = &a * 2;
        assert_eq!(doubled.matrix(), &[vec![0, 4], vec![-2, 0]]);
        assert!(doubled.has_negative_weights());

        let cleared = &a * 0;
        assert_eq!(cleared.number_of_edges(), 0);
        assert!(!cleared.is_weighted());
    }

    #[test]
    fn neg_flips_signs() {
        let a = graph(vec![vec![0, 2], vec![-1, 0]]);

        let negated = -&a;
        assert_eq!(negated.matrix(), &[vec![0, -2], vec![1, 0]]);
        assert_eq!(-&negated, a);
    }

    #[test]
    fn assign_variants_match_operators() {
        let a = graph(vec![vec![0, 1], vec![1, 0]]);
        let b = graph(vec![vec![0, 2], vec![2, 0]]);

        let mut g = a.clone();
        g += &b;
        assert_eq!(g, &a + &b);

        g -= &b;
        assert_eq!(g, a);

        g *= 3;
        assert_eq!(g, &a * 3);
    }

    #[test]
    fn increment_skips_non_edges() {
        let mut g = graph(vec![vec![0, 1], vec![-1, 0]]);
        g.increment_edge_weights();

        // the -1 edge reached zero and vanished, the zeros were not promoted
        assert_eq!(g.matrix(), &[vec![0, 2], vec![0, 0]]);
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn decrement_removes_unit_edges() {
        let mut g = graph(vec![vec![0, 1], vec![3, 0]]);
        g.decrement_edge_weights();

        assert_eq!(g.matrix(), &[vec![0, 0], vec![2, 0]]);
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn contains_finds_shifted_submatrix() {
        let g = graph(vec![
            vec![0, 0, 0, 0],
            vec![0, 0, 5, 0],
            vec![0, 5, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        let h = graph(vec![vec![0, 5], vec![5, 0]]);

        // matches the window at offset (1, 1)
        assert!(g.contains(&h));
        assert!(!h.contains(&g));
        assert!(g.contains(&g));
        assert!(g.contains(&AdjMatrix::new()));
    }

    #[test]
    fn contains_treats_zero_as_wildcard() {
        let g = graph(vec![vec![0, 1], vec![2, 0]]);
        let sparse = graph(vec![vec![0, 1], vec![0, 0]]);
        let wrong = graph(vec![vec![0, 1], vec![3, 0]]);

        assert!(g.contains(&sparse));
        assert!(!g.contains(&wrong));
    }

    #[test]
    fn compare_equal_and_contained() {
        let g = graph(vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        let h = graph(vec![vec![0, 1], vec![1, 0]]);

        for strategy in [
            ComparisonStrategy::EdgesThenNodes,
            ComparisonStrategy::NodesThenEdges,
        ] {
            assert_eq!(g.compare_by(&g.clone(), strategy), Ordering::Equal);
            assert_eq!(g.compare_by(&h, strategy), Ordering::Greater);
            assert_eq!(h.compare_by(&g, strategy), Ordering::Less);
        }
    }

    #[test]
    fn comparison_strategies_can_disagree() {
        // 2 nodes / 1 edge vs. 3 nodes / 0 edges, neither contains the other
        let small_dense = graph(vec![vec![0, 1], vec![1, 0]]);
        let large_empty = graph(vec![vec![0; 3]; 3]);

        assert_eq!(
            small_dense.compare_by(&large_empty, ComparisonStrategy::EdgesThenNodes),
            Ordering::Greater
        );
        assert_eq!(
            small_dense.compare_by(&large_empty, ComparisonStrategy::NodesThenEdges),
            Ordering::Less
        );
    }
}
