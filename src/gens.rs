/*!
# Graph Generators

Deterministic and random instances, all built as symmetric 0/1 matrices
through the validated constructor.

# Example

```rust
use mgraphs::prelude::*;

let g = gens::path(4);

assert_eq!(g.number_of_nodes(), 4);
assert_eq!(g.number_of_edges(), 3);
assert!(!g.is_directed());
```
*/

use itertools::Itertools;
use rand::Rng;

use crate::{
    edge::Weight,
    graph::AdjMatrix,
    node::{Node, NumNodes},
};

fn zero_matrix(n: NumNodes) -> Vec<Vec<Weight>> {
    vec![vec![0; n as usize]; n as usize]
}

/// Sets both entries of an undirected edge
fn connect(matrix: &mut [Vec<Weight>], u: Node, v: Node) {
    matrix[u as usize][v as usize] = 1;
    matrix[v as usize][u as usize] = 1;
}

fn build(matrix: Vec<Vec<Weight>>) -> AdjMatrix {
    // the matrix is square by construction
    AdjMatrix::from_matrix(matrix).unwrap()
}

/// Generates the path `0 - 1 - ... - (n - 1)`.
pub fn path(n: NumNodes) -> AdjMatrix {
    let mut matrix = zero_matrix(n);
    for (u, v) in (0..n).tuple_windows() {
        connect(&mut matrix, u, v);
    }

    build(matrix)
}

/// Generates the cycle `0 - 1 - ... - (n - 1) - 0`.
///
/// A cycle on a single vertex is a self-loop.
pub fn cycle(n: NumNodes) -> AdjMatrix {
    let mut matrix = zero_matrix(n);
    for (u, v) in (0..n).tuple_windows() {
        connect(&mut matrix, u, v);
    }
    if n > 0 {
        connect(&mut matrix, n - 1, 0);
    }

    build(matrix)
}

/// Generates the complete graph on `n` vertices (no self-loops).
pub fn complete(n: NumNodes) -> AdjMatrix {
    let mut matrix = zero_matrix(n);
    for u in 0..n {
        for v in 0..u {
            connect(&mut matrix, u, v);
        }
    }

    build(matrix)
}

/// Generates a `G(n,p)` graph: each of the `n * (n - 1) / 2` possible
/// undirected edges is present independently with probability `p`.
/// No self-loops.
///
/// # Panics
/// Panics if `p` is not in `[0, 1]`.
///
/// # Example
/// ```rust
/// use mgraphs::prelude::*;
///
/// let mut rng = rand::rng();
/// let g = gens::gnp(&mut rng, 10, 0.3);
///
/// assert_eq!(g.number_of_nodes(), 10);
/// assert!(!g.is_directed());
/// ```
pub fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> AdjMatrix
where
    R: Rng,
{
    let mut matrix = zero_matrix(n);
    for u in 0..n {
        for v in 0..u {
            if rng.random_bool(p) {
                connect(&mut matrix, u, v);
            }
        }
    }

    build(matrix)
}
