/*!
`mgraphs` is a small graph data structure & algorithms library built around a single
dense representation: a graph **is** its adjacency matrix.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

The graph itself is an [`AdjMatrix`](crate::graph::AdjMatrix): a square matrix of `i64`
weights where entry `[u][v]` is the weight of the directed edge `u -> v` and `0` means
"no edge". Everything else about a graph (its edge count, directedness, weightedness,
negative weights) is **derived** from the matrix whenever it changes and never supplied
by the caller.

### Directed vs Undirected

Both orientations live in the same type:

- A **symmetric** matrix is treated as undirected; each symmetric nonzero pair counts as a single edge.
- Any asymmetry makes the graph **directed** and every nonzero entry counts on its own.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, the graph type, and its operator strategies,
- [`algo`] includes the classical algorithms as free functions over a graph reference: traversal (`graph.bfs(start_node)`), connectivity, shortest paths, cycle and negative-cycle detection, and bipartiteness,
- [`gens`] includes deterministic and random graph generators (paths, cycles, complete graphs, `G(n,p)`),
- [`io`] includes a reader and writer for the plain-text matrix format,
- [`ops`] includes matrix-style arithmetic and the containment-based comparison strategies.

In most use-cases, `use mgraphs::{prelude::*, algo::*};` suffices for your needs.

# When to use

You should only use this library if the following apply:
- Your graphs are small and dense (the matrix costs quadratic memory regardless of edge count)
- You want textbook algorithms with exact, human-readable rendered answers
- You require only basic functionality for graphs.

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive library for
general graphs in *Rust*.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod graph;
pub mod io;
pub mod node;
pub mod ops;

/// `mgraphs::prelude` includes definitions for nodes and edges, the graph type and its
/// error, the operator strategies, and the `algo`/`gens`/`io` submodules themselves.
pub mod prelude {
    pub use super::{algo, edge::*, gens, graph::*, io, node::*, ops::*};
}
