/*!
# Graph Algorithms

This module provides the **query algorithms** of the crate as free functions
over `&AdjMatrix`: connectivity, shortest paths with per-graph strategy
dispatch, cycle detection, bipartiteness and negative-cycle detection. There
is exactly one graph representation, so no algorithm needs to be generic over
it. All submodule items are re-exported at the top level of this module, so
you can simply do:
```rust
use mgraphs::algo::*;
```
Every answer type renders the classical textbook form via `Display`, e.g.
`0->1->2` for a path or `The graph is bipartite: A={0, 2}, B={1}`.

The traversal machinery (BFS/DFS iterators with optional predecessor
tracking) lives here as well; all searches run on explicit frontiers and
stacks, never on the call stack.
*/

mod bipartite;
mod connectivity;
mod cycle;
mod negative_cycle;
mod shortest_path;
mod traversal;

pub use bipartite::*;
pub use connectivity::*;
pub use cycle::*;
pub use negative_cycle::*;
pub use shortest_path::*;
pub use traversal::*;
