/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve far less than `2^32` nodes;
a dense `n * n` matrix of `i64` weights exhausts memory long before the node type does.
This allows us to (1) save space compared to `usize`/`u64` and (2) directly manipulate
node values without abstracting over them.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
///
/// Used as the sentinel in parent arrays: a node whose parent is `INVALID_NODE`
/// is a traversal root (or was never reached).
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
