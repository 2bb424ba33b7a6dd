//! Connectivity test on top of the traversal iterators.

use crate::graph::AdjMatrix;

/// Returns *true* if every node is reachable from node `0` by following
/// directed edges. The empty graph is not connected.
///
/// On asymmetric matrices this is plain out-neighbor reachability from node
/// `0`, not strong connectivity: `0 -> 1` is connected, `1 -> 0` is not.
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
/// assert!(algo::is_connected(&path));
///
/// assert!(!algo::is_connected(&AdjMatrix::new()));
/// ```
pub fn is_connected(graph: &AdjMatrix) -> bool {
    !graph.is_empty() && graph.dfs(0).count() == graph.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens;

    #[test]
    fn empty_graph_is_not_connected() {
        assert!(!is_connected(&AdjMatrix::new()));
    }

    #[test]
    fn singleton_is_connected() {
        assert!(is_connected(&AdjMatrix::from_matrix(vec![vec![0]]).unwrap()));
    }

    #[test]
    fn paths_and_cycles_are_connected() {
        for n in 1..20 {
            assert!(is_connected(&gens::path(n)));
            assert!(is_connected(&gens::complete(n)));
        }
        for n in 3..20 {
            assert!(is_connected(&gens::cycle(n)));
        }
    }

    #[test]
    fn split_graph_is_not_connected() {
        // 0 - 1    2 - 3
        let g = AdjMatrix::from_matrix(vec![
            vec![0, 1, 0, 0],
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 1, 0],
        ])
        .unwrap();
        assert!(!is_connected(&g));
    }

    #[test]
    fn direction_matters() {
        let forward = AdjMatrix::from_matrix(vec![vec![0, 1], vec![0, 0]]).unwrap();
        let backward = AdjMatrix::from_matrix(vec![vec![0, 0], vec![1, 0]]).unwrap();

        assert!(is_connected(&forward));
        assert!(!is_connected(&backward));
    }

    #[test]
    fn isolated_node_disconnects() {
        let g = AdjMatrix::from_matrix(vec![
            vec![0, 1, 0],
            vec![1, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        assert!(!is_connected(&g));
    }
}
