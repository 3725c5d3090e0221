//! Detect a [cycle] in a directed graph.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use gral::algo::CycleDetector;
//!
//! let mut graph = CycleDetector::new(3);
//!
//! graph.add_edge(0, 1, 1);
//! graph.add_edge(1, 2, 1);
//!
//! assert!(!graph.has_cycle());
//!
//! graph.add_edge(2, 0, 1);
//!
//! assert!(graph.has_cycle());
//! ```

mod dfs;

use dfs::find_back_edge;

/// Directed graph that answers whether it contains a cycle.
///
/// Nodes are the indices `0..node_count`. The graph is built incrementally
/// with [`add_edge`](Self::add_edge) and then queried with
/// [`has_cycle`](Self::has_cycle). Self-loops and parallel edges are
/// allowed.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    successors: Vec<Vec<usize>>,
}

impl CycleDetector {
    pub fn new(node_count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.successors.len()
    }

    /// Appends the directed edge `from → to`.
    ///
    /// The weight is accepted for symmetry with the other algorithms in
    /// this crate, but cycle detection is purely structural.
    pub fn add_edge(&mut self, from: usize, to: usize, _weight: i64) {
        self.successors[from].push(to);
    }

    /// Returns `true` if the graph contains a directed cycle, including a
    /// self-loop.
    ///
    /// Each call traverses the graph with fresh state, so repeated queries
    /// give the same answer.
    pub fn has_cycle(&self) -> bool {
        find_back_edge(&self.successors)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_graph() {
        let graph = CycleDetector::new(0);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn single_node_without_edges() {
        let graph = CycleDetector::new(1);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn self_loop() {
        let mut graph = CycleDetector::new(3);

        graph.add_edge(1, 1, 1);

        assert!(graph.has_cycle());
    }

    #[test]
    fn directed_path() {
        let mut graph = CycleDetector::new(4);

        graph.add_edge(0, 1, 3);
        graph.add_edge(1, 2, -1);
        graph.add_edge(2, 3, 7);

        assert!(!graph.has_cycle());
    }

    #[test]
    fn basic_cycle() {
        let mut graph = CycleDetector::new(3);

        graph.add_edge(0, 1, 1);
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 0, 1);

        assert!(graph.has_cycle());
    }

    #[test]
    fn parallel_edges_alone_are_no_cycle() {
        let mut graph = CycleDetector::new(2);

        graph.add_edge(0, 1, 1);
        graph.add_edge(0, 1, 2);

        assert!(!graph.has_cycle());
    }

    #[test]
    fn antiparallel_edges_close_a_loop() {
        let mut graph = CycleDetector::new(2);

        graph.add_edge(0, 1, 1);
        graph.add_edge(1, 0, 1);

        assert!(graph.has_cycle());
    }

    #[test]
    fn forward_edge_into_done_node() {
        let mut graph = CycleDetector::new(4);

        // Diamond: node 3 is reached twice, the second time as "done".
        graph.add_edge(0, 1, 1);
        graph.add_edge(0, 2, 1);
        graph.add_edge(1, 3, 1);
        graph.add_edge(2, 3, 1);

        assert!(!graph.has_cycle());
    }

    #[test]
    fn cycle_in_later_component() {
        let mut graph = CycleDetector::new(5);

        graph.add_edge(0, 1, 1);
        graph.add_edge(2, 3, 1);
        graph.add_edge(3, 4, 1);
        graph.add_edge(4, 2, 1);

        assert!(graph.has_cycle());
    }

    #[test]
    fn repeated_queries_agree() {
        let mut graph = CycleDetector::new(3);

        graph.add_edge(0, 1, 1);
        graph.add_edge(1, 0, 1);

        assert!(graph.has_cycle());
        assert!(graph.has_cycle());
    }

    #[test]
    fn long_chain_does_not_exhaust_call_stack() {
        let node_count = 100_000;
        let mut graph = CycleDetector::new(node_count);

        for node in 0..node_count - 1 {
            graph.add_edge(node, node + 1, 1);
        }

        assert!(!graph.has_cycle());

        graph.add_edge(node_count - 1, 0, 1);

        assert!(graph.has_cycle());
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_agrees_with_petgraph(
            edges in proptest::collection::vec((0..50usize, 0..50usize), 0..200),
        ) {
            let mut graph = CycleDetector::new(50);

            let mut oracle = petgraph::graph::DiGraph::<(), ()>::new();
            let nodes: Vec<_> = (0..50).map(|_| oracle.add_node(())).collect();

            for &(from, to) in &edges {
                graph.add_edge(from, to, 1);
                oracle.add_edge(nodes[from], nodes[to], ());
            }

            prop_assert_eq!(
                graph.has_cycle(),
                petgraph::algo::is_cyclic_directed(&oracle)
            );
        }
    }
}
