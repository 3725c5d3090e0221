//! Build a [minimum spanning forest] of an undirected, weighted graph —
//! a minimum spanning tree per connected component.
//!
//! [minimum spanning forest]:
//!     https://en.wikipedia.org/wiki/Minimum_spanning_tree
//!
//! # Examples
//!
//! ```
//! use gral::algo::mst::{Edge, MinSpanningForest};
//!
//! let mut graph = MinSpanningForest::new(3);
//!
//! graph.add_edge(0, 1, 2);
//! graph.add_edge(1, 2, 3);
//! graph.add_edge(2, 0, 5);
//!
//! let forest = graph.mst();
//!
//! assert_eq!(
//!     forest,
//!     vec![
//!         Edge { source: 0, target: 1, weight: 2 },
//!         Edge { source: 1, target: 2, weight: 3 },
//!     ]
//! );
//! ```

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::common::DisjointSets;

/// Undirected weighted edge, ordered by ascending weight.
///
/// Equal weights are ordered by `(source, target)`, so the sequence
/// produced by [`MinSpanningForest::mst`] is deterministic. Which of
/// several equally light spanning forests that tie-break selects is an
/// artifact of the order; the total weight is minimal either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: i64,
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Undirected weighted graph over the nodes `0..node_count`, queried for
/// a minimum spanning forest with Kruskal's algorithm.
#[derive(Debug, Clone)]
pub struct MinSpanningForest {
    queue: BinaryHeap<Reverse<Edge>>,
    node_count: usize,
}

impl MinSpanningForest {
    pub fn new(node_count: usize) -> Self {
        Self {
            queue: BinaryHeap::new(),
            node_count,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Inserts the undirected edge `source — target`.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: i64) {
        self.queue.push(Reverse(Edge {
            source,
            target,
            weight,
        }));
    }

    /// Returns the edges of a minimum spanning forest in ascending weight
    /// order.
    ///
    /// Edges are taken lightest first; an edge whose endpoints are already
    /// connected would close a cycle and is discarded. A spanning tree has
    /// `node_count − 1` edges, and every additional connected component
    /// reduces the count by one. Each call works on its own copy of the
    /// queue and fresh component state, so repeated queries agree.
    pub fn mst(&self) -> Vec<Edge> {
        let mut queue = self.queue.clone();
        let mut components = DisjointSets::new(self.node_count);
        let mut forest = Vec::new();

        let forest_max = self.node_count.saturating_sub(1);

        while forest.len() < forest_max {
            let Some(Reverse(edge)) = queue.pop() else {
                break;
            };

            if components.union(edge.source, edge.target) {
                forest.push(edge);
            }
        }

        forest
    }
}
