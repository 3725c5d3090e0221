//! Find [all-pairs shortest paths] and their costs in a directed, weighted
//! graph.
//!
//! Edge costs may be negative. A negative cycle makes shortest-path costs
//! meaningless for the nodes that can reach it, so the query reports that
//! condition as a first-class outcome; see [`PathCost`].
//!
//! [all-pairs shortest paths]:
//!     https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm
//!
//! # Examples
//!
//! ```
//! use gral::algo::{PathCost, ShortestPaths};
//!
//! let mut graph = ShortestPaths::new(3);
//!
//! graph.add_edge(0, 1, 4.0);
//! graph.add_edge(1, 2, 1.0);
//! graph.add_edge(0, 2, 6.0);
//!
//! assert_eq!(graph.shortest_path(0, 2, 3), PathCost::Finite(5.0));
//! ```

mod floyd_warshall;

use floyd_warshall::relax;

use crate::common::SquareMatrix;

/// Outcome of a shortest-path query.
///
/// Callers must branch on all three cases: a cost, an unreachable pair,
/// or a negative cycle among the processed nodes. The negative cycle is an
/// expected result, not an error, and [`Finite`](PathCost::Finite) never
/// carries an infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCost {
    /// Cost of the cheapest path.
    Finite(f64),
    /// No path exists under the allowed intermediate hops.
    Unreachable,
    /// A negative cycle was detected among the processed nodes.
    NegativeCycle,
}

/// Directed graph with real-valued edge costs, queried for all-pairs
/// shortest paths via Floyd–Warshall.
///
/// The graph is a dense cost matrix over the nodes `0..node_count`: absent
/// edges cost `+∞` and the diagonal starts at `0`. The query relaxes the
/// matrix in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    matrix: SquareMatrix<f64>,
    edge_count: usize,
}

impl ShortestPaths {
    pub fn new(node_count: usize) -> Self {
        let mut matrix = SquareMatrix::new(node_count, f64::INFINITY);

        for node in 0..node_count {
            matrix[(node, node)] = 0.0;
        }

        Self {
            matrix,
            edge_count: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.matrix.dim()
    }

    /// Number of `add_edge` calls so far. Informational only.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Sets the cost of the edge `from → to`. A repeated call for the same
    /// pair overwrites the previous cost.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) {
        self.matrix[(from, to)] = weight;
        self.edge_count += 1;
    }

    /// Cost of the cheapest path `i → j` that uses only the nodes `0..k`
    /// as intermediate hops.
    ///
    /// The cost matrix is relaxed in place, so the restriction to `0..k`
    /// accumulates over repeated queries and a larger `k` can only lower
    /// the reported costs. On a graph with no nodes the result is
    /// `Finite(0.0)` (trivially no path was requested).
    pub fn shortest_path(&mut self, i: usize, j: usize, k: usize) -> PathCost {
        if self.node_count() == 0 {
            return PathCost::Finite(0.0);
        }

        if !relax(&mut self.matrix, k) {
            return PathCost::NegativeCycle;
        }

        let cost = self.matrix[(i, j)];

        if cost == f64::INFINITY {
            PathCost::Unreachable
        } else {
            PathCost::Finite(cost)
        }
    }
}
