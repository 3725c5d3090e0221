//! Compute the [maximum flow] between a source and a target node of a flow
//! network.
//!
//! The implementation is the Edmonds–Karp refinement of Ford–Fulkerson:
//! augmenting paths are found by breadth-first search over the residual
//! network, so each augmentation uses a path with the fewest edges and the
//! number of augmentations stays polynomial instead of growing with the
//! capacity values.
//!
//! [maximum flow]: https://en.wikipedia.org/wiki/Maximum_flow_problem
//!
//! # Examples
//!
//! ```
//! use gral::algo::FlowNetwork;
//!
//! let mut network = FlowNetwork::new(4);
//!
//! network.add_edge(0, 1, 3.0);
//! network.add_edge(0, 2, 2.0);
//! network.add_edge(1, 3, 2.0);
//! network.add_edge(2, 3, 3.0);
//!
//! assert_eq!(network.max_flow(0, 3), 4.0);
//! ```

mod bfs;

use bfs::augmenting_path;

/// Flow edge owned by the network's edge arena and referenced from the
/// adjacency lists of both of its endpoints.
///
/// Residual capacity is relative to the endpoint a traversal arrives at:
/// arriving at `target` leaves `capacity − flow`, arriving back at
/// `source` leaves `flow` (the amount of already-pushed flow that can be
/// cancelled).
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    source: usize,
    target: usize,
    capacity: f64,
    flow: f64,
}

impl FlowEdge {
    fn new(source: usize, target: usize, capacity: f64) -> Self {
        Self {
            source,
            target,
            capacity,
            flow: 0.0,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Flow currently pushed in the `source → target` direction.
    pub fn flow(&self) -> f64 {
        self.flow
    }

    fn other_end(&self, node: usize) -> usize {
        if node == self.source {
            self.target
        } else {
            self.source
        }
    }

    fn residual(&self, at: usize) -> f64 {
        if at == self.source {
            self.flow
        } else {
            self.capacity - self.flow
        }
    }

    fn push(&mut self, at: usize, amount: f64) {
        if at == self.source {
            self.flow -= amount;
        } else {
            self.flow += amount;
        }
    }
}

/// Flow network over the nodes `0..node_count`, queried for the maximum
/// s–t flow.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    edges: Vec<FlowEdge>,
    incident: Vec<Vec<usize>>,
}

impl FlowNetwork {
    pub fn new(node_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incident: vec![Vec::new(); node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.incident.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &FlowEdge> {
        self.edges.iter()
    }

    /// Adds an edge with the given capacity and no flow.
    ///
    /// The edge record is appended to the arena and its index registered
    /// with both endpoints, so the two views share one record.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: f64) {
        let index = self.edges.len();

        self.edges.push(FlowEdge::new(from, to, capacity));
        self.incident[from].push(index);

        if to != from {
            self.incident[to].push(index);
        }
    }

    /// Maximum flow from `s` to `t`, `0` for an empty network, an
    /// unreachable target, or `s == t`.
    ///
    /// Augmentation consumes residual capacity in place: a second call on
    /// an already saturated network finds no augmenting path and reports
    /// `0` additional flow.
    pub fn max_flow(&mut self, s: usize, t: usize) -> f64 {
        self.augment(s, t).0
    }

    /// Number of augmenting-path iterations a full run takes.
    ///
    /// This is a characterization aid for tests. It saturates the network
    /// exactly like [`max_flow`](Self::max_flow), so measuring a fresh run
    /// requires a freshly built network.
    pub fn augmentations(&mut self, s: usize, t: usize) -> usize {
        self.augment(s, t).1
    }

    fn augment(&mut self, s: usize, t: usize) -> (f64, usize) {
        if self.node_count() == 0 {
            return (0.0, 0);
        }

        let mut total = 0.0;
        let mut rounds = 0;
        let mut edge_to = vec![None; self.node_count()];

        while augmenting_path(&self.edges, &self.incident, s, t, &mut edge_to) {
            // First walk from the target back to the source: the bottleneck
            // is the smallest residual along the path, relative to the
            // direction each edge is traversed in. The search recorded an
            // edge for every node on the path.
            let mut bottleneck = f64::INFINITY;
            let mut node = t;

            while node != s {
                let edge = &self.edges[edge_to[node].unwrap()];
                bottleneck = bottleneck.min(edge.residual(node));
                node = edge.other_end(node);
            }

            // Second walk applies it: arriving at an edge's target adds
            // flow, arriving back at its source cancels flow.
            let mut node = t;

            while node != s {
                let edge = &mut self.edges[edge_to[node].unwrap()];
                edge.push(node, bottleneck);
                node = edge.other_end(node);
            }

            total += bottleneck;
            rounds += 1;
        }

        (total, rounds)
    }
}
