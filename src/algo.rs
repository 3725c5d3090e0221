pub mod cycle;
pub mod max_flow;
pub mod mst;
pub mod shortest_paths;

pub use cycle::CycleDetector;
pub use max_flow::FlowNetwork;
pub use mst::MinSpanningForest;
pub use shortest_paths::{PathCost, ShortestPaths};
