use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use super::FlowEdge;

// Breadth-first search over the residual network. Records in `edge_to`,
// for every node it discovers, the arena index of the edge used to reach
// it; the map is overwritten on every call. Returns whether `t` was
// reached. An edge is traversable towards an endpoint only while its
// residual capacity at that endpoint is positive.
pub(super) fn augmenting_path(
    edges: &[FlowEdge],
    incident: &[Vec<usize>],
    s: usize,
    t: usize,
    edge_to: &mut [Option<usize>],
) -> bool {
    let mut discovered = FixedBitSet::with_capacity(incident.len());
    let mut queue = VecDeque::new();

    edge_to.fill(None);
    discovered.insert(s);
    queue.push_back(s);

    while let Some(node) = queue.pop_front() {
        for &index in &incident[node] {
            let edge = &edges[index];
            let other = edge.other_end(node);

            if !discovered.contains(other) && edge.residual(other) > 0.0 {
                edge_to[other] = Some(index);
                discovered.insert(other);

                if other == t {
                    return true;
                }

                queue.push_back(other);
            }
        }
    }

    false
}
