use fixedbitset::FixedBitSet;

// Node coloring: unvisited (not in `discovered`), in progress (in
// `discovered` and `on_path`), done (in `discovered` only). An edge into an
// in-progress node is a back edge and therefore a cycle.
pub(super) fn find_back_edge(successors: &[Vec<usize>]) -> bool {
    let node_count = successors.len();

    let mut discovered = FixedBitSet::with_capacity(node_count);
    let mut on_path = FixedBitSet::with_capacity(node_count);

    // Frames carry the position of the next successor to try, so that the
    // traversal resumes where it left off after a descent. Keeping the
    // stack on the heap makes the depth limit the available memory, not
    // the call stack.
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..node_count {
        if discovered.contains(root) {
            continue;
        }

        discovered.insert(root);
        on_path.insert(root);
        stack.push((root, 0));

        while let Some((node, position)) = stack.last_mut() {
            let node = *node;

            match successors[node].get(*position) {
                Some(&next) => {
                    *position += 1;

                    if on_path.contains(next) {
                        // Back edge. A self-loop lands here as well.
                        return true;
                    }

                    if !discovered.contains(next) {
                        discovered.insert(next);
                        on_path.insert(next);
                        stack.push((next, 0));
                    }
                }
                None => {
                    // Fully explored: leaves the active path but stays
                    // discovered so no other root re-explores it.
                    on_path.set(node, false);
                    stack.pop();
                }
            }
        }
    }

    false
}
