use crate::common::SquareMatrix;

// The classic triple loop, restricted to the intermediate hops `0..k`.
// Returns `false` as soon as a diagonal entry turns negative: at that point
// a negative cycle runs through the nodes processed so far and the matrix
// no longer holds meaningful costs.
pub(super) fn relax(matrix: &mut SquareMatrix<f64>, k: usize) -> bool {
    let node_count = matrix.dim();

    for a in 0..k {
        for b in 0..node_count {
            for c in 0..node_count {
                let through = matrix[(b, a)] + matrix[(a, c)];

                if through < matrix[(b, c)] {
                    matrix[(b, c)] = through;

                    if b == c && through < 0.0 {
                        return false;
                    }
                }
            }
        }
    }

    true
}
