#![allow(dead_code)]

use fastrand::Rng;

pub const RANDOM_SEED: u64 = 0x3c6e9a521b84d7f;

pub fn random_edges(node_count: usize, density: f32, rng: &mut Rng) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();

    for from in 0..node_count {
        for to in 0..node_count {
            if from != to && rng.f32() < density {
                edges.push((from, to));
            }
        }
    }

    edges
}

// A single hub with ever-growing weights; keeps one union-find tree as
// deep as the acceptance order allows.
pub fn star_edges(node_count: usize) -> impl Iterator<Item = (usize, usize, i64)> {
    (0..node_count).map(|node| (0, node, node as i64))
}
