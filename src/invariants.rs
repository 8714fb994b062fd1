use sha2::{Digest, Sha256};

use crate::{
    graph::MotifGraph,
    spectral::symmetric_eigenvalues,
    types::{InvariantSet, STRUCTURAL_HASH_HEX_LEN},
};

/// Round to 8 decimal places, normalizing negative zero to +0.0 so the
/// canonical rendering is stable around zero.
#[inline]
#[must_use]
pub fn round8(x: f64) -> f64 {
    (x * 1e8).round() / 1e8 + 0.0
}

/// Compute the full invariant record for a decoded motif graph.
///
/// All five invariants are pure functions of the labeling and adjacency
/// matrix; two calls on the same graph produce identical output.
#[must_use]
pub fn compute_invariants(graph: &MotifGraph) -> InvariantSet {
    let v = graph.vertex_count();
    let degrees: Vec<usize> = (0..v).map(|i| graph.degree(i)).collect();

    let morphological_signature = degrees
        .iter()
        .zip(&graph.labels)
        .map(|(&d, &label)| d as u64 * u64::from(label))
        .sum();

    let mut degree_sequence = degrees.clone();
    degree_sequence.sort_unstable();

    let edge_count = degrees.iter().sum::<usize>() / 2;

    InvariantSet {
        structural_hash: structural_hash(graph),
        spectral_signature: spectral_signature(graph),
        degree_sequence,
        clustering_coefficient: round8(clustering_coefficient(graph, &degrees)),
        morphological_signature,
        vertex_count: v,
        edge_count,
    }
}

/// 64-bit truncated SHA-256 over the canonical graph rendering: the full
/// adjacency matrix as ASCII '0'/'1' row-major (both triangles plus the
/// zero diagonal), then the vertex labels in index order.
///
/// The 16-hex truncation bounds collision resistance near 2^32 by the
/// birthday bound; a pinned protocol parameter, not a tunable.
#[must_use]
pub fn structural_hash(graph: &MotifGraph) -> String {
    let v = graph.vertex_count();
    let mut repr = String::with_capacity(v * v + v);
    for row in &graph.adjacency {
        for &bit in row {
            repr.push(if bit == 1 { '1' } else { '0' });
        }
    }
    for &label in &graph.labels {
        repr.push(if label == 1 { '1' } else { '0' });
    }
    let digest = Sha256::digest(repr.as_bytes());
    let mut hex = hex::encode(digest);
    hex.truncate(STRUCTURAL_HASH_HEX_LEN);
    hex
}

/// Adjacency spectrum: real eigenvalues sorted ascending, 8-decimal rounded.
fn spectral_signature(graph: &MotifGraph) -> Vec<f64> {
    let real: Vec<Vec<f64>> = graph
        .adjacency
        .iter()
        .map(|row| row.iter().map(|&b| f64::from(b)).collect())
        .collect();
    symmetric_eigenvalues(real)
        .into_iter()
        .map(round8)
        .collect()
}

/// Average local clustering. Vertices of degree < 2 contribute zero, and
/// the sum is divided by the total vertex count V (not the eligible
/// count) -- the exact denominator the numeric contract fixes.
#[allow(clippy::cast_precision_loss)]
fn clustering_coefficient(graph: &MotifGraph, degrees: &[usize]) -> f64 {
    let v = graph.vertex_count();
    if v == 0 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..v {
        if degrees[i] < 2 {
            continue;
        }
        let neighbors = graph.neighbors(i);
        let possible = neighbors.len() * (neighbors.len() - 1) / 2;
        let mut actual = 0usize;
        for (a, &u) in neighbors.iter().enumerate() {
            for &w in &neighbors[a + 1..] {
                if graph.adjacency[u][w] == 1 {
                    actual += 1;
                }
            }
        }
        sum += actual as f64 / possible as f64;
    }
    sum / v as f64
}
