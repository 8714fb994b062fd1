use crate::{
    graph::build_graph,
    invariants::compute_invariants,
    types::{InvariantSet, Motif, SPECTRAL_TOLERANCE},
};

/// Check a presented motif against a previously published invariant record.
///
/// Recomputes every invariant from the motif and requires exact equality
/// for the structural hash, morphological signature, degree sequence,
/// vertex count and edge count, plus elementwise `< 1e-8` agreement for
/// the spectral signature and clustering coefficient.
///
/// Fail-closed: any failure to rebuild the graph (malformed motif, wrong
/// length) yields `false`; this function never returns an error and never
/// panics, so infrastructure failures are indistinguishable from a genuine
/// mismatch to the caller.
#[must_use]
pub fn verify(motif: &Motif, claimed: &InvariantSet, vertices: usize) -> bool {
    let Ok(graph) = build_graph(motif, vertices) else {
        return false;
    };
    invariants_match(&compute_invariants(&graph), claimed, vertices)
}

fn invariants_match(computed: &InvariantSet, claimed: &InvariantSet, vertices: usize) -> bool {
    if computed.structural_hash != claimed.structural_hash {
        return false;
    }
    if computed.morphological_signature != claimed.morphological_signature {
        return false;
    }
    if computed.degree_sequence != claimed.degree_sequence {
        return false;
    }
    if claimed.vertex_count != vertices {
        return false;
    }
    if claimed.edge_count != computed.edge_count {
        return false;
    }
    if computed.spectral_signature.len() != claimed.spectral_signature.len() {
        return false;
    }
    let spectral_ok = computed
        .spectral_signature
        .iter()
        .zip(&claimed.spectral_signature)
        .all(|(a, b)| (a - b).abs() < SPECTRAL_TOLERANCE);
    if !spectral_ok {
        return false;
    }
    (computed.clustering_coefficient - claimed.clustering_coefficient).abs() < SPECTRAL_TOLERANCE
}
