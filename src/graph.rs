use crate::{
    errors::OrcpError,
    types::{total_bits, AdjacencyMatrix, Motif, VertexLabeling},
};

/// A motif decoded into its graph form: per-vertex label bits plus a
/// symmetric adjacency matrix with a zero diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifGraph {
    pub labels: VertexLabeling,
    pub adjacency: AdjacencyMatrix,
}

impl MotifGraph {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Degree of vertex `i`.
    #[must_use]
    pub fn degree(&self, i: usize) -> usize {
        self.adjacency[i].iter().map(|&b| usize::from(b)).sum()
    }

    /// Vertices adjacent to `i`, in ascending index order.
    #[must_use]
    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        self.adjacency[i]
            .iter()
            .enumerate()
            .filter_map(|(j, &b)| (b == 1).then_some(j))
            .collect()
    }

    /// Total edge count: half the degree sum.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let v = self.vertex_count();
        (0..v).map(|i| self.degree(i)).sum::<usize>() / 2
    }
}

/// Decode a motif into a labeled graph.
///
/// The first V bits label the vertices in index order. The remaining bits
/// fill the upper triangle row-major over index pairs (0,1), (0,2), ...,
/// (V-2,V-1); each entry is mirrored below the diagonal.
///
/// # Errors
///
/// Returns `OrcpError::InvalidMotifLength` if the motif is not exactly
/// `total_bits(vertices)` bits long.
pub fn build_graph(motif: &Motif, vertices: usize) -> Result<MotifGraph, OrcpError> {
    let expected = total_bits(vertices);
    if motif.len() != expected {
        return Err(OrcpError::InvalidMotifLength {
            expected,
            got: motif.len(),
        });
    }

    let bits = motif.as_bits().as_bytes();
    let labels: VertexLabeling = bits[..vertices].iter().map(|&b| b - b'0').collect();

    let mut adjacency = vec![vec![0u8; vertices]; vertices];
    let mut edge_index = vertices;
    for i in 0..vertices {
        for j in (i + 1)..vertices {
            let bit = bits[edge_index] - b'0';
            adjacency[i][j] = bit;
            adjacency[j][i] = bit;
            edge_index += 1;
        }
    }

    Ok(MotifGraph { labels, adjacency })
}
