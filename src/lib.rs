#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

//! ORCP - OpenRed Cryptographic Pattern
//!
//! Self-verifying "keyless" signature core for lightweight peer identity in
//! P2P and IoT settings. A secret bit pattern (the *motif*) is decoded into
//! a labeled graph; a set of graph invariants computed from that graph is
//! published in place of a conventional public key, and verification means
//! recomputing those invariants from a presented motif.

// Fixed cryptographic and encoding choices:
// - Hash: SHA-256 (structural hash truncated to 64 bits, public token to
//   128 bits)
// - KDF: HKDF-SHA256, 32-byte output (legacy XOR mode kept for
//   compatibility)
// - Canonical invariant encoding: v1 text format, pinned in `ser`
// - Spectral precision: 8 decimal places, 1e-8 comparison tolerance
//
// Known, documented properties (not defects to strengthen silently): the
// 64-bit structural-hash truncation, the 105-bit motif entropy at V = 14,
// and verification requiring the secret motif itself.

pub mod errors;
pub mod graph;
pub mod invariants;
pub mod keys;
pub mod motif;
pub mod ser;
pub mod spectral;
pub mod tag;
pub mod types;
pub mod verify;

pub use errors::OrcpError;
pub use graph::{build_graph, MotifGraph};
pub use invariants::compute_invariants;
pub use keys::{
    derive_public_token, derive_shared_secret, SharedSecretMode, DEFAULT_INFO, SHARED_SECRET_LEN,
};
pub use motif::generate_motif;
pub use tag::{derive_tag, verify_tag, MAX_OPERAND_BITS};
pub use types::{
    edge_bits, total_bits, InvariantSet, Motif, PublicToken, SharedSecret, Tag, DEFAULT_VERTICES,
};
pub use verify::verify;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Immutable engine configuration: the vertex count fixes the motif length,
/// the matrix dimension and the eigen-decomposition cost. Safe to share
/// read-only across concurrent callers; every operation is a pure function
/// of its explicit inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orcp {
    vertices: usize,
}

impl Orcp {
    /// Build a configuration for `vertices` vertices. The documented
    /// practical range is 12..=16; 20 and above is too slow for
    /// interactive use.
    ///
    /// # Panics
    ///
    /// Panics if `vertices < 2` (no edge slots exist below two vertices).
    #[must_use]
    pub const fn new(vertices: usize) -> Self {
        assert!(vertices >= 2, "vertex count must be at least 2");
        Self { vertices }
    }

    #[must_use]
    pub const fn vertices(&self) -> usize {
        self.vertices
    }

    /// Motif length for this configuration: `V + V(V-1)/2` bits.
    #[must_use]
    pub const fn total_bits(&self) -> usize {
        total_bits(self.vertices)
    }

    /// Generate a fresh secret motif from the OS CSPRNG.
    #[must_use]
    pub fn generate_motif(&self) -> Motif {
        motif::generate_motif(self.vertices)
    }

    /// Decode a motif into its labeled graph.
    ///
    /// # Errors
    ///
    /// Returns `OrcpError::InvalidMotifLength` on a motif/V mismatch.
    pub fn build_graph(&self, motif: &Motif) -> Result<MotifGraph, OrcpError> {
        graph::build_graph(motif, self.vertices)
    }

    /// Derive the public identity material from a motif: the full invariant
    /// record and the 32-hex-char public token folded from it.
    ///
    /// # Errors
    ///
    /// Returns `OrcpError::InvalidMotifLength` on a motif/V mismatch.
    pub fn derive_key(&self, motif: &Motif) -> Result<(PublicToken, InvariantSet), OrcpError> {
        let graph = graph::build_graph(motif, self.vertices)?;
        let inv = invariants::compute_invariants(&graph);
        Ok((keys::derive_public_token(&inv), inv))
    }

    /// Derive the symmetric shared secret from two public tokens. Order of
    /// the tokens does not matter.
    ///
    /// # Errors
    ///
    /// See [`keys::derive_shared_secret`].
    pub fn derive_shared_secret(
        &self,
        a: &PublicToken,
        b: &PublicToken,
        mode: SharedSecretMode,
        salt: &[u8],
        info: &[u8],
    ) -> Result<SharedSecret, OrcpError> {
        keys::derive_shared_secret(a, b, mode, salt, info)
    }

    /// Check a presented motif against a published invariant record.
    /// Fail-closed: never panics, never errors; anything short of a full
    /// match is `false`.
    #[must_use]
    pub fn verify(&self, motif: &Motif, claimed: &InvariantSet) -> bool {
        verify::verify(motif, claimed, self.vertices)
    }
}

impl Default for Orcp {
    fn default() -> Self {
        Self::new(DEFAULT_VERTICES)
    }
}
