use core::fmt;

use crate::errors::OrcpError;

/// Default vertex count. 14 gives a 105-bit motif; the practical
/// interactive range is 12..=16 (eigen-decomposition cost is cubic in V,
/// and V >= 20 is too slow for interactive use).
pub const DEFAULT_VERTICES: usize = 14;

/// Hex length of a public token (16 bytes).
pub const PUBLIC_TOKEN_HEX_LEN: usize = 32;

/// Hex length of the truncated structural hash (64 bits).
pub const STRUCTURAL_HASH_HEX_LEN: usize = 16;

/// Absolute tolerance for floating-point invariant comparisons.
pub const SPECTRAL_TOLERANCE: f64 = 1e-8;

/// Number of edge slots in the upper triangle for `v` vertices.
#[inline]
#[must_use]
pub const fn edge_bits(v: usize) -> usize {
    v * (v - 1) / 2
}

/// Total motif length: one label bit per vertex plus one bit per edge slot.
#[inline]
#[must_use]
pub const fn total_bits(v: usize) -> usize {
    v + edge_bits(v)
}

/// The secret bit pattern. The only secret in the system; everything else
/// is derived from it. Never transmitted.
#[derive(Clone, PartialEq, Eq)]
pub struct Motif(String);

impl Motif {
    /// Wrap a bit string, rejecting any character other than '0'/'1'.
    ///
    /// # Errors
    ///
    /// Returns `OrcpError::InvalidBitString` if `bits` is empty or contains
    /// a non-binary character.
    pub fn from_bits(bits: impl Into<String>) -> Result<Self, OrcpError> {
        let bits = bits.into();
        if bits.is_empty() {
            return Err(OrcpError::InvalidBitString("empty motif"));
        }
        if !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(OrcpError::InvalidBitString("non-binary character"));
        }
        Ok(Self(bits))
    }

    #[must_use]
    pub fn as_bits(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this motif with the bit at `index` inverted. Used to model
    /// tampering in tests and demos.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn flipped(&self, index: usize) -> Self {
        let mut bytes = self.0.clone().into_bytes();
        bytes[index] = if bytes[index] == b'0' { b'1' } else { b'0' };
        // Only ASCII '0'/'1' bytes are ever stored, so this stays valid UTF-8.
        Self(String::from_utf8(bytes).unwrap_or_else(|_| unreachable!()))
    }
}

// Secret material: debug-print a length, never the bits.
impl fmt::Debug for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Motif({} bits)", self.0.len())
    }
}

/// Per-vertex label bits, in vertex index order. Values are 0 or 1.
pub type VertexLabeling = Vec<u8>;

/// Symmetric 0/1 adjacency matrix with a zero diagonal.
pub type AdjacencyMatrix = Vec<Vec<u8>>;

/// The published invariant record: everything a party reveals about its
/// motif. Fully determined by (motif, vertex count); immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct InvariantSet {
    /// First 16 hex chars of SHA-256 over the canonical graph rendering.
    pub structural_hash: String,
    /// Adjacency eigenvalues, ascending, rounded to 8 decimals.
    pub spectral_signature: Vec<f64>,
    /// Vertex degrees, ascending.
    pub degree_sequence: Vec<usize>,
    /// Label-weighted clustering average in [0, 1], rounded to 8 decimals.
    pub clustering_coefficient: f64,
    /// Sum of degree(i) * label(i) over all vertices.
    pub morphological_signature: u64,
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// 32-hex-char public identity token, published in place of a public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicToken(String);

impl PublicToken {
    /// Accept a wire token: exactly 32 hex characters.
    ///
    /// # Errors
    ///
    /// Returns `OrcpError::TokenDecode` on wrong length or non-hex input.
    pub fn from_hex(s: &str) -> Result<Self, OrcpError> {
        if s.len() != PUBLIC_TOKEN_HEX_LEN {
            return Err(OrcpError::TokenDecode("token must be 32 hex chars"));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(OrcpError::TokenDecode("non-hex character"));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    pub(crate) fn from_digest_prefix(hex: String) -> Self {
        Self(hex)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw 16-byte form, as fed to shared-secret derivation.
    ///
    /// # Errors
    ///
    /// Returns `OrcpError::TokenDecode` if the stored string is not valid
    /// hex (cannot happen for tokens built by this crate).
    pub fn to_bytes(&self) -> Result<Vec<u8>, OrcpError> {
        hex::decode(&self.0).map_err(|_| OrcpError::TokenDecode("invalid hex"))
    }
}

impl fmt::Display for PublicToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Symmetric key derived from two public tokens. Uppercase hex: 64 chars in
/// HKDF mode, 32 in legacy XOR mode.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(pub(crate) String);

impl SharedSecret {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret({} hex chars)", self.0.len())
    }
}

/// Auxiliary integrity tag: a full SHA-256 digest, 64 lowercase hex chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(pub(crate) String);

impl Tag {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
