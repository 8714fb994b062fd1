use hkdf::Hkdf;
use sha2::{Digest, Sha256};

use crate::{
    errors::OrcpError,
    ser::encode_invariants,
    types::{InvariantSet, PublicToken, SharedSecret, PUBLIC_TOKEN_HEX_LEN},
};

/// Default HKDF info string for shared-secret derivation.
pub const DEFAULT_INFO: &[u8] = b"orcp-shared-key";

/// HKDF output length in bytes.
pub const SHARED_SECRET_LEN: usize = 32;

/// How two public tokens are folded into a shared secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedSecretMode {
    /// HKDF-SHA256 over the canonically ordered token concatenation
    /// (32-byte output). The default.
    Hkdf,
    /// Byte-wise XOR of the two raw tokens. Kept for compatibility with
    /// older peers; not recommended.
    LegacyXor,
}

/// Fold an invariant record into the 32-hex-char public identity token:
/// SHA-256 over the canonical v1 encoding, truncated to 16 bytes.
#[must_use]
pub fn derive_public_token(inv: &InvariantSet) -> PublicToken {
    let digest = Sha256::digest(encode_invariants(inv).as_bytes());
    let mut hex = hex::encode(digest);
    hex.truncate(PUBLIC_TOKEN_HEX_LEN);
    PublicToken::from_digest_prefix(hex)
}

/// Derive the symmetric shared secret from two public tokens.
///
/// The raw tokens are concatenated with the lexicographically smaller byte
/// string first, so both parties compute identical output regardless of
/// argument order. Rendered as uppercase hex: 64 chars in HKDF mode, 32 in
/// legacy XOR mode.
///
/// # Errors
///
/// Returns `OrcpError::TokenDecode` if either token is not valid hex, and
/// `OrcpError::TokenLengthMismatch` in XOR mode when the raw tokens differ
/// in length.
pub fn derive_shared_secret(
    a: &PublicToken,
    b: &PublicToken,
    mode: SharedSecretMode,
    salt: &[u8],
    info: &[u8],
) -> Result<SharedSecret, OrcpError> {
    let a_bytes = a.to_bytes()?;
    let b_bytes = b.to_bytes()?;

    let (lo, hi) = if a_bytes <= b_bytes {
        (&a_bytes, &b_bytes)
    } else {
        (&b_bytes, &a_bytes)
    };

    let raw = match mode {
        SharedSecretMode::Hkdf => {
            let mut ikm = Vec::with_capacity(lo.len() + hi.len());
            ikm.extend_from_slice(lo);
            ikm.extend_from_slice(hi);

            let hk = Hkdf::<Sha256>::new(Some(salt), &ikm);
            let mut okm = [0u8; SHARED_SECRET_LEN];
            // Length is a compile-time constant well under the HKDF bound.
            hk.expand(info, &mut okm)
                .map_err(|_| OrcpError::TokenDecode("hkdf expand failed"))?;
            okm.to_vec()
        }
        SharedSecretMode::LegacyXor => {
            if lo.len() != hi.len() {
                return Err(OrcpError::TokenLengthMismatch {
                    a: lo.len(),
                    b: hi.len(),
                });
            }
            lo.iter().zip(hi).map(|(x, y)| x ^ y).collect()
        }
    };

    Ok(SharedSecret(hex::encode_upper(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(s: &str) -> PublicToken {
        PublicToken::from_hex(s).unwrap()
    }

    #[test]
    fn reference_token_derivation() {
        let inv = InvariantSet {
            structural_hash: "743adf4c6a67df66".to_string(),
            spectral_signature: vec![-2.0, 0.0, 0.0, 2.0],
            degree_sequence: vec![2, 2, 2, 2],
            clustering_coefficient: 0.0,
            morphological_signature: 4,
            vertex_count: 4,
            edge_count: 4,
        };
        assert_eq!(
            derive_public_token(&inv).as_str(),
            "3e7165df10a3fdb0bb768891972d5cdd"
        );
    }

    #[test]
    fn shared_secret_is_commutative() {
        let a = token("0123456789abcdef0123456789abcdef");
        let b = token("fedcba9876543210fedcba9876543210");
        for mode in [SharedSecretMode::Hkdf, SharedSecretMode::LegacyXor] {
            let ab = derive_shared_secret(&a, &b, mode, b"", DEFAULT_INFO).unwrap();
            let ba = derive_shared_secret(&b, &a, mode, b"", DEFAULT_INFO).unwrap();
            assert_eq!(ab, ba);
        }
    }

    #[test]
    fn xor_mode_reference() {
        let a = token("0123456789abcdef0123456789abcdef");
        let b = token("fedcba9876543210fedcba9876543210");
        let s = derive_shared_secret(&a, &b, SharedSecretMode::LegacyXor, b"", b"").unwrap();
        assert_eq!(s.as_str(), "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
    }

    #[test]
    fn hkdf_mode_reference() {
        let a = token("0123456789abcdef0123456789abcdef");
        let b = token("fedcba9876543210fedcba9876543210");
        let s = derive_shared_secret(&a, &b, SharedSecretMode::Hkdf, b"", DEFAULT_INFO).unwrap();
        assert_eq!(
            s.as_str(),
            "CCA3254C5C2C07E29461ECB967E3BA2C9999C8A24A58B3088110A8EF2CFE86CD"
        );
        assert_eq!(s.len(), 64);
    }

    #[test]
    fn salt_and_info_change_hkdf_output() {
        let a = token("0123456789abcdef0123456789abcdef");
        let b = token("fedcba9876543210fedcba9876543210");
        let base = derive_shared_secret(&a, &b, SharedSecretMode::Hkdf, b"", DEFAULT_INFO).unwrap();
        let salted =
            derive_shared_secret(&a, &b, SharedSecretMode::Hkdf, b"salt", DEFAULT_INFO).unwrap();
        let other =
            derive_shared_secret(&a, &b, SharedSecretMode::Hkdf, b"", b"other-context").unwrap();
        assert_ne!(base, salted);
        assert_ne!(base, other);
    }

    #[test]
    fn xor_with_self_is_zero() {
        let a = token("0123456789abcdef0123456789abcdef");
        let s = derive_shared_secret(&a, &a, SharedSecretMode::LegacyXor, b"", b"").unwrap();
        assert_eq!(s.as_str(), "00000000000000000000000000000000");
    }
}
