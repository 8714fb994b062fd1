use primitive_types::U512;
use sha2::{Digest, Sha256};

use crate::{errors::OrcpError, types::Tag};

/// Widest bit string accepted as a tag operand. Motifs are at most 210
/// bits for every documented vertex count and shared-key bit strings at
/// most 256 bits, so 512 leaves a wide margin.
pub const MAX_OPERAND_BITS: usize = 512;

/// Derive the auxiliary integrity tag from a motif bit string and a
/// shared-key bit string.
///
/// Both operands are read as unsigned big-endian binary integers; the tag
/// is SHA-256 over the decimal text of `larger mod smaller`, as a full
/// 64-hex-char digest. The computation is purely local to the caller: the
/// two-party demos never exchange or compare tags, and no stronger
/// protocol is implied.
///
/// # Errors
///
/// - `OrcpError::InvalidBitString` for empty or non-binary input.
/// - `OrcpError::OperandTooLarge` for operands over 512 bits.
/// - `OrcpError::DivisionByZero` when the smaller operand is zero.
pub fn derive_tag(motif_bits: &str, shared_key_bits: &str) -> Result<Tag, OrcpError> {
    let motif = parse_binary(motif_bits)?;
    let shared = parse_binary(shared_key_bits)?;

    let (larger, smaller) = if motif >= shared {
        (motif, shared)
    } else {
        (shared, motif)
    };
    if smaller.is_zero() {
        return Err(OrcpError::DivisionByZero);
    }

    let remainder = larger % smaller;
    let digest = Sha256::digest(remainder.to_string().as_bytes());
    Ok(Tag(hex::encode(digest)))
}

/// Recompute the tag and compare against an expected value. Fail-closed:
/// derivation errors count as a mismatch.
#[must_use]
pub fn verify_tag(motif_bits: &str, shared_key_bits: &str, expected: &Tag) -> bool {
    derive_tag(motif_bits, shared_key_bits).is_ok_and(|tag| tag == *expected)
}

fn parse_binary(bits: &str) -> Result<U512, OrcpError> {
    if bits.is_empty() {
        return Err(OrcpError::InvalidBitString("empty operand"));
    }
    if bits.len() > MAX_OPERAND_BITS {
        return Err(OrcpError::OperandTooLarge {
            got: bits.len(),
            max: MAX_OPERAND_BITS,
        });
    }
    let mut acc = U512::zero();
    for b in bits.bytes() {
        let bit = match b {
            b'0' => U512::zero(),
            b'1' => U512::one(),
            _ => return Err(OrcpError::InvalidBitString("non-binary character")),
        };
        acc = (acc << 1u32) | bit;
    }
    Ok(acc)
}
