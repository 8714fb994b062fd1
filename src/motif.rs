use rand_core::{OsRng, RngCore};

use crate::types::{total_bits, Motif};

/// Generate a fresh secret motif for `vertices` vertices: `total_bits(V)`
/// independent uniform bits drawn from the operating system CSPRNG.
///
/// # Panics
///
/// Panics if `vertices` is zero, or if the OS randomness source is
/// exhausted or misconfigured; both are fatal by design (secret material
/// must never be degraded).
#[must_use]
pub fn generate_motif(vertices: usize) -> Motif {
    assert!(vertices > 0, "vertex count must be non-zero");
    let total = total_bits(vertices);
    let mut pool = vec![0u8; total.div_ceil(8)];
    OsRng.fill_bytes(&mut pool);

    let mut bits = String::with_capacity(total);
    for i in 0..total {
        let bit = (pool[i / 8] >> (i % 8)) & 1;
        bits.push(if bit == 1 { '1' } else { '0' });
    }
    Motif::from_bits(bits).unwrap_or_else(|_| unreachable!())
}
