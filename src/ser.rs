//! Canonical v1 text encoding of an invariant record.
//!
//! Public-token derivation hashes this encoding, so it is a versioned wire
//! format, not an implementation detail: every independent implementation
//! must produce these exact bytes. Order is fixed; separators are fixed;
//! no whitespace.
//!
//! Layout: five sections joined by `;`, fields within a section joined by
//! `,`. Sections in order: spectral signature (fixed 8-decimal reals),
//! degree sequence (decimal integers), clustering coefficient (fixed
//! 8-decimal), morphological signature (decimal integer), structural hash
//! (16 lowercase hex chars).

use core::fmt::Write;

use crate::{invariants::round8, types::InvariantSet};

/// Fixed 8-decimal rendering with negative zero normalized to `0.00000000`.
#[must_use]
pub fn format_fixed8(x: f64) -> String {
    let rounded = round8(x);
    format!("{rounded:.8}")
}

/// Render the canonical v1 encoding of `inv`.
#[must_use]
pub fn encode_invariants(inv: &InvariantSet) -> String {
    let mut out = String::new();

    let mut first = true;
    for &x in &inv.spectral_signature {
        if !first {
            out.push(',');
        }
        out.push_str(&format_fixed8(x));
        first = false;
    }
    out.push(';');

    first = true;
    for &d in &inv.degree_sequence {
        if !first {
            out.push(',');
        }
        let _ = write!(out, "{d}");
        first = false;
    }
    out.push(';');

    out.push_str(&format_fixed8(inv.clustering_coefficient));
    out.push(';');
    let _ = write!(out, "{}", inv.morphological_signature);
    out.push(';');
    out.push_str(&inv.structural_hash);

    out
}
