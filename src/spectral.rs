//! Eigenvalue extraction for real symmetric matrices.
//!
//! The adjacency matrix is symmetric, so the full spectrum is real and a
//! cyclic Jacobi sweep converges quadratically. Matrices here are tiny
//! (V = 12..16 in practice), so dense O(V^3)-per-sweep rotations are fine
//! and keep the crate free of a linear-algebra dependency.

/// Cap on full sweeps. Quadratic convergence reaches machine precision in
/// well under ten sweeps for V <= 20; the cap only guards degenerate input.
const MAX_SWEEPS: usize = 64;

/// Convergence threshold on the sum of squared off-diagonal entries.
const OFF_DIAGONAL_TOLERANCE: f64 = 1e-20;

/// All eigenvalues of a symmetric matrix, sorted ascending.
///
/// The input is consumed as the working copy. Symmetry is assumed, not
/// checked; callers pass adjacency matrices which are symmetric by
/// construction.
#[must_use]
pub fn symmetric_eigenvalues(mut a: Vec<Vec<f64>>) -> Vec<f64> {
    let n = a.len();
    if n < 2 {
        return a.iter().enumerate().map(|(i, row)| row[i]).collect();
    }

    for _ in 0..MAX_SWEEPS {
        if off_diagonal_norm_sq(&a) <= OFF_DIAGONAL_TOLERANCE {
            break;
        }
        for p in 0..n - 1 {
            for q in p + 1..n {
                rotate(&mut a, p, q);
            }
        }
    }

    let mut eigenvalues: Vec<f64> = (0..n).map(|i| a[i][i]).collect();
    eigenvalues.sort_by(|x, y| x.partial_cmp(y).unwrap_or(core::cmp::Ordering::Equal));
    eigenvalues
}

fn off_diagonal_norm_sq(a: &[Vec<f64>]) -> f64 {
    a.iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &x)| x * x)
                .sum::<f64>()
        })
        .sum()
}

/// One Jacobi rotation annihilating the (p, q) off-diagonal pair.
fn rotate(a: &mut [Vec<f64>], p: usize, q: usize) {
    let apq = a[p][q];
    if apq.abs() < f64::MIN_POSITIVE {
        return;
    }

    // Stable tangent: t = sign(theta) / (|theta| + sqrt(theta^2 + 1)).
    let theta = (a[q][q] - a[p][p]) / (2.0 * apq);
    let t = theta.signum() / (theta.abs() + theta.mul_add(theta, 1.0).sqrt());
    let c = 1.0 / t.mul_add(t, 1.0).sqrt();
    let s = t * c;

    let n = a.len();
    // Column update (A <- A J), then row update (A <- J^T A).
    for k in 0..n {
        let akp = a[k][p];
        let akq = a[k][q];
        a[k][p] = c.mul_add(akp, -(s * akq));
        a[k][q] = s.mul_add(akp, c * akq);
    }
    for k in 0..n {
        let apk = a[p][k];
        let aqk = a[q][k];
        a[p][k] = c.mul_add(apk, -(s * aqk));
        a[q][k] = s.mul_add(apk, c * aqk);
    }
}
