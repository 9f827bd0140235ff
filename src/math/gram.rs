//! Bernstein Gram matrices on the unit interval.
//!
//! ## Purpose
//!
//! This module builds the inner-product matrices that define the least-squares
//! norm of degree reduction: the Gram matrix of one Bernstein basis and the
//! cross-Gram matrix between two bases of different degree.
//!
//! ## Background
//!
//! For `B_i^p(t) = C(p, i) t^i (1 - t)^(p - i)`, the Beta integral gives
//!
//! ```text
//! ∫_0^1 B_i^p(t) B_j^q(t) dt = C(p, i) C(q, j) / ((p + q + 1) C(p + q, i + j))
//! ```
//!
//! The Gram matrix is the `p == q` case.
//!
//! ## Invariants
//!
//! * The Gram matrix is symmetric positive definite.
//! * Every row of the cross-Gram matrix sums to `1 / (p + 1)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::binomial::BinomialTable;
use crate::primitives::dense::DenseMatrix;

/// Cross-Gram matrix `[∫ B_i^p B_j^q]` of size `(p + 1) × (q + 1)`.
///
/// `table` must cover degree `p + q`.
pub fn cross_gram<T: Float>(p: usize, q: usize, table: &BinomialTable<T>) -> DenseMatrix<T> {
    let mut out = DenseMatrix::zeros(p + 1, q + 1);
    let scale = T::from(p + q + 1).unwrap();
    for i in 0..=p {
        let ci = table.get(p, i);
        for j in 0..=q {
            // Divide before multiplying to keep intermediates small.
            out[(i, j)] = ci / table.get(p + q, i + j) * table.get(q, j) / scale;
        }
    }
    out
}

/// Gram matrix `[∫ B_i^p B_k^p]` of size `(p + 1) × (p + 1)`.
///
/// `table` must cover degree `2p`.
pub fn gram<T: Float>(p: usize, table: &BinomialTable<T>) -> DenseMatrix<T> {
    cross_gram(p, p, table)
}
