//! Endpoint derivative constraints.
//!
//! ## Purpose
//!
//! This module builds the linear equality constraints that force the reduced
//! polynomial to share its first `r` derivatives at `t = 0` and its first `s`
//! derivatives at `t = 1` with the source polynomial.
//!
//! ## Background
//!
//! The `d`-th derivative of a degree-`p` Bernstein polynomial at `t = 0` is
//! `p!/(p-d)! · Δ^d b_0`, with `Δ^d b_0 = Σ_k (-1)^(d-k) C(d, k) b_k`. Dividing
//! the identity `p_m^(d)(0) = p_n^(d)(0)` by `m!/(m-d)!` gives
//!
//! ```text
//! Δ^d b_0 = C(n, d) / C(m, d) · Δ^d c_0
//! ```
//!
//! and symmetrically at `t = 1` with the trailing differences `Δ^d b_(m-d)`
//! and `Δ^d c_(n-d)`.
//!
//! The start system is lower triangular in `b_0..b_(r-1)` and solves in
//! closed form: row `k` of the reduction matrix is
//!
//! ```text
//! Q[k][j] = (-1)^(k-j) C(k, j) · C(n, j)/C(m, j) · Π_(l<k-j) (n-m+l)/(m-j-l),  j <= k
//! ```
//!
//! and zero for `j > k`. Every factor is positive, so no cancellation occurs.
//! End rows follow by reversal: `Q[m-k][n-j] = Q[k][j]`.
//!
//! ## Invariants
//!
//! * Start rows only touch `b_0..b_(r-1)`, end rows only `b_(m-s+1)..b_m`, so
//!   the coefficient matrix has full row rank whenever `r + s <= m + 1`.
//! * Rows are ordered: start orders `0..r`, then end orders `0..s`.
//! * [`ConstraintBuilder::endpoint_rows`] uses the same order; its row `d`
//!   of the end block is row `m - d` of the reduction matrix.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::binomial::BinomialTable;
use crate::primitives::dense::DenseMatrix;

/// Constraint system `C b = D c` over target coefficients `b` and source coefficients `c`.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointConstraints<T> {
    /// `(r + s) × (m + 1)` coefficients acting on the reduced polynomial.
    pub coefficients: DenseMatrix<T>,
    /// `(r + s) × (n + 1)` right-hand sides acting on the source polynomial.
    pub rhs: DenseMatrix<T>,
}

impl<T: Float> EndpointConstraints<T> {
    /// Number of constraint rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.rows()
    }

    /// True when no derivative is constrained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builder for the endpoint derivative constraints of one reduction problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintBuilder {
    source_degree: usize,
    target_degree: usize,
    start: usize,
    end: usize,
}

impl ConstraintBuilder {
    /// Describe a reduction from degree `source_degree` to `target_degree`
    /// preserving `start` derivatives at `t = 0` and `end` at `t = 1`.
    ///
    /// Parameters are assumed already validated.
    pub fn new(source_degree: usize, target_degree: usize, start: usize, end: usize) -> Self {
        debug_assert!(target_degree <= source_degree);
        debug_assert!(start + end <= target_degree + 1);
        Self {
            source_degree,
            target_degree,
            start,
            end,
        }
    }

    /// Build the constraint rows. `table` must cover the target degree.
    pub fn build<T: Float>(&self, table: &BinomialTable<T>) -> EndpointConstraints<T> {
        let n = self.source_degree;
        let m = self.target_degree;
        let count = self.start + self.end;

        let mut coefficients = DenseMatrix::zeros(count, m + 1);
        let mut rhs = DenseMatrix::zeros(count, n + 1);

        for d in 0..self.start {
            let ratio = BinomialTable::<T>::derivative_ratio(n, m, d);
            for k in 0..=d {
                let w = Self::difference_weight(table, d, k);
                coefficients[(d, k)] = w;
                rhs[(d, k)] = ratio * w;
            }
        }

        for d in 0..self.end {
            let row = self.start + d;
            let ratio = BinomialTable::<T>::derivative_ratio(n, m, d);
            for k in 0..=d {
                let w = Self::difference_weight(table, d, k);
                coefficients[(row, m - d + k)] = w;
                rhs[(row, n - d + k)] = ratio * w;
            }
        }

        EndpointConstraints { coefficients, rhs }
    }

    /// Rows of the reduction matrix pinned by the constraints, in constraint
    /// order: `Q[0..r]`, then `Q[m]`, `Q[m-1]`, …, `Q[m-s+1]`.
    ///
    /// `table` must cover the larger continuity order.
    pub fn endpoint_rows<T: Float>(&self, table: &BinomialTable<T>) -> DenseMatrix<T> {
        let n = self.source_degree;
        let mut rows = DenseMatrix::zeros(self.start + self.end, n + 1);

        for k in 0..self.start {
            for j in 0..=k {
                rows[(k, j)] = self.pinned_entry(table, k, j);
            }
        }
        for k in 0..self.end {
            for j in 0..=k {
                rows[(self.start + k, n - j)] = self.pinned_entry(table, k, j);
            }
        }
        rows
    }

    /// `Q[k][j]` for a start row `k` and `j <= k`.
    fn pinned_entry<T: Float>(&self, table: &BinomialTable<T>, k: usize, j: usize) -> T {
        let n = self.source_degree;
        let m = self.target_degree;
        let ratio = BinomialTable::<T>::derivative_ratio(n, m, j);
        let value = (0..k - j).fold(table.get(k, j) * ratio, |acc, l| {
            acc * T::from(n - m + l).unwrap() / T::from(m - j - l).unwrap()
        });
        if (k - j) % 2 == 0 { value } else { -value }
    }

    /// Weight of coefficient `k` in the forward difference `Δ^d`: `(-1)^(d-k) C(d, k)`.
    #[inline]
    fn difference_weight<T: Float>(table: &BinomialTable<T>, d: usize, k: usize) -> T {
        let c = table.get(d, k);
        if (d - k) % 2 == 0 { c } else { -c }
    }
}
