//! Constrained least-squares degree reduction.
//!
//! ## Purpose
//!
//! This module computes the `(m+1) × (n+1)` matrix `Q` mapping the Bernstein
//! coefficients `c` of a degree-`n` polynomial to the coefficients `Q c` of the
//! degree-`m` polynomial closest to it in L2 on `[0, 1]`, subject to the
//! endpoint derivative constraints from [`ConstraintBuilder`].
//!
//! ## Background
//!
//! The constraints pin the first `r` and last `s` reduced coefficients; those
//! rows of `Q` have the closed form in [`ConstraintBuilder::endpoint_rows`].
//! What remains is a degree-`m` polynomial vanishing to order `r` at 0 and `s`
//! at 1, i.e. a combination of
//!
//! ```text
//! ψ_l(t) = t^r (1 - t)^s p_l(t),   l = 0..=D,   D = m - r - s
//! ```
//!
//! with `p_l` orthonormal for the weight `t^(2r) (1 - t)^(2s)`. Because the
//! `ψ_l` are orthonormal in plain L2, the least-squares interior is the
//! orthogonal projection of the residual `B_j^n − Σ_pinned Q[k][j] B_k^m` onto
//! them, one inner product per basis function and column. The products are
//! evaluated by a Gauss-Legendre rule that is exact for degree `n + m`.
//!
//! The Bernstein Gram matrix has condition number growing like `4^m`; the
//! projection never forms it.
//!
//! ## Design notes
//!
//! * `n == m` short-circuits to the identity, which is the exact solution for
//!   every admissible constraint count.
//! * Every interior entry carries a first-order rounding bound. A result is
//!   returned only if the bound, the row sums and the constraint residuals all
//!   stay below `sqrt(ε)` of the working precision.
//!
//! ## Invariants
//!
//! * A returned matrix is finite, has unit row sums and satisfies the
//!   constraints to `sqrt(ε)`; otherwise `NumericalSingularity` is returned.
//! * Source degrees above [`MAX_DEGREE`] are rejected with `InvalidDegree`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::algorithms::constraints::{ConstraintBuilder, EndpointConstraints};
use crate::math::binomial::{BinomialTable, MAX_DEGREE};
use crate::math::gram::{cross_gram, gram};
use crate::math::jacobi::JacobiBasis;
use crate::math::linalg::FloatLinalg;
use crate::math::quadrature::GaussLegendre;
use crate::primitives::dense::DenseMatrix;
use crate::primitives::errors::ReductionError;

// ============================================================================
// Parameters
// ============================================================================

/// Degrees and continuity orders of one reduction problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReductionParams {
    /// Source degree `n`.
    pub source_degree: usize,
    /// Target degree `m`.
    pub target_degree: usize,
    /// Derivatives preserved at `t = 0` (`r`).
    pub start_continuity: usize,
    /// Derivatives preserved at `t = 1` (`s`).
    pub end_continuity: usize,
}

impl ReductionParams {
    /// Number of rows of the reduction matrix (`m + 1`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.target_degree + 1
    }

    /// Number of columns of the reduction matrix (`n + 1`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.source_degree + 1
    }

    /// Total number of constraint rows (`r + s`).
    #[inline]
    pub fn constraint_count(&self) -> usize {
        self.start_continuity + self.end_continuity
    }

    /// Rows of `Q` not pinned by the constraints (`m + 1 - r - s`).
    #[inline]
    pub fn free_count(&self) -> usize {
        self.rows().saturating_sub(self.constraint_count())
    }

    fn builder(&self) -> ConstraintBuilder {
        ConstraintBuilder::new(
            self.source_degree,
            self.target_degree,
            self.start_continuity,
            self.end_continuity,
        )
    }

    fn invalid_degree(&self) -> ReductionError {
        let as_i64 = |v: usize| i64::try_from(v).unwrap_or(i64::MAX);
        ReductionError::InvalidDegree {
            source: as_i64(self.source_degree),
            target: as_i64(self.target_degree),
        }
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Solver for one validated reduction problem.
#[derive(Debug, Clone)]
pub struct ReductionSolver<T> {
    params: ReductionParams,
    _marker: PhantomData<T>,
}

impl<T: FloatLinalg> ReductionSolver<T> {
    /// Prepare a solver. `params` must already satisfy `m <= n` and `r + s <= m + 1`.
    pub fn new(params: ReductionParams) -> Self {
        Self {
            params,
            _marker: PhantomData,
        }
    }

    /// Endpoint constraints of this problem.
    pub fn constraints(&self) -> EndpointConstraints<T> {
        let p = &self.params;
        let table = BinomialTable::new(p.start_continuity.max(p.end_continuity));
        p.builder().build(&table)
    }

    /// Compute the reduction matrix `Q`.
    pub fn solve(&self) -> Result<DenseMatrix<T>, ReductionError> {
        let p = &self.params;
        let (n, m) = (p.source_degree, p.target_degree);
        if n > MAX_DEGREE {
            return Err(p.invalid_degree());
        }
        if n == m {
            log::debug!("degree {} reduced to itself; identity", n);
            return Ok(DenseMatrix::identity(p.rows()));
        }

        let table = BinomialTable::try_new(n + m).ok_or_else(|| p.invalid_degree())?;
        let builder = p.builder();

        let pinned = builder.endpoint_rows(&table);
        let mut q = DenseMatrix::zeros(p.rows(), p.cols());
        for (idx, row) in self.pinned_rows().enumerate() {
            for j in 0..=n {
                q[(row, j)] = pinned[(idx, j)];
            }
        }

        let bound = if p.free_count() > 0 {
            self.project_interior(&table, &pinned, &mut q)?
        } else {
            log::debug!("{} constraints determine all {} rows", p.constraint_count(), p.rows());
            T::zero()
        };

        self.verify(&q, bound, &builder.build(&table))?;
        Ok(q)
    }

    /// Rows of `Q` in the order of [`ConstraintBuilder::endpoint_rows`].
    fn pinned_rows(&self) -> impl Iterator<Item = usize> {
        let p = self.params;
        (0..p.start_continuity).chain((0..p.end_continuity).map(move |k| p.target_degree - k))
    }

    /// Fill rows `r..=m-s` of `q` and return the rounding bound on them.
    fn project_interior(
        &self,
        table: &BinomialTable<T>,
        pinned: &DenseMatrix<T>,
        q: &mut DenseMatrix<T>,
    ) -> Result<T, ReductionError> {
        let p = &self.params;
        let (n, m) = (p.source_degree, p.target_degree);
        let (r, s) = (p.start_continuity, p.end_continuity);
        let size = p.free_count();
        let free = size - 1;

        let basis = JacobiBasis::new(free, 2 * r, 2 * s, table);
        let rule = GaussLegendre::<T>::exact_for(n + m);
        let nodes = rule.nodes().len();
        log::debug!(
            "projecting {} interior rows onto {} quadrature nodes ({} pinned)",
            size,
            nodes,
            p.constraint_count()
        );

        // Weighted basis samples (size × nodes) and residual samples (nodes × n+1),
        // the latter both signed and in absolute value for the rounding bound.
        let mut psi = DenseMatrix::zeros(size, nodes);
        let mut residual = DenseMatrix::zeros(nodes, n + 1);
        let mut magnitude = DenseMatrix::zeros(nodes, n + 1);
        let mut values = vec![T::zero(); size];
        let mut source = vec![T::zero(); n + 1];
        let mut target = vec![T::zero(); m + 1];
        let pinned_rows: Vec<usize> = self.pinned_rows().collect();

        for (k, (&t, &w)) in rule.nodes().iter().zip(rule.weights()).enumerate() {
            basis.eval_into(t, &mut values);
            let factor = w * t.powi(r as i32) * (T::one() - t).powi(s as i32);
            for (l, &v) in values.iter().enumerate() {
                psi[(l, k)] = factor * v;
            }

            bernstein_values(n, t, table, &mut source);
            bernstein_values(m, t, table, &mut target);
            for j in 0..=n {
                let mut signed = source[j];
                let mut absolute = source[j];
                for (idx, &row) in pinned_rows.iter().enumerate() {
                    let term = pinned[(idx, j)] * target[row];
                    signed = signed - term;
                    absolute = absolute + term.abs();
                }
                residual[(k, j)] = signed;
                magnitude[(k, j)] = absolute;
            }
        }

        let coeffs = product(&psi, &residual)?;
        let spread = product(&psi.abs(), &magnitude)?;

        // Column l holds ψ_l in the Bernstein basis of degree m, rows r..=m-s.
        let mut to_bernstein = DenseMatrix::zeros(size, size);
        for l in 0..size {
            for (i, c) in basis.bernstein(l, table).into_iter().enumerate() {
                to_bernstein[(i, l)] = c * table.get(free, i) / table.get(m, r + i);
            }
        }

        let interior = product(&to_bernstein, &coeffs)?;
        for i in 0..size {
            for j in 0..=n {
                q[(r + i, j)] = interior[(i, j)];
            }
        }

        // First-order bound: quadrature sums carry about (n + m + 2) ε of their
        // absolute mass, the basis change (D + 1) ε of its own.
        let sum_weight = T::from(n + m + 2).unwrap();
        let change_weight = T::from(size).unwrap();
        let mut local = DenseMatrix::zeros(size, n + 1);
        for l in 0..size {
            for j in 0..=n {
                local[(l, j)] = sum_weight * spread[(l, j)] + change_weight * coeffs[(l, j)].abs();
            }
        }
        let propagated = product(&to_bernstein.abs(), &local)?;
        let bound = propagated
            .as_slice()
            .iter()
            .fold(T::zero(), |acc, &v| acc.max(v))
            * T::epsilon();
        Ok(bound)
    }

    /// Accept `q` only if it is finite, the rounding bound is below `sqrt(ε)`,
    /// every row sums to one and every constraint holds.
    fn verify(
        &self,
        q: &DenseMatrix<T>,
        bound: T,
        constraints: &EndpointConstraints<T>,
    ) -> Result<(), ReductionError> {
        let eps = T::epsilon();
        let tol = eps.sqrt();

        if !q.is_finite() || !bound.is_finite() {
            return Err(self.reject(String::from("non-finite entries")));
        }
        if bound > tol {
            return Err(self.reject(format!(
                "rounding error bound {:e} exceeds {:e}",
                as_f64(bound),
                as_f64(tol)
            )));
        }

        let slack = eps * T::from(q.cols()).unwrap();
        for i in 0..q.rows() {
            let (sum, mass) = q
                .row(i)
                .iter()
                .fold((T::zero(), T::zero()), |(s, a), &v| (s + v, a + v.abs()));
            if (sum - T::one()).abs() > tol + slack * mass {
                return Err(self.reject(format!(
                    "row {} sums to {} instead of 1",
                    i,
                    as_f64(sum)
                )));
            }
        }

        if constraints.is_empty() {
            return Ok(());
        }
        let c = &constraints.coefficients;
        let d = &constraints.rhs;
        for a in 0..constraints.len() {
            for j in 0..q.cols() {
                let (value, scale) =
                    (0..q.rows()).fold((-d[(a, j)], d[(a, j)].abs()), |(v, sc), i| {
                        let term = c[(a, i)] * q[(i, j)];
                        (v + term, sc + term.abs())
                    });
                if value.abs() > tol * scale {
                    return Err(self.reject(format!(
                        "constraint {} violated by {:e} in column {}",
                        a,
                        as_f64(value),
                        j
                    )));
                }
            }
        }
        Ok(())
    }

    fn reject(&self, reason: String) -> ReductionError {
        let p = &self.params;
        log::warn!(
            "reduction {} -> {} (r={}, s={}) rejected: {}",
            p.source_degree,
            p.target_degree,
            p.start_continuity,
            p.end_continuity,
            reason
        );
        ReductionError::NumericalSingularity(format!(
            "reducing degree {} to {}: {}",
            p.source_degree, p.target_degree, reason
        ))
    }
}

/// `A · B` through the nalgebra backend.
fn product<T: FloatLinalg>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>, ReductionError> {
    let data = T::matmul(a.as_slice(), b.as_slice(), a.rows(), a.cols(), b.cols());
    DenseMatrix::from_row_major(a.rows(), b.cols(), data).ok_or_else(|| {
        ReductionError::NumericalSingularity(format!(
            "product returned wrong shape for {}x{} result",
            a.rows(),
            b.cols()
        ))
    })
}

/// `B_0^degree(t), …, B_degree^degree(t)` into `out`.
fn bernstein_values<T: FloatLinalg>(degree: usize, t: T, table: &BinomialTable<T>, out: &mut [T]) {
    let u = T::one() - t;
    for (i, v) in out.iter_mut().enumerate().take(degree + 1) {
        *v = table.get(degree, i) * t.powi(i as i32) * u.powi((degree - i) as i32);
    }
}

#[inline]
fn as_f64<T: FloatLinalg>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

// ============================================================================
// Approximation error
// ============================================================================

/// L2 distance on `[0, 1]` between the degree-`n` polynomial with Bernstein
/// coefficients `source` and its reduction `q · source`.
///
/// Uses `‖p_n − p_m‖² = cᵀ G_nn c − 2 bᵀ B c + bᵀ G_mm b` with `b = q c`. The
/// squared error is clamped at zero before the square root.
pub fn approximation_error<T: FloatLinalg>(
    q: &DenseMatrix<T>,
    source: &[T],
) -> Result<T, ReductionError> {
    if source.len() != q.cols() {
        return Err(ReductionError::BufferSizeMismatch {
            expected: q.cols(),
            got: source.len(),
        });
    }
    let n = q.cols() - 1;
    let m = q.rows() - 1;
    let table = BinomialTable::try_new(n.saturating_mul(2)).ok_or_else(|| {
        ReductionParams {
            source_degree: n,
            target_degree: m,
            ..ReductionParams::default()
        }
        .invalid_degree()
    })?;

    let reduced = q.mul_vec(source);
    let source_norm = gram(n, &table).bilinear(source, source);
    let cross = cross_gram(m, n, &table).bilinear(&reduced, source);
    let reduced_norm = gram(m, &table).bilinear(&reduced, &reduced);

    let two = T::one() + T::one();
    let squared = source_norm - two * cross + reduced_norm;
    Ok(squared.max(T::zero()).sqrt())
}
