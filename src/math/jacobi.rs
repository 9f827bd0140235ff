//! Orthonormal Jacobi polynomials on `[0, 1]`.
//!
//! ## Purpose
//!
//! This module evaluates the polynomials `p_0, …, p_D` that are orthonormal
//! on `[0, 1]` for the weight `t^b (1 - t)^a`, and expresses each of them in
//! the degree-`D` Bernstein basis. The reduction projects onto
//! `t^r (1 - t)^s p_l(t)` with `b = 2r`, `a = 2s`; that family spans exactly
//! the polynomials vanishing to order `r` at 0 and `s` at 1.
//!
//! ## Design notes
//!
//! * Values come from the three-term recurrence in the shifted variable
//!   `x = 2t - 1`:
//!   `β_(l+1) p_(l+1) = (x - α_l) p_l - β_l p_(l-1)`.
//! * Bernstein coefficients use the closed form of the Jacobi polynomial
//!   `Σ_j (-1)^(l-j) C(l+a, j) C(l+b, l-j) (1-t)^(l-j) t^j`, scaled by the
//!   norm, then degree-elevated to `D`.
//! * Neither path forms a moment or Gram matrix.
//!
//! ## Invariants
//!
//! * `∫₀¹ t^b (1-t)^a p_i p_k dt = δ_ik`.
//! * `p_l` has degree exactly `l` with positive leading coefficient.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::binomial::BinomialTable;

/// Orthonormal Jacobi family of degrees `0..=degree` for the weight `t^b (1-t)^a`.
#[derive(Debug, Clone)]
pub struct JacobiBasis<T> {
    degree: usize,
    start_exponent: usize,
    end_exponent: usize,
    /// `α_l`, the diagonal of the Jacobi matrix.
    alpha: Vec<T>,
    /// `β_l` for `l = 0..=degree`; `β_0` is unused and zero.
    beta: Vec<T>,
    /// `sqrt(h_l)`, the L2 norm of the unnormalized polynomial.
    norms: Vec<T>,
    /// Constant value of `p_0`.
    leading: T,
}

impl<T: Float> JacobiBasis<T> {
    /// Build the family for weight `t^start_exponent (1-t)^end_exponent`.
    ///
    /// `table` must cover `start_exponent + end_exponent + 2 * degree`.
    pub fn new(
        degree: usize,
        start_exponent: usize,
        end_exponent: usize,
        table: &BinomialTable<T>,
    ) -> Self {
        let a = T::from(end_exponent).unwrap();
        let b = T::from(start_exponent).unwrap();
        let one = T::one();
        let two = one + one;
        let four = two + two;
        let ab = a + b;

        let alpha = (0..=degree)
            .map(|l| {
                if l == 0 {
                    (b - a) / (ab + two)
                } else {
                    let s = two * T::from(l).unwrap() + ab;
                    (b * b - a * a) / (s * (s + two))
                }
            })
            .collect();

        let beta = (0..=degree)
            .map(|l| {
                let v = match l {
                    0 => T::zero(),
                    1 => four * (one + a) * (one + b) / ((two + ab).powi(2) * (ab + two + one)),
                    _ => {
                        let lf = T::from(l).unwrap();
                        let s = two * lf + ab;
                        four * lf * (lf + a) * (lf + b) * (lf + ab)
                            / (s * s * (s + one) * (s - one))
                    }
                };
                v.sqrt()
            })
            .collect();

        // g_l = ∫₀¹ t^b (1-t)^a P_l² dt · (2l + a + b + 1), built as a running product.
        let mut g = one / table.get(start_exponent + end_exponent, end_exponent);
        let mut norms = Vec::with_capacity(degree + 1);
        for l in 0..=degree {
            let lf = T::from(l).unwrap();
            if l > 0 {
                g = g * (lf + a) * (lf + b) / ((lf + ab) * lf);
            }
            norms.push((g / (two * lf + ab + one)).sqrt());
        }

        // p_0 = 1 / sqrt(∫ weight); the integral is 1 / ((a + b + 1) C(a + b, a)).
        let leading = norms[0].recip();

        Self {
            degree,
            start_exponent,
            end_exponent,
            alpha,
            beta,
            norms,
            leading,
        }
    }

    /// Highest degree in the family.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Write `p_0(t), …, p_degree(t)` into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than `degree + 1`.
    pub fn eval_into(&self, t: T, out: &mut [T]) {
        let x = t + t - T::one();
        out[0] = self.leading;
        if self.degree == 0 {
            return;
        }
        out[1] = (x - self.alpha[0]) * out[0] / self.beta[1];
        for l in 1..self.degree {
            out[l + 1] =
                ((x - self.alpha[l]) * out[l] - self.beta[l] * out[l - 1]) / self.beta[l + 1];
        }
    }

    /// Coefficients of `p_l` in the Bernstein basis of degree `degree`.
    ///
    /// `table` must cover `l + max(a, b)`.
    pub fn bernstein(&self, l: usize, table: &BinomialTable<T>) -> Vec<T> {
        let a = self.end_exponent;
        let b = self.start_exponent;
        let scale = self.norms[l].recip();

        let mut coeffs: Vec<T> = (0..=l)
            .map(|j| {
                let c = table.get(l + a, j) * table.get(l + b, l - j) / table.get(l, j) * scale;
                if (l - j) % 2 == 0 { c } else { -c }
            })
            .collect();

        for deg in l..self.degree() {
            let denom = T::from(deg + 1).unwrap();
            let mut elevated = Vec::with_capacity(deg + 2);
            for i in 0..=deg + 1 {
                let lambda = T::from(i).unwrap() / denom;
                let left = if i > 0 { coeffs[i - 1] } else { T::zero() };
                let right = if i <= deg { coeffs[i] } else { T::zero() };
                elevated.push(lambda * left + (T::one() - lambda) * right);
            }
            coeffs = elevated;
        }
        coeffs
    }
}
