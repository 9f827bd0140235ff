//! Binomial coefficient table.
//!
//! ## Purpose
//!
//! This module precomputes the binomial coefficients `C(k, i)` needed by the
//! Bernstein Gram matrices and the endpoint constraints, together with the
//! derivative scaling ratio between two degrees.
//!
//! ## Design notes
//!
//! * Rows are built with the multiplicative recurrence
//!   `C(k, i) = C(k, i - 1) * (k - i + 1) / i`, never through factorials, so
//!   f64 stays finite up to `k` of roughly a thousand.
//! * Storage is the lower triangle, row `k` holding `k + 1` entries.
//! * [`MAX_DEGREE`] bounds the source degree the crate accepts. The solver and
//!   the approximation error need rows up to `2 * MAX_DEGREE`, and
//!   `C(1000, 500)` is still finite in f64.
//!
//! ## Invariants
//!
//! * `get(k, 0) == get(k, k) == 1` for every stored row.
//! * Each row is symmetric: `get(k, i) == get(k, k - i)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Largest source degree accepted by the validator and the solver.
pub const MAX_DEGREE: usize = 500;

/// Triangular table of binomial coefficients `C(k, i)` for `0 <= i <= k <= max_degree`.
#[derive(Debug, Clone)]
pub struct BinomialTable<T> {
    max_degree: usize,
    values: Vec<T>,
}

impl<T: Float> BinomialTable<T> {
    /// Build the table for all degrees up to and including `max_degree`.
    ///
    /// # Panics
    ///
    /// Panics if the table size overflows `usize`; see [`BinomialTable::try_new`].
    pub fn new(max_degree: usize) -> Self {
        match Self::try_new(max_degree) {
            Some(table) => table,
            None => panic!("binomial table of degree {} overflows usize", max_degree),
        }
    }

    /// Build the table, or `None` if `(max_degree + 1)(max_degree + 2) / 2`
    /// entries cannot be addressed.
    pub fn try_new(max_degree: usize) -> Option<Self> {
        let rows = max_degree.checked_add(1)?;
        let len = rows.checked_mul(rows.checked_add(1)?)? / 2;
        let mut values = Vec::with_capacity(len);
        for k in 0..=max_degree {
            let kf = T::from(k).unwrap();
            let mut c = T::one();
            values.push(c);
            for i in 1..=k {
                // Mirror the left half to keep the row exactly symmetric.
                if i > k / 2 {
                    c = values[Self::offset(k) + (k - i)];
                } else {
                    let i_f = T::from(i).unwrap();
                    c = c * (kf - i_f + T::one()) / i_f;
                    c = c.round();
                }
                values.push(c);
            }
        }
        Some(Self { max_degree, values })
    }

    /// Largest degree stored in the table.
    #[inline]
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// `C(k, i)`, or zero when `i > k`.
    ///
    /// # Panics
    ///
    /// Panics if `k > max_degree`.
    #[inline]
    pub fn get(&self, k: usize, i: usize) -> T {
        assert!(
            k <= self.max_degree(),
            "degree {} exceeds table size {}",
            k,
            self.max_degree()
        );
        if i > k {
            return T::zero();
        }
        self.values[Self::offset(k) + i]
    }

    /// Ratio `C(n, d) / C(m, d) = n(n-1)…(n-d+1) / (m(m-1)…(m-d+1))`.
    ///
    /// This is the factor relating the `d`-th derivative scale of degree `n`
    /// to that of degree `m`. Evaluated as a running product of ratios to
    /// stay close to one. The caller guarantees `d <= m <= n`.
    pub fn derivative_ratio(n: usize, m: usize, d: usize) -> T {
        debug_assert!(d <= m && m <= n);
        (0..d).fold(T::one(), |acc, l| {
            acc * T::from(n - l).unwrap() / T::from(m - l).unwrap()
        })
    }

    #[inline]
    fn offset(k: usize) -> usize {
        k * (k + 1) / 2
    }
}
