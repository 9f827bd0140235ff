//! Linear algebra backend abstraction for degree reduction.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the dense matrix
//! products the reduction needs, standardizing on the nalgebra backend.
//!
//! ## Design notes
//!
//! * The reduction never factorizes a matrix: projections and basis changes
//!   are plain products, so only `A · B` crosses this boundary.
//! * Matrices cross this boundary as row-major slices; nalgebra storage is
//!   column-major, so conversion happens here and nowhere else.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Product of the row-major `rows × inner` matrix `a` and the row-major
    /// `inner × cols` matrix `b`, returned row-major.
    ///
    /// # Panics
    ///
    /// Panics if a slice length does not match its stated shape.
    fn matmul(a: &[Self], b: &[Self], rows: usize, inner: usize, cols: usize) -> Vec<Self>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn matmul(a: &[Self], b: &[Self], rows: usize, inner: usize, cols: usize) -> Vec<Self> {
        nalgebra_backend::matmul(a, b, rows, inner, cols)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn matmul(a: &[Self], b: &[Self], rows: usize, inner: usize, cols: usize) -> Vec<Self> {
        nalgebra_backend::matmul(a, b, rows, inner, cols)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, RealField};

    /// Dense product `A B` of row-major operands.
    pub fn matmul<T: RealField + Copy>(
        a: &[T],
        b: &[T],
        rows: usize,
        inner: usize,
        cols: usize,
    ) -> Vec<T> {
        let lhs = DMatrix::from_row_slice(rows, inner, a);
        let rhs = DMatrix::from_row_slice(inner, cols, b);

        to_row_major(&(lhs * rhs))
    }

    fn to_row_major<T: RealField + Copy>(m: &DMatrix<T>) -> Vec<T> {
        let mut out = Vec::with_capacity(m.nrows() * m.ncols());
        for i in 0..m.nrows() {
            for j in 0..m.ncols() {
                out.push(m[(i, j)]);
            }
        }
        out
    }
}
