//! Owned result of a degree reduction.
//!
//! ## Purpose
//!
//! This module defines `ReductionMatrix`, the value returned by every
//! reduction entry point. It owns its row-major data, knows its own
//! dimensions and the parameters that produced it, and can apply itself to
//! coefficient vectors or control polygons.
//!
//! ## Key concepts
//!
//! * **Row-major**: entry `(i, j)` is at `as_slice()[i * cols + j]`.
//! * **Display**: one row per line, each entry as `{:.4}` followed by a tab.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};

// Internal dependencies
use crate::algorithms::reduction::{ReductionParams, approximation_error};
use crate::engine::validator::Validator;
use crate::engine::writer::MatrixWriter;
use crate::math::linalg::FloatLinalg;
use crate::primitives::dense::DenseMatrix;
use crate::primitives::errors::ReductionError;

// ============================================================================
// ReductionMatrix
// ============================================================================

/// The `(m + 1) × (n + 1)` degree-reduction matrix `Q`.
///
/// `Q[i][j]` is the weight of source coefficient `j` in target coefficient `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReductionMatrix<T> {
    params: ReductionParams,
    matrix: DenseMatrix<T>,
}

impl<T: FloatLinalg> ReductionMatrix<T> {
    pub(crate) fn new(params: ReductionParams, matrix: DenseMatrix<T>) -> Self {
        debug_assert_eq!(matrix.rows(), params.rows());
        debug_assert_eq!(matrix.cols(), params.cols());
        Self { params, matrix }
    }

    /// Parameters that produced this matrix.
    #[inline]
    pub fn params(&self) -> &ReductionParams {
        &self.params
    }

    /// Source degree `n`.
    #[inline]
    pub fn source_degree(&self) -> usize {
        self.params.source_degree
    }

    /// Target degree `m`.
    #[inline]
    pub fn target_degree(&self) -> usize {
        self.params.target_degree
    }

    /// Number of rows (`m + 1`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.matrix.rows()
    }

    /// Number of columns (`n + 1`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.matrix.cols()
    }

    /// Entry `Q[i][j]`.
    ///
    /// # Panics
    ///
    /// Panics if `i > m` or `j > n`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows() && j < self.cols(), "index ({}, {}) out of bounds", i, j);
        self.matrix[(i, j)]
    }

    /// Row `i`: the weights producing target coefficient `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        self.matrix.row(i)
    }

    /// Flat row-major view, index `i * (n + 1) + j`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.matrix.as_slice()
    }

    /// Consume into the flat row-major data.
    pub fn into_vec(self) -> Vec<T> {
        self.matrix.into_vec()
    }

    /// Borrow the underlying dense matrix.
    #[inline]
    pub fn as_dense(&self) -> &DenseMatrix<T> {
        &self.matrix
    }

    /// Copy the matrix into a caller buffer of exactly `(m + 1) * (n + 1)` elements.
    pub fn write_into(&self, out: &mut [T]) -> Result<(), ReductionError> {
        MatrixWriter::write(&self.matrix, out)
    }

    /// Reduce one coefficient vector: returns `Q · source`.
    pub fn apply(&self, source: &[T]) -> Result<Vec<T>, ReductionError> {
        Validator::validate_buffer_len(self.cols(), source.len())?;
        Ok(self.matrix.mul_vec(source))
    }

    /// Reduce a control polygon of `n + 1` interleaved points with `dim` components each.
    ///
    /// Returns `m + 1` points in the same interleaved layout.
    pub fn apply_points(&self, points: &[T], dim: usize) -> Result<Vec<T>, ReductionError> {
        Validator::validate_points(points.len(), self.cols(), dim)?;
        let mut out = vec![T::zero(); self.rows() * dim];
        for i in 0..self.rows() {
            let weights = self.matrix.row(i);
            let target = &mut out[i * dim..(i + 1) * dim];
            for (j, &w) in weights.iter().enumerate() {
                let point = &points[j * dim..(j + 1) * dim];
                for (acc, &x) in target.iter_mut().zip(point) {
                    *acc = *acc + w * x;
                }
            }
        }
        Ok(out)
    }

    /// L2 distance on `[0, 1]` between the source polynomial and its reduction.
    pub fn approximation_error(&self, source: &[T]) -> Result<T, ReductionError> {
        approximation_error(&self.matrix, source)
    }
}

impl<T: FloatLinalg> Display for ReductionMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows() {
            for &v in self.row(i) {
                write!(f, "{:.4}\t", v.to_f64().unwrap_or(f64::NAN))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
