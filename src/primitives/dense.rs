//! Row-major dense matrix storage.
//!
//! ## Purpose
//!
//! This module provides `DenseMatrix`, the flat row-major block every other
//! layer passes around: Gram matrices, constraint rows, quadrature samples
//! and reduction results.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` at all times.
//! * Element `(i, j)` lives at flat index `i * cols + j`.
//!
//! ## Non-goals
//!
//! * This module does not implement matrix-matrix products (see `math::linalg`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Float;

// ============================================================================
// DenseMatrix
// ============================================================================

/// A dense matrix stored contiguously in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> DenseMatrix<T> {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create the `size × size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Wrap existing row-major data.
    ///
    /// Returns `None` when `data.len() != rows * cols`.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Flat row-major view.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major data.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// True if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Matrix-vector product `self · x`.
    ///
    /// The caller guarantees `x.len() == self.cols()`.
    pub fn mul_vec(&self, x: &[T]) -> Vec<T> {
        debug_assert_eq!(x.len(), self.cols);
        (0..self.rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(x)
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect()
    }

    /// Quadratic/bilinear form `uᵀ · self · v`.
    pub fn bilinear(&self, u: &[T], v: &[T]) -> T {
        debug_assert_eq!(u.len(), self.rows);
        self.mul_vec(v)
            .iter()
            .zip(u)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Entrywise absolute value.
    pub fn abs(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v.abs()).collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i * self.cols + j]
    }
}
