//! Row-major export into caller-owned buffers.
//!
//! The flat layout is `out[i * (n + 1) + j] = Q[i][j]` for `0 <= i <= m`,
//! `0 <= j <= n`. The buffer length is checked before anything is written.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::dense::DenseMatrix;
use crate::primitives::errors::ReductionError;

/// Copies a solved matrix into a flat caller buffer.
pub struct MatrixWriter;

impl MatrixWriter {
    /// Write `matrix` into `out` in row-major order.
    ///
    /// Fails with `BufferSizeMismatch`, leaving `out` untouched, unless
    /// `out.len() == rows * cols`.
    pub fn write<T: Float>(matrix: &DenseMatrix<T>, out: &mut [T]) -> Result<(), ReductionError> {
        Validator::validate_buffer_len(matrix.rows() * matrix.cols(), out.len())?;
        // DenseMatrix storage is already row-major.
        out.copy_from_slice(matrix.as_slice());
        Ok(())
    }
}
