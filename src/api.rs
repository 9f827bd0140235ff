//! High-level API for degree reduction.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring a reduction, and two free functions mirroring the classic
//! `reduction_matrix(n, m, r, s, out)` interface.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; continuity orders default to zero.
//! * **Validated**: Parameters are validated when `.build()` is called, and
//!   again by the free functions before any computation.
//! * **Owned output**: Results are returned as [`ReductionMatrix`] values that
//!   carry their own dimensions; writing into a flat buffer is an explicit,
//!   length-checked step.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DegreeReductionBuilder`] via `DegreeReduction::new()` (prelude alias).
//! 2. Set degrees and continuity (`.source_degree()`, `.target_degree()`, ...).
//! 3. Call `.build()` to validate, then `.matrix()` to compute.

// Internal dependencies
use crate::engine::executor::ReductionExecutor;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::reduction::ReductionParams;
pub use crate::math::binomial::MAX_DEGREE;
pub use crate::engine::output::ReductionMatrix;
pub use crate::primitives::errors::ReductionError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a degree-reduction problem.
#[derive(Debug, Clone, Default)]
pub struct DegreeReductionBuilder {
    /// Source degree `n`.
    pub source_degree: Option<usize>,

    /// Target degree `m`.
    pub target_degree: Option<usize>,

    /// Derivatives preserved at `t = 0` (default: 0).
    pub start_continuity: Option<usize>,

    /// Derivatives preserved at `t = 1` (default: 0).
    pub end_continuity: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl DegreeReductionBuilder {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source degree `n`.
    pub fn source_degree(mut self, degree: usize) -> Self {
        if self.source_degree.is_some() {
            self.duplicate_param = Some("source_degree");
        }
        self.source_degree = Some(degree);
        self
    }

    /// Set the target degree `m`.
    pub fn target_degree(mut self, degree: usize) -> Self {
        if self.target_degree.is_some() {
            self.duplicate_param = Some("target_degree");
        }
        self.target_degree = Some(degree);
        self
    }

    /// Set the number of derivatives preserved at `t = 0`.
    pub fn start_continuity(mut self, order: usize) -> Self {
        if self.start_continuity.is_some() {
            self.duplicate_param = Some("start_continuity");
        }
        self.start_continuity = Some(order);
        self
    }

    /// Set the number of derivatives preserved at `t = 1`.
    pub fn end_continuity(mut self, order: usize) -> Self {
        if self.end_continuity.is_some() {
            self.duplicate_param = Some("end_continuity");
        }
        self.end_continuity = Some(order);
        self
    }

    /// Set both continuity orders at once.
    pub fn continuity(self, start: usize, end: usize) -> Self {
        self.start_continuity(start).end_continuity(end)
    }

    /// Validate the configuration.
    pub fn build(self) -> Result<DegreeReductionModel, ReductionError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let params = ReductionParams {
            source_degree: Validator::validate_required(self.source_degree, "source_degree")?,
            target_degree: Validator::validate_required(self.target_degree, "target_degree")?,
            start_continuity: self.start_continuity.unwrap_or(0),
            end_continuity: self.end_continuity.unwrap_or(0),
        };
        Validator::validate_unsigned(&params)?;

        Ok(DegreeReductionModel { params })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated degree-reduction problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeReductionModel {
    params: ReductionParams,
}

impl DegreeReductionModel {
    /// Validated parameters.
    #[inline]
    pub fn params(&self) -> &ReductionParams {
        &self.params
    }

    /// Compute the reduction matrix in double precision.
    pub fn matrix(&self) -> Result<ReductionMatrix<f64>, ReductionError> {
        self.matrix_as::<f64>()
    }

    /// Compute the reduction matrix in the requested precision.
    pub fn matrix_as<T: FloatLinalg>(&self) -> Result<ReductionMatrix<T>, ReductionError> {
        ReductionExecutor::run(self.params)
    }

    /// Compute the matrix and write it row-major into `out`.
    ///
    /// `out` must hold exactly `(m + 1) * (n + 1)` elements; otherwise nothing
    /// is computed or written.
    pub fn write_into(&self, out: &mut [f64]) -> Result<(), ReductionError> {
        Validator::validate_buffer_len(self.params.rows() * self.params.cols(), out.len())?;
        self.matrix()?.write_into(out)
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Compute the `(m + 1) × (n + 1)` reduction matrix from degree `n` to `m`,
/// preserving `r` derivatives at `t = 0` and `s` at `t = 1`.
///
/// # Errors
///
/// * `InvalidDegree` if `n < 0`, `m < 0`, `m > n` or `n > MAX_DEGREE`.
/// * `InvalidConstraint` if `r < 0`, `s < 0` or `r + s > m + 1`.
/// * `NumericalSingularity` if the matrix cannot be computed to `sqrt(ε)`
///   of f64 (in practice once `m` exceeds about 40).
pub fn reduction_matrix(
    n: i64,
    m: i64,
    r: i64,
    s: i64,
) -> Result<ReductionMatrix<f64>, ReductionError> {
    let params = Validator::validate_params(n, m, r, s)?;
    ReductionExecutor::run(params)
}

/// Fill `out[i * (n + 1) + j]` with the reduction matrix entries.
///
/// Parameters and the buffer length are validated before any computation;
/// on any error `out` is left untouched.
pub fn reduction_matrix_into(
    n: i64,
    m: i64,
    r: i64,
    s: i64,
    out: &mut [f64],
) -> Result<(), ReductionError> {
    let params = Validator::validate_params(n, m, r, s)?;
    Validator::validate_buffer_len(params.rows() * params.cols(), out.len())?;
    ReductionExecutor::run::<f64>(params)?.write_into(out)
}
