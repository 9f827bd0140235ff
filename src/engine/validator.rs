//! Input validation for degree-reduction parameters and buffers.
//!
//! ## Purpose
//!
//! This module checks the contract of the reduction entry points before any
//! computation or write happens: degree ordering, the continuity budget, and
//! caller buffer sizes.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Signed inputs**: The interop entry points accept signed integers, so
//!   negativity is checked here and conversion to `usize` only happens after.
//!
//! ## Invariants
//!
//! * A `ReductionParams` returned by [`Validator::validate_params`] satisfies
//!   `m <= n <= MAX_DEGREE` and `r + s <= m + 1`.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or otherwise correct invalid inputs.

// Internal dependencies
use crate::algorithms::reduction::ReductionParams;
use crate::math::binomial::MAX_DEGREE;
use crate::primitives::errors::ReductionError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for reduction parameters and caller buffers.
///
/// Provides static methods that return `Result<_, ReductionError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the source/target degree pair: `0 <= m <= n <= MAX_DEGREE`.
    pub fn validate_degrees(source: i64, target: i64) -> Result<(), ReductionError> {
        let too_large = !usize::try_from(source).is_ok_and(|n| n <= MAX_DEGREE);
        if source < 0 || target < 0 || target > source || too_large {
            return Err(ReductionError::InvalidDegree { source, target });
        }
        Ok(())
    }

    /// Validate the continuity orders against the target degree:
    /// `r >= 0`, `s >= 0`, `r + s <= m + 1`.
    ///
    /// Assumes the target degree itself is already validated.
    pub fn validate_continuity(start: i64, end: i64, target: i64) -> Result<(), ReductionError> {
        if start < 0 || end < 0 || start.saturating_add(end) > target.saturating_add(1) {
            return Err(ReductionError::InvalidConstraint { start, end, target });
        }
        Ok(())
    }

    /// Validate all four parameters and convert them to `ReductionParams`.
    pub fn validate_params(
        source: i64,
        target: i64,
        start: i64,
        end: i64,
    ) -> Result<ReductionParams, ReductionError> {
        Self::validate_degrees(source, target)?;
        Self::validate_continuity(start, end, target)?;

        let to_usize = |v: i64| {
            usize::try_from(v).map_err(|_| ReductionError::InvalidDegree { source, target })
        };
        Ok(ReductionParams {
            source_degree: to_usize(source)?,
            target_degree: to_usize(target)?,
            start_continuity: to_usize(start)?,
            end_continuity: to_usize(end)?,
        })
    }

    /// Validate already-unsigned parameters.
    pub fn validate_unsigned(params: &ReductionParams) -> Result<(), ReductionError> {
        let as_i64 = |v: usize| i64::try_from(v).unwrap_or(i64::MAX);
        Self::validate_degrees(as_i64(params.source_degree), as_i64(params.target_degree))?;
        Self::validate_continuity(
            as_i64(params.start_continuity),
            as_i64(params.end_continuity),
            as_i64(params.target_degree),
        )
    }

    // ========================================================================
    // Buffer Validation
    // ========================================================================

    /// Validate that a caller buffer has exactly `expected` elements.
    pub fn validate_buffer_len(expected: usize, got: usize) -> Result<(), ReductionError> {
        if expected != got {
            return Err(ReductionError::BufferSizeMismatch { expected, got });
        }
        Ok(())
    }

    /// Validate an interleaved control-point buffer of `count` points with `dim` components.
    pub fn validate_points(len: usize, count: usize, dim: usize) -> Result<(), ReductionError> {
        if dim == 0 {
            return Err(ReductionError::InvalidDimension(dim));
        }
        Self::validate_buffer_len(count * dim, len)
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that a required builder parameter was provided.
    pub fn validate_required<V>(
        value: Option<V>,
        parameter: &'static str,
    ) -> Result<V, ReductionError> {
        value.ok_or(ReductionError::MissingParameter { parameter })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), ReductionError> {
        if let Some(param) = duplicate_param {
            return Err(ReductionError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
