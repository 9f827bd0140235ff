//! Error types for degree reduction.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate: parameter validation, the solver, and the
//! buffer-oriented interop entry points.
//!
//! ## Design notes
//!
//! * **Fail before write**: every error is produced before any caller buffer
//!   is touched.
//! * **no_std**: `Display` is implemented on `core::fmt`; the
//!   `std::error::Error` impl is only available with the `std` feature.
//!
//! ## Non-goals
//!
//! * This module does not attempt recovery; every error is final for the call.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// Internal dependencies
use crate::math::binomial::MAX_DEGREE;

/// Errors produced while building or applying a degree-reduction matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum ReductionError {
    /// Source or target degree is negative, the target exceeds the source, or
    /// the source exceeds [`MAX_DEGREE`].
    InvalidDegree {
        /// Source degree `n`.
        source: i64,
        /// Target degree `m`.
        target: i64,
    },

    /// Continuity orders are negative or impose more conditions than the
    /// target degree has coefficients (`r + s > m + 1`).
    InvalidConstraint {
        /// Derivatives preserved at the start of the domain (`r`).
        start: i64,
        /// Derivatives preserved at the end of the domain (`s`).
        end: i64,
        /// Target degree `m`.
        target: i64,
    },

    /// The reduction could not be computed to `sqrt(ε)` of the working
    /// precision: non-finite entries, an excessive rounding bound, or a row
    /// sum or constraint residual out of tolerance.
    NumericalSingularity(String),

    /// A caller-provided buffer or vector does not have the required length.
    BufferSizeMismatch {
        /// Required number of elements.
        expected: usize,
        /// Number of elements provided.
        got: usize,
    },

    /// Control points were given with zero components.
    InvalidDimension(usize),

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for ReductionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDegree { source, target } => write!(
                f,
                "Invalid degrees: source {}, target {} (need 0 <= target <= source <= {})",
                source, target, MAX_DEGREE
            ),
            Self::InvalidConstraint { start, end, target } => write!(
                f,
                "Invalid continuity: start {}, end {} (need both >= 0 and start + end <= {})",
                start,
                end,
                target + 1
            ),
            Self::NumericalSingularity(msg) => write!(f, "Numerically singular system: {}", msg),
            Self::BufferSizeMismatch { expected, got } => write!(
                f,
                "Buffer size mismatch: expected {} elements, got {}",
                expected, got
            ),
            Self::InvalidDimension(dim) => {
                write!(f, "Invalid point dimension: {} (must be at least 1)", dim)
            }
            Self::MissingParameter { parameter } => {
                write!(f, "Required parameter '{}' was not set", parameter)
            }
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReductionError {}
