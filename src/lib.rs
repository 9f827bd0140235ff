//! # degree-reduction — Constrained Bezier degree reduction for Rust
//!
//! Computes the matrix that reduces a Bernstein (Bezier) polynomial of degree
//! `n` to the closest polynomial of degree `m <= n` in the L2 sense on `[0, 1]`,
//! while preserving `r` derivatives at the start and `s` derivatives at the end
//! of the curve exactly.
//!
//! ## What is degree reduction?
//!
//! A degree-`n` Bezier curve has `n + 1` control points. Reducing it to degree
//! `m` means finding `m + 1` control points whose curve stays as close as
//! possible to the original. The map from old to new control points is linear,
//! so it is captured once by an `(m + 1) × (n + 1)` matrix `Q`:
//!
//! ```text
//! b = Q · c        c: n + 1 source coefficients, b: m + 1 reduced coefficients
//! ```
//!
//! **How `Q` is built:**
//!
//! 1. Endpoint derivative conditions pin the first `r` and last `s` rows in
//!    closed form.
//! 2. The remaining rows are the L2 projection onto orthonormal Jacobi
//!    polynomials, evaluated by Gauss-Legendre quadrature.
//! 3. The result is checked against a rounding bound, unit row sums and the
//!    constraints before it is returned.
//!
//! ## Quick Start
//!
//! ```rust
//! use degree_reduction::prelude::*;
//!
//! // Degree 7 -> 5, endpoints interpolated
//! let q = reduction_matrix(7, 5, 1, 1)?;
//!
//! assert_eq!((q.rows(), q.cols()), (6, 8));
//! assert!((q.get(0, 0) - 1.0).abs() < 1e-12);
//!
//! println!("{}", q);
//! # Result::<(), ReductionError>::Ok(())
//! ```
//!
//! ```text
//! 1.0000  0.0000  0.0000  0.0000  0.0000  0.0000  0.0000  0.0000
//! -0.3767 1.2793  0.2350  -0.1795 -0.0326 0.1469  -0.0914 0.0191
//! 0.1902  -0.8224 0.9399  0.9790  -0.0245 -0.5580 0.3769  -0.0811
//! -0.0811 0.3769  -0.5580 -0.0245 0.9790  0.9399  -0.8224 0.1902
//! 0.0191  -0.0914 0.1469  -0.0326 -0.1795 0.2350  1.2793  -0.3767
//! 0.0000  0.0000  0.0000  0.0000  0.0000  0.0000  0.0000  1.0000
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use degree_reduction::prelude::*;
//!
//! let model = DegreeReduction::new()
//!     .source_degree(6)
//!     .target_degree(3)
//!     .continuity(2, 2)   // C1 at both ends
//!     .build()?;
//!
//! let q = model.matrix()?;
//!
//! // Reduce a planar control polygon (x, y interleaved)
//! let polygon = [0.0, 0.0, 1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 2.0, 5.0, 1.0, 6.0, 0.0];
//! let reduced = q.apply_points(&polygon, 2)?;
//! assert_eq!(reduced.len(), 4 * 2);
//! # Result::<(), ReductionError>::Ok(())
//! ```
//!
//! ### Writing into a caller buffer
//!
//! ```rust
//! use degree_reduction::prelude::*;
//!
//! let mut out = vec![0.0; 6 * 8];
//! reduction_matrix_into(7, 5, 1, 1, &mut out)?;
//! // row-major: out[i * (n + 1) + j]
//! assert!((out[5 * 8 + 7] - 1.0).abs() < 1e-12);
//! # Result::<(), ReductionError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter            | Symbol | Constraint             | Description                             |
//! |----------------------|--------|------------------------|-----------------------------------------|
//! | **source_degree**    | `n`    | `n <= MAX_DEGREE`      | Degree of the input polynomial          |
//! | **target_degree**    | `m`    | `0 <= m <= n`          | Degree of the reduced polynomial        |
//! | **start_continuity** | `r`    | `r >= 0`               | Derivatives (orders `0..r`) kept at 0   |
//! | **end_continuity**   | `s`    | `r + s <= m + 1`       | Derivatives (orders `0..s`) kept at 1   |
//!
//! `r = 1` interpolates the first control point, `r = 2` additionally keeps
//! the start tangent, and so on. With `r + s = m + 1` the result is fully
//! determined by the constraints.
//!
//! ## Errors
//!
//! All entry points return `Result<_, ReductionError>`:
//!
//! - **`InvalidDegree`**: `n < 0`, `m < 0`, `m > n`, or `n > MAX_DEGREE` (500).
//! - **`InvalidConstraint`**: `r < 0`, `s < 0`, or `r + s > m + 1`.
//! - **`NumericalSingularity`**: the matrix could not be computed to `sqrt(ε)` of
//!   the working precision. Least-squares reduction is intrinsically
//!   ill-conditioned in `m`; in f64 this happens once `m` is around 40-50 with
//!   few constraints, in f32 already around `m = 10`.
//! - **`BufferSizeMismatch`**: a caller buffer or vector has the wrong length.
//!
//! Errors are always reported before anything is written to a caller buffer.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! degree-reduction = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, the crate uses `alloc` and `libm`.
//!
//! ## Logging
//!
//! Solves are reported through the [`log`](https://docs.rs/log) facade at
//! `debug` level; rejected results at `warn`. No logger is
//! installed by the crate.
//!
//! ## References
//!
//! - Eck, M. (1995). "Least squares degree reduction of Bézier curves"
//! - Farin, G. (2002). "Curves and Surfaces for CAGD"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the crate error type and row-major dense matrix storage.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains binomial coefficients, Bernstein Gram matrices, quadrature,
// Jacobi polynomials and the nalgebra-backed dense products.
mod math;

// Layer 3: Algorithms - core reduction algorithms.
//
// Contains the endpoint derivative constraints and the constrained
// least-squares projection.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains validation, execution and result assembly.
mod engine;

// High-level API for degree reduction.
//
// Provides the builder and the free-function entry points.
mod api;

pub use api::{MAX_DEGREE, reduction_matrix, reduction_matrix_into};

// ============================================================================
// Prelude
// ============================================================================

/// Standard degree-reduction prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use degree_reduction::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        DegreeReductionBuilder as DegreeReduction, DegreeReductionModel, MAX_DEGREE,
        ReductionError, ReductionMatrix, ReductionParams, reduction_matrix, reduction_matrix_into,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
