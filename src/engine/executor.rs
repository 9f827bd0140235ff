//! Execution engine for degree reductions.
//!
//! ## Purpose
//!
//! This module runs one reduction end to end: it takes validated parameters,
//! drives the solver, and wraps the solution into a [`ReductionMatrix`].
//!
//! ## Design notes
//!
//! * Every call builds its own binomial table and quadrature rule; nothing is
//!   cached, so concurrent calls share no state.
//! * Generic over `FloatLinalg` types to support f32 and f64.
//!
//! ## Non-goals
//!
//! * This module does not validate parameters (handled by `validator`).

// Internal dependencies
use crate::algorithms::reduction::{ReductionParams, ReductionSolver};
use crate::engine::output::ReductionMatrix;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::ReductionError;

/// Stateless executor for validated reduction problems.
pub struct ReductionExecutor;

impl ReductionExecutor {
    /// Compute the reduction matrix for already-validated `params`.
    pub fn run<T: FloatLinalg>(
        params: ReductionParams,
    ) -> Result<ReductionMatrix<T>, ReductionError> {
        log::debug!(
            "reducing degree {} to {} (start continuity {}, end continuity {})",
            params.source_degree,
            params.target_degree,
            params.start_continuity,
            params.end_continuity
        );
        let matrix = ReductionSolver::<T>::new(params).solve()?;
        Ok(ReductionMatrix::new(params, matrix))
    }
}
