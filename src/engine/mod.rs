//! Layer 4: Engine
//!
//! # Purpose
//!
//! Orchestration around the solver:
//! - Parameter and buffer validation
//! - Running a reduction and assembling its owned result
//! - Row-major export into caller buffers
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Reduction executor.
pub mod executor;

/// Owned reduction result.
pub mod output;

/// Input validation.
pub mod validator;

/// Row-major buffer export.
pub mod writer;
