//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! The degree-reduction algorithm proper:
//! - Endpoint derivative constraints
//! - The constrained least-squares solve and its error measure
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Endpoint derivative constraints.
pub mod constraints;

/// Constrained least-squares reduction solver.
pub mod reduction;
