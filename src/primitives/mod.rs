//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Basic data structures shared by every other layer:
//! - The crate error type
//! - Row-major dense matrix storage
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type for all fallible operations.
pub mod errors;

/// Row-major dense matrix.
pub mod dense;
