//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the reduction:
//! - Binomial coefficients
//! - Bernstein Gram and cross-Gram matrices
//! - Gauss-Legendre quadrature and orthonormal Jacobi polynomials
//! - Dense matrix products (nalgebra backend)
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Binomial coefficient table.
pub mod binomial;

/// Bernstein Gram matrices.
pub mod gram;

/// Orthonormal Jacobi polynomials.
pub mod jacobi;

/// Dense matrix products.
pub mod linalg;

/// Gauss-Legendre quadrature.
pub mod quadrature;
