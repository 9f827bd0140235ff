//! Gauss-Legendre quadrature on `[0, 1]`.
//!
//! ## Purpose
//!
//! This module provides the fixed quadrature rule the solver uses to project
//! Bernstein polynomials onto an orthonormal basis without forming any Gram
//! matrix.
//!
//! ## Design notes
//!
//! * Nodes are the roots of the Legendre polynomial `P_count`, found by Newton
//!   iteration from the Chebyshev-like guess `cos(π (i + 0.75) / (count + 0.5))`.
//! * Nodes and weights are always computed in f64 and converted afterwards, so
//!   an f32 rule is as accurate as f32 allows.
//! * Only half of the roots are iterated; the rule is symmetric about `1/2`.
//!
//! ## Invariants
//!
//! * A rule with `count` nodes integrates every polynomial of degree below
//!   `2 * count` exactly (up to rounding).
//! * Weights are positive and sum to one.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Newton steps allowed per root before accepting the current iterate.
const MAX_NEWTON_STEPS: usize = 100;

/// Gauss-Legendre rule mapped to `[0, 1]`.
#[derive(Debug, Clone)]
pub struct GaussLegendre<T> {
    nodes: Vec<T>,
    weights: Vec<T>,
}

impl<T: Float> GaussLegendre<T> {
    /// Build the `count`-point rule.
    pub fn new(count: usize) -> Self {
        let (nodes, weights) = nodes_and_weights(count);
        Self {
            nodes: nodes.into_iter().map(|x| T::from(x).unwrap()).collect(),
            weights: weights.into_iter().map(|w| T::from(w).unwrap()).collect(),
        }
    }

    /// Smallest rule that is exact for polynomials of degree `degree`.
    pub fn exact_for(degree: usize) -> Self {
        Self::new(degree / 2 + 1)
    }

    /// Nodes in increasing order.
    #[inline]
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Weights matching [`GaussLegendre::nodes`].
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }
}

/// Nodes and weights of the `count`-point rule on `[0, 1]`, nodes ascending.
fn nodes_and_weights(count: usize) -> (Vec<f64>, Vec<f64>) {
    let mut nodes = vec![0.0; count];
    let mut weights = vec![0.0; count];
    let tolerance = 4.0 * f64::EPSILON;

    for i in 0..count.div_ceil(2) {
        let mut z: f64 =
            ((i as f64 + 0.75) / (count as f64 + 0.5) * core::f64::consts::PI).cos();

        for _ in 0..MAX_NEWTON_STEPS {
            let (p, dp) = legendre_and_derivative(count, z);
            let step = p / dp;
            z -= step;
            if step.abs() <= tolerance {
                break;
            }
        }

        let (_, dp) = legendre_and_derivative(count, z);
        // Half the [-1, 1] weight, since dt = dx / 2.
        let w = 1.0 / ((1.0 - z * z) * dp * dp);

        nodes[i] = (1.0 - z) / 2.0;
        nodes[count - 1 - i] = (1.0 + z) / 2.0;
        weights[i] = w;
        weights[count - 1 - i] = w;
    }

    (nodes, weights)
}

/// `P_n(x)` and `P_n'(x)` by the three-term recurrence.
fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    let mut prev = 1.0;
    let mut curr = x;
    for k in 2..=n {
        let kf = k as f64;
        let next = ((2.0 * kf - 1.0) * x * curr - (kf - 1.0) * prev) / kf;
        prev = curr;
        curr = next;
    }
    let dp = n as f64 * (x * curr - prev) / (x * x - 1.0);
    (curr, dp)
}
