#![cfg(feature = "dev")]
//! Tests for the orthonormal Jacobi family on the unit interval.
//!
//! ## Test Organization
//!
//! 1. **Values** - Shifted Legendre case and orthonormality
//! 2. **Bernstein Form** - Coefficients reproduce the recurrence values

use approx::{assert_abs_diff_eq, assert_relative_eq};

use degree_reduction::internals::math::binomial::BinomialTable;
use degree_reduction::internals::math::jacobi::JacobiBasis;
use degree_reduction::internals::math::quadrature::GaussLegendre;

fn bernstein_eval(coeffs: &[f64], t: f64, table: &BinomialTable<f64>) -> f64 {
    let d = coeffs.len() - 1;
    coeffs
        .iter()
        .enumerate()
        .map(|(i, &c)| c * table.get(d, i) * t.powi(i as i32) * (1.0 - t).powi((d - i) as i32))
        .sum()
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn test_unit_weight_gives_shifted_legendre() {
    let table = BinomialTable::new(10);
    let basis = JacobiBasis::<f64>::new(3, 0, 0, &table);
    assert_eq!(basis.degree(), 3);

    let mut p = [0.0; 4];
    for &t in &[0.0, 0.2, 0.5, 0.9, 1.0] {
        basis.eval_into(t, &mut p);
        let x: f64 = 2.0 * t - 1.0;
        assert_relative_eq!(p[0], 1.0, epsilon = 1e-14);
        assert_relative_eq!(p[1], 3.0_f64.sqrt() * x, epsilon = 1e-14);
        assert_relative_eq!(p[2], 5.0_f64.sqrt() * (1.5 * x * x - 0.5), epsilon = 1e-13);
        assert_relative_eq!(
            p[3],
            7.0_f64.sqrt() * (2.5 * x * x * x - 1.5 * x),
            epsilon = 1e-13
        );
    }
}

#[test]
fn test_orthonormal_under_weight() {
    for &(degree, b, a) in &[(8, 4, 2), (5, 0, 6), (12, 2, 2), (0, 10, 3)] {
        let table = BinomialTable::new(a + b + 2 * degree);
        let basis = JacobiBasis::<f64>::new(degree, b, a, &table);
        let rule = GaussLegendre::<f64>::exact_for(2 * degree + a + b);

        let mut gram = vec![0.0; (degree + 1) * (degree + 1)];
        let mut p = vec![0.0; degree + 1];
        for (&t, &w) in rule.nodes().iter().zip(rule.weights()) {
            basis.eval_into(t, &mut p);
            let weight = w * t.powi(b as i32) * (1.0 - t).powi(a as i32);
            for i in 0..=degree {
                for k in 0..=degree {
                    gram[i * (degree + 1) + k] += weight * p[i] * p[k];
                }
            }
        }
        for i in 0..=degree {
            for k in 0..=degree {
                let want = if i == k { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(gram[i * (degree + 1) + k], want, epsilon = 1e-12);
            }
        }
    }
}

// ============================================================================
// Bernstein Form
// ============================================================================

#[test]
fn test_bernstein_coefficients_match_recurrence() {
    let (degree, b, a) = (7, 4, 2);
    let table = BinomialTable::new(a + b + 2 * degree);
    let basis = JacobiBasis::<f64>::new(degree, b, a, &table);

    let mut p = vec![0.0; degree + 1];
    for &t in &[0.0, 0.13, 0.5, 0.77, 1.0] {
        basis.eval_into(t, &mut p);
        for l in 0..=degree {
            let coeffs = basis.bernstein(l, &table);
            assert_eq!(coeffs.len(), degree + 1);
            let got = bernstein_eval(&coeffs, t, &table);
            assert_relative_eq!(got, p[l], epsilon = 1e-10, max_relative = 1e-10);
        }
    }
}

#[test]
fn test_constant_member_is_flat_in_bernstein_form() {
    // p_0 is constant, so all its elevated coefficients agree
    let table = BinomialTable::new(20);
    let basis = JacobiBasis::<f64>::new(5, 2, 2, &table);
    let coeffs = basis.bernstein(0, &table);
    for c in &coeffs {
        assert_relative_eq!(*c, coeffs[0], max_relative = 1e-14);
    }
    let mut p = vec![0.0; 6];
    basis.eval_into(0.3, &mut p);
    assert_relative_eq!(coeffs[0], p[0], max_relative = 1e-14);
}
