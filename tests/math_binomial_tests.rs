#![cfg(feature = "dev")]
//! Tests for the binomial coefficient table.
//!
//! ## Test Organization
//!
//! 1. **Small Values** - Pascal's triangle entries
//! 2. **Large Degrees** - Exactness and finiteness far beyond factorial range
//! 3. **Derivative Ratio** - C(n, d) / C(m, d)

use approx::assert_relative_eq;

use degree_reduction::internals::math::binomial::{BinomialTable, MAX_DEGREE};

// ============================================================================
// Small Values
// ============================================================================

#[test]
fn test_pascal_rows() {
    let table = BinomialTable::<f64>::new(6);
    assert_eq!(table.max_degree(), 6);

    let expected: [&[f64]; 7] = [
        &[1.0],
        &[1.0, 1.0],
        &[1.0, 2.0, 1.0],
        &[1.0, 3.0, 3.0, 1.0],
        &[1.0, 4.0, 6.0, 4.0, 1.0],
        &[1.0, 5.0, 10.0, 10.0, 5.0, 1.0],
        &[1.0, 6.0, 15.0, 20.0, 15.0, 6.0, 1.0],
    ];
    for (k, row) in expected.iter().enumerate() {
        for (i, &v) in row.iter().enumerate() {
            assert_eq!(table.get(k, i), v, "C({}, {})", k, i);
        }
    }
}

#[test]
fn test_outside_triangle_is_zero() {
    let table = BinomialTable::<f64>::new(4);
    assert_eq!(table.get(2, 3), 0.0);
    assert_eq!(table.get(0, 1), 0.0);
}

#[test]
#[should_panic(expected = "exceeds table size 3")]
fn test_degree_beyond_table_panics() {
    let table = BinomialTable::<f64>::new(3);
    let _ = table.get(4, 0);
}

// ============================================================================
// Large Degrees
// ============================================================================

#[test]
fn test_exact_where_representable() {
    let table = BinomialTable::<f64>::new(60);
    // C(50, 25) = 126410606437752 < 2^53
    assert_eq!(table.get(50, 25), 126_410_606_437_752.0);
    // C(60, 30) = 118264581564861424 (rounded to nearest double)
    assert_relative_eq!(
        table.get(60, 30),
        118_264_581_564_861_424.0,
        max_relative = 1e-15
    );
}

#[test]
fn test_symmetric_and_finite_for_large_degree() {
    let table = BinomialTable::<f64>::new(600);
    for k in [100, 333, 600] {
        for i in 0..=k {
            let v = table.get(k, i);
            assert!(v.is_finite() && v >= 1.0, "C({}, {}) = {}", k, i, v);
            assert_eq!(v, table.get(k, k - i));
        }
    }
}

#[test]
fn test_table_for_maximum_degree_is_finite() {
    // Rows the solver and the approximation error reach at the degree cap
    let table = BinomialTable::<f64>::new(2 * MAX_DEGREE);
    assert_eq!(table.max_degree(), 1000);
    assert!(table.get(1000, 500).is_finite());
    assert!(table.get(1000, 500) > 1e298);
}

#[test]
fn test_try_new_rejects_overflowing_size() {
    assert!(BinomialTable::<f64>::try_new(usize::MAX).is_none());
    assert!(BinomialTable::<f64>::try_new(usize::MAX - 1).is_none());
    assert!(BinomialTable::<f64>::try_new(usize::MAX / 2).is_none());
    assert!(BinomialTable::<f64>::try_new(12).is_some());
}

#[test]
#[should_panic(expected = "overflows usize")]
fn test_new_panics_on_overflowing_size() {
    let _ = BinomialTable::<f64>::new(usize::MAX - 1);
}

#[test]
fn test_pascal_identity_holds() {
    let table = BinomialTable::<f64>::new(40);
    for k in 1..=40 {
        for i in 1..k {
            assert_relative_eq!(
                table.get(k, i),
                table.get(k - 1, i - 1) + table.get(k - 1, i),
                max_relative = 1e-15
            );
        }
    }
}

#[test]
fn test_f32_table() {
    let table = BinomialTable::<f32>::new(10);
    assert_eq!(table.get(10, 5), 252.0_f32);
}

// ============================================================================
// Derivative Ratio
// ============================================================================

#[test]
fn test_derivative_ratio() {
    assert_eq!(BinomialTable::<f64>::derivative_ratio(7, 5, 0), 1.0);
    assert_relative_eq!(BinomialTable::<f64>::derivative_ratio(7, 5, 1), 7.0 / 5.0);
    // C(7, 2) / C(5, 2) = 21 / 10
    assert_relative_eq!(BinomialTable::<f64>::derivative_ratio(7, 5, 2), 2.1);
    // C(6, 3) / C(3, 3) = 20
    assert_relative_eq!(BinomialTable::<f64>::derivative_ratio(6, 3, 3), 20.0);
}

#[test]
fn test_derivative_ratio_matches_table() {
    let table = BinomialTable::<f64>::new(30);
    for d in 0..=10 {
        let expected = table.get(30, d) / table.get(10, d);
        assert_relative_eq!(
            BinomialTable::<f64>::derivative_ratio(30, 10, d),
            expected,
            max_relative = 1e-13
        );
    }
}
