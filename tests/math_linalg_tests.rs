#![cfg(feature = "dev")]
//! Tests for the nalgebra-backed dense products.

use approx::assert_relative_eq;

use degree_reduction::internals::math::linalg::FloatLinalg;

#[test]
fn test_matmul_row_major_layout() {
    // (2 x 3) · (3 x 2)
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let b = [7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
    let c = f64::matmul(&a, &b, 2, 3, 2);
    let expected = [58.0, 64.0, 139.0, 154.0];
    assert_eq!(c.len(), 4);
    for (got, want) in c.iter().zip(expected) {
        assert_relative_eq!(*got, want, epsilon = 1e-14);
    }
}

#[test]
fn test_matmul_outer_product() {
    // column (3 x 1) · row (1 x 2)
    let c = f64::matmul(&[1.0, -2.0, 3.0], &[4.0, 5.0], 3, 1, 2);
    assert_eq!(c, vec![4.0, 5.0, -8.0, -10.0, 12.0, 15.0]);
}

#[test]
fn test_matmul_identity_is_neutral() {
    let id = [1.0, 0.0, 0.0, 1.0];
    let b = [0.5, -1.5, 2.0, 3.0, 4.0, -4.0];
    assert_eq!(f64::matmul(&id, &b, 2, 2, 3), b.to_vec());
}

#[test]
fn test_f32_matmul() {
    let a = [4.0_f32, 1.0, 1.0, 3.0];
    let b = [1.0_f32, 2.0];
    let c = f32::matmul(&a, &b, 2, 2, 1);
    assert_relative_eq!(c[0], 6.0, epsilon = 1e-6);
    assert_relative_eq!(c[1], 7.0, epsilon = 1e-6);
}
