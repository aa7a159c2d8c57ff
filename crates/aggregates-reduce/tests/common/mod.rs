//! Shared utilities for integration tests

#![allow(dead_code)]

use aggregates_vector::Vector3;

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-12;

/// The three unit basis vectors, in x, y, z order
pub fn unit_basis() -> Vec<Vector3> {
    vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ]
}

/// Assert two vectors are equal component-wise within tolerance
pub fn assert_vector_eq(actual: Vector3, expected: Vector3) {
    assert_relative_eq!(actual.x, expected.x, epsilon = EPSILON);
    assert_relative_eq!(actual.y, expected.y, epsilon = EPSILON);
    assert_relative_eq!(actual.z, expected.z, epsilon = EPSILON);
}

/// Reference population variance, computed directly in f64
pub fn naive_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let n = data.len() as f64;
    let m = data.iter().sum::<f64>() / n;
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / n
}
