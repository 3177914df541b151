//! Test support library
//! Provides various helper functions & utilities for tests.

use tricut::{Triangle, float_types::Real};
use nalgebra::Point3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Component-wise point comparison with an acceptable tolerance.
pub fn approx_point(p: &Point3<Real>, q: &Point3<Real>, eps: Real) -> bool {
    (p - q).norm() < eps
}

/// Helper to make a Triangle from plain coordinate arrays.
pub fn tri(a: [Real; 3], b: [Real; 3], c: [Real; 3]) -> Triangle {
    Triangle::new(
        Point3::new(a[0], a[1], a[2]),
        Point3::new(b[0], b[1], b[2]),
        Point3::new(c[0], c[1], c[2]),
    )
}

/// Sum of the areas of a set of triangles.
pub fn total_area(triangles: &[Triangle]) -> Real {
    triangles.iter().map(|t| t.area()).sum()
}
