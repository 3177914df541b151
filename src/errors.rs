//! Validation errors

use crate::float_types::Real;
use nalgebra::Point3;
use std::fmt::Display;

/// All the possible validation issues we might encounter.
///
/// These only occur at the validation boundary ([`crate::Triangle::try_new`]
/// and [`crate::Triangle::validate`]); the geometric queries themselves signal
/// "no intersection" / "unchanged" through their return values and never fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (InvalidCoordinate) The coordinate has a NaN or infinite
    InvalidCoordinate(Point3<Real>),
    /// (DegenerateTriangle) The three vertices are coincident or collinear
    /// and span no usable area
    DegenerateTriangle(Point3<Real>),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidCoordinate(point) => {
                write!(f, "(InvalidCoordinate) The coordinate ({}) has a NaN or infinite", point)
            },
            ValidationError::DegenerateTriangle(point) => {
                write!(
                    f,
                    "(DegenerateTriangle) The vertices around {} are coincident or collinear",
                    point
                )
            },
        }
    }
}
