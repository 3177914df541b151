//! Planes in 3-space and tolerance-based point classification against them.

use crate::float_types::{Real, tolerance};
use nalgebra::{Point3, Vector3};

/// Position of a point or triangle relative to a reference plane.
///
/// Points are never `Spanning`; a triangle is `Spanning` when it has vertices
/// strictly on both sides of the plane. Classification is a pure computation
/// result, threaded explicitly through the splitting pipeline rather than
/// stored on the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Front,
    Back,
    Coplanar,
    Spanning,
}

impl Classification {
    /// The classification as seen from the opposite side of the plane.
    pub const fn flipped(self) -> Self {
        match self {
            Classification::Front => Classification::Back,
            Classification::Back => Classification::Front,
            other => other,
        }
    }
}

/// A plane in 3-space: `normal · p = w` for every point `p` on the plane.
///
/// When derived from a vertex triple the normal is **not** normalized; its
/// magnitude is twice the triangle's area. Signed distances are therefore
/// scaled by that magnitude, and the squared-area degeneracy checks in
/// [`crate::Triangle::insert`] rely on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub normal: Vector3<Real>,
    pub w: Real,
}

impl Plane {
    /// Create a plane from a normal vector and its offset from the origin.
    pub const fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        Plane { normal, w }
    }

    /// Create the supporting plane of the triangle `(a, b, c)`.
    /// The normal direction follows the right-hand rule: `(b-a) × (c-a)`.
    pub fn from_points(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>) -> Self {
        let normal = (b - a).cross(&(c - a));
        let w = normal.dot(&a.coords);
        Plane { normal, w }
    }

    /// Get the plane normal
    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    /// Get the offset (distance from origin along the normal)
    pub const fn offset(&self) -> Real {
        self.w
    }

    /// Flip the plane (reverse normal and offset)
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Return a flipped copy of this plane
    pub fn flipped(&self) -> Self {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance of `point` to the plane, scaled by the normal's
    /// magnitude. Positive on the side the normal points into.
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Classify `point` relative to the plane. Distances within the shared
    /// [`tolerance`] of zero count as [`Classification::Coplanar`].
    pub fn orient_point(&self, point: &Point3<Real>) -> Classification {
        let distance = self.signed_distance(point);
        if distance.abs() < tolerance() {
            Classification::Coplanar
        } else if distance > 0.0 {
            Classification::Front
        } else {
            Classification::Back
        }
    }
}
