//! Line segments and the overlap arithmetic used to merge the cut lines of
//! two mutually intersecting triangles.

use crate::float_types::{Real, tolerance};
use nalgebra::{Point3, Vector3};

/// A segment in 3-space, held as an ordered endpoint pair.
///
/// The splitting pipeline builds segments from plane-intersection points and
/// then treats them as spans on a shared line: [`LineSegment::expand_to_point`]
/// and [`LineSegment::subtract`] both assume their inputs are collinear with
/// the receiver (within tolerance).
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub start: Point3<Real>,
    pub end: Point3<Real>,
}

impl LineSegment {
    pub const fn new(start: Point3<Real>, end: Point3<Real>) -> Self {
        LineSegment { start, end }
    }

    /// The (non-normalized) vector from `start` to `end`.
    pub fn direction(&self) -> Vector3<Real> {
        self.end - self.start
    }

    pub fn length_squared(&self) -> Real {
        self.direction().norm_squared()
    }

    pub fn length(&self) -> Real {
        self.direction().norm()
    }

    /// The point at parameter `t`, with `start` at `t = 0` and `end` at `t = 1`.
    pub fn point_at(&self, t: Real) -> Point3<Real> {
        self.start + self.direction() * t
    }

    /// Parameter of the projection of `point` onto the segment's line.
    fn parameter_of(&self, point: &Point3<Real>) -> Real {
        let direction = self.direction();
        (point - self.start).dot(&direction) / direction.norm_squared()
    }

    /// Grow the segment to bound `point`, which is assumed collinear with the
    /// current endpoints. Points already inside the span leave it unchanged.
    pub fn expand_to_point(&mut self, point: Point3<Real>) {
        let t = self.parameter_of(&point);
        if t < 0.0 {
            self.start = point;
        } else if t > 1.0 {
            self.end = point;
        }
    }

    /// Shrink the segment to the sub-span it shares with `other`, which is
    /// presumed to lie on the same line. Returns `false` when the parametric
    /// ranges do not overlap (or overlap degenerately); the receiver is left
    /// unspecified in that case and must not be read.
    pub fn subtract(&mut self, other: &LineSegment) -> bool {
        let direction = self.direction();
        let length_squared = direction.norm_squared();
        if length_squared <= tolerance() {
            return false;
        }

        let t0 = (other.start - self.start).dot(&direction) / length_squared;
        let t1 = (other.end - self.start).dot(&direction) / length_squared;

        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);
        if hi - lo <= tolerance() {
            return false;
        }

        let start = self.point_at(lo);
        let end = self.point_at(hi);
        self.start = start;
        self.end = end;
        true
    }

    /// Clip the segment's parametric span to the footprint of the triangle
    /// `(a, b, c)` with supporting-plane normal `normal`. The segment is
    /// expected to lie in the triangle's plane; each directed edge contributes
    /// a half-plane test against its inward normal. A span that misses the
    /// triangle entirely collapses to a single boundary point rather than
    /// inverting.
    pub fn trim_to_triangle(
        &mut self,
        a: &Point3<Real>,
        b: &Point3<Real>,
        c: &Point3<Real>,
        normal: &Vector3<Real>,
    ) {
        let direction = self.direction();
        let mut lo: Real = 0.0;
        let mut hi: Real = 1.0;

        for (p0, p1) in [(a, b), (b, c), (c, a)] {
            let inward = normal.cross(&(p1 - p0));
            let start_side = (self.start - p0).dot(&inward);
            let along = direction.dot(&inward);

            if along.abs() <= tolerance() {
                // Parallel to this edge: the whole span is on one side of it.
                if start_side < -tolerance() {
                    lo = 1.0;
                    hi = 0.0;
                    break;
                }
                continue;
            }

            let t = -start_side / along;
            if along > 0.0 {
                lo = lo.max(t);
            } else {
                hi = hi.min(t);
            }
        }

        lo = lo.clamp(0.0, 1.0);
        hi = hi.clamp(0.0, 1.0);
        if hi < lo {
            hi = lo;
        }

        let start = self.point_at(lo);
        let end = self.point_at(hi);
        self.start = start;
        self.end = end;
    }
}
