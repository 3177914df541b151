//! The `Triangle` type and the splitting pipeline: plane classification,
//! plane/triangle and triangle/triangle intersection, and the subdivision
//! operations that turn an intersection curve into explicit triangulation
//! edges.

use crate::errors::ValidationError;
use crate::float_types::{Real, tolerance};
use crate::plane::{Classification, Plane};
use crate::segment::LineSegment;
use nalgebra::{Point3, Vector3};

/// Which subtraction direction produced a triangle/triangle overlap segment.
///
/// [`Triangle::intersection`] first subtracts the other triangle's cut
/// segment from this triangle's ([`OverlapPath::Direct`]); only when that
/// reports no overlap does it try the reverse ([`OverlapPath::Reversed`]).
/// The tag lets callers and tests observe which path ran instead of relying
/// on log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapPath {
    Direct,
    Reversed,
}

/// The segment along which two triangles cross, plus the path that found it.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleOverlap {
    pub segment: LineSegment,
    pub path: OverlapPath,
}

/// A triangle with its supporting plane derived eagerly from the vertices.
///
/// Vertices are owned by value; subdivision operations return new triangles
/// and never mutate siblings. The plane (normal + offset) is kept consistent
/// with the vertex triple by [`Triangle::set`] and [`Triangle::flip`]. Note
/// that the plane normal is not unit length — its magnitude is twice the
/// triangle's area (see [`Plane`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub a: Point3<Real>,
    pub b: Point3<Real>,
    pub c: Point3<Real>,
    pub plane: Plane,
}

impl Triangle {
    /// Create a new [`Triangle`]; the supporting plane is computed eagerly.
    pub fn new(a: Point3<Real>, b: Point3<Real>, c: Point3<Real>) -> Self {
        let plane = Plane::from_points(&a, &b, &c);
        Triangle { a, b, c, plane }
    }

    /// Validating constructor: rejects non-finite coordinates and vertex
    /// triples whose squared area is below the shared tolerance.
    pub fn try_new(
        a: Point3<Real>,
        b: Point3<Real>,
        c: Point3<Real>,
    ) -> Result<Self, ValidationError> {
        let triangle = Triangle::new(a, b, c);
        triangle.validate()?;
        Ok(triangle)
    }

    /// Re-check the invariants enforced by [`Triangle::try_new`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        for point in [&self.a, &self.b, &self.c] {
            if !(point.x.is_finite() && point.y.is_finite() && point.z.is_finite()) {
                return Err(ValidationError::InvalidCoordinate(*point));
            }
        }
        if self.area_squared() <= tolerance() {
            return Err(ValidationError::DegenerateTriangle(self.a));
        }
        Ok(())
    }

    /// Replace all three vertices and recompute the supporting plane.
    pub fn set(&mut self, a: Point3<Real>, b: Point3<Real>, c: Point3<Real>) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.plane = Plane::from_points(&self.a, &self.b, &self.c);
    }

    /// Reverse the winding: swaps `b` and `c` and flips the plane, so the
    /// normal and offset negate. Applying `flip` twice is the identity.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.b, &mut self.c);
        self.plane.flip();
    }

    /// Ordered vertex access; the index wraps modulo 3.
    pub const fn vertex(&self, index: usize) -> &Point3<Real> {
        match index % 3 {
            0 => &self.a,
            1 => &self.b,
            _ => &self.c,
        }
    }

    /// The three directed edges `(a,b)`, `(b,c)`, `(c,a)`.
    pub fn edges(&self) -> [LineSegment; 3] {
        [
            LineSegment::new(self.a, self.b),
            LineSegment::new(self.b, self.c),
            LineSegment::new(self.c, self.a),
        ]
    }

    const fn edge_pairs(&self) -> [(&Point3<Real>, &Point3<Real>); 3] {
        [(&self.a, &self.b), (&self.b, &self.c), (&self.c, &self.a)]
    }

    pub fn area_squared(&self) -> Real {
        // The plane normal is (b-a) × (c-a), whose magnitude is twice the area.
        self.plane.normal.norm_squared() * 0.25
    }

    pub fn area(&self) -> Real {
        self.area_squared().sqrt()
    }

    pub fn center(&self) -> Point3<Real> {
        Point3::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Classify the triangle against `plane` from its per-vertex
    /// classifications: vertices strictly on both sides make it
    /// [`Classification::Spanning`]; otherwise any strictly-back vertex makes
    /// it `Back`, any strictly-front vertex `Front`, and only a triangle with
    /// all vertices within tolerance of the plane is `Coplanar`.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front_count = 0;
        let mut back_count = 0;

        for point in [&self.a, &self.b, &self.c] {
            match plane.orient_point(point) {
                Classification::Front => front_count += 1,
                Classification::Back => back_count += 1,
                _ => {},
            }
        }

        if front_count > 0 && back_count > 0 {
            Classification::Spanning
        } else if back_count > 0 {
            Classification::Back
        } else if front_count > 0 {
            Classification::Front
        } else {
            Classification::Coplanar
        }
    }

    /// Walk the three directed edges in order and collect the point where
    /// each edge crosses `plane`. An edge contributes whenever its endpoint
    /// classifications differ, so an edge ending on the plane emits that
    /// coplanar endpoint itself. A strictly spanning triangle yields exactly
    /// two points; front/back triangles yield none. Coplanar triangles are
    /// degenerate for this query and must be special-cased by the caller.
    pub fn intersect_plane(&self, plane: &Plane) -> Vec<Point3<Real>> {
        let mut intersections = Vec::new();

        for (p0, p1) in self.edge_pairs() {
            if plane.orient_point(p0) == plane.orient_point(p1) {
                continue;
            }
            let d0 = plane.signed_distance(p0);
            let d1 = plane.signed_distance(p1);
            let t = d0 / (d0 - d1);
            intersections.push(p0 + (p1 - p0) * t);
        }

        intersections
    }

    /// Compute the segment shared by this triangle and `other` when they
    /// cross: intersect each triangle with the other's plane, fold any extra
    /// collinear points into the two candidate segments, then subtract one
    /// from the other to get the mutual span. Fewer than two intersection
    /// points on either side is a degenerate configuration and reports no
    /// intersection rather than guessing.
    pub fn intersection(&self, other: &Triangle) -> Option<TriangleOverlap> {
        let ours = self.intersect_plane(&other.plane);
        let theirs = other.intersect_plane(&self.plane);

        if ours.len() < 2 || theirs.len() < 2 {
            return None;
        }

        let mut our_segment = LineSegment::new(ours[0], ours[1]);
        let mut their_segment = LineSegment::new(theirs[0], theirs[1]);
        for point in &ours[2..] {
            our_segment.expand_to_point(*point);
        }
        for point in &theirs[2..] {
            their_segment.expand_to_point(*point);
        }

        if our_segment.subtract(&their_segment) {
            return Some(TriangleOverlap {
                segment: our_segment,
                path: OverlapPath::Direct,
            });
        }

        // Retained against floating-point asymmetry between the two computed
        // cut lines; not observed in practice.
        if their_segment.subtract(&our_segment) {
            return Some(TriangleOverlap {
                segment: their_segment,
                path: OverlapPath::Reversed,
            });
        }

        None
    }

    /// Subdivide by a single point. A point farther than the tolerance from
    /// the supporting plane leaves the triangle unaffected (one-element
    /// result). Otherwise each edge is fanned to the point and near-zero-area
    /// children are dropped, so a point on a vertex or edge produces fewer
    /// than three children. The children tile the parent's footprint and
    /// share its plane, so a caller-held classification for the parent
    /// applies to every child.
    pub fn insert(&self, point: &Point3<Real>) -> Vec<Triangle> {
        if self.plane.signed_distance(point).abs() > tolerance() {
            return vec![self.clone()];
        }

        let mut triangles = Vec::with_capacity(3);
        for (p0, p1) in self.edge_pairs() {
            let triangle = Triangle::new(*p0, *p1, *point);
            if triangle.area_squared() > tolerance() {
                triangles.push(triangle);
            }
        }

        triangles
    }

    /// Subdivide by a whole coplanar segment: insert the segment's start,
    /// then for every resulting piece trim a copy of the segment to that
    /// piece's footprint and insert the trimmed end point. When that second
    /// insertion is a no-op (the trimmed span degenerated away from the
    /// piece), retry with the trimmed start instead. An empty overall result
    /// should not occur for a genuinely overlapping segment; the original
    /// triangle is returned as a defensive floor.
    pub fn split_with_segment(&self, segment: &LineSegment) -> Vec<Triangle> {
        let mut triangles = Vec::new();

        let first_pass = self.insert(&segment.start);
        for piece in &first_pass {
            let mut trimmed = segment.clone();
            trimmed.trim_to_triangle(&piece.a, &piece.b, &piece.c, &piece.plane.normal);

            let mut subdivided = piece.insert(&trimmed.end);
            if subdivided.len() == 1 {
                subdivided = piece.insert(&trimmed.start);
            }
            triangles.extend(subdivided);
        }

        if triangles.is_empty() {
            triangles.push(self.clone());
        }

        triangles
    }

    /// Subdivide this triangle against `other` so their intersection curve
    /// becomes an explicit edge. A triangle entirely in front of or behind
    /// `other`'s plane is unaffected; otherwise the split only proceeds when
    /// `other` spans this triangle's plane *and* a mutual overlap segment
    /// exists. Every non-splitting combination returns the triangle
    /// unchanged.
    pub fn split(&self, other: &Triangle) -> Vec<Triangle> {
        match self.classify(&other.plane) {
            Classification::Spanning | Classification::Coplanar => {
                if other.classify(&self.plane) == Classification::Spanning {
                    if let Some(overlap) = self.intersection(other) {
                        return self.split_with_segment(&overlap.segment);
                    }
                }
                vec![self.clone()]
            },
            _ => vec![self.clone()],
        }
    }

    /// Intersect a ray with the triangle; `direction` is assumed normalized.
    /// Rays parallel to the supporting plane and hits behind the origin
    /// report no hit.
    pub fn intersect_ray(
        &self,
        origin: &Point3<Real>,
        direction: &Vector3<Real>,
    ) -> Option<Point3<Real>> {
        self.intersect_ray_with_tolerance(origin, direction, 0.0)
    }

    /// [`Triangle::intersect_ray`] with a widened point-in-triangle test, for
    /// hits that may straddle the triangle's boundary.
    pub fn intersect_ray_with_tolerance(
        &self,
        origin: &Point3<Real>,
        direction: &Vector3<Real>,
        epsilon: Real,
    ) -> Option<Point3<Real>> {
        let denominator = direction.dot(&self.plane.normal);
        if denominator.abs() <= tolerance() {
            // Parallel to the plane; dividing here would produce infinities.
            return None;
        }

        let distance = -(origin - self.a).dot(&self.plane.normal) / denominator;
        if distance < 0.0 {
            // Behind the ray origin
            return None;
        }

        let hit = origin + direction * distance;
        if self.contains_point_with_tolerance(&hit, epsilon) {
            Some(hit)
        } else {
            None
        }
    }

    /// Membership test for a point assumed to lie in the triangle's plane:
    /// the point must be on the inward side of all three directed edges.
    /// Boundary points count as inside.
    pub fn contains_point(&self, point: &Point3<Real>) -> bool {
        self.contains_point_with_tolerance(point, 0.0)
    }

    /// [`Triangle::contains_point`] with the edge half-plane tests widened by
    /// `epsilon`.
    pub fn contains_point_with_tolerance(&self, point: &Point3<Real>, epsilon: Real) -> bool {
        for (p0, p1) in self.edge_pairs() {
            let inward = self.plane.normal.cross(&(p1 - p0));
            if (point - p0).dot(&inward) < -epsilon {
                return false;
            }
        }
        true
    }

    /// Whether `other` lies in the same plane: parallel normals and
    /// `other.a` within tolerance of this triangle's plane.
    pub fn coplanar_with(&self, other: &Triangle) -> bool {
        let cross = self.plane.normal.cross(&other.plane.normal);
        cross.norm_squared() <= tolerance()
            && self.plane.signed_distance(&other.a).abs() <= tolerance()
    }

    /// Whether two coplanar triangles overlap: some vertex of either lies
    /// inside the other.
    pub fn overlaps_coplanar(&self, other: &Triangle) -> bool {
        for i in 0..3 {
            if self.contains_point(other.vertex(i)) || other.contains_point(self.vertex(i)) {
                return true;
            }
        }
        false
    }
}

impl std::ops::Index<usize> for Triangle {
    type Output = Point3<Real>;

    /// Ordered vertex access; the index wraps modulo 3 like
    /// [`Triangle::vertex`].
    fn index(&self, index: usize) -> &Self::Output {
        self.vertex(index)
    }
}
