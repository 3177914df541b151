mod support;

use nalgebra::{Point3, Vector3};
use tricut::{Classification, Plane, float_types::tolerance};

use crate::support::approx_eq;

#[test]
fn from_points_normal_and_offset() {
    let plane = Plane::from_points(
        &Point3::new(0.0, 0.0, 0.0),
        &Point3::new(1.0, 0.0, 0.0),
        &Point3::new(0.0, 1.0, 0.0),
    );
    // Right-hand rule: (b-a) x (c-a) = +Z, not normalized.
    assert_eq!(plane.normal(), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(plane.offset(), 0.0);

    // Doubling the triangle doubles the normal's magnitude (2x area).
    let big = Plane::from_points(
        &Point3::new(0.0, 0.0, 0.0),
        &Point3::new(2.0, 0.0, 0.0),
        &Point3::new(0.0, 2.0, 0.0),
    );
    assert_eq!(big.normal(), Vector3::new(0.0, 0.0, 4.0));
}

#[test]
fn flip() {
    let mut plane = Plane::from_normal(Vector3::y(), 2.0);
    plane.flip();
    assert_eq!(plane.normal(), Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(plane.offset(), -2.0);

    let copy = plane.flipped();
    assert_eq!(copy.normal(), Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(copy.offset(), 2.0);
}

#[test]
fn signed_distance_scales_with_normal() {
    let plane = Plane::from_normal(Vector3::new(0.0, 0.0, 2.0), 4.0);
    // Plane is z = 2; distances are scaled by the normal's length.
    assert!(approx_eq(plane.signed_distance(&Point3::new(0.0, 0.0, 3.0)), 2.0, 1e-12));
    assert!(approx_eq(plane.signed_distance(&Point3::new(5.0, 5.0, 2.0)), 0.0, 1e-12));
}

#[test]
fn orient_point() {
    let plane = Plane::from_normal(Vector3::z(), 0.0);
    assert_eq!(plane.orient_point(&Point3::new(0.0, 0.0, 1.0)), Classification::Front);
    assert_eq!(plane.orient_point(&Point3::new(0.0, 0.0, -1.0)), Classification::Back);
    assert_eq!(plane.orient_point(&Point3::new(3.0, -2.0, 0.0)), Classification::Coplanar);

    // Within the shared tolerance counts as coplanar.
    let nearly = Point3::new(0.0, 0.0, tolerance() * 0.5);
    assert_eq!(plane.orient_point(&nearly), Classification::Coplanar);
    let beyond = Point3::new(0.0, 0.0, tolerance() * 10.0);
    assert_eq!(plane.orient_point(&beyond), Classification::Front);
}

#[test]
fn classification_flipped() {
    assert_eq!(Classification::Front.flipped(), Classification::Back);
    assert_eq!(Classification::Back.flipped(), Classification::Front);
    assert_eq!(Classification::Coplanar.flipped(), Classification::Coplanar);
    assert_eq!(Classification::Spanning.flipped(), Classification::Spanning);
}
