#![allow(missing_docs)]
//! Boundary-inclusive containment tests for boxes and spheres.

use voxcast_core::Vec3;
use voxcast_geom::{Aabb, Sphere};

#[test]
fn aabb_contains_is_inclusive_on_every_face() {
    let aabb = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
    assert!(aabb.contains(&Vec3::ZERO));
    assert!(aabb.contains(&Vec3::new(1.0, 2.0, 3.0)));
    assert!(aabb.contains(&Vec3::new(0.5, 1.0, 1.5)));
    assert!(aabb.contains(&Vec3::new(1.0, 0.0, 3.0)));
}

#[test]
fn aabb_excludes_points_just_outside() {
    let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
    assert!(!aabb.contains(&Vec3::new(1.0 + 1e-9, 0.5, 0.5)));
    assert!(!aabb.contains(&Vec3::new(0.5, -1e-9, 0.5)));
    assert!(!aabb.contains(&Vec3::new(0.5, 0.5, 1.0 + 1e-9)));
}

#[test]
fn aabb_translated_moves_both_corners() {
    let cell = Aabb::new(Vec3::ZERO, Vec3::ONE).translated(&Vec3::new(2.0, 63.0, -4.0));
    assert_eq!(cell.min().to_array(), [2.0, 63.0, -4.0]);
    assert_eq!(cell.max().to_array(), [3.0, 64.0, -3.0]);
}

#[test]
fn aabb_from_center_half_extents_is_symmetric() {
    let aabb = Aabb::from_center_half_extents(Vec3::new(1.0, 2.0, 3.0), 0.5, 1.0, 1.5);
    assert_eq!(aabb.min().to_array(), [0.5, 1.0, 1.5]);
    assert_eq!(aabb.max().to_array(), [1.5, 3.0, 4.5]);
}

#[test]
fn aabb_overlap_is_inclusive_on_touching_faces() {
    let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
    let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    let c = Aabb::new(Vec3::new(1.0 + 1e-9, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(!a.overlaps(&c));
}

#[test]
#[should_panic(expected = "invalid AABB")]
fn aabb_rejects_inverted_corners() {
    let _ = Aabb::new(Vec3::ONE, Vec3::ZERO);
}

#[test]
fn sphere_contains_is_inclusive_at_the_surface() {
    let sphere = Sphere::new(Vec3::new(1.0, 1.0, 1.0), 2.0);
    assert!(sphere.contains(&sphere.center()));
    // Exactly center + radius along each axis direction.
    assert!(sphere.contains(&Vec3::new(3.0, 1.0, 1.0)));
    assert!(sphere.contains(&Vec3::new(1.0, -1.0, 1.0)));
    assert!(sphere.contains(&Vec3::new(1.0, 1.0, 3.0)));
}

#[test]
fn sphere_excludes_points_beyond_the_surface() {
    let sphere = Sphere::new(Vec3::new(1.0, 1.0, 1.0), 2.0);
    assert!(!sphere.contains(&Vec3::new(3.0 + 1e-9, 1.0, 1.0)));
    assert!(!sphere.contains(&Vec3::new(4.0, 4.0, 4.0)));
}

#[test]
fn zero_radius_sphere_contains_only_its_center() {
    let sphere = Sphere::new(Vec3::new(2.0, 2.0, 2.0), 0.0);
    assert!(sphere.contains(&sphere.center()));
    assert!(!sphere.contains(&Vec3::new(2.0, 2.0, 2.0 + 1e-12)));
}
