//! Containment primitives consumed by point queries.
//!
//! Boundary semantics are inclusive everywhere: a point exactly on a box
//! face or exactly on a sphere surface is contained. Queries that only need
//! an ordering compare squared distances and never take a square root.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Spheres described by center and radius."]
pub mod sphere;
