// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use voxcast_core::Vec3;

/// Sphere described by a center point and a non-negative radius.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    center: Vec3,
    radius: f64,
}

impl Sphere {
    /// Constructs a sphere.
    ///
    /// # Panics
    /// Panics if `radius` is negative.
    #[must_use]
    pub fn new(center: Vec3, radius: f64) -> Self {
        assert!(radius >= 0.0, "negative sphere radius: {radius}");
        Self { center, radius }
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns `true` if `point` lies inside the sphere.
    ///
    /// Inclusive at the surface. Compares squared distances, so no square
    /// root is taken.
    #[must_use]
    pub fn contains(&self, point: &Vec3) -> bool {
        point.distance_squared(&self.center) <= self.radius * self.radius
    }
}
