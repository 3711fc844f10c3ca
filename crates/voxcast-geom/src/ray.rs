// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use voxcast_core::Vec3;

/// Parameters for a ray march through the voxel grid.
///
/// Conventions:
/// - `direction` need not be unit length in general; the queries in this
///   crate always pass unit directions, so `max_range` reads as world units
///   there.
/// - `extra_range` extends the march past `max_range` for boundary
///   tolerance without moving the fallback endpoint.
/// - A negative `max_range` yields an empty march; grids report no hit.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    max_range: f64,
    extra_range: f64,
}

impl Ray {
    /// Creates a ray from its origin, direction, and range bounds.
    #[must_use]
    pub const fn new(origin: Vec3, direction: Vec3, max_range: f64, extra_range: f64) -> Self {
        Self {
            origin,
            direction,
            max_range,
            extra_range,
        }
    }

    /// Returns the origin point.
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Returns the march direction.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Returns the nominal range bound.
    #[must_use]
    pub fn max_range(&self) -> f64 {
        self.max_range
    }

    /// Returns the extra tolerance range past [`Ray::max_range`].
    #[must_use]
    pub fn extra_range(&self) -> f64 {
        self.extra_range
    }

    /// Returns `origin + direction·t`.
    ///
    /// `point_at(max_range)` is the endpoint used by miss fallbacks.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.origin.add(&self.direction.scale(t))
    }
}
