use thiserror::Error;

/// Error returned by axis rotations when the supplied axis is unusable.
///
/// A zero-length axis has no direction, so rotating around it cannot be
/// resolved to any canonical orientation. Substituting a default axis here
/// would silently corrupt orientation, which is why this is an error rather
/// than a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RotationError {
    /// The rotation axis is the zero vector.
    #[error("rotation axis has zero length")]
    InvalidAxis,
}

/// Immutable 3D vector over `f64` used for world-space positions, directions,
/// and motion deltas.
///
/// * Components never change once constructed; every operation returns a new
///   value. Shared constants ([`Vec3::ZERO`], the unit axes, the velocity
///   bounds) are plain `const` values and safe to share across threads.
/// * Angles are expressed in radians; positive rotation follows the
///   right-hand rule around the given axis.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f64; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Unit vector pointing along the negative X axis.
    pub const NEG_UNIT_X: Self = Self::new(-1.0, 0.0, 0.0);

    /// Unit vector pointing along the negative Y axis.
    pub const NEG_UNIT_Y: Self = Self::new(0.0, -1.0, 0.0);

    /// Unit vector pointing along the negative Z axis.
    pub const NEG_UNIT_Z: Self = Self::new(0.0, 0.0, -1.0);

    /// Lower bound for simulated motion deltas, see [`Vec3::clamp_velocity`].
    pub const MIN_VELOCITY: Self = Self::new(-4.0, -4.0, -4.0);

    /// Upper bound for simulated motion deltas, see [`Vec3::clamp_velocity`].
    pub const MAX_VELOCITY: Self = Self::new(4.0, 4.0, 4.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f64 {
        self.data[2]
    }

    /// Returns the components as an ordered `[x, y, z]` array.
    pub fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// Componentwise product with another vector.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.x() * other.x(),
            self.y() * other.y(),
            self.z() * other.z(),
        )
    }

    /// Componentwise quotient with another vector.
    ///
    /// Division is total and follows IEEE 754: a zero divisor component
    /// yields an infinite or NaN component in the result. Callers needing
    /// finite output must validate the divisor themselves.
    pub fn div(&self, other: &Self) -> Self {
        Self::new(
            self.x() / other.x(),
            self.y() / other.y(),
            self.z() / other.z(),
        )
    }

    /// Scales all components uniformly.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Right-handed cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - other.y() * self.z(),
            self.z() * other.x() - other.z() * self.x(),
            self.x() * other.y() - other.x() * self.y(),
        )
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        self.sub(other).length()
    }

    /// Squared distance to another point. Preferred for comparisons where
    /// the square root adds nothing.
    pub fn distance_squared(&self, other: &Self) -> f64 {
        self.sub(other).length_squared()
    }

    /// Normalises the vector, returning [`Vec3::UNIT_X`] when the length is
    /// exactly zero.
    ///
    /// The fallback makes zero-length input a recoverable degenerate case
    /// rather than a NaN source; use [`Vec3::normalize_or`] to pick a
    /// different default.
    pub fn normalize(&self) -> Self {
        self.normalize_or(Self::UNIT_X)
    }

    /// Normalises the vector, returning `default` when the length is exactly
    /// zero.
    pub fn normalize_or(&self, default: Self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return default;
        }
        self.scale(1.0 / len)
    }

    /// Componentwise average with another vector.
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new(
            (self.x() + other.x()) / 2.0,
            (self.y() + other.y()) / 2.0,
            (self.z() + other.z()) / 2.0,
        )
    }

    /// Rotates around the X axis by `angle` radians.
    pub fn rotate_around_x(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let y = cos * self.y() - sin * self.z();
        let z = sin * self.y() + cos * self.z();
        Self::new(self.x(), y, z)
    }

    /// Rotates around the Y axis by `angle` radians.
    pub fn rotate_around_y(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let x = cos * self.x() + sin * self.z();
        let z = -sin * self.x() + cos * self.z();
        Self::new(x, self.y(), z)
    }

    /// Rotates around the Z axis by `angle` radians.
    pub fn rotate_around_z(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let x = cos * self.x() - sin * self.y();
        let y = sin * self.x() + cos * self.y();
        Self::new(x, y, self.z())
    }

    /// Rotates around an arbitrary axis by `angle` radians using Rodrigues'
    /// formula, normalizing `axis` first.
    ///
    /// # Errors
    /// Returns [`RotationError::InvalidAxis`] when `axis` is the zero vector.
    pub fn rotate_around_axis(&self, axis: &Self, angle: f64) -> Result<Self, RotationError> {
        let len = axis.length();
        if len == 0.0 {
            return Err(RotationError::InvalidAxis);
        }
        Ok(self.rotate_around_non_unit_axis(&axis.scale(1.0 / len), angle))
    }

    /// Rotates around `axis` by `angle` radians without normalizing the axis.
    ///
    /// Callers are responsible for passing a unit axis. A non-unit axis
    /// scales the result in addition to rotating it; that behavior is part
    /// of the contract, not an error this method detects.
    pub fn rotate_around_non_unit_axis(&self, axis: &Self, angle: f64) -> Self {
        let (x, y, z) = (self.x(), self.y(), self.z());
        let (x2, y2, z2) = (axis.x(), axis.y(), axis.z());

        let (sin, cos) = angle.sin_cos();
        let dot = self.dot(axis);

        let xp = x2 * dot * (1.0 - cos) + x * cos + (-z2 * y + y2 * z) * sin;
        let yp = y2 * dot * (1.0 - cos) + y * cos + (z2 * x - x2 * z) * sin;
        let zp = z2 * dot * (1.0 - cos) + z * cos + (-y2 * x + x2 * y) * sin;

        Self::new(xp, yp, zp)
    }

    /// Rotates around `axis` by `rads` radians via the vector composition
    /// `self·cosθ + (axis × self)·sinθ + axis·(axis·self)·(1−cosθ)`.
    ///
    /// Algebraically this matches [`Vec3::rotate_around_non_unit_axis`], but
    /// the order of operations differs, so the two entry points round
    /// differently and are kept distinct. Like its sibling, it expects a
    /// unit axis.
    pub fn rotate(&self, axis: &Self, rads: f64) -> Self {
        let a = self.scale(rads.cos());
        let b = axis.cross(self).scale(rads.sin());
        let c = axis.scale(axis.dot(self)).scale(1.0 - rads.cos());
        a.add(&b).add(&c)
    }

    /// Returns a copy with the X component replaced.
    pub fn with_x(&self, x: f64) -> Self {
        Self::new(x, self.y(), self.z())
    }

    /// Returns a copy with the Y component replaced.
    pub fn with_y(&self, y: f64) -> Self {
        Self::new(self.x(), y, self.z())
    }

    /// Returns a copy with the Z component replaced.
    pub fn with_z(&self, z: f64) -> Self {
        Self::new(self.x(), self.y(), z)
    }

    /// Componentwise minimum with another vector.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            self.x().min(other.x()),
            self.y().min(other.y()),
            self.z().min(other.z()),
        )
    }

    /// Componentwise maximum with another vector.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            self.x().max(other.x()),
            self.y().max(other.y()),
            self.z().max(other.z()),
        )
    }

    /// Componentwise absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.x().abs(), self.y().abs(), self.z().abs())
    }

    /// Componentwise floor.
    pub fn floor(&self) -> Self {
        Self::new(self.x().floor(), self.y().floor(), self.z().floor())
    }

    /// Negation, equivalent to scaling by −1.
    pub fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    /// Smallest of the three components.
    pub fn min_component(&self) -> f64 {
        self.x().min(self.y()).min(self.z())
    }

    /// Largest of the three components.
    pub fn max_component(&self) -> f64 {
        self.x().max(self.y()).max(self.z())
    }

    /// Snaps to the center of the containing unit grid cell:
    /// `floor(c) + 0.5` per axis.
    pub fn snap_to_block_center(&self) -> Self {
        Self::new(
            self.x().floor() + 0.5,
            self.y().floor() + 0.5,
            self.z().floor() + 0.5,
        )
    }

    /// Clamps each component into the
    /// [`Vec3::MIN_VELOCITY`]..=[`Vec3::MAX_VELOCITY`] range.
    pub fn clamp_velocity(&self) -> Self {
        self.min(&Self::MAX_VELOCITY).max(&Self::MIN_VELOCITY)
    }
}

/// Converts a 3-element `[f64; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use voxcast_core::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_to_block_center_maps_into_cell_center() {
        let snapped = Vec3::new(1.2, -0.3, 5.9).snap_to_block_center();
        assert_eq!(snapped.to_array(), [1.5, -0.5, 5.5]);
    }

    #[test]
    fn clamp_velocity_bounds_each_component() {
        let clamped = Vec3::new(10.0, -10.0, 0.0).clamp_velocity();
        assert_eq!(clamped.to_array(), [4.0, -4.0, 0.0]);
    }

    #[test]
    fn zero_normalizes_to_unit_x() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::UNIT_X);
    }

    #[test]
    fn zero_normalize_or_takes_caller_default() {
        let fallback = Vec3::new(0.0, 0.0, -1.0);
        assert_eq!(Vec3::ZERO.normalize_or(fallback), fallback);
    }
}
