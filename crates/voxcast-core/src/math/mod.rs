//! Double-precision math for voxel-world geometry: the [`Vec3`] value type
//! plus small scalar helpers shared by callers.

use std::f64::consts::TAU;

mod vec3;

pub use vec3::{RotationError, Vec3};

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f64) -> f64 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f64) -> f64 {
    value * (360.0 / TAU)
}
