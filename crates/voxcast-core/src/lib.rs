//! voxcast-core: immutable double-precision vector algebra for voxel worlds.
//!
//! The crate centers on [`Vec3`], an immutable three-component `f64` value
//! type. Every operation returns a new value; nothing mutates in place, which
//! is what makes the type freely shareable across threads without locking.
//!
//! Design notes:
//! - Degenerate inputs are handled explicitly: normalizing a zero-length
//!   vector falls back to a caller-supplied default, while rotating around a
//!   zero-length axis fails with [`RotationError::InvalidAxis`]. NaN never
//!   propagates silently out of either path.
//! - Componentwise division is total and follows IEEE 754: a zero divisor
//!   component produces an infinite or NaN component, see [`Vec3::div`].

pub mod math;

pub use math::{RotationError, Vec3};
