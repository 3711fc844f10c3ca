//! voxcast-geom: containment primitives and voxel-grid ray queries.
//!
//! This crate provides:
//! - Axis-aligned boxes ([`Aabb`]) and spheres ([`Sphere`]) with inclusive
//!   point-containment tests.
//! - The read-only voxel-grid collaborator contract ([`VoxelGrid`]) together
//!   with the [`Ray`] parameter type it consumes.
//! - Grid-delegated queries built on that contract:
//!   [`distance_above_ground`] and [`first_relative_block`].
//!
//! Design notes:
//! - Every operation is a pure function of its inputs plus read-only grid
//!   lookups; nothing here holds state between calls.
//! - Containment is inclusive on boundaries so that points sitting exactly
//!   on a face or on the sphere surface count as inside.
//! - A ray that finds no qualifying block is not an error: queries resolve
//!   misses through explicit fallbacks ([`RelativeBlock::Fallback`], the
//!   ground-plane default of [`distance_above_ground`]).

/// Voxel-grid collaborator contract and block-face directions.
pub mod grid;
/// Grid-delegated ray queries.
pub mod query;
/// Ray march parameters.
pub mod ray;
/// Foundational containment types.
pub mod types;

pub use grid::{BlockFace, RayHit, VoxelGrid};
pub use query::{distance_above_ground, first_relative_block, RelativeBlock};
pub use ray::Ray;
pub use types::aabb::Aabb;
pub use types::sphere::Sphere;
