// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Grid-delegated ray queries.
//!
//! Both queries treat "the ray found nothing" as a resolved outcome rather
//! than an error: ground distance degrades to a world-origin surface, and
//! relative-block lookup falls back to the cell at the ray endpoint. The
//! two branches of [`RelativeBlock`] keep a direct hit distinguishable from
//! that fallback.

use voxcast_core::Vec3;

use crate::grid::{BlockFace, VoxelGrid};
use crate::ray::Ray;

/// Outcome of [`first_relative_block`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RelativeBlock<B> {
    /// The ray hit this block directly.
    Hit(B),
    /// Nothing qualified within range; this is the raw grid cell at the ray
    /// endpoint.
    Fallback(B),
}

impl<B> RelativeBlock<B> {
    /// Returns the carried block, whichever branch produced it.
    #[must_use]
    pub fn block(&self) -> &B {
        match self {
            Self::Hit(block) | Self::Fallback(block) => block,
        }
    }

    /// Consumes the result, returning the carried block.
    #[must_use]
    pub fn into_block(self) -> B {
        match self {
            Self::Hit(block) | Self::Fallback(block) => block,
        }
    }

    /// Returns `true` when the ray missed and the endpoint cell was used.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Height of `point` above the first qualifying block straight below it.
///
/// Casts a ray along −Y with range `min(grid.max_height(), point.y())` and
/// subtracts the top surface of the first block found from the point's own
/// height. Passable blocks are always skipped; liquids are skipped only when
/// `ignore_liquids` is set.
///
/// When the grid reports nothing (the point sits at or below the lowest
/// queryable height, or there simply is no block underneath), the surface
/// height defaults to the world origin plane and the result is the point's
/// own Y — "no ground" is not an error.
pub fn distance_above_ground<G: VoxelGrid>(grid: &G, point: Vec3, ignore_liquids: bool) -> f64 {
    let range = grid.max_height().min(point.y());
    let ray = Ray::new(point, Vec3::NEG_UNIT_Y, range, 0.0);
    let surface = grid
        .first_block_along_ray(&ray, ignore_liquids, true, &|_| true)
        .map_or(0.0, |hit| grid.block_bounds(hit.block()).max().y());
    point.y() - surface
}

/// First block along `face` from `point`, up to `max_range`.
///
/// A ray miss is resolved deterministically: the result is the raw grid
/// cell at `point + face·max_range`, tagged [`RelativeBlock::Fallback`] so
/// callers cannot mistake it for a direct hit.
pub fn first_relative_block<G: VoxelGrid>(
    grid: &G,
    point: Vec3,
    face: BlockFace,
    max_range: f64,
    ignore_liquids: bool,
    ignore_passable: bool,
) -> RelativeBlock<G::Block> {
    let ray = Ray::new(point, face.direction(), max_range, 0.0);
    match grid.first_block_along_ray(&ray, ignore_liquids, ignore_passable, &|_| true) {
        Some(hit) => RelativeBlock::Hit(hit.into_block()),
        None => RelativeBlock::Fallback(grid.block_at(ray.point_at(max_range))),
    }
}
