// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use voxcast_core::Vec3;

use crate::ray::Ray;
use crate::types::aabb::Aabb;

/// Cardinal face of a grid cell.
///
/// Axis convention: north is −Z, east is +X, up is +Y.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockFace {
    /// −Y.
    Down,
    /// +Y.
    Up,
    /// −Z.
    North,
    /// +Z.
    South,
    /// +X.
    East,
    /// −X.
    West,
}

impl BlockFace {
    /// Unit vector pointing out of this face.
    #[must_use]
    pub fn direction(self) -> Vec3 {
        match self {
            Self::Down => Vec3::NEG_UNIT_Y,
            Self::Up => Vec3::UNIT_Y,
            Self::North => Vec3::NEG_UNIT_Z,
            Self::South => Vec3::UNIT_Z,
            Self::East => Vec3::UNIT_X,
            Self::West => Vec3::NEG_UNIT_X,
        }
    }
}

/// First qualifying block along a ray, with the location where the march
/// entered it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayHit<B> {
    block: B,
    position: Vec3,
}

impl<B> RayHit<B> {
    /// Pairs a block with its hit location.
    #[must_use]
    pub const fn new(block: B, position: Vec3) -> Self {
        Self { block, position }
    }

    /// Returns the block that was hit.
    #[must_use]
    pub fn block(&self) -> &B {
        &self.block
    }

    /// Returns the location where the ray entered the block.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Consumes the hit, returning just the block.
    #[must_use]
    pub fn into_block(self) -> B {
        self.block
    }
}

/// Read-only voxel world consulted by the ray queries.
///
/// Implementations own traversal, passability, and liquid classification;
/// this crate only specifies the query contract. All methods are synchronous
/// reads with no side effects on the grid.
pub trait VoxelGrid {
    /// Block handle produced by lookups; opaque to this crate.
    type Block;

    /// Maximum queryable height. Bounds the length of downward rays.
    fn max_height(&self) -> f64;

    /// The grid cell containing `position`.
    ///
    /// Every in-world position resolves to a cell, so this lookup is total;
    /// empty space is represented by whatever "air" block the host uses.
    fn block_at(&self, position: Vec3) -> Self::Block;

    /// World-space bounding box occupied by `block`.
    fn block_bounds(&self, block: &Self::Block) -> Aabb;

    /// First block along `ray` that passes the filters and `predicate`, or
    /// `None` when the march exhausts `max_range + extra_range`.
    ///
    /// Liquid blocks are skipped when `ignore_liquids` is set; passable
    /// blocks (air never qualifies as a hit) are skipped when
    /// `ignore_passable` is set.
    fn first_block_along_ray(
        &self,
        ray: &Ray,
        ignore_liquids: bool,
        ignore_passable: bool,
        predicate: &dyn Fn(&Self::Block) -> bool,
    ) -> Option<RayHit<Self::Block>>;
}
