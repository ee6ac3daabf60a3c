//! VoxelGrid - A fixed-extent dense grid of voxels
//!
//! The grid is allocated once with every cell defaulted to unoccupied and
//! then selectively populated before any traversal reads it. Coordinates
//! are corner-based: each axis is valid in `[0, side)`.

use crate::{GridError, Voxel};
use glam::IVec3;

/// A dense cube of voxels with bounds-checked access.
///
/// # Example
///
/// ```
/// use glam::{IVec3, Vec4};
/// use grid::{Voxel, VoxelGrid};
///
/// let mut grid = VoxelGrid::new();
/// grid.set(IVec3::new(0, 5, 0), Voxel::solid(Vec4::new(100.0, 0.0, 0.0, 0.0)))
///     .unwrap();
/// assert!(grid.get(IVec3::new(0, 5, 0)).unwrap().occupied);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
    side: usize,
    voxels: Vec<Voxel>,
}

impl VoxelGrid {
    /// Default edge length: a 16x16x16 grid.
    pub const DEFAULT_SIDE: usize = 16;

    /// Create a grid with the default edge length, all cells unoccupied.
    pub fn new() -> Self {
        Self::with_side(Self::DEFAULT_SIDE)
    }

    /// Create a grid with the given edge length, all cells unoccupied.
    pub fn with_side(side: usize) -> Self {
        Self {
            side,
            voxels: vec![Voxel::default(); side * side * side],
        }
    }

    /// Edge length of the grid. Valid coordinates are `[0, side)` per axis.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Check if a coordinate is within the grid domain.
    pub fn in_bounds(&self, pos: IVec3) -> bool {
        let max = self.side as i32;
        pos.x >= 0 && pos.x < max && pos.y >= 0 && pos.y < max && pos.z >= 0 && pos.z < max
    }

    /// Write a voxel at the given coordinate.
    pub fn set(&mut self, pos: IVec3, voxel: Voxel) -> Result<(), GridError> {
        let idx = self.index(pos)?;
        self.voxels[idx] = voxel;
        Ok(())
    }

    /// Read the voxel at the given coordinate.
    pub fn get(&self, pos: IVec3) -> Result<Voxel, GridError> {
        let idx = self.index(pos)?;
        Ok(self.voxels[idx])
    }

    fn index(&self, pos: IVec3) -> Result<usize, GridError> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                side: self.side,
            });
        }
        let side = self.side;
        Ok((pos.x as usize * side + pos.y as usize) * side + pos.z as usize)
    }
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new()
    }
}
