//! Dense voxel grid storage.
//!
//! A `VoxelGrid` is a fixed-extent cube of `Voxel` records indexed by
//! integer coordinates. All access is bounds-checked; coordinates outside
//! `[0, side)` on any axis are rejected with [`GridError::OutOfBounds`]
//! rather than wrapped or read past the allocation.

mod error;
mod voxel;
mod voxel_grid;

pub use error::GridError;
pub use voxel::Voxel;
pub use voxel_grid::VoxelGrid;

// Re-export glam for convenience
pub use glam;
