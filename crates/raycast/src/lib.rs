//! Grid-aligned ray traversal
//!
//! Steps a ray through a dense voxel grid cell-by-cell and reports the
//! first occupied voxel encountered, or a miss once the distance budget is
//! exhausted or the ray leaves the grid domain.
//!
//! # Algorithm
//!
//! The march is a DDA over grid boundaries: for every axis with a nonzero
//! direction component, compute the parametric distance to the next cell
//! boundary in the direction of travel, advance past the nearest one, and
//! test the cell landed in. Trig components of angle-derived directions are
//! rounded to three decimal places so repeated additive stepping stays in
//! sync with the integer boundaries.
//!
//! # Example
//!
//! ```
//! use glam::{IVec3, Vec3, Vec4};
//! use grid::{Voxel, VoxelGrid};
//! use raycast::{cast_ray, TraversalResult, MAX_RAY_LENGTH};
//!
//! let mut grid = VoxelGrid::new();
//! grid.set(IVec3::new(5, 0, 0), Voxel::solid(Vec4::new(100.0, 0.0, 0.0, 0.0)))
//!     .unwrap();
//!
//! let result = cast_ray(&grid, Vec3::new(0.0, 0.5, 0.0), 0.0, MAX_RAY_LENGTH).unwrap();
//! assert!(matches!(result, TraversalResult::Hit { .. }));
//! ```

mod cast;
mod error;
mod ray;

pub use cast::{cast_ray, cast_ray_dir, TraversalResult, MAX_RAY_LENGTH};
pub use error::RaycastError;
pub use ray::Ray;

// Re-export for convenience
pub use glam;
pub use grid;
