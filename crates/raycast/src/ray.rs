use crate::{cast_ray_dir, RaycastError, TraversalResult};
use glam::Vec3;
use grid::VoxelGrid;
use serde::{Deserialize, Serialize};

/// Rounding scale for trig components: 3 decimal places.
const TRIG_SCALE: f32 = 1000.0;

/// Round to 3 decimal places.
///
/// Direction components carry raw trig noise; repeated additive stepping
/// with unrounded values desynchronizes from the integer grid boundaries,
/// so the components are snapped to fixed precision before marching.
fn round3(v: f32) -> f32 {
    (v * TRIG_SCALE).round() / TRIG_SCALE
}

/// A ray confined to the z = 0 plane: an origin plus a planar direction
/// angle in degrees. The z coordinate of the origin is carried through the
/// march but never stepped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Starting position in grid space
    pub origin: Vec3,
    /// Planar direction angle in degrees
    pub angle_degrees: f32,
}

impl Ray {
    pub fn new(origin: Vec3, angle_degrees: f32) -> Self {
        Self {
            origin,
            angle_degrees,
        }
    }

    /// Planar unit direction `(cos θ, sin θ, 0)` with both trig components
    /// rounded to 3 decimal places.
    pub fn unit(&self) -> Vec3 {
        let rad = self.angle_degrees.to_radians();
        Vec3::new(round3(rad.cos()), round3(rad.sin()), 0.0)
    }

    /// Cast this ray through a grid.
    pub fn cast(
        &self,
        grid: &VoxelGrid,
        max_distance: f32,
    ) -> Result<TraversalResult, RaycastError> {
        cast_ray_dir(grid, self.origin, self.unit(), max_distance)
    }
}
